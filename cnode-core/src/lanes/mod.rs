// =============================================================================
// Lane ALU
// =============================================================================
//
// Elementwise arithmetic over fixed-width batches of independent decoding
// instances. Every operation acts lane by lane; no lane ever reads another.

/// The `Simd<T, WIDTH>` batch type and its bitwise mask view.
pub mod simd;

/// Floating-point lanes (`f32`, `f64`).
pub mod float;

/// Saturating 8-bit lanes (`i8`, symmetric range).
pub mod int8;

pub use int8::{QMAX, QMIN};
pub use simd::Simd;

/// Bitwise operations on the mask view of a lane batch.
///
/// A mask lane is either all-ones (condition true) or all-zeros (condition
/// false) when produced by a comparison, but the same type also carries the
/// raw bit pattern of a value after [`LaneArith::to_mask`].
pub trait MaskOps: Copy {
    /// Lanewise `self & other`.
    fn and(self, other: Self) -> Self;

    /// Lanewise `self | other`.
    fn or(self, other: Self) -> Self;

    /// Lanewise `self ^ other`.
    fn xor(self, other: Self) -> Self;

    /// Lanewise `self & !other`.
    fn andnot(self, other: Self) -> Self;

    /// Returns `true` if any bit of lane `lane` is set.
    fn test(&self, lane: usize) -> bool;
}

/// Elementwise arithmetic over a lane batch.
///
/// This is the interface the check-node kernels are written against. Two
/// families implement it:
///
/// | Batch | `add`/`sub`/`abs` | `qadd`/`qsub`/`qabs` | Mask |
/// |-------|-------------------|----------------------|------|
/// | `Simd<f32, W>` | IEEE | same as plain | `Simd<u32, W>` |
/// | `Simd<f64, W>` | IEEE | same as plain | `Simd<u64, W>` |
/// | `Simd<i8, W>`  | wrapping | clipped to `[-127, 127]` | `Simd<u8, W>` |
///
/// Comparisons return all-ones / all-zeros mask lanes so that results can be
/// combined with [`MaskOps`] and applied with [`LaneArith::select`] without
/// branching.
pub trait LaneArith: Copy {
    /// Scalar element type of one lane.
    type Scalar: Copy;

    /// Bitwise view of the batch, one unsigned integer per lane.
    type Mask: MaskOps;

    /// Number of lanes in the batch.
    const LANES: usize;

    /// All lanes zero.
    fn zero() -> Self;

    /// Broadcasts an integer constant to every lane.
    ///
    /// Saturating representations clip `x` to their representable range.
    fn dup(x: i32) -> Self;

    /// Lanewise addition (wrapping for integer lanes).
    fn add(self, other: Self) -> Self;

    /// Lanewise subtraction (wrapping for integer lanes).
    fn sub(self, other: Self) -> Self;

    /// Lanewise saturating addition.
    fn qadd(self, other: Self) -> Self;

    /// Lanewise saturating subtraction.
    fn qsub(self, other: Self) -> Self;

    /// Lanewise absolute value (wrapping for integer lanes).
    fn abs(self) -> Self;

    /// Lanewise saturating absolute value.
    fn qabs(self) -> Self;

    /// Lanewise minimum.
    fn min(self, other: Self) -> Self;

    /// Lanewise maximum.
    fn max(self, other: Self) -> Self;

    /// Lanewise `self * signum(other)`.
    ///
    /// Returns `self` where `other > 0`, `-self` where `other < 0` and zero
    /// where `other == 0`. With a non-negative `self` this is a copy-sign that
    /// also propagates erasures.
    fn sign(self, other: Self) -> Self;

    /// Lanewise halving; integer lanes truncate toward zero.
    fn halve(self) -> Self;

    /// Lanewise `self > other`.
    fn cgt(self, other: Self) -> Self::Mask;

    /// Lanewise `self > 0`.
    fn cgtz(self) -> Self::Mask;

    /// Lanewise `self < 0`.
    fn cltz(self) -> Self::Mask;

    /// Lanewise `self == 0`.
    fn ceqz(self) -> Self::Mask;

    /// Reinterprets the lanes as raw bit patterns.
    fn to_mask(self) -> Self::Mask;

    /// Reinterprets raw bit patterns as lanes.
    fn from_mask(mask: Self::Mask) -> Self;

    /// Picks `on_true` where `mask` is set and `on_false` elsewhere.
    #[inline(always)]
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self {
        Self::from_mask(
            on_true
                .to_mask()
                .and(mask)
                .or(on_false.to_mask().andnot(mask)),
        )
    }
}
