// =============================================================================
// Saturating 8-bit Lanes
// =============================================================================
//
// Quantized LLRs live in the symmetric range [-127, 127]. `-128` is never
// produced by the saturating operations, so negation and `abs` stay exact.
// Zero means "erased / not yet set".

use super::{LaneArith, Simd};

/// Largest representable quantized message.
pub const QMAX: i8 = 127;

/// Smallest representable quantized message (symmetric with [`QMAX`]).
pub const QMIN: i8 = -127;

impl<const WIDTH: usize> LaneArith for Simd<i8, WIDTH> {
    type Scalar = i8;
    type Mask = Simd<u8, WIDTH>;

    const LANES: usize = WIDTH;

    #[inline(always)]
    fn zero() -> Self {
        Simd::splat(0)
    }

    #[inline(always)]
    fn dup(x: i32) -> Self {
        Simd::splat(x.clamp(QMIN as i32, QMAX as i32) as i8)
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        self.zip(other, i8::wrapping_add)
    }

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        self.zip(other, i8::wrapping_sub)
    }

    #[inline(always)]
    fn qadd(self, other: Self) -> Self {
        self.zip(other, |a, b| a.saturating_add(b).max(QMIN))
    }

    #[inline(always)]
    fn qsub(self, other: Self) -> Self {
        self.zip(other, |a, b| a.saturating_sub(b).max(QMIN))
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(i8::wrapping_abs)
    }

    #[inline(always)]
    fn qabs(self) -> Self {
        self.map(i8::saturating_abs)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        self.zip(other, Ord::min)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        self.zip(other, Ord::max)
    }

    #[inline(always)]
    fn sign(self, other: Self) -> Self {
        self.zip(other, |a, b| a.saturating_mul(b.signum()))
    }

    #[inline(always)]
    fn halve(self) -> Self {
        self.map(|a| a / 2)
    }

    #[inline(always)]
    fn cgt(self, other: Self) -> Self::Mask {
        self.zip(other, |a, b| u8::from(a > b).wrapping_neg())
    }

    #[inline(always)]
    fn cgtz(self) -> Self::Mask {
        self.map(|a| u8::from(a > 0).wrapping_neg())
    }

    #[inline(always)]
    fn cltz(self) -> Self::Mask {
        self.map(|a| u8::from(a < 0).wrapping_neg())
    }

    #[inline(always)]
    fn ceqz(self) -> Self::Mask {
        self.map(|a| u8::from(a == 0).wrapping_neg())
    }

    #[inline(always)]
    fn to_mask(self) -> Self::Mask {
        self.map(|a| a as u8)
    }

    #[inline(always)]
    fn from_mask(mask: Self::Mask) -> Self {
        mask.map(|m| m as i8)
    }
}
