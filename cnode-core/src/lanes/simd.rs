// =============================================================================
// Lane Batch
// =============================================================================

use super::MaskOps;

/// A fixed-width batch of lanes.
///
/// Lane `n` belongs to the `n`-th decoding instance processed by the batch
/// (one codeword copy, or one decoding trial). The batch is aligned so that a
/// `Simd<i8, 32>` or `Simd<f32, 8>` fills exactly one AVX2 register and the
/// loops below vectorize without unaligned loads.
///
/// # Example
///
/// ```
/// use cnode_core::lanes::{LaneArith, Simd};
///
/// let a = Simd::from_array([3i8, -4, 120, -120]);
/// let b = Simd::from_array([1i8, 1, 120, 20]);
/// assert_eq!(a.qadd(b).v, [4, -3, 127, -100]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(32))]
pub struct Simd<T, const WIDTH: usize> {
    /// Lane values.
    pub v: [T; WIDTH],
}

impl<T: Copy, const WIDTH: usize> Simd<T, WIDTH> {
    /// Batch width in lanes.
    pub const WIDTH: usize = WIDTH;

    /// Broadcasts `x` to every lane.
    #[inline(always)]
    #[must_use]
    pub const fn splat(x: T) -> Self {
        Self { v: [x; WIDTH] }
    }

    /// Wraps an array of lane values.
    #[inline(always)]
    #[must_use]
    pub const fn from_array(v: [T; WIDTH]) -> Self {
        Self { v }
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Simd<U, WIDTH> {
        Simd { v: self.v.map(f) }
    }

    /// Combines two batches lane by lane.
    #[inline(always)]
    pub fn zip<U, F: Fn(T, T) -> U>(self, other: Self, f: F) -> Simd<U, WIDTH> {
        Simd {
            v: core::array::from_fn(|i| f(self.v[i], other.v[i])),
        }
    }
}

impl<T: Copy + Default, const WIDTH: usize> Default for Simd<T, WIDTH> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

macro_rules! impl_mask_ops {
    ($($u:ty),*) => {
        $(
            impl<const WIDTH: usize> MaskOps for Simd<$u, WIDTH> {
                #[inline(always)]
                fn and(self, other: Self) -> Self {
                    self.zip(other, |a, b| a & b)
                }

                #[inline(always)]
                fn or(self, other: Self) -> Self {
                    self.zip(other, |a, b| a | b)
                }

                #[inline(always)]
                fn xor(self, other: Self) -> Self {
                    self.zip(other, |a, b| a ^ b)
                }

                #[inline(always)]
                fn andnot(self, other: Self) -> Self {
                    self.zip(other, |a, b| a & !b)
                }

                #[inline(always)]
                fn test(&self, lane: usize) -> bool {
                    self.v[lane] != 0
                }
            }
        )*
    };
}

impl_mask_ops!(u8, u32, u64);
