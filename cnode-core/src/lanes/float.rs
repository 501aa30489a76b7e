// =============================================================================
// Floating-Point Lanes
// =============================================================================
//
// Real-valued LLRs. There is no saturation: the `q*` operations are the plain
// IEEE ones. `abs` clears the sign bit directly so it stays available without
// `std`.

use super::{LaneArith, Simd};

macro_rules! impl_float_lanes {
    ($f:ty, $u:ty, $abs_mask:expr) => {
        impl<const WIDTH: usize> LaneArith for Simd<$f, WIDTH> {
            type Scalar = $f;
            type Mask = Simd<$u, WIDTH>;

            const LANES: usize = WIDTH;

            #[inline(always)]
            fn zero() -> Self {
                Simd::splat(0.0)
            }

            #[inline(always)]
            fn dup(x: i32) -> Self {
                Simd::splat(x as $f)
            }

            #[inline(always)]
            fn add(self, other: Self) -> Self {
                self.zip(other, |a, b| a + b)
            }

            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                self.zip(other, |a, b| a - b)
            }

            #[inline(always)]
            fn qadd(self, other: Self) -> Self {
                self.add(other)
            }

            #[inline(always)]
            fn qsub(self, other: Self) -> Self {
                self.sub(other)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                self.map(|a| <$f>::from_bits(a.to_bits() & $abs_mask))
            }

            #[inline(always)]
            fn qabs(self) -> Self {
                self.abs()
            }

            #[inline(always)]
            fn min(self, other: Self) -> Self {
                self.zip(other, <$f>::min)
            }

            #[inline(always)]
            fn max(self, other: Self) -> Self {
                self.zip(other, <$f>::max)
            }

            #[inline(always)]
            fn sign(self, other: Self) -> Self {
                self.zip(other, |a, b| ((b > 0.0) as i32 - (b < 0.0) as i32) as $f * a)
            }

            #[inline(always)]
            fn halve(self) -> Self {
                self.map(|a| a * 0.5)
            }

            #[inline(always)]
            fn cgt(self, other: Self) -> Self::Mask {
                self.zip(other, |a, b| <$u>::from(a > b).wrapping_neg())
            }

            #[inline(always)]
            fn cgtz(self) -> Self::Mask {
                self.map(|a| <$u>::from(a > 0.0).wrapping_neg())
            }

            #[inline(always)]
            fn cltz(self) -> Self::Mask {
                self.map(|a| <$u>::from(a < 0.0).wrapping_neg())
            }

            #[inline(always)]
            fn ceqz(self) -> Self::Mask {
                self.map(|a| <$u>::from(a == 0.0).wrapping_neg())
            }

            #[inline(always)]
            fn to_mask(self) -> Self::Mask {
                self.map(<$f>::to_bits)
            }

            #[inline(always)]
            fn from_mask(mask: Self::Mask) -> Self {
                mask.map(<$f>::from_bits)
            }
        }
    };
}

impl_float_lanes!(f32, u32, 0x7FFF_FFFF_u32);
impl_float_lanes!(f64, u64, 0x7FFF_FFFF_FFFF_FFFF_u64);
