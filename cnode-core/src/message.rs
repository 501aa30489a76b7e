//! Message representations.
//!
//! A [`Message`] is a lane batch of LLR-like beliefs: the sign is the
//! hypothesized bit, the magnitude the confidence. The trait picks, per
//! numeric representation, which lane operation each kernel step uses, so
//! that the algorithm bodies in [`crate::algorithm`] exist exactly once.
//!
//! | Step | Floating lanes | `i8` lanes |
//! |------|----------------|------------|
//! | [`magnitude`](Message::magnitude) | `abs` | `qabs` |
//! | [`plus`](Message::plus) / [`minus`](Message::minus) | `add` / `sub` | `qadd` / `qsub` |
//! | [`sign_fold`](Message::sign_fold) | `a * signum(b)` | XOR of the bit views |
//! | [`sign_seal`](Message::sign_seal) | identity | force low 7 bits to ones |
//!
//! The `i8` sign path never multiplies: the XOR of two bit patterns carries
//! the product of their signs in bit 7, and sealing the low bits turns that
//! into `127` or `-1`, a pure ±1 selector for [`LaneArith::sign`].

use crate::lanes::{LaneArith, MaskOps, Simd};

/// Representation policy for check-node messages.
pub trait Message: LaneArith {
    /// Magnitude of each lane.
    #[inline(always)]
    fn magnitude(self) -> Self {
        self.abs()
    }

    /// Lanewise sum in the representation's arithmetic.
    #[inline(always)]
    fn plus(self, other: Self) -> Self {
        self.add(other)
    }

    /// Lanewise difference in the representation's arithmetic.
    #[inline(always)]
    fn minus(self, other: Self) -> Self {
        self.sub(other)
    }

    /// Associative, commutative (in sign) combiner used to fold the signs of
    /// a link list.
    #[inline(always)]
    fn sign_fold(self, other: Self) -> Self {
        self.sign(other)
    }

    /// Turns a folded sign into a selector usable as the second operand of
    /// [`LaneArith::sign`].
    #[inline(always)]
    fn sign_seal(self) -> Self {
        self
    }
}

impl<const WIDTH: usize> Message for Simd<f32, WIDTH> {}

impl<const WIDTH: usize> Message for Simd<f64, WIDTH> {}

impl<const WIDTH: usize> Message for Simd<i8, WIDTH> {
    #[inline(always)]
    fn magnitude(self) -> Self {
        self.qabs()
    }

    #[inline(always)]
    fn plus(self, other: Self) -> Self {
        self.qadd(other)
    }

    #[inline(always)]
    fn minus(self, other: Self) -> Self {
        self.qsub(other)
    }

    #[inline(always)]
    fn sign_fold(self, other: Self) -> Self {
        Self::from_mask(self.to_mask().xor(other.to_mask()))
    }

    #[inline(always)]
    fn sign_seal(self) -> Self {
        Self::from_mask(self.to_mask().or(Self::dup(127).to_mask()))
    }
}
