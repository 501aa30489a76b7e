//! Min-sum with correction term.
//!
//! The exact pairwise check-node combination of two LLRs is
//!
//! ```text
//! a ⊞ b = sign(a) sign(b) min(|a|, |b|) + ln(1 + e^-|a+b|) - ln(1 + e^-|a-b|)
//! ```
//!
//! Min-sum keeps only the first term. This kernel approximates the two
//! logarithms with a single step of height `FACTOR / 2`: positive when the
//! inputs nearly cancel (`|a-b|` large compared to `|a+b|`), negative when
//! they nearly coincide (`|a+b|` large compared to `|a-b|`), and only while
//! the dominant quantity stays below `2 * FACTOR`. No logarithm or
//! exponential is evaluated.
//!
//! `FACTOR` is a code-design constant on the message scale:
//! [`FACTOR_I8`](super::FACTOR_I8) for quantized messages,
//! [`FACTOR_FLOAT`](super::FACTOR_FLOAT) for floating ones.

use core::marker::PhantomData;

use super::{check_degree, Algorithm, MAX_DEGREE};
use crate::lanes::{LaneArith, MaskOps};
use crate::message::Message;
use crate::reduce::exclusive_reduce;
use crate::update::UpdatePolicy;

/// Corrected min-sum over messages `M`, update policy `U` and correction
/// constant `FACTOR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSumC<M, U, const FACTOR: i32> {
    _marker: PhantomData<(M, U)>,
}

impl<M: Message, U: UpdatePolicy, const FACTOR: i32> MinSumC<M, U, FACTOR> {
    /// Correction term for the pair `(a, b)`.
    ///
    /// With `s = |a+b|` and `d = |a-b|`:
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | `2F > s` and `d > 2s` | `+F/2` |
    /// | `2F > d` and `s > 2d` | `-F/2` |
    /// | otherwise | `0` |
    ///
    /// The first row wins if both hold; for non-negative `s` and `d` they are
    /// mutually exclusive, but the negative mask is cleared wherever the
    /// positive one is set so the result never mixes bit patterns. All
    /// arithmetic saturates for `i8` messages, and `F/2` truncates there.
    #[inline(always)]
    pub fn correction_factor(a: M, b: M) -> M {
        let apb = a.plus(b).magnitude();
        let apb2 = apb.plus(apb);
        let amb = a.minus(b).magnitude();
        let amb2 = amb.plus(amb);
        let factor2 = M::dup(FACTOR.saturating_mul(2));

        let pos_when = factor2.cgt(apb).and(amb.cgt(apb2));
        let neg_when = factor2.cgt(amb).and(apb.cgt(amb2)).andnot(pos_when);

        let pc = M::dup(FACTOR).halve().to_mask().and(pos_when);
        let nc = M::dup(-FACTOR).halve().to_mask().and(neg_when);
        M::from_mask(pc.or(nc))
    }

    /// Pairwise combination: min-sum plus [`correction_factor`](Self::correction_factor).
    #[inline(always)]
    pub fn minc(a: M, b: M) -> M {
        let m = a.magnitude().min(b.magnitude());
        let x = m.sign(a).sign(b);
        x.plus(Self::correction_factor(a, b))
    }
}

impl<M: Message, U: UpdatePolicy, const FACTOR: i32> Algorithm for MinSumC<M, U, FACTOR> {
    type Msg = M;

    fn finalp(links: &mut [M]) {
        let cnt = links.len();
        check_degree(cnt);

        let mut tmp = [M::zero(); MAX_DEGREE];
        let tmp = &mut tmp[..cnt];
        exclusive_reduce(links, tmp, Self::minc);
        links.copy_from_slice(tmp);
    }

    #[inline(always)]
    fn update(a: &mut M, b: M) {
        U::update(a, b);
    }
}
