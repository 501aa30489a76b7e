// =============================================================================
// Check-Node Algorithms
// =============================================================================
//
// Every algorithm exposes the same contract so that a decoding loop can be
// written once and instantiated against any of them:
//
//   for each check node:      A::finalp(&mut links[..cnt])
//   for each touched total:   A::update(&mut total, message)
//   after each pass:          A::bad(total, blocks)
//
// Algorithms are zero-sized marker types; all methods are associated
// functions, monomorphized per message representation and update policy.

/// Plain min-sum.
pub mod min_sum;

/// Min-sum with an additive correction term.
pub mod min_sum_c;

/// Min-sum with a constant magnitude offset.
pub mod offset_min_sum;

pub use min_sum::MinSum;
pub use min_sum_c::MinSumC;
pub use offset_min_sum::OffsetMinSum;

use crate::lanes::{LaneArith, MaskOps};
use crate::message::Message;

/// Largest check-node degree a kernel accepts.
///
/// Bounds the stack buffers used by `finalp`. The largest DVB-S2 check-node
/// degree (rate 9/10, normal frames) is 30.
pub const MAX_DEGREE: usize = 32;

/// Correction constant for `i8` messages with [`MinSumC`].
pub const FACTOR_I8: i32 = 2;

/// Correction constant for floating messages with [`MinSumC`].
pub const FACTOR_FLOAT: i32 = 1;

/// Uniform check-node algorithm contract.
///
/// The defaults cover the operations that are identical across the min-sum
/// family; implementors supply [`finalp`](Algorithm::finalp) and
/// [`update`](Algorithm::update).
pub trait Algorithm {
    /// Message representation the algorithm runs on.
    type Msg: Message;

    /// Additive identity.
    #[inline(always)]
    fn zero() -> Self::Msg {
        Self::Msg::zero()
    }

    /// Unit value in every lane.
    #[inline(always)]
    fn one() -> Self::Msg {
        Self::Msg::dup(1)
    }

    /// `a * signum(b)`, lanewise.
    #[inline(always)]
    fn sign(a: Self::Msg, b: Self::Msg) -> Self::Msg {
        a.sign(b)
    }

    /// Lanewise addition (saturating for `i8`).
    #[inline(always)]
    fn add(a: Self::Msg, b: Self::Msg) -> Self::Msg {
        a.plus(b)
    }

    /// Lanewise subtraction (saturating for `i8`).
    #[inline(always)]
    fn sub(a: Self::Msg, b: Self::Msg) -> Self::Msg {
        a.minus(b)
    }

    /// Replaces the incoming messages of one check node with the outgoing
    /// ones, in place.
    ///
    /// `links.len()` is the check-node degree and must lie in
    /// `2..=MAX_DEGREE`. Calling this twice on the same links re-derives
    /// messages from already-updated values; it is not idempotent.
    fn finalp(links: &mut [Self::Msg]);

    /// Returns `true` if any of the first `blocks` lanes of `v` is not
    /// strictly positive, i.e. that decoding instance has not converged.
    ///
    /// Lanes at index `blocks` and above are padding and never affect the
    /// verdict.
    #[inline]
    fn bad(v: Self::Msg, blocks: usize) -> bool {
        debug_assert!(blocks <= Self::Msg::LANES, "bad: blocks exceeds lane count");
        let positive = v.cgtz();
        (0..blocks.min(Self::Msg::LANES)).any(|lane| !positive.test(lane))
    }

    /// Merges `b` into the accumulator `*a` through the configured policy.
    fn update(a: &mut Self::Msg, b: Self::Msg);
}

/// Checks the degree precondition shared by every `finalp`.
#[inline(always)]
pub(crate) fn check_degree(cnt: usize) {
    debug_assert!(cnt >= 2, "check node degree {cnt} below 2");
    assert!(cnt <= MAX_DEGREE, "check node degree exceeds MAX_DEGREE");
}
