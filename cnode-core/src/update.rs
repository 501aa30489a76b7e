//! Update policies.
//!
//! An update policy decides how a freshly computed message is merged into a
//! caller-owned accumulator. Policies are zero-sized types passed to the
//! algorithms as a type parameter, so the choice costs nothing at run time.
//! Every policy is branch-free: conditions are computed as lane masks and
//! applied with a select.

use crate::lanes::{LaneArith, MaskOps};
use crate::message::Message;

/// Merges a new message into an accumulator.
pub trait UpdatePolicy {
    /// Merges `b` into `*a`.
    fn update<M: Message>(a: &mut M, b: M);
}

/// Plain update: the accumulator takes the new value in every lane.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalUpdate;

impl UpdatePolicy for NormalUpdate {
    #[inline(always)]
    fn update<M: Message>(a: &mut M, b: M) {
        *a = b;
    }
}

/// Damped update that only reacts to first-set or disagreement.
///
/// A lane of the accumulator takes the new value only if it is currently
/// exactly zero (not yet set) or its sign is opposite to the new value's
/// sign. Lanes that already agree with the new value keep their old value,
/// so agreeing beliefs are not reinforced step by step. A zero new value has
/// no sign and never counts as a disagreement.
///
/// ```text
/// a =  0, b = any  ->  b
/// a = +5, b = +2   -> +5
/// a = +5, b = -2   -> -2
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfCorrectedUpdate;

impl UpdatePolicy for SelfCorrectedUpdate {
    #[inline(always)]
    fn update<M: Message>(a: &mut M, b: M) {
        let flipped = a.cgtz().and(b.cltz()).or(a.cltz().and(b.cgtz()));
        let take = a.ceqz().or(flipped);
        *a = M::select(take, b, *a);
    }
}

/// Self-corrected min-sum erasure rule.
///
/// The accumulator takes the new value where it is unset or where the signs
/// agree; a lane whose sign flipped is erased to zero and has to be set again
/// on a later pass. This is the variant that suppresses oscillating messages
/// in fixed-point decoders.
///
/// ```text
/// a =  0, b = any  ->  b
/// a = +5, b = +2   -> +2
/// a = +5, b = -2   ->  0
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ErasingUpdate;

impl UpdatePolicy for ErasingUpdate {
    #[inline(always)]
    fn update<M: Message>(a: &mut M, b: M) {
        let keep = a.ceqz().or(a.cgtz().xor(b.cltz()));
        *a = M::from_mask(b.to_mask().and(keep));
    }
}
