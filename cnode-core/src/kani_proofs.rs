//! Kani formal verification proofs for the saturating kernels.
//!
//! These proofs cover the properties the quantized decoder relies on:
//! messages never leave the symmetric range, the correction step is one of
//! three values, and the update policies only ever produce the old or the
//! new value (or zero, for the erasing rule).
//!
//! Run with: `cargo kani --package cnode-core`

use crate::algorithm::{Algorithm, MinSum, MinSumC, FACTOR_I8};
use crate::lanes::{LaneArith, Simd, QMAX, QMIN};
use crate::message::Message;
use crate::reduce::{exclusive_reduce, exclusive_reduce_naive};
use crate::update::{ErasingUpdate, NormalUpdate, SelfCorrectedUpdate, UpdatePolicy};

type Q1 = Simd<i8, 1>;

fn any_message() -> Q1 {
    let x: i8 = kani::any();
    kani::assume(x >= QMIN);
    Simd::splat(x)
}

// ============================================================================
// Proof 1: saturating add/sub stay in the symmetric range
// ============================================================================
// File: lanes/int8.rs
// What: qadd/qsub of in-range messages equal the clipped exact result
// Why: -128 would break negation and abs in later steps

/// Verify `qadd` and `qsub` equal the exact result clipped to [-127, 127].
#[kani::proof]
fn verify_saturating_add_sub() {
    let a = any_message();
    let b = any_message();

    let exact_sum = a.v[0] as i32 + b.v[0] as i32;
    let exact_diff = a.v[0] as i32 - b.v[0] as i32;

    kani::assert(
        a.qadd(b).v[0] as i32 == exact_sum.clamp(QMIN as i32, QMAX as i32),
        "qadd must clip to the symmetric range",
    );
    kani::assert(
        a.qsub(b).v[0] as i32 == exact_diff.clamp(QMIN as i32, QMAX as i32),
        "qsub must clip to the symmetric range",
    );
}

// ============================================================================
// Proof 2: magnitude is never negative
// ============================================================================

/// Verify `qabs` maps every `i8`, including -128, into [0, 127].
#[kani::proof]
fn verify_qabs_non_negative() {
    let x: i8 = kani::any();
    let m = Simd::<i8, 1>::splat(x).qabs().v[0];
    kani::assert(m >= 0, "qabs must be non-negative");
}

// ============================================================================
// Proof 3: correction factor takes one of three values
// ============================================================================
// File: algorithm/min_sum_c.rs
// What: result is exactly -F/2, 0 or +F/2
// Why: OR-ing both masks would produce an arbitrary bit pattern

/// Verify the correction term never mixes the positive and negative steps.
#[kani::proof]
fn verify_correction_factor_values() {
    let a = any_message();
    let b = any_message();
    let cf = MinSumC::<Q1, NormalUpdate, FACTOR_I8>::correction_factor(a, b).v[0];
    let half = (FACTOR_I8 / 2) as i8;
    kani::assert(
        cf == 0 || cf == half || cf == -half,
        "correction factor must be -F/2, 0 or +F/2",
    );
}

// ============================================================================
// Proof 4: update policies
// ============================================================================

/// Verify the damped update keeps agreeing lanes and adopts the rest.
#[kani::proof]
fn verify_self_corrected_update() {
    let mut a = any_message();
    let old = a.v[0];
    let b = any_message();
    SelfCorrectedUpdate::update(&mut a, b);
    let new = a.v[0];

    let flipped = (old > 0 && b.v[0] < 0) || (old < 0 && b.v[0] > 0);
    if old == 0 || flipped {
        kani::assert(new == b.v[0], "unset or flipped lane must take the new value");
    } else {
        kani::assert(new == old, "agreeing lane must keep its value");
    }
}

/// Verify the erasing update yields the new value or zero.
#[kani::proof]
fn verify_erasing_update() {
    let mut a = any_message();
    let b = any_message();
    ErasingUpdate::update(&mut a, b);
    kani::assert(a.v[0] == b.v[0] || a.v[0] == 0, "erasing update yields b or 0");
}

// ============================================================================
// Proof 5: exclusive reduction matches the direct method
// ============================================================================

/// Verify prefix/suffix reduction equals the quadratic reference for `min`.
#[kani::proof]
#[kani::unwind(6)]
fn verify_exclusive_reduce_min() {
    let input: [i8; 4] = kani::any();
    let mut fast = [0i8; 4];
    let mut slow = [0i8; 4];
    exclusive_reduce(&input, &mut fast, Ord::min);
    exclusive_reduce_naive(&input, &mut slow, Ord::min);
    kani::assert(fast == slow, "exclusive_reduce must match naive for min");
}

// ============================================================================
// Proof 6: min-sum outputs stay in range and never exceed inputs
// ============================================================================

/// Verify every min-sum output magnitude is bounded by an input magnitude.
#[kani::proof]
#[kani::unwind(6)]
fn verify_min_sum_bounded() {
    let mut links = [any_message(), any_message(), any_message()];
    let max_in = links.iter().map(|l| l.magnitude().v[0]).max().unwrap_or(0);
    MinSum::<Q1, NormalUpdate>::finalp(&mut links);
    for l in links.iter() {
        kani::assert(l.v[0] >= QMIN, "output below symmetric range");
        kani::assert(l.magnitude().v[0] <= max_in, "output magnitude exceeds inputs");
    }
}
