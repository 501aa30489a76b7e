//! # Tutorial: Layered Min-Sum Decoding of a Hamming (7,4) Code
//!
//! This example decodes three noisy codewords side by side, one per SIMD
//! lane, using the check-node kernels of `cnode-core` inside a small
//! hand-written layered decoder.
//!
//! ## What You'll Learn
//!
//! 1. **Lane Batching**: How frames are interleaved into `Simd` batches
//! 2. **Check-Node Update**: What `finalp` does to one check node's links
//! 3. **Layered Schedule**: How `update` folds new messages into beliefs
//! 4. **Early Termination**: How `bad` tells when every frame has converged
//!
//! ## The Decoding Picture
//!
//! A log-likelihood ratio (LLR) is positive when a bit is more likely `0`
//! and negative when it is more likely `1`. Each parity check of the code
//! ties a few bits together. The check node tells every bit what the *other*
//! bits of that check believe about it, and the bit adds that opinion to its
//! own belief. Repeating this over all checks corrects weak, wrong beliefs.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_hamming
//! ```

use cnode_core::{
    active_lanes, deinterleave, interleave, quantize_llr, Algorithm, MinSumC, SelfCorrectedUpdate,
    Simd, FACTOR_I8,
};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Lanes per batch; only the first `FRAMES` carry data.
const LANES: usize = 4;
/// Code length in bits.
const N: usize = 7;
/// Frames decoded in this batch.
const FRAMES: usize = 3;
/// Iteration limit.
const MAX_ITERATIONS: usize = 8;

type Msg = Simd<i8, LANES>;
type Decoder = MinSumC<Msg, SelfCorrectedUpdate, FACTOR_I8>;

/// Parity checks of the Hamming (7,4) code, as bit positions.
const CHECKS: [[usize; 4]; 3] = [[0, 1, 3, 4], [0, 2, 3, 5], [1, 2, 3, 6]];

/// Received channel LLRs, all-zero codeword sent.
///
/// Frame 0 is clean, frame 1 has bit 2 weakly flipped, frame 2 has bit 6
/// weakly flipped.
const RECEIVED: [[f32; N]; FRAMES] = [
    [4.2, 3.9, 5.1, 4.4, 3.7, 4.8, 4.0],
    [4.1, 3.6, -1.7, 4.9, 4.3, 3.8, 4.5],
    [3.3, 4.7, 4.0, 3.9, 4.6, 4.2, -0.8],
];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Hard decision: positive LLR means bit 0.
fn hard_decision(llrs: &[i8]) -> String {
    llrs.iter().map(|&x| if x > 0 { '0' } else { '1' }).collect()
}

/// One layered pass over every check node.
///
/// `stored[c][k]` is the message check `c` last sent to its `k`-th bit.
fn layered_pass(totals: &mut [Msg; N], stored: &mut [[Msg; 4]; 3]) {
    for (check, messages) in CHECKS.iter().zip(stored.iter_mut()) {
        // Remove this check's old opinion to get the extrinsic inputs.
        let mut links = [Decoder::zero(); 4];
        for (k, &bit) in check.iter().enumerate() {
            links[k] = Decoder::sub(totals[bit], messages[k]);
        }

        let inputs = links;
        Decoder::finalp(&mut links);

        for (k, &bit) in check.iter().enumerate() {
            Decoder::update(&mut messages[k], links[k]);
            totals[bit] = Decoder::add(inputs[k], messages[k]);
        }
    }
}

// =============================================================================
// MAIN DEMONSTRATION
// =============================================================================

fn main() {
    println!("Layered corrected min-sum on a Hamming (7,4) code");
    println!();

    // =========================================================================
    // STEP 1: Quantize and interleave
    // =========================================================================
    let frames: Vec<i8> = RECEIVED.iter().flatten().map(|&x| quantize_llr(x)).collect();
    let blocks = active_lanes(FRAMES, 0, LANES);

    let mut totals = [Msg::splat(0); N];
    if let Err(e) = interleave(&frames, N, blocks, &mut totals) {
        eprintln!("interleave failed: {e}");
        return;
    }

    for (n, frame) in frames.chunks_exact(N).enumerate() {
        println!("    frame {n}: received {:?} -> {}", frame, hard_decision(frame));
    }
    println!("    {blocks} active lanes, {} padding lane(s)", LANES - blocks);
    println!();

    // =========================================================================
    // STEP 2: Iterate until every active lane is resolved
    // =========================================================================
    let mut stored = [[Decoder::zero(); 4]; 3];
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        layered_pass(&mut totals, &mut stored);
        iterations += 1;

        let unresolved = totals.iter().any(|&t| Decoder::bad(t, blocks));
        println!("    iteration {iterations}: unresolved = {unresolved}");
        if !unresolved {
            break;
        }
    }
    println!();

    // =========================================================================
    // STEP 3: Deinterleave and decide
    // =========================================================================
    let mut decoded = vec![0i8; blocks * N];
    if let Err(e) = deinterleave(&totals, N, blocks, &mut decoded) {
        eprintln!("deinterleave failed: {e}");
        return;
    }
    for (n, frame) in decoded.chunks_exact(N).enumerate() {
        println!("    frame {n}: beliefs  {:?} -> {}", frame, hard_decision(frame));
    }
}
