//! # cnode-core: SIMD Check-Node Kernels for LDPC Decoding
//!
//! `cnode-core` is a `no_std`, zero-allocation library implementing the
//! check-node message update of belief-propagation LDPC decoding, as used for
//! DVB-S2 forward error correction.
//!
//! ## Overview
//!
//! A check node receives one message per connected variable node and sends
//! each of them back a message that combines all the *other* incoming
//! messages. This crate computes those outgoing messages:
//!
//! 1. **Exclusive reduction** - combine every element but one, in linear time
//! 2. **Min-sum family** - plain, corrected, and offset min-sum combination
//! 3. **Update policies** - merge results into caller-owned accumulators
//! 4. **Convergence check** - per-lane hard-decision test
//!
//! Graph traversal, iteration scheduling and frame I/O belong to the caller.
//!
//! ## Architecture
//!
//! Every kernel runs on a [`Simd<T, WIDTH>`](lanes::Simd) batch: `WIDTH`
//! independent codewords decoded side by side, one per lane. Kernels are
//! branch-free and generic over two message representations:
//!
//! - **Floating** (`f32`, `f64`) - unbounded real LLRs
//! - **Quantized** (`i8`) - saturating fixed point in `[-127, 127]`, `0` = erased
//!
//! The [`Message`](message::Message) trait selects the representation's
//! arithmetic, so each algorithm body is written once.
//!
//! ## Quick Start
//!
//! ```
//! use cnode_core::{Algorithm, MinSumC, NormalUpdate, Simd, FACTOR_I8};
//!
//! type Msg = Simd<i8, 32>;
//! type Decoder = MinSumC<Msg, NormalUpdate, FACTOR_I8>;
//!
//! // Incoming messages of one degree-4 check node, for 32 codewords at once.
//! let mut links = [Msg::splat(12), Msg::splat(-7), Msg::splat(30), Msg::splat(9)];
//! Decoder::finalp(&mut links);
//!
//! // Variable 1 hears "positive" from the others; everyone else hears "negative".
//! assert!(links[1].v.iter().all(|&x| x > 0));
//! assert!(links[0].v.iter().all(|&x| x < 0));
//! ```
//!
//! ## Module Organization
//!
//! - [`lanes`] - Lane batch type and elementwise ALU
//! - [`message`] - Per-representation message arithmetic
//! - [`reduce`] - Exclusive reduction
//! - [`update`] - Update policies
//! - [`algorithm`] - Check-node algorithms and their shared contract
//! - [`batch`] - Moving frames in and out of lane-major layout

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Lane batch type and elementwise arithmetic.
pub mod lanes;

/// Message representations (floating and saturating 8-bit).
pub mod message;

/// Exclusive reduction primitive.
pub mod reduce;

/// Accumulator update policies.
pub mod update;

/// Check-node algorithms.
pub mod algorithm;

/// Frame/lane layout conversion and LLR quantization.
pub mod batch;

/// Kani formal verification proofs for the saturating kernels.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Lane batches
pub use lanes::{LaneArith, MaskOps, Simd};

// Representations
pub use message::Message;

// Exclusive reduction
pub use reduce::{exclusive_reduce, exclusive_reduce_naive};

// Update policies
pub use update::{ErasingUpdate, NormalUpdate, SelfCorrectedUpdate, UpdatePolicy};

// Algorithms
pub use algorithm::{
    Algorithm, MinSum, MinSumC, OffsetMinSum, FACTOR_FLOAT, FACTOR_I8, MAX_DEGREE,
};

// Batching
pub use batch::{active_lanes, batch_count, deinterleave, interleave, quantize_llr};
