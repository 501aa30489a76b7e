//! Random check-node inputs.
//!
//! Models BPSK over AWGN with the all-zero codeword sent: every received
//! sample is `1 + n`, `n ~ N(0, sigma^2)`, and its LLR is `2y / sigma^2`.
//! LLRs are generated frame-major and packed into lane batches, one check
//! node of `degree` links at a time.

use anyhow::Context;
use cnode_core::{quantize_llr, Simd};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fixed-point steps per unit LLR for `i8` messages.
pub const QUANT_SCALE: f32 = 2.0;

/// Draw `count` channel LLRs.
pub fn channel_llrs(count: usize, sigma: f64, seed: u64) -> anyhow::Result<Vec<f32>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).context("invalid channel noise")?;
    let scale = 2.0 / (sigma * sigma);

    Ok((0..count)
        .map(|_| ((1.0 + noise.sample(&mut rng)) * scale) as f32)
        .collect())
}

/// Pack flat LLRs into check nodes of `degree` lane batches each.
///
/// Link `k` of node `t`, lane `n` is `llrs[(t * degree + k) * W + n]`.
/// Trailing values that do not fill a whole node are dropped.
pub fn pack<T: Copy + Default, const W: usize>(
    llrs: &[f32],
    degree: usize,
    convert: impl Fn(f32) -> T,
) -> Vec<Vec<Simd<T, W>>> {
    llrs.chunks_exact(degree * W)
        .map(|node| {
            node.chunks_exact(W)
                .map(|link| {
                    let mut v = [T::default(); W];
                    for (dst, &src) in v.iter_mut().zip(link) {
                        *dst = convert(src);
                    }
                    Simd::from_array(v)
                })
                .collect()
        })
        .collect()
}

/// Channel LLR to fixed point.
pub fn quantize(llr: f32) -> i8 {
    quantize_llr(llr * QUANT_SCALE)
}

/// Fixed point back to LLR units.
pub fn dequantize(q: i8) -> f64 {
    f64::from(q) / f64::from(QUANT_SCALE)
}
