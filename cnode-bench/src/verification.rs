//! Kernel verification against brute-force and exact references.
//!
//! Two checks are made:
//!
//! 1. The linear exclusive reduction must equal the direct quadratic one for
//!    the operators min-sum is built from (minimum of magnitudes, sign fold).
//! 2. Every kernel's output is compared with exact sum-product,
//!    `2 atanh(prod_{j != i} tanh(x_j / 2))`, per lane.

use cnode_core::{exclusive_reduce, exclusive_reduce_naive, LaneArith, Message, Simd};

/// Approximation quality of one kernel against sum-product.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy {
    /// Mean absolute LLR error.
    pub mae: f64,
    /// Fraction of outputs whose sign matches the exact result.
    pub sign_agreement: f64,
}

/// Counts the check nodes on which the linear reduction matches the direct one.
pub fn verify_reduction<const W: usize>(nodes: &[Vec<Simd<i8, W>>]) -> usize {
    nodes
        .iter()
        .filter(|links| {
            let n = links.len();
            let mags: Vec<_> = links.iter().map(|l| l.magnitude()).collect();

            let mut fast = vec![Simd::splat(0); n];
            let mut slow = vec![Simd::splat(0); n];
            exclusive_reduce(&mags, &mut fast, <Simd<i8, W> as LaneArith>::min);
            exclusive_reduce_naive(&mags, &mut slow, <Simd<i8, W> as LaneArith>::min);
            if fast != slow {
                return false;
            }

            exclusive_reduce(links, &mut fast, <Simd<i8, W> as Message>::sign_fold);
            exclusive_reduce_naive(links, &mut slow, <Simd<i8, W> as Message>::sign_fold);
            fast.iter()
                .zip(slow.iter())
                .all(|(f, s)| f.sign_seal().cltz() == s.sign_seal().cltz())
        })
        .count()
}

/// Exact sum-product output for every position of one lane.
pub fn sum_product(column: &[f64]) -> Vec<f64> {
    const LIMIT: f64 = 1.0 - 1e-12;
    (0..column.len())
        .map(|i| {
            let prod: f64 = column
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &x)| (x / 2.0).tanh())
                .product();
            2.0 * prod.clamp(-LIMIT, LIMIT).atanh()
        })
        .collect()
}

fn sgn(x: f64) -> i32 {
    (x > 0.0) as i32 - (x < 0.0) as i32
}

/// Compares kernel `outputs` with exact sum-product over the same `inputs`.
///
/// `to_llr` converts a lane value back to LLR units.
pub fn accuracy<T: Copy, const W: usize>(
    inputs: &[Vec<Simd<T, W>>],
    outputs: &[Vec<Simd<T, W>>],
    to_llr: impl Fn(T) -> f64,
) -> Accuracy {
    let mut abs_err = 0.0;
    let mut agree = 0usize;
    let mut total = 0usize;

    for (input, output) in inputs.iter().zip(outputs.iter()) {
        for lane in 0..W {
            let column: Vec<f64> = input.iter().map(|l| to_llr(l.v[lane])).collect();
            let exact = sum_product(&column);
            for (link, &e) in output.iter().zip(exact.iter()) {
                let got = to_llr(link.v[lane]);
                abs_err += (got - e).abs();
                agree += usize::from(sgn(got) == sgn(e));
                total += 1;
            }
        }
    }

    if total == 0 {
        return Accuracy::default();
    }
    Accuracy {
        mae: abs_err / total as f64,
        sign_agreement: agree as f64 / total as f64,
    }
}
