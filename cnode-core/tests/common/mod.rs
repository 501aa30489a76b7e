//! Shared test utilities for cnode-core tests.
//!
//! Builds lane batches from plain rows and provides brute-force references
//! for the check-node combinations, computed one lane at a time in `i32`.

#![allow(dead_code)] // Not all test files use all functions

use cnode_core::Simd;

/// Lanes used by the integration tests.
pub const W: usize = 4;

/// `i8` message batch of the test width.
pub type Q = Simd<i8, W>;

/// `f32` message batch of the test width.
pub type F = Simd<f32, W>;

/// Builds one `i8` batch per row.
pub fn i8_links(rows: &[[i8; W]]) -> Vec<Q> {
    rows.iter().map(|&r| Simd::from_array(r)).collect()
}

/// Builds one `f32` batch per row, converting values exactly.
pub fn f32_links(rows: &[[i8; W]]) -> Vec<F> {
    rows.iter()
        .map(|r| Simd::from_array(r.map(f32::from)))
        .collect()
}

/// Reads lane `lane` of every batch.
pub fn column<T: Copy>(links: &[Simd<T, W>], lane: usize) -> Vec<T> {
    links.iter().map(|l| l.v[lane]).collect()
}

/// Direct min-sum for one lane.
///
/// `out[i] = prod_{j != i} sgn(x[j]) * min_{j != i} |x[j]|`, where an erased
/// (zero) input forces the minimum, and therefore the output, to zero.
pub fn min_sum_reference(column: &[i8]) -> Vec<i32> {
    (0..column.len())
        .map(|i| {
            let others = column
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &x)| x as i32);
            let min = others.clone().map(i32::abs).min().unwrap_or(0);
            let negative = others.filter(|&x| x < 0).count() % 2 == 1;
            if negative { -min } else { min }
        })
        .collect()
}

/// Exact sum-product combination for one lane,
/// `2 atanh(prod_{j != i} tanh(x[j] / 2))`.
pub fn sum_product_reference(column: &[f64]) -> Vec<f64> {
    (0..column.len())
        .map(|i| {
            let prod: f64 = column
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &x)| (x / 2.0).tanh())
                .product();
            2.0 * prod.clamp(-0.999_999, 0.999_999).atanh()
        })
        .collect()
}
