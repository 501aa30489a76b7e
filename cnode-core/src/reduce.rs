//! Exclusive reduction.
//!
//! For an ordered input `x[0..n)` and a combining operator `op`, produce
//! `out[i] = op(x[0], .., x[i-1], x[i+1], .., x[n-1])`: the combination of
//! every element except the one at `i`. A check node uses this to leave a
//! variable node's own message out of the message it sends back to it.
//!
//! # Algorithm
//!
//! Prefix/suffix combination in two passes, with no scratch space beyond
//! `out` itself:
//!
//! ```text
//! forward:   out[i] = x[0] op .. op x[i-1]                 (1 ≤ i < n)
//! backward:  out[i] = out[i] op (x[i+1] op .. op x[n-1])   (1 ≤ i < n-1)
//!            out[0] = x[1] op .. op x[n-1]
//! ```
//!
//! That is `3n - 6` operator applications instead of the `n(n-2)` of the
//! direct method. The result only matches the direct method when `op` is
//! associative and commutative, which holds for `min`, XOR and sign products.

/// Computes the exclusive reduction of `input` into `output` in linear time.
///
/// `output` must have the same length as `input`, and that length must be at
/// least 2 (a check node of degree 1 has nothing to exclude against). Shorter
/// inputs leave `output` untouched.
///
/// # Example
///
/// ```
/// use cnode_core::reduce::exclusive_reduce;
///
/// let input = [4u32, 1, 7, 3];
/// let mut output = [0u32; 4];
/// exclusive_reduce(&input, &mut output, u32::min);
/// assert_eq!(output, [1, 3, 1, 1]);
/// ```
#[inline]
pub fn exclusive_reduce<T: Copy, F: Fn(T, T) -> T>(input: &[T], output: &mut [T], op: F) {
    let n = input.len();
    debug_assert_eq!(n, output.len(), "exclusive_reduce: length mismatch");
    debug_assert!(n >= 2, "exclusive_reduce: need at least two inputs");
    if n < 2 || output.len() < n {
        return;
    }

    output[1] = input[0];
    for i in 2..n {
        output[i] = op(output[i - 1], input[i - 1]);
    }

    let mut suffix = input[n - 1];
    for i in (1..n - 1).rev() {
        output[i] = op(output[i], suffix);
        suffix = op(input[i], suffix);
    }
    output[0] = suffix;
}

/// Direct quadratic exclusive reduction.
///
/// Folds every element except `i` from left to right for each `i`. Used as
/// the reference for [`exclusive_reduce`] in tests and by the benchmark
/// verifier; not meant for the decoding hot path.
pub fn exclusive_reduce_naive<T: Copy, F: Fn(T, T) -> T>(input: &[T], output: &mut [T], op: F) {
    let n = input.len();
    debug_assert_eq!(n, output.len(), "exclusive_reduce_naive: length mismatch");
    for (i, out) in output.iter_mut().enumerate().take(n) {
        let mut acc: Option<T> = None;
        for (j, &x) in input.iter().enumerate() {
            if j == i {
                continue;
            }
            acc = Some(match acc {
                None => x,
                Some(a) => op(a, x),
            });
        }
        if let Some(a) = acc {
            *out = a;
        }
    }
}
