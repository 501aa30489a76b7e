//! Property-based tests for the exclusive reduction.
//!
//! The linear prefix/suffix reduction must agree with the direct method for
//! every associative, commutative operator.

use cnode_core::{exclusive_reduce, exclusive_reduce_naive};
use proptest::prelude::*;

fn fast_and_naive<T: Copy + Default>(input: &[T], op: fn(T, T) -> T) -> (Vec<T>, Vec<T>) {
    let mut fast = vec![T::default(); input.len()];
    let mut slow = vec![T::default(); input.len()];
    exclusive_reduce(input, &mut fast, op);
    exclusive_reduce_naive(input, &mut slow, op);
    (fast, slow)
}

proptest! {
    #[test]
    fn prop_min_matches_naive(input in prop::collection::vec(any::<i8>(), 2..=32)) {
        let (fast, slow) = fast_and_naive(&input, i8::min);
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn prop_max_matches_naive(input in prop::collection::vec(any::<u32>(), 2..=32)) {
        let (fast, slow) = fast_and_naive(&input, u32::max);
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn prop_xor_matches_naive(input in prop::collection::vec(any::<u8>(), 2..=32)) {
        let (fast, slow) = fast_and_naive(&input, |a, b| a ^ b);
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn prop_wrapping_add_matches_naive(input in prop::collection::vec(any::<i32>(), 2..=32)) {
        let (fast, slow) = fast_and_naive(&input, i32::wrapping_add);
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn prop_sign_product_matches_naive(input in prop::collection::vec(-100i32..=100, 2..=32)) {
        // a * signum(b): only the sign of the result is order independent.
        let (fast, slow) = fast_and_naive(&input, |a, b| a * b.signum());
        let fast: Vec<i32> = fast.iter().map(|x| x.signum()).collect();
        let slow: Vec<i32> = slow.iter().map(|x| x.signum()).collect();
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn prop_min_excludes_own_position(input in prop::collection::vec(any::<u16>(), 2..=32)) {
        let (fast, _) = fast_and_naive(&input, u16::min);
        for (i, &out) in fast.iter().enumerate() {
            let expected = input
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &x)| x)
                .min()
                .unwrap();
            prop_assert_eq!(out, expected);
        }
    }

    #[test]
    fn prop_reversal_commutes(input in prop::collection::vec(any::<i16>(), 2..=32)) {
        let (forward, _) = fast_and_naive(&input, i16::min);
        let reversed: Vec<i16> = input.iter().rev().copied().collect();
        let (mut backward, _) = fast_and_naive(&reversed, i16::min);
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_output_ignores_own_input(
        input in prop::collection::vec(any::<i8>(), 2..=32),
        pick in any::<prop::sample::Index>(),
        replacement in any::<i8>(),
    ) {
        let i = pick.index(input.len());
        let (before, _) = fast_and_naive(&input, i8::max);
        let mut changed = input.clone();
        changed[i] = replacement;
        let (after, _) = fast_and_naive(&changed, i8::max);
        prop_assert_eq!(before[i], after[i]);
    }

    #[test]
    fn prop_output_ignores_order_of_others(
        input in prop::collection::vec(any::<u8>(), 3..=32),
        pick in any::<prop::sample::Index>(),
    ) {
        // Swap the two neighbours of position i (cyclically); out[i] is unchanged.
        let n = input.len();
        let i = pick.index(n);
        let (a, b) = ((i + 1) % n, (i + n - 1) % n);
        let (before, _) = fast_and_naive(&input, |x, y| x ^ y);
        let mut swapped = input.clone();
        swapped.swap(a, b);
        let (after, _) = fast_and_naive(&swapped, |x, y| x ^ y);
        prop_assert_eq!(before[i], after[i]);
    }
}
