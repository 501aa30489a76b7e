//! Unit tests for the exclusive reduction primitive.
//!
//! Focus: the operators the check-node kernels feed it (min, sign products,
//! XOR of sign bits) on check-node sized inputs.

#[cfg(test)]
mod tests {
    use cnode_core::{exclusive_reduce, exclusive_reduce_naive};

    #[test]
    fn test_degree_two_swaps() {
        let mut out = [0i32; 2];
        exclusive_reduce(&[7, -3], &mut out, i32::min);
        assert_eq!(out, [-3, 7]);
    }

    #[test]
    fn test_min_with_repeated_minimum() {
        // Two copies of the minimum: every position still sees one of them.
        let input = [5u8, 1, 9, 1, 4];
        let mut out = [0u8; 5];
        exclusive_reduce(&input, &mut out, u8::min);
        assert_eq!(out, [1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_unique_minimum_sees_second_minimum() {
        let input = [5u8, 1, 9, 2, 4];
        let mut out = [0u8; 5];
        exclusive_reduce(&input, &mut out, u8::min);
        assert_eq!(out, [1, 2, 1, 1, 1]);
    }

    #[test]
    fn test_xor_parity() {
        let input = [0b1000_0000u8, 0, 0b1000_0000, 0b1000_0000];
        let mut out = [0u8; 4];
        exclusive_reduce(&input, &mut out, |a, b| a ^ b);
        assert_eq!(out, [0, 0b1000_0000, 0, 0]);
    }

    #[test]
    fn test_largest_check_node_matches_naive() {
        let input: Vec<i32> = (0..30).map(|i| (i * 37 % 61) - 30).collect();
        let mut fast = vec![0i32; 30];
        let mut slow = vec![0i32; 30];
        exclusive_reduce(&input, &mut fast, i32::max);
        exclusive_reduce_naive(&input, &mut slow, i32::max);
        assert_eq!(fast, slow);
    }

    #[test]
    fn test_operator_count_is_linear() {
        use std::cell::Cell;

        for n in 2..=32usize {
            let calls = Cell::new(0usize);
            let input = vec![1u32; n];
            let mut out = vec![0u32; n];
            exclusive_reduce(&input, &mut out, |a, b| {
                calls.set(calls.get() + 1);
                a + b
            });
            // n - 2 forward, 2(n - 2) backward.
            assert_eq!(calls.get(), 3 * n - 6, "degree {n}");
            assert!(out.iter().all(|&x| x as usize == n - 1));
        }
    }
}
