//! Property-based tests for lane batching.

use cnode_core::lanes::{QMAX, QMIN};
use cnode_core::{deinterleave, interleave, quantize_llr, Simd};
use proptest::prelude::*;

const W: usize = 8;

proptest! {
    #[test]
    fn prop_interleave_round_trips(
        len in 1usize..40,
        blocks in 1usize..=W,
        seed in any::<u64>(),
    ) {
        let frames: Vec<i8> = (0..blocks * len)
            .map(|i| ((seed.wrapping_add(i as u64 * 0x9E37_79B9) % 255) as i32 - 127) as i8)
            .collect();
        prop_assert!(frames.iter().all(|&x| (QMIN..=QMAX).contains(&x)));
        let mut lanes = vec![Simd::<i8, W>::splat(0); len];
        interleave(&frames, len, blocks, &mut lanes).unwrap();

        let mut back = vec![0i8; blocks * len];
        deinterleave(&lanes, len, blocks, &mut back).unwrap();
        prop_assert_eq!(back, frames);

        for batch in &lanes {
            prop_assert!(batch.v[blocks..].iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn prop_quantize_is_monotone_and_bounded(a in -500.0f32..500.0, b in -500.0f32..500.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (ql, qh) = (quantize_llr(lo), quantize_llr(hi));
        prop_assert!(ql <= qh);
        prop_assert!(ql >= -127);
    }

    #[test]
    fn prop_quantize_rounds_to_nearest(x in -126.0f32..126.0) {
        let q = quantize_llr(x) as f32;
        prop_assert!((q - x).abs() <= 0.5, "x = {x}, q = {q}");
    }
}
