//! Property-based tests for the lane ALU.

use cnode_core::lanes::{QMAX, QMIN};
use cnode_core::{LaneArith, Simd};
use proptest::prelude::*;

type Q = Simd<i8, 4>;
type F = Simd<f32, 4>;

fn msg() -> impl Strategy<Value = [i8; 4]> {
    prop::array::uniform4(QMIN..=QMAX)
}

fn clip(x: i32) -> i8 {
    x.clamp(QMIN as i32, QMAX as i32) as i8
}

proptest! {
    #[test]
    fn prop_qadd_is_clipped_sum(a in msg(), b in msg()) {
        let r = Q::from_array(a).qadd(Q::from_array(b));
        for lane in 0..4 {
            prop_assert_eq!(r.v[lane], clip(a[lane] as i32 + b[lane] as i32));
        }
    }

    #[test]
    fn prop_qsub_is_clipped_difference(a in msg(), b in msg()) {
        let r = Q::from_array(a).qsub(Q::from_array(b));
        for lane in 0..4 {
            prop_assert_eq!(r.v[lane], clip(a[lane] as i32 - b[lane] as i32));
        }
    }

    #[test]
    fn prop_saturating_ops_never_reach_minus_128(
        a in prop::array::uniform4(any::<i8>()),
        b in prop::array::uniform4(any::<i8>()),
    ) {
        let (a, b) = (Q::from_array(a), Q::from_array(b));
        for r in [a.qadd(b), a.qsub(b), a.qabs()] {
            prop_assert!(r.v.iter().all(|&x| x != i8::MIN));
        }
    }

    #[test]
    fn prop_sign_multiplies_by_signum(a in msg(), b in msg()) {
        let r = Q::from_array(a).sign(Q::from_array(b));
        for lane in 0..4 {
            prop_assert_eq!(r.v[lane] as i32, a[lane] as i32 * b[lane].signum() as i32);
        }
    }

    #[test]
    fn prop_float_abs_matches_std(a in prop::array::uniform4(-1.0e6f32..1.0e6)) {
        let r = F::from_array(a).abs();
        for lane in 0..4 {
            prop_assert_eq!(r.v[lane], a[lane].abs());
        }
    }

    #[test]
    fn prop_select_picks_by_sign(a in msg(), b in msg(), c in msg()) {
        let mask = Q::from_array(a).cltz();
        let r = Q::select(mask, Q::from_array(b), Q::from_array(c));
        for lane in 0..4 {
            let expected = if a[lane] < 0 { b[lane] } else { c[lane] };
            prop_assert_eq!(r.v[lane], expected);
        }
    }
}
