//! Unit tests for the lane ALU.
//!
//! Focus: the saturation boundary of `i8` lanes and the mask conventions the
//! kernels rely on.

#[cfg(test)]
mod tests {
    use cnode_core::lanes::{QMAX, QMIN};
    use cnode_core::{LaneArith, MaskOps, Message, Simd};

    type Q = Simd<i8, 8>;
    type F = Simd<f32, 8>;

    // =========================================================================
    // Saturation
    // =========================================================================

    #[test]
    fn test_dup_clips_to_symmetric_range() {
        assert_eq!(Q::dup(1000).v, [QMAX; 8]);
        assert_eq!(Q::dup(-1000).v, [QMIN; 8]);
        assert_eq!(Q::dup(-128).v, [QMIN; 8]);
    }

    #[test]
    fn test_qabs_of_minus_128_is_127() {
        assert_eq!(Q::splat(i8::MIN).qabs().v, [127; 8]);
    }

    #[test]
    fn test_plain_add_wraps() {
        assert_eq!(Q::splat(100).add(Q::splat(100)).v, [-56; 8]);
    }

    #[test]
    fn test_message_arithmetic_saturates() {
        assert_eq!(Q::splat(100).plus(Q::splat(100)).v, [127; 8]);
        assert_eq!(Q::splat(-100).minus(Q::splat(100)).v, [-127; 8]);
        assert_eq!(Q::splat(-127).magnitude().v, [127; 8]);
    }

    // =========================================================================
    // Masks
    // =========================================================================

    #[test]
    fn test_comparison_masks_are_all_ones() {
        let m = Q::from_array([1, -1, 0, 5, 6, -7, 8, 0]).cgtz();
        assert_eq!(m.v, [0xFF, 0, 0, 0xFF, 0xFF, 0, 0xFF, 0]);
        let m = F::from_array([1.0, -1.0, 0.0, 5.0, 6.0, -7.0, 8.0, -0.0]).ceqz();
        assert_eq!(m.v, [0, 0, u32::MAX, 0, 0, 0, 0, u32::MAX]);
    }

    #[test]
    fn test_select_is_lanewise() {
        let mask = Q::from_array([1, 0, 1, 0, 1, 0, 1, 0]).cgtz();
        let r = Q::select(mask, Q::splat(9), Q::splat(-9));
        assert_eq!(r.v, [9, -9, 9, -9, 9, -9, 9, -9]);
        assert!(mask.test(0));
        assert!(!mask.test(1));
    }

    #[test]
    fn test_halve_truncates_toward_zero() {
        assert_eq!(Q::splat(-1).halve().v, [0; 8]);
        assert_eq!(Q::splat(-3).halve().v, [-1; 8]);
        assert_eq!(F::splat(-3.0).halve().v, [-1.5; 8]);
    }

    // =========================================================================
    // Sign folding
    // =========================================================================

    #[test]
    fn test_i8_sign_fold_counts_zero_as_positive() {
        let a = Q::from_array([0, 0, -3, -3, 4, 4, 0, -1]);
        let b = Q::from_array([5, -5, 0, -2, 0, 2, 0, -1]);
        let s = a.sign_fold(b).sign_seal();
        let signs: Vec<i8> = s.v.iter().map(|x| x.signum()).collect();
        assert_eq!(signs, [1, -1, -1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_float_sign_fold_propagates_zero() {
        let a = F::from_array([0.0, 2.0, -2.0, -2.0, 1.0, 1.0, 1.0, 1.0]);
        let b = F::from_array([5.0, 0.0, 3.0, -3.0, 1.0, 1.0, 1.0, 1.0]);
        let s = a.sign_fold(b).sign_seal();
        assert_eq!(s.v[0], 0.0);
        assert_eq!(s.v[1], 0.0);
        assert!(s.v[2] < 0.0);
        assert!(s.v[3] > 0.0);
    }
}
