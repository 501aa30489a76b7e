//! Min-sum check-node update.
//!
//! The outgoing message to variable `i` is the smallest incoming magnitude
//! among the other variables, carrying the product of their signs:
//!
//! ```text
//! out[i] = (prod_{j != i} sign(in[j])) * min_{j != i} |in[j]|
//! ```
//!
//! Both factors come from one exclusive reduction each. For `i8` messages
//! the sign product is an XOR of bit patterns (see [`crate::message`]).

use core::marker::PhantomData;

use super::{check_degree, Algorithm, MAX_DEGREE};
use crate::lanes::LaneArith;
use crate::message::Message;
use crate::reduce::exclusive_reduce;
use crate::update::UpdatePolicy;

/// Min-sum algorithm over messages `M` with update policy `U`.
///
/// # Example
///
/// ```
/// use cnode_core::algorithm::{Algorithm, MinSum};
/// use cnode_core::lanes::Simd;
/// use cnode_core::update::NormalUpdate;
///
/// type A = MinSum<Simd<f32, 1>, NormalUpdate>;
///
/// let mut links = [Simd::splat(3.0), Simd::splat(1.0), Simd::splat(-2.0)];
/// A::finalp(&mut links);
/// assert_eq!(links.map(|l| l.v[0]), [-1.0, -2.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSum<M, U> {
    _marker: PhantomData<(M, U)>,
}

impl<M: Message, U: UpdatePolicy> MinSum<M, U> {
    /// Lanewise minimum.
    #[inline(always)]
    pub fn min(a: M, b: M) -> M {
        a.min(b)
    }
}

impl<M: Message, U: UpdatePolicy> Algorithm for MinSum<M, U> {
    type Msg = M;

    fn finalp(links: &mut [M]) {
        let cnt = links.len();
        check_degree(cnt);

        let mut mags = [M::zero(); MAX_DEGREE];
        let mut mins = [M::zero(); MAX_DEGREE];
        let mut signs = [M::zero(); MAX_DEGREE];
        let (mags, mins, signs) = (&mut mags[..cnt], &mut mins[..cnt], &mut signs[..cnt]);

        for (mag, link) in mags.iter_mut().zip(links.iter()) {
            *mag = link.magnitude();
        }
        exclusive_reduce(mags, mins, Self::min);
        exclusive_reduce(links, signs, M::sign_fold);

        for ((link, &min), &sign) in links.iter_mut().zip(mins.iter()).zip(signs.iter()) {
            *link = Self::sign(min, sign.sign_seal());
        }
    }

    #[inline(always)]
    fn update(a: &mut M, b: M) {
        U::update(a, b);
    }
}
