//! Offset min-sum.
//!
//! Min-sum overestimates outgoing magnitudes. Offset min-sum subtracts a
//! constant from every excluded minimum and clamps at zero before restoring
//! the sign:
//!
//! ```text
//! out[i] = (prod_{j != i} sign(in[j])) * max(min_{j != i} |in[j]| - OFFSET, 0)
//! ```

use core::marker::PhantomData;

use super::{check_degree, Algorithm, MAX_DEGREE};
use crate::lanes::LaneArith;
use crate::message::Message;
use crate::reduce::exclusive_reduce;
use crate::update::UpdatePolicy;

/// Offset min-sum over messages `M`, update policy `U` and offset `OFFSET`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetMinSum<M, U, const OFFSET: i32> {
    _marker: PhantomData<(M, U)>,
}

impl<M: Message, U: UpdatePolicy, const OFFSET: i32> Algorithm for OffsetMinSum<M, U, OFFSET> {
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
        exclusive_reduce(mags, mins, M::min);
        exclusive_reduce(links, signs, M::sign_fold);

        let offset = M::dup(OFFSET);
        for ((link, &min), &sign) in links.iter_mut().zip(mins.iter()).zip(signs.iter()) {
            let shrunk = min.minus(offset).max(M::zero());
            *link = Self::sign(shrunk, sign.sign_seal());
        }
    }

    #[inline(always)]
    fn update(a: &mut M, b: M) {
        U::update(a, b);
    }
}
