//! Lane batching.
//!
//! Frames arrive frame-major: frame `n` occupies `frames[n * len..(n + 1) * len]`.
//! The kernels want lane-major data: one `Simd` per code bit, lane `n` holding
//! frame `n`'s value for that bit. These helpers move frames in and out of
//! that layout for one batch of up to `WIDTH` frames.
//!
//! The last batch of a stream is usually partial. Its `blocks < WIDTH` active
//! lanes are filled from frames; the remaining lanes are padding, zeroed on
//! the way in (an erased belief) and never written back on the way out.

use crate::lanes::{QMAX, QMIN, Simd};

/// Number of batches needed to cover `total` frames with `width` lanes each.
#[must_use]
pub const fn batch_count(total: usize, width: usize) -> usize {
    total.div_ceil(width)
}

/// Number of active lanes in the batch that starts at frame `start`.
///
/// Returns `0` when `start >= total`.
#[must_use]
pub const fn active_lanes(total: usize, start: usize, width: usize) -> usize {
    if start >= total {
        0
    } else if total - start < width {
        total - start
    } else {
        width
    }
}

/// Copies `blocks` frames of `len` values each into lane-major form.
///
/// `out[i].v[n]` receives `frames[n * len + i]` for `n < blocks`; lanes
/// `blocks..WIDTH` are set to `T::default()`.
///
/// # Errors
///
/// Returns an error if `blocks` is zero or exceeds `WIDTH`, if `frames` holds
/// fewer than `blocks * len` values, or if `out` is shorter than `len`.
///
/// # Example
///
/// ```
/// use cnode_core::batch::interleave;
/// use cnode_core::lanes::Simd;
///
/// let frames = [1i8, 2, 3, 10, 20, 30];
/// let mut lanes = [Simd::<i8, 4>::splat(99); 3];
/// interleave(&frames, 3, 2, &mut lanes).unwrap();
/// assert_eq!(lanes[0].v, [1, 10, 0, 0]);
/// assert_eq!(lanes[2].v, [3, 30, 0, 0]);
/// ```
pub fn interleave<T: Copy + Default, const WIDTH: usize>(
    frames: &[T],
    len: usize,
    blocks: usize,
    out: &mut [Simd<T, WIDTH>],
) -> Result<(), &'static str> {
    if blocks == 0 || blocks > WIDTH {
        return Err("interleave: blocks out of range");
    }
    if frames.len() < blocks * len {
        return Err("interleave: not enough frame data");
    }
    if out.len() < len {
        return Err("interleave: lane buffer too short");
    }

    for (i, lanes) in out[..len].iter_mut().enumerate() {
        for (n, lane) in lanes.v.iter_mut().enumerate() {
            *lane = if n < blocks {
                frames[n * len + i]
            } else {
                T::default()
            };
        }
    }
    Ok(())
}

/// Copies the first `blocks` lanes back into frame-major form.
///
/// `frames[n * len + i]` receives `lanes[i].v[n]` for `n < blocks`; padding
/// lanes are dropped.
///
/// # Errors
///
/// Returns an error if `blocks` is zero or exceeds `WIDTH`, if `lanes` is
/// shorter than `len`, or if `frames` has room for fewer than `blocks * len`
/// values.
pub fn deinterleave<T: Copy, const WIDTH: usize>(
    lanes: &[Simd<T, WIDTH>],
    len: usize,
    blocks: usize,
    frames: &mut [T],
) -> Result<(), &'static str> {
    if blocks == 0 || blocks > WIDTH {
        return Err("deinterleave: blocks out of range");
    }
    if lanes.len() < len {
        return Err("deinterleave: lane buffer too short");
    }
    if frames.len() < blocks * len {
        return Err("deinterleave: frame buffer too short");
    }

    for (i, batch) in lanes[..len].iter().enumerate() {
        for (n, &value) in batch.v[..blocks].iter().enumerate() {
            frames[n * len + i] = value;
        }
    }
    Ok(())
}

/// Quantizes a floating LLR to the symmetric `i8` message range.
///
/// Rounds half away from zero and clips to `[-127, 127]`. NaN maps to `0`
/// (an erased belief).
#[must_use]
pub fn quantize_llr(x: f32) -> i8 {
    // `as` truncates toward zero, saturates, and maps NaN to 0.
    let t = x as i32;
    // Exact for |x| < 2^24; larger inputs clip anyway.
    let frac = x - t as f32;
    let rounded = if frac >= 0.5 {
        t.saturating_add(1)
    } else if frac <= -0.5 {
        t.saturating_sub(1)
    } else {
        t
    };
    rounded.clamp(QMIN as i32, QMAX as i32) as i8
}
