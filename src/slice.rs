//! Slice kernels built on the 128-bit primitives.
//!
//! These are the inner loops the vector layer exists for: elementwise `ln` and
//! `exp`, reductions, and whole-buffer lane shifts. Every kernel works four
//! `f32` (or sixteen `u8`, eight `i16`) lanes at a time and finishes the tail
//! in a padded register or in scalar code. Outputs are caller-owned buffers,
//! so nothing here allocates.
//!
//! The `par_*` variants split buffers of at least [`PARALLEL_THRESHOLD`]
//! elements into [`PARALLEL_CHUNK_SIZE`] pieces processed by rayon. Chunk
//! boundaries fall on lane boundaries, so the parallel and sequential results
//! are bit-identical.
//!
//! # Examples
//!
//! ```rust
//! use vec128::slice::{exp_into, ln_into};
//!
//! let input = [1.0f32, 2.0, 4.0, 8.0, 16.0];
//! let mut logs = [0.0; 5];
//! ln_into(&input, &mut logs)?;
//!
//! let mut back = [0.0; 5];
//! exp_into(&logs, &mut back)?;
//! for (x, y) in input.iter().zip(back) {
//!     assert!((x - y).abs() <= x * 1e-5);
//! }
//! # Ok::<(), vec128::Vec128Error>(())
//! ```

use std::array;

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{ensure_same_len, Result};
use crate::math::{expf_vec, logf_vec};
use crate::simd::lanes::{
    any_gt_float, hmax_s16, hmax_u8, hsum_float, leftshift_float, rightshift_float,
};
use crate::simd::{F32x4, I16x8, U8x16, BACKEND};

/// Inputs at least this long take the parallel path in the `par_*` kernels.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Elements handed to each rayon task. A multiple of every lane count.
pub const PARALLEL_CHUNK_SIZE: usize = 4_096;

const LANES: usize = F32x4::LANES;

/// Copies a full chunk into a lane array.
#[inline(always)]
fn lanes_of<T: Copy, const N: usize>(chunk: &[T]) -> [T; N] {
    array::from_fn(|i| chunk[i])
}

/// Loads up to four lanes, filling the missing ones with `pad`.
#[inline(always)]
fn load_padded(chunk: &[f32], pad: f32) -> F32x4 {
    let mut lanes = [pad; LANES];
    lanes[..chunk.len()].copy_from_slice(chunk);
    F32x4::from_array(lanes)
}

/// Stores the first `out.len()` lanes of `v`.
#[inline(always)]
fn store_partial(v: F32x4, out: &mut [f32]) {
    let lanes = v.to_array();
    out.copy_from_slice(&lanes[..out.len()]);
}

// Tail lanes are padded with 1.0, which neither kernel treats specially.
#[inline(always)]
fn map_lanes(input: &[f32], output: &mut [f32], kernel: fn(F32x4) -> F32x4) {
    for (src, dst) in input.chunks(LANES).zip(output.chunks_mut(LANES)) {
        store_partial(kernel(load_padded(src, 1.0)), dst);
    }
}

fn par_map_lanes(
    name: &str,
    input: &[f32],
    output: &mut [f32],
    kernel: fn(F32x4) -> F32x4,
) -> Result<()> {
    ensure_same_len(input.len(), output.len())?;

    if input.len() < PARALLEL_THRESHOLD {
        trace!("{name}: {} elements, sequential on {BACKEND}", input.len());
        map_lanes(input, output, kernel);
        return Ok(());
    }

    debug!(
        "{name}: {} elements in {} parallel chunks on {BACKEND}",
        input.len(),
        input.len().div_ceil(PARALLEL_CHUNK_SIZE)
    );
    input
        .par_chunks(PARALLEL_CHUNK_SIZE)
        .zip(output.par_chunks_mut(PARALLEL_CHUNK_SIZE))
        .for_each(|(src, dst)| map_lanes(src, dst, kernel));

    Ok(())
}

/// Writes `ln(input[i])` into `output[i]`.
///
/// # Errors
///
/// [`Vec128Error::LengthMismatch`](crate::Vec128Error::LengthMismatch) if the
/// buffers differ in length.
pub fn ln_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    ensure_same_len(input.len(), output.len())?;
    trace!("ln_into: {} elements on {BACKEND}", input.len());
    map_lanes(input, output, logf_vec);
    Ok(())
}

/// Writes `exp(input[i])` into `output[i]`.
///
/// # Errors
///
/// [`Vec128Error::LengthMismatch`](crate::Vec128Error::LengthMismatch) if the
/// buffers differ in length.
pub fn exp_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    ensure_same_len(input.len(), output.len())?;
    trace!("exp_into: {} elements on {BACKEND}", input.len());
    map_lanes(input, output, expf_vec);
    Ok(())
}

/// [`ln_into`], spread over the rayon pool for large buffers.
pub fn par_ln_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    par_map_lanes("par_ln_into", input, output, logf_vec)
}

/// [`exp_into`], spread over the rayon pool for large buffers.
pub fn par_exp_into(input: &[f32], output: &mut [f32]) -> Result<()> {
    par_map_lanes("par_exp_into", input, output, expf_vec)
}

/// Sum of all elements.
///
/// Accumulates four running lane sums, reduces them with [`hsum_float`] and
/// adds the tail in order. The association differs from a sequential scalar
/// loop, so results can differ from `iter().sum()` in the last bits.
pub fn sum(input: &[f32]) -> f32 {
    let chunks = input.chunks_exact(LANES);
    let tail = chunks.remainder();

    let acc = chunks.fold(F32x4::splat(0.0), |acc, chunk| {
        acc + F32x4::from_array(lanes_of(chunk))
    });

    tail.iter().fold(hsum_float(acc), |total, &x| total + x)
}

/// Largest byte, or `None` for an empty slice.
pub fn max_u8(input: &[u8]) -> Option<u8> {
    if input.is_empty() {
        return None;
    }

    let chunks = input.chunks_exact(U8x16::LANES);
    let tail = chunks.remainder();

    let acc = chunks.fold(U8x16::splat(u8::MIN), |acc, chunk| {
        acc.max(U8x16::from_array(lanes_of(chunk)))
    });

    Some(tail.iter().fold(hmax_u8(acc), |best, &x| best.max(x)))
}

/// Largest signed 16-bit value, or `None` for an empty slice.
pub fn max_i16(input: &[i16]) -> Option<i16> {
    if input.is_empty() {
        return None;
    }

    let chunks = input.chunks_exact(I16x8::LANES);
    let tail = chunks.remainder();

    let acc = chunks.fold(I16x8::splat(i16::MIN), |acc, chunk| {
        acc.max(I16x8::from_array(lanes_of(chunk)))
    });

    Some(tail.iter().fold(hmax_s16(acc), |best, &x| best.max(x)))
}

/// Returns true if `a[i] > b[i]` for any `i`. NaN never compares greater.
///
/// # Errors
///
/// [`Vec128Error::LengthMismatch`](crate::Vec128Error::LengthMismatch) if the
/// slices differ in length.
pub fn any_gt(a: &[f32], b: &[f32]) -> Result<bool> {
    ensure_same_len(a.len(), b.len())?;

    let a_chunks = a.chunks_exact(LANES);
    let b_chunks = b.chunks_exact(LANES);
    let mut tail = a_chunks.remainder().iter().zip(b_chunks.remainder());

    let found = a_chunks.zip(b_chunks).any(|(x, y)| {
        any_gt_float(F32x4::from_array(lanes_of(x)), F32x4::from_array(lanes_of(y)))
    });

    Ok(found || tail.any(|(x, y)| x > y))
}

/// Shifts the buffer one element toward the end: `output[0] = fill`,
/// `output[i] = input[i - 1]`.
///
/// # Errors
///
/// [`Vec128Error::LengthMismatch`](crate::Vec128Error::LengthMismatch) if the
/// buffers differ in length.
pub fn shift_right_into(input: &[f32], fill: f32, output: &mut [f32]) -> Result<()> {
    ensure_same_len(input.len(), output.len())?;
    trace!("shift_right_into: {} elements on {BACKEND}", input.len());

    // lane 0 of `carry` is the element that moves into the next chunk
    let mut carry = F32x4::splat(fill);
    for (src, dst) in input.chunks(LANES).zip(output.chunks_mut(LANES)) {
        let v = load_padded(src, fill);
        store_partial(rightshift_float(v, carry), dst);
        if let Some(&last) = src.last() {
            carry = F32x4::splat(last);
        }
    }

    Ok(())
}

/// Shifts the buffer one element toward the start: `output[i] = input[i + 1]`,
/// and the last element becomes `fill`.
///
/// # Errors
///
/// [`Vec128Error::LengthMismatch`](crate::Vec128Error::LengthMismatch) if the
/// buffers differ in length.
pub fn shift_left_into(input: &[f32], fill: f32, output: &mut [f32]) -> Result<()> {
    ensure_same_len(input.len(), output.len())?;
    trace!("shift_left_into: {} elements on {BACKEND}", input.len());

    for (k, (src, dst)) in input
        .chunks(LANES)
        .zip(output.chunks_mut(LANES))
        .enumerate()
    {
        let next = input.get((k + 1) * LANES).copied().unwrap_or(fill);
        let v = load_padded(src, fill);
        store_partial(leftshift_float(v, F32x4::splat(next)), dst);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Vec128Error;

    #[test]
    fn test_sum_small_lengths() {
        for len in 0..10 {
            let input: Vec<f32> = (1..=len).map(|i| i as f32).collect();
            let expected = (len * (len + 1) / 2) as f32;
            assert_eq!(sum(&input), expected, "len {len}");
        }
    }

    #[test]
    fn test_max_empty() {
        assert_eq!(max_u8(&[]), None);
        assert_eq!(max_i16(&[]), None);
    }

    #[test]
    fn test_max_in_tail() {
        let mut bytes = vec![1u8; 19];
        bytes[18] = 77;
        assert_eq!(max_u8(&bytes), Some(77));

        let mut shorts = vec![-40i16; 11];
        shorts[9] = -3;
        assert_eq!(max_i16(&shorts), Some(-3));
    }

    #[test]
    fn test_length_mismatch() {
        let mut out = [0.0; 3];
        let err = ln_into(&[1.0; 4], &mut out).unwrap_err();
        assert_eq!(err, Vec128Error::LengthMismatch { expected: 4, actual: 3 });
        assert!(any_gt(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_shift_right_short() {
        let mut out = [0.0; 3];
        shift_right_into(&[1.0, 2.0, 3.0], 9.0, &mut out).unwrap();
        assert_eq!(out, [9.0, 1.0, 2.0]);
    }

    #[test]
    fn test_shift_left_across_chunks() {
        let input: Vec<f32> = (0..9).map(|i| i as f32).collect();
        let mut out = vec![0.0; 9];
        shift_left_into(&input, -1.0, &mut out).unwrap();
        assert_eq!(out, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, -1.0]);
    }
}
