//! Lane manipulation primitives on SSE2.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{F32x4, I16x8, U8x16};

/// `_mm_shuffle_ps` immediate taking lanes `[w, x, y, z]` from the source.
const fn shuffle_mask(z: i32, y: i32, x: i32, w: i32) -> i32 {
    (z << 6) | (y << 4) | (x << 2) | w
}

/// `[a1, a0, a3, a2]`
const SWAP_PAIRS: i32 = shuffle_mask(2, 3, 0, 1);
/// `[a0, a0, a1, a2]`
const SPREAD_UP: i32 = shuffle_mask(2, 1, 0, 0);
/// `[a1, a2, a3, a0]`
const ROTATE_DOWN: i32 = shuffle_mask(0, 3, 2, 1);

/// Bitwise select: `(a & !mask) | (b & mask)`.
///
/// Lanes where `mask` is all ones come from `b`, lanes where it is all zeros
/// come from `a`, e.g. to double only the positive lanes of `a`:
///
/// ```rust
/// use vec128::simd::{lanes::select, F32x4};
///
/// let a = F32x4::from_array([-1.0, 2.0, -3.0, 4.0]);
/// let mask = a.cmp_gt(F32x4::splat(0.0)).as_f32x4();
/// let doubled = select(a, a + a, mask);
/// assert_eq!(doubled.to_array(), [-1.0, 4.0, -3.0, 8.0]);
/// ```
#[inline(always)]
pub fn select(a: F32x4, b: F32x4, mask: F32x4) -> F32x4 {
    unsafe {
        F32x4(_mm_or_ps(
            _mm_andnot_ps(mask.0, a.0),
            _mm_and_ps(mask.0, b.0),
        ))
    }
}

/// Returns true if `a[z] > b[z]` for any lane. NaN lanes never compare greater.
#[inline(always)]
pub fn any_gt_float(a: F32x4, b: F32x4) -> bool {
    unsafe { _mm_movemask_ps(_mm_cmpgt_ps(a.0, b.0)) != 0 }
}

/// Returns true if `a[z] > b[z]` for any of the eight signed 16-bit lanes.
#[inline(always)]
pub fn any_gt_s16(a: I16x8, b: I16x8) -> bool {
    unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(a.0, b.0)) != 0 }
}

/// Horizontal sum, computed as `(a0 + a1) + (a2 + a3)`.
#[inline(always)]
pub fn hsum_float(a: F32x4) -> f32 {
    unsafe {
        // [a0+a1, a1+a0, a2+a3, a3+a2]
        let pairs = _mm_add_ps(a.0, _mm_shuffle_ps::<SWAP_PAIRS>(a.0, a.0));
        let total = _mm_add_ss(pairs, _mm_movehl_ps(pairs, pairs));
        _mm_cvtss_f32(total)
    }
}

/// Maximum of the sixteen unsigned bytes.
#[inline(always)]
pub fn hmax_u8(a: U8x16) -> u8 {
    unsafe {
        let mut v = a.0;
        v = _mm_max_epu8(v, _mm_srli_si128::<8>(v));
        v = _mm_max_epu8(v, _mm_srli_si128::<4>(v));
        v = _mm_max_epu8(v, _mm_srli_si128::<2>(v));
        v = _mm_max_epu8(v, _mm_srli_si128::<1>(v));
        _mm_cvtsi128_si32(v) as u8
    }
}

/// Maximum of the eight signed 16-bit lanes.
#[inline(always)]
pub fn hmax_s16(a: I16x8) -> i16 {
    unsafe {
        let mut v = a.0;
        v = _mm_max_epi16(v, _mm_srli_si128::<8>(v));
        v = _mm_max_epi16(v, _mm_srli_si128::<4>(v));
        v = _mm_max_epi16(v, _mm_srli_si128::<2>(v));
        _mm_cvtsi128_si32(v) as i16
    }
}

/// Returns `[b[0], a[0], a[1], a[2]]`.
#[inline(always)]
pub fn rightshift_float(a: F32x4, b: F32x4) -> F32x4 {
    unsafe {
        // [a0, a0, a1, a2], then b0 into lane 0
        let spread = _mm_shuffle_ps::<SPREAD_UP>(a.0, a.0);
        F32x4(_mm_move_ss(spread, b.0))
    }
}

/// Returns `[a[1], a[2], a[3], b[0]]`.
#[inline(always)]
pub fn leftshift_float(a: F32x4, b: F32x4) -> F32x4 {
    unsafe {
        // [b0, a1, a2, a3], rotated down one lane
        let merged = _mm_move_ss(a.0, b.0);
        F32x4(_mm_shuffle_ps::<ROTATE_DOWN>(merged, merged))
    }
}
