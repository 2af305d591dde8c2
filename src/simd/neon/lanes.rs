//! Lane manipulation primitives on NEON.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::{F32x4, I16x8, U8x16};

/// Bitwise select: `(a & !mask) | (b & mask)`, a single `bsl`.
#[inline(always)]
pub fn select(a: F32x4, b: F32x4, mask: F32x4) -> F32x4 {
    unsafe { F32x4(vbslq_f32(vreinterpretq_u32_f32(mask.0), b.0, a.0)) }
}

/// Returns true if `a[z] > b[z]` for any lane. NaN lanes never compare greater.
#[inline(always)]
pub fn any_gt_float(a: F32x4, b: F32x4) -> bool {
    unsafe { vmaxvq_u32(vcgtq_f32(a.0, b.0)) != 0 }
}

/// Returns true if `a[z] > b[z]` for any of the eight signed 16-bit lanes.
#[inline(always)]
pub fn any_gt_s16(a: I16x8, b: I16x8) -> bool {
    unsafe { vmaxvq_u16(vcgtq_s16(a.0, b.0)) != 0 }
}

/// Horizontal sum, computed as `(a0 + a1) + (a2 + a3)`.
#[inline(always)]
pub fn hsum_float(a: F32x4) -> f32 {
    unsafe {
        // [a0+a1, a2+a3, a0+a1, a2+a3]
        let pairs = vpaddq_f32(a.0, a.0);
        vgetq_lane_f32::<0>(vpaddq_f32(pairs, pairs))
    }
}

/// Maximum of the sixteen unsigned bytes.
///
/// AArch64 has an across-vector max, so no halving shuffle tree is needed.
#[inline(always)]
pub fn hmax_u8(a: U8x16) -> u8 {
    unsafe { vmaxvq_u8(a.0) }
}

/// Maximum of the eight signed 16-bit lanes, via the across-vector `smaxv`.
#[inline(always)]
pub fn hmax_s16(a: I16x8) -> i16 {
    unsafe { vmaxvq_s16(a.0) }
}

/// Returns `[b[0], a[0], a[1], a[2]]`.
#[inline(always)]
pub fn rightshift_float(a: F32x4, b: F32x4) -> F32x4 {
    unsafe { F32x4(vextq_f32::<3>(vdupq_laneq_f32::<0>(b.0), a.0)) }
}

/// Returns `[a[1], a[2], a[3], b[0]]`.
#[inline(always)]
pub fn leftshift_float(a: F32x4, b: F32x4) -> F32x4 {
    unsafe { F32x4(vextq_f32::<1>(a.0, b.0)) }
}
