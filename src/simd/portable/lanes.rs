//! Lane manipulation primitives, lane by lane.
//!
//! The reduction and shift orders are spelled out to match what the native
//! backends compute, so results agree bit for bit.

use super::{F32x4, I16x8, U8x16};

/// Bitwise select: `(a & !mask) | (b & mask)`.
///
/// Lanes where `mask` is all ones come from `b`, lanes where it is all zeros
/// come from `a`. Any other mask pattern blends the two bit by bit.
#[inline(always)]
pub fn select(a: F32x4, b: F32x4, mask: F32x4) -> F32x4 {
    let mask = mask.as_u32x4();
    ((a.as_u32x4() & !mask) | (b.as_u32x4() & mask)).as_f32x4()
}

/// Returns true if `a[z] > b[z]` for any lane. NaN lanes never compare greater.
#[inline(always)]
pub fn any_gt_float(a: F32x4, b: F32x4) -> bool {
    let [lo, hi] = a.cmp_gt(b).as_u64x2().to_array();
    (lo | hi) != 0
}

/// Returns true if `a[z] > b[z]` for any of the eight signed 16-bit lanes.
#[inline(always)]
pub fn any_gt_s16(a: I16x8, b: I16x8) -> bool {
    let [lo, hi] = a.cmp_gt(b).as_u64x2().to_array();
    (lo | hi) != 0
}

/// Horizontal sum, computed as `(a0 + a1) + (a2 + a3)`.
#[inline(always)]
pub fn hsum_float(a: F32x4) -> f32 {
    let [a0, a1, a2, a3] = a.to_array();
    (a0 + a1) + (a2 + a3)
}

/// Maximum of the sixteen unsigned bytes, by four halving steps.
#[inline(always)]
pub fn hmax_u8(a: U8x16) -> u8 {
    let mut lanes = a.to_array();
    let mut width = lanes.len() / 2;
    while width > 0 {
        for i in 0..width {
            lanes[i] = lanes[i].max(lanes[i + width]);
        }
        width /= 2;
    }
    lanes[0]
}

/// Maximum of the eight signed 16-bit lanes, by three halving steps.
#[inline(always)]
pub fn hmax_s16(a: I16x8) -> i16 {
    let mut lanes = a.to_array();
    let mut width = lanes.len() / 2;
    while width > 0 {
        for i in 0..width {
            lanes[i] = lanes[i].max(lanes[i + width]);
        }
        width /= 2;
    }
    lanes[0]
}

/// Returns `[b[0], a[0], a[1], a[2]]`.
#[inline(always)]
pub fn rightshift_float(a: F32x4, b: F32x4) -> F32x4 {
    let [a0, a1, a2, _] = a.to_array();
    let [b0, ..] = b.to_array();
    F32x4::from_array([b0, a0, a1, a2])
}

/// Returns `[a[1], a[2], a[3], b[0]]`.
#[inline(always)]
pub fn leftshift_float(a: F32x4, b: F32x4) -> F32x4 {
    let [_, a1, a2, a3] = a.to_array();
    let [b0, ..] = b.to_array();
    F32x4::from_array([a1, a2, a3, b0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::portable::U32x4;

    #[test]
    fn test_select_partial_mask_blends_bits() {
        let a = U32x4::splat(0xffff_0000).as_f32x4();
        let b = U32x4::splat(0x0000_ffff).as_f32x4();
        let mask = U32x4::splat(0x00ff_00ff).as_f32x4();
        let out = select(a, b, mask).as_u32x4();
        assert_eq!(out.to_array(), [0xff00_00ff; 4]);
    }

    #[test]
    fn test_hmax_u8_any_position() {
        for pos in 0..16 {
            let mut lanes = [3u8; 16];
            lanes[pos] = 200;
            assert_eq!(hmax_u8(U8x16::from_array(lanes)), 200);
        }
    }

    #[test]
    fn test_hmax_s16_all_negative() {
        let v = I16x8::from_array([-9, -8, -7, -300, -2, -5, -6, i16::MIN]);
        assert_eq!(hmax_s16(v), -2);
    }

    #[test]
    fn test_any_gt_s16_single_lane() {
        let a = I16x8::from_array([0, 0, 0, 0, 0, 0, 0, 1]);
        assert!(any_gt_s16(a, I16x8::splat(0)));
        assert!(!any_gt_s16(I16x8::splat(0), a));
    }
}
