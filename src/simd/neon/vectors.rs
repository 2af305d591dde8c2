#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Sub};

pub(crate) type Raw128 = uint8x16_t;
pub(crate) type Raw64 = uint8x8_t;

// `vreinterpret` has no u8 -> u8 form.
#[inline(always)]
unsafe fn same_q(raw: uint8x16_t) -> uint8x16_t {
    raw
}

#[inline(always)]
unsafe fn same_d(raw: uint8x8_t) -> uint8x8_t {
    raw
}

macro_rules! neon_vector {
    ($(
        $(#[$attr:meta])*
        $name:ident($native:ty, $raw:ty): [$lane:ty; $lanes:expr]
            via $load:ident / $store:ident, $from_raw:ident / $into_raw:ident
    ),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone)]
            pub struct $name(pub(crate) $native);

            impl $name {
                pub const LANES: usize = $lanes;

                #[inline(always)]
                pub fn splat(value: $lane) -> Self {
                    Self::from_array([value; $lanes])
                }

                #[inline(always)]
                pub fn from_array(lanes: [$lane; $lanes]) -> Self {
                    Self(unsafe { $load(lanes.as_ptr()) })
                }

                #[inline(always)]
                pub fn to_array(self) -> [$lane; $lanes] {
                    let mut out = [<$lane>::default(); $lanes];
                    unsafe { $store(out.as_mut_ptr(), self.0) };
                    out
                }

                #[inline(always)]
                pub(crate) fn from_raw(raw: $raw) -> Self {
                    Self(unsafe { $from_raw(raw) })
                }

                #[inline(always)]
                pub(crate) fn into_raw(self) -> $raw {
                    unsafe { $into_raw(self.0) }
                }
            }

            impl_lane_traits!($name: [$lane; $lanes]);
        )*
    };
}

neon_vector!(
    /// Four `f32` lanes.
    F32x4(float32x4_t, Raw128): [f32; 4]
        via vld1q_f32 / vst1q_f32, vreinterpretq_f32_u8 / vreinterpretq_u8_f32,
    /// Sixteen `i8` lanes.
    I8x16(int8x16_t, Raw128): [i8; 16]
        via vld1q_s8 / vst1q_s8, vreinterpretq_s8_u8 / vreinterpretq_u8_s8,
    /// Sixteen `u8` lanes.
    U8x16(uint8x16_t, Raw128): [u8; 16]
        via vld1q_u8 / vst1q_u8, same_q / same_q,
    /// Eight `i16` lanes.
    I16x8(int16x8_t, Raw128): [i16; 8]
        via vld1q_s16 / vst1q_s16, vreinterpretq_s16_u8 / vreinterpretq_u8_s16,
    /// Eight `u16` lanes.
    U16x8(uint16x8_t, Raw128): [u16; 8]
        via vld1q_u16 / vst1q_u16, vreinterpretq_u16_u8 / vreinterpretq_u8_u16,
    /// Four `i32` lanes.
    I32x4(int32x4_t, Raw128): [i32; 4]
        via vld1q_s32 / vst1q_s32, vreinterpretq_s32_u8 / vreinterpretq_u8_s32,
    /// Four `u32` lanes.
    U32x4(uint32x4_t, Raw128): [u32; 4]
        via vld1q_u32 / vst1q_u32, vreinterpretq_u32_u8 / vreinterpretq_u8_u32,
    /// Two `i64` lanes.
    I64x2(int64x2_t, Raw128): [i64; 2]
        via vld1q_s64 / vst1q_s64, vreinterpretq_s64_u8 / vreinterpretq_u8_s64,
    /// Two `u64` lanes.
    U64x2(uint64x2_t, Raw128): [u64; 2]
        via vld1q_u64 / vst1q_u64, vreinterpretq_u64_u8 / vreinterpretq_u8_u64,
    /// Two `f32` lanes in a 64-bit register.
    F32x2(float32x2_t, Raw64): [f32; 2]
        via vld1_f32 / vst1_f32, vreinterpret_f32_u8 / vreinterpret_u8_f32,
    /// Eight `i8` lanes in a 64-bit register.
    I8x8(int8x8_t, Raw64): [i8; 8]
        via vld1_s8 / vst1_s8, vreinterpret_s8_u8 / vreinterpret_u8_s8,
    /// Eight `u8` lanes in a 64-bit register.
    U8x8(uint8x8_t, Raw64): [u8; 8]
        via vld1_u8 / vst1_u8, same_d / same_d,
    /// One `i64` lane in a 64-bit register.
    I64x1(int64x1_t, Raw64): [i64; 1]
        via vld1_s64 / vst1_s64, vreinterpret_s64_u8 / vreinterpret_u8_s64,
    /// One `u64` lane in a 64-bit register.
    U64x1(uint64x1_t, Raw64): [u64; 1]
        via vld1_u64 / vst1_u64, vreinterpret_u64_u8 / vreinterpret_u8_u64,
);

impl_views128!();
impl_views64!();

#[inline(always)]
fn raw_and(a: Raw128, b: Raw128) -> Raw128 {
    unsafe { vandq_u8(a, b) }
}

#[inline(always)]
fn raw_or(a: Raw128, b: Raw128) -> Raw128 {
    unsafe { vorrq_u8(a, b) }
}

#[inline(always)]
fn raw_xor(a: Raw128, b: Raw128) -> Raw128 {
    unsafe { veorq_u8(a, b) }
}

#[inline(always)]
fn raw_not(a: Raw128) -> Raw128 {
    unsafe { vmvnq_u8(a) }
}

impl_bitops!(F32x4, I8x16, U8x16, I16x8, U16x8, I32x4, U32x4, I64x2, U64x2);

macro_rules! neon_binop {
    ($name:ident: $($op:ident::$method:ident => $intrinsic:ident),* $(,)?) => {
        $(
            impl $op for $name {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self {
                    Self(unsafe { $intrinsic(self.0, rhs.0) })
                }
            }
        )*
    };
}

neon_binop!(F32x4:
    Add::add => vaddq_f32,
    Sub::sub => vsubq_f32,
    Mul::mul => vmulq_f32,
    Div::div => vdivq_f32,
);

neon_binop!(I32x4:
    Add::add => vaddq_s32,
    Sub::sub => vsubq_s32,
);

impl_assign_ops!(F32x4);

impl_float_display!();

impl F32x4 {
    #[inline(always)]
    pub fn floor(self) -> Self {
        Self(unsafe { vrndmq_f32(self.0) })
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { vceqq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { vcltq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { vcleq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn cmp_gt(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { vcgtq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn cmp_ge(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { vcgeq_f32(self.0, rhs.0) })
    }

    /// Truncating conversion. Out-of-range lanes saturate, NaN becomes 0.
    #[inline(always)]
    pub fn to_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcvtq_s32_f32(self.0) })
    }
}

impl I32x4 {
    #[inline(always)]
    pub fn shl<const N: i32>(self) -> Self {
        Self(unsafe { vshlq_n_s32::<N>(self.0) })
    }

    /// Arithmetic shift.
    #[inline(always)]
    pub fn shr<const N: i32>(self) -> Self {
        Self(unsafe { vshrq_n_s32::<N>(self.0) })
    }

    #[inline(always)]
    pub fn to_f32x4(self) -> F32x4 {
        F32x4(unsafe { vcvtq_f32_s32(self.0) })
    }
}

impl U32x4 {
    #[inline(always)]
    pub fn shl<const N: i32>(self) -> Self {
        Self(unsafe { vshlq_n_u32::<N>(self.0) })
    }

    /// Logical shift.
    #[inline(always)]
    pub fn shr<const N: i32>(self) -> Self {
        Self(unsafe { vshrq_n_u32::<N>(self.0) })
    }
}

impl I16x8 {
    #[inline(always)]
    pub fn cmp_gt(self, rhs: Self) -> U16x8 {
        U16x8(unsafe { vcgtq_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_s16(self.0, rhs.0) })
    }
}

impl U8x16 {
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_u8(self.0, rhs.0) })
    }
}

macro_rules! neon_halves {
    ($($full:ident => $half:ident via $low:ident / $high:ident / $combine:ident),* $(,)?) => {
        $(
            impl $full {
                /// Lanes of the lower 64 bits.
                #[inline(always)]
                pub fn low(self) -> $half {
                    $half(unsafe { $low(self.0) })
                }

                /// Lanes of the upper 64 bits.
                #[inline(always)]
                pub fn high(self) -> $half {
                    $half(unsafe { $high(self.0) })
                }

                #[inline(always)]
                pub fn from_halves(low: $half, high: $half) -> Self {
                    Self(unsafe { $combine(low.0, high.0) })
                }
            }
        )*
    };
}

neon_halves!(
    F32x4 => F32x2 via vget_low_f32 / vget_high_f32 / vcombine_f32,
    I8x16 => I8x8 via vget_low_s8 / vget_high_s8 / vcombine_s8,
    U8x16 => U8x8 via vget_low_u8 / vget_high_u8 / vcombine_u8,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinterpret_is_little_endian() {
        let v = U32x4::from_array([0x1122_3344, 0x5566_7788, 0, 0]);
        assert_eq!(v.as_u64x2().to_array()[0], 0x5566_7788_1122_3344);
        assert_eq!(v.as_u8x16().to_array()[0], 0x44);
    }

    #[test]
    fn test_to_i32x4_saturates() {
        let v = F32x4::from_array([3e9, -3e9, f32::NAN, -1.5]);
        assert_eq!(v.to_i32x4().to_array(), [i32::MAX, i32::MIN, 0, -1]);
    }
}
