#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

pub(crate) type Raw128 = __m128i;

/// Four `f32` lanes.
#[derive(Copy, Clone)]
pub struct F32x4(pub(crate) __m128);

impl F32x4 {
    pub const LANES: usize = 4;

    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        Self(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub(crate) fn from_raw(raw: Raw128) -> Self {
        Self(unsafe { _mm_castsi128_ps(raw) })
    }

    #[inline(always)]
    pub(crate) fn into_raw(self) -> Raw128 {
        unsafe { _mm_castps_si128(self.0) }
    }
}

macro_rules! int_vector {
    ($($(#[$attr:meta])* $name:ident: [$lane:ty; $lanes:expr] via $load:ident / $store:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone)]
            pub struct $name(pub(crate) __m128i);

            impl $name {
                pub const LANES: usize = $lanes;

                #[inline(always)]
                pub fn splat(value: $lane) -> Self {
                    Self::from_array([value; $lanes])
                }

                #[inline(always)]
                pub fn from_array(lanes: [$lane; $lanes]) -> Self {
                    Self(unsafe { $load(lanes.as_ptr() as *const __m128i) })
                }

                #[inline(always)]
                pub fn to_array(self) -> [$lane; $lanes] {
                    let mut out = [<$lane>::default(); $lanes];
                    unsafe { $store(out.as_mut_ptr() as *mut __m128i, self.0) };
                    out
                }

                #[inline(always)]
                pub(crate) fn from_raw(raw: __m128i) -> Self {
                    Self(raw)
                }

                #[inline(always)]
                pub(crate) fn into_raw(self) -> __m128i {
                    self.0
                }
            }
        )*
    };
}

int_vector!(
    /// Sixteen `i8` lanes.
    I8x16: [i8; 16] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Sixteen `u8` lanes.
    U8x16: [u8; 16] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Eight `i16` lanes.
    I16x8: [i16; 8] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Eight `u16` lanes.
    U16x8: [u16; 8] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Four `i32` lanes.
    I32x4: [i32; 4] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Four `u32` lanes.
    U32x4: [u32; 4] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Two `i64` lanes.
    I64x2: [i64; 2] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Two `u64` lanes.
    U64x2: [u64; 2] via _mm_loadu_si128 / _mm_storeu_si128,
    /// Two `f32` lanes in the low half of a register.
    F32x2: [f32; 2] via _mm_loadl_epi64 / _mm_storel_epi64,
    /// Eight `i8` lanes in the low half of a register.
    I8x8: [i8; 8] via _mm_loadl_epi64 / _mm_storel_epi64,
    /// Eight `u8` lanes in the low half of a register.
    U8x8: [u8; 8] via _mm_loadl_epi64 / _mm_storel_epi64,
    /// One `i64` lane in the low half of a register.
    I64x1: [i64; 1] via _mm_loadl_epi64 / _mm_storel_epi64,
    /// One `u64` lane in the low half of a register.
    U64x1: [u64; 1] via _mm_loadl_epi64 / _mm_storel_epi64,
);

impl_lane_traits!(
    F32x4: [f32; 4],
    I8x16: [i8; 16],
    U8x16: [u8; 16],
    I16x8: [i16; 8],
    U16x8: [u16; 8],
    I32x4: [i32; 4],
    U32x4: [u32; 4],
    I64x2: [i64; 2],
    U64x2: [u64; 2],
    F32x2: [f32; 2],
    I8x8: [i8; 8],
    U8x8: [u8; 8],
    I64x1: [i64; 1],
    U64x1: [u64; 1],
);

impl_views128!();
impl_views64!();

#[inline(always)]
fn raw_and(a: Raw128, b: Raw128) -> Raw128 {
    unsafe { _mm_and_si128(a, b) }
}

#[inline(always)]
fn raw_or(a: Raw128, b: Raw128) -> Raw128 {
    unsafe { _mm_or_si128(a, b) }
}

#[inline(always)]
fn raw_xor(a: Raw128, b: Raw128) -> Raw128 {
    unsafe { _mm_xor_si128(a, b) }
}

#[inline(always)]
fn raw_not(a: Raw128) -> Raw128 {
    unsafe { _mm_xor_si128(a, _mm_set1_epi32(-1)) }
}

impl_bitops!(F32x4, I8x16, U8x16, I16x8, U16x8, I32x4, U32x4, I64x2, U64x2);

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, rhs.0) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_ps(self.0, rhs.0) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, rhs.0) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm_div_ps(self.0, rhs.0) })
    }
}

impl_assign_ops!(F32x4);

impl_float_display!();

impl F32x4 {
    /// Rounds toward negative infinity using only SSE2.
    #[inline(always)]
    pub fn floor(self) -> Self {
        unsafe {
            let x = self.0;
            let sign = _mm_set1_ps(-0.0);

            let truncated = _mm_cvtepi32_ps(_mm_cvttps_epi32(x));
            // truncation rounds negative fractions up
            let step = _mm_and_ps(_mm_cmpgt_ps(truncated, x), _mm_set1_ps(1.0));
            let floored = _mm_or_ps(_mm_sub_ps(truncated, step), _mm_and_ps(x, sign));

            // |x| >= 2^23 is already integral; NaN compares "not less" too
            let keep = _mm_cmpnlt_ps(_mm_andnot_ps(sign, x), _mm_set1_ps(8_388_608.0));
            Self(_mm_or_ps(
                _mm_andnot_ps(keep, floored),
                _mm_and_ps(keep, x),
            ))
        }
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { _mm_castps_si128(_mm_cmpeq_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { _mm_castps_si128(_mm_cmplt_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { _mm_castps_si128(_mm_cmple_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    pub fn cmp_gt(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { _mm_castps_si128(_mm_cmpgt_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    pub fn cmp_ge(self, rhs: Self) -> U32x4 {
        U32x4(unsafe { _mm_castps_si128(_mm_cmpge_ps(self.0, rhs.0)) })
    }

    /// Truncating conversion. Out-of-range lanes and NaN become `i32::MIN`.
    #[inline(always)]
    pub fn to_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvttps_epi32(self.0) })
    }

    /// Lanes 0 and 1.
    #[inline(always)]
    pub fn low(self) -> F32x2 {
        F32x2(unsafe { _mm_move_epi64(_mm_castps_si128(self.0)) })
    }

    /// Lanes 2 and 3.
    #[inline(always)]
    pub fn high(self) -> F32x2 {
        F32x2(unsafe { _mm_srli_si128::<8>(_mm_castps_si128(self.0)) })
    }

    #[inline(always)]
    pub fn from_halves(low: F32x2, high: F32x2) -> Self {
        Self(unsafe { _mm_castsi128_ps(_mm_unpacklo_epi64(low.0, high.0)) })
    }
}

impl Add for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
    }
}

impl Sub for I32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi32(self.0, rhs.0) })
    }
}

impl I32x4 {
    #[inline(always)]
    pub fn shl<const N: i32>(self) -> Self {
        Self(unsafe { _mm_slli_epi32::<N>(self.0) })
    }

    /// Arithmetic shift.
    #[inline(always)]
    pub fn shr<const N: i32>(self) -> Self {
        Self(unsafe { _mm_srai_epi32::<N>(self.0) })
    }

    #[inline(always)]
    pub fn to_f32x4(self) -> F32x4 {
        F32x4(unsafe { _mm_cvtepi32_ps(self.0) })
    }
}

impl U32x4 {
    #[inline(always)]
    pub fn shl<const N: i32>(self) -> Self {
        Self(unsafe { _mm_slli_epi32::<N>(self.0) })
    }

    /// Logical shift.
    #[inline(always)]
    pub fn shr<const N: i32>(self) -> Self {
        Self(unsafe { _mm_srli_epi32::<N>(self.0) })
    }
}

impl I16x8 {
    #[inline(always)]
    pub fn cmp_gt(self, rhs: Self) -> U16x8 {
        U16x8(unsafe { _mm_cmpgt_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_epi16(self.0, rhs.0) })
    }
}

impl U8x16 {
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_epu8(self.0, rhs.0) })
    }
}

macro_rules! int_halves {
    ($($full:ident => $half:ident),* $(,)?) => {
        $(
            impl $full {
                /// Lanes of the lower 64 bits.
                #[inline(always)]
                pub fn low(self) -> $half {
                    $half(unsafe { _mm_move_epi64(self.0) })
                }

                /// Lanes of the upper 64 bits.
                #[inline(always)]
                pub fn high(self) -> $half {
                    $half(unsafe { _mm_srli_si128::<8>(self.0) })
                }

                #[inline(always)]
                pub fn from_halves(low: $half, high: $half) -> Self {
                    Self(unsafe { _mm_unpacklo_epi64(low.0, high.0) })
                }
            }
        )*
    };
}

int_halves!(I8x16 => I8x8, U8x16 => U8x8);
