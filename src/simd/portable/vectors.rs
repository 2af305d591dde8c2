use std::array;
use std::ops::{Add, Div, Mul, Sub};

pub(crate) type Raw128 = u128;
pub(crate) type Raw64 = u64;

/// A scalar that can be packed into a storage word.
trait Lane: Copy {
    const BITS: u32;

    fn to_raw(self) -> u128;

    /// Takes the low `BITS` bits of `raw`.
    fn from_raw(raw: u128) -> Self;
}

macro_rules! int_lane {
    ($($lane:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Lane for $lane {
                const BITS: u32 = <$lane>::BITS;

                #[inline(always)]
                fn to_raw(self) -> u128 {
                    self as $unsigned as u128
                }

                #[inline(always)]
                fn from_raw(raw: u128) -> Self {
                    raw as $unsigned as $lane
                }
            }
        )*
    };
}

int_lane!(
    i8 => u8,
    u8 => u8,
    i16 => u16,
    u16 => u16,
    i32 => u32,
    u32 => u32,
    i64 => u64,
    u64 => u64,
);

impl Lane for f32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn to_raw(self) -> u128 {
        self.to_bits() as u128
    }

    #[inline(always)]
    fn from_raw(raw: u128) -> Self {
        f32::from_bits(raw as u32)
    }
}

#[inline(always)]
fn pack<L: Lane, const N: usize>(lanes: [L; N]) -> u128 {
    lanes
        .iter()
        .enumerate()
        .fold(0, |bits, (i, lane)| bits | (lane.to_raw() << (i as u32 * L::BITS)))
}

#[inline(always)]
fn unpack<L: Lane, const N: usize>(bits: u128) -> [L; N] {
    array::from_fn(|i| L::from_raw(bits >> (i as u32 * L::BITS)))
}

#[inline(always)]
fn zip_map<L: Copy, R, const N: usize>(a: [L; N], b: [L; N], f: impl Fn(L, L) -> R) -> [R; N] {
    array::from_fn(|i| f(a[i], b[i]))
}

macro_rules! vector {
    ($($(#[$attr:meta])* $name:ident($raw:ty): [$lane:ty; $lanes:expr]),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone)]
            pub struct $name($raw);

            impl $name {
                pub const LANES: usize = $lanes;

                #[inline(always)]
                pub fn splat(value: $lane) -> Self {
                    Self::from_array([value; $lanes])
                }

                #[inline(always)]
                pub fn from_array(lanes: [$lane; $lanes]) -> Self {
                    Self(pack(lanes) as $raw)
                }

                #[inline(always)]
                pub fn to_array(self) -> [$lane; $lanes] {
                    unpack(self.0 as u128)
                }

                #[inline(always)]
                pub(crate) fn from_raw(raw: $raw) -> Self {
                    Self(raw)
                }

                #[inline(always)]
                pub(crate) fn into_raw(self) -> $raw {
                    self.0
                }
            }

            impl_lane_traits!($name: [$lane; $lanes]);
        )*
    };
}

vector!(
    /// Four `f32` lanes.
    F32x4(Raw128): [f32; 4],
    /// Sixteen `i8` lanes.
    I8x16(Raw128): [i8; 16],
    /// Sixteen `u8` lanes.
    U8x16(Raw128): [u8; 16],
    /// Eight `i16` lanes.
    I16x8(Raw128): [i16; 8],
    /// Eight `u16` lanes.
    U16x8(Raw128): [u16; 8],
    /// Four `i32` lanes.
    I32x4(Raw128): [i32; 4],
    /// Four `u32` lanes.
    U32x4(Raw128): [u32; 4],
    /// Two `i64` lanes.
    I64x2(Raw128): [i64; 2],
    /// Two `u64` lanes.
    U64x2(Raw128): [u64; 2],
    /// Two `f32` lanes in a 64-bit register.
    F32x2(Raw64): [f32; 2],
    /// Eight `i8` lanes in a 64-bit register.
    I8x8(Raw64): [i8; 8],
    /// Eight `u8` lanes in a 64-bit register.
    U8x8(Raw64): [u8; 8],
    /// One `i64` lane in a 64-bit register.
    I64x1(Raw64): [i64; 1],
    /// One `u64` lane in a 64-bit register.
    U64x1(Raw64): [u64; 1],
);

impl_views128!();
impl_views64!();

#[inline(always)]
fn raw_and(a: Raw128, b: Raw128) -> Raw128 {
    a & b
}

#[inline(always)]
fn raw_or(a: Raw128, b: Raw128) -> Raw128 {
    a | b
}

#[inline(always)]
fn raw_xor(a: Raw128, b: Raw128) -> Raw128 {
    a ^ b
}

#[inline(always)]
fn raw_not(a: Raw128) -> Raw128 {
    !a
}

impl_bitops!(F32x4, I8x16, U8x16, I16x8, U16x8, I32x4, U32x4, I64x2, U64x2);

macro_rules! lanewise {
    ($name:ident: $($op:ident::$method:ident => $f:expr),* $(,)?) => {
        $(
            impl $op for $name {
                type Output = Self;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self {
                    Self::from_array(zip_map(self.to_array(), rhs.to_array(), $f))
                }
            }
        )*
    };
}

lanewise!(F32x4:
    Add::add => |a: f32, b: f32| a + b,
    Sub::sub => |a: f32, b: f32| a - b,
    Mul::mul => |a: f32, b: f32| a * b,
    Div::div => |a: f32, b: f32| a / b,
);

lanewise!(I32x4:
    Add::add => i32::wrapping_add,
    Sub::sub => i32::wrapping_sub,
);

impl_assign_ops!(F32x4);

impl_float_display!();

#[inline(always)]
fn mask32(a: F32x4, b: F32x4, f: impl Fn(f32, f32) -> bool) -> U32x4 {
    U32x4::from_array(zip_map(a.to_array(), b.to_array(), |x, y| {
        if f(x, y) {
            u32::MAX
        } else {
            0
        }
    }))
}

impl F32x4 {
    #[inline(always)]
    pub fn floor(self) -> Self {
        Self::from_array(self.to_array().map(f32::floor))
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> U32x4 {
        mask32(self, rhs, |a, b| a == b)
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> U32x4 {
        mask32(self, rhs, |a, b| a < b)
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> U32x4 {
        mask32(self, rhs, |a, b| a <= b)
    }

    #[inline(always)]
    pub fn cmp_gt(self, rhs: Self) -> U32x4 {
        mask32(self, rhs, |a, b| a > b)
    }

    #[inline(always)]
    pub fn cmp_ge(self, rhs: Self) -> U32x4 {
        mask32(self, rhs, |a, b| a >= b)
    }

    /// Truncating conversion. Out-of-range lanes saturate, NaN becomes 0.
    #[inline(always)]
    pub fn to_i32x4(self) -> I32x4 {
        I32x4::from_array(self.to_array().map(|v| v as i32))
    }
}

impl I32x4 {
    #[inline(always)]
    pub fn shl<const N: i32>(self) -> Self {
        Self::from_array(self.to_array().map(|v| v.wrapping_shl(N as u32)))
    }

    /// Arithmetic shift.
    #[inline(always)]
    pub fn shr<const N: i32>(self) -> Self {
        Self::from_array(self.to_array().map(|v| v.wrapping_shr(N as u32)))
    }

    #[inline(always)]
    pub fn to_f32x4(self) -> F32x4 {
        F32x4::from_array(self.to_array().map(|v| v as f32))
    }
}

impl U32x4 {
    #[inline(always)]
    pub fn shl<const N: i32>(self) -> Self {
        Self::from_array(self.to_array().map(|v| v.wrapping_shl(N as u32)))
    }

    /// Logical shift.
    #[inline(always)]
    pub fn shr<const N: i32>(self) -> Self {
        Self::from_array(self.to_array().map(|v| v.wrapping_shr(N as u32)))
    }
}

impl I16x8 {
    #[inline(always)]
    pub fn cmp_gt(self, rhs: Self) -> U16x8 {
        U16x8::from_array(zip_map(self.to_array(), rhs.to_array(), |a, b| {
            if a > b {
                u16::MAX
            } else {
                0
            }
        }))
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_array(zip_map(self.to_array(), rhs.to_array(), i16::max))
    }
}

impl U8x16 {
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_array(zip_map(self.to_array(), rhs.to_array(), u8::max))
    }
}

macro_rules! halves {
    ($($full:ident => $half:ident),* $(,)?) => {
        $(
            impl $full {
                /// Lanes of the lower 64 bits.
                #[inline(always)]
                pub fn low(self) -> $half {
                    $half::from_raw(self.0 as Raw64)
                }

                /// Lanes of the upper 64 bits.
                #[inline(always)]
                pub fn high(self) -> $half {
                    $half::from_raw((self.0 >> 64) as Raw64)
                }

                #[inline(always)]
                pub fn from_halves(low: $half, high: $half) -> Self {
                    Self(((high.into_raw() as Raw128) << 64) | low.into_raw() as Raw128)
                }
            }
        )*
    };
}

halves!(F32x4 => F32x2, I8x16 => I8x8, U8x16 => U8x8);
