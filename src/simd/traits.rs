//! The portable vector model the math engine is written against.
//!
//! Every backend implements these two traits for its `F32x4` and `I32x4`, so
//! [`crate::math::logf`] and [`crate::math::expf`] are written once and
//! monomorphised per backend. Masks are float vectors whose lanes are all ones
//! or all zeros, exactly what the comparison primitives produce.

use std::ops::{Add, BitAnd, BitOr, Mul, Sub};

/// Four packed `f32` lanes.
pub trait SimdFloat:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
{
    /// Same-width integer view used for exponent-field manipulation.
    type Bits: SimdInt;

    fn splat(value: f32) -> Self;

    /// Rounds every lane toward negative infinity.
    fn floor(self) -> Self;

    fn eq_mask(self, rhs: Self) -> Self;

    fn lt_mask(self, rhs: Self) -> Self;

    fn gt_mask(self, rhs: Self) -> Self;

    /// All ones in every lane holding a NaN.
    fn nan_mask(self) -> Self;

    /// Takes `other` where `mask` is set and `self` elsewhere, bit by bit.
    fn blend(self, other: Self, mask: Self) -> Self;

    /// Bit reinterpretation, no conversion.
    fn to_bits(self) -> Self::Bits;

    /// Bit reinterpretation, no conversion.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Numeric conversion, truncating toward zero. Lanes outside the `i32`
    /// range produce a backend-defined value.
    fn to_int(self) -> Self::Bits;

    /// Numeric conversion, rounding to nearest.
    fn from_int(int: Self::Bits) -> Self;
}

/// Four packed `i32` lanes with wrapping arithmetic.
pub trait SimdInt:
    Copy + Add<Output = Self> + Sub<Output = Self> + BitAnd<Output = Self> + BitOr<Output = Self>
{
    fn splat(value: i32) -> Self;

    /// Shifts every lane left by `N` bits.
    fn shl<const N: i32>(self) -> Self;

    /// Shifts every lane right by `N` bits, replicating the sign bit.
    fn shr<const N: i32>(self) -> Self;
}
