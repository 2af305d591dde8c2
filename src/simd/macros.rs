//! Macros shared by every backend.
//!
//! Each backend defines its register wrappers plus two crate-private
//! conversions per type, `from_raw` and `into_raw`, to and from the backend's
//! raw storage word (`Raw128` or `Raw64`). Everything that can be expressed
//! through those conversions is generated here once, so the public surface is
//! identical whichever backend is compiled.

/// `Debug`, `PartialEq`, `Default` and array conversions, all lane-wise.
macro_rules! impl_lane_traits {
    ($($name:ident: [$lane:ty; $lanes:expr]),* $(,)?) => {
        $(
            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.debug_tuple(stringify!($name))
                        .field(&self.to_array())
                        .finish()
                }
            }

            impl PartialEq for $name {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    self.to_array() == other.to_array()
                }
            }

            impl Default for $name {
                #[inline(always)]
                fn default() -> Self {
                    Self::from_array([<$lane>::default(); $lanes])
                }
            }

            impl From<[$lane; $lanes]> for $name {
                #[inline(always)]
                fn from(lanes: [$lane; $lanes]) -> Self {
                    Self::from_array(lanes)
                }
            }

            impl From<$name> for [$lane; $lanes] {
                #[inline(always)]
                fn from(vector: $name) -> Self {
                    vector.to_array()
                }
            }
        )*
    };
}

/// Generates the `as_*` reinterpretations for every pair of types sharing a
/// storage width, identity included.
macro_rules! impl_views {
    ([$($from:ident),* $(,)?] => $targets:tt) => {
        $( impl_views!(@one $from => $targets); )*
    };
    (@one $from:ident => [$($method:ident: $to:ident),* $(,)?]) => {
        impl $from {
            $(
                #[doc = concat!("Views the bits of this vector as [`", stringify!($to), "`] lanes.")]
                #[inline(always)]
                pub fn $method(self) -> $to {
                    $to::from_raw(self.into_raw())
                }
            )*
        }
    };
}

macro_rules! impl_views128 {
    () => {
        impl_views!(
            [F32x4, I8x16, U8x16, I16x8, U16x8, I32x4, U32x4, I64x2, U64x2] => [
                as_f32x4: F32x4,
                as_i8x16: I8x16,
                as_u8x16: U8x16,
                as_i16x8: I16x8,
                as_u16x8: U16x8,
                as_i32x4: I32x4,
                as_u32x4: U32x4,
                as_i64x2: I64x2,
                as_u64x2: U64x2,
            ]
        );
    };
}

macro_rules! impl_views64 {
    () => {
        impl_views!(
            [F32x2, I8x8, U8x8, I64x1, U64x1] => [
                as_f32x2: F32x2,
                as_i8x8: I8x8,
                as_u8x8: U8x8,
                as_i64x1: I64x1,
                as_u64x1: U64x1,
            ]
        );
    };
}

/// Bitwise `& | ^ !` over the raw storage. Expects `raw_and`, `raw_or`,
/// `raw_xor` and `raw_not` in scope.
macro_rules! impl_bitops {
    ($($name:ident),* $(,)?) => {
        $(
            impl ::std::ops::BitAnd for $name {
                type Output = Self;

                #[inline(always)]
                fn bitand(self, rhs: Self) -> Self {
                    Self::from_raw(raw_and(self.into_raw(), rhs.into_raw()))
                }
            }

            impl ::std::ops::BitOr for $name {
                type Output = Self;

                #[inline(always)]
                fn bitor(self, rhs: Self) -> Self {
                    Self::from_raw(raw_or(self.into_raw(), rhs.into_raw()))
                }
            }

            impl ::std::ops::BitXor for $name {
                type Output = Self;

                #[inline(always)]
                fn bitxor(self, rhs: Self) -> Self {
                    Self::from_raw(raw_xor(self.into_raw(), rhs.into_raw()))
                }
            }

            impl ::std::ops::Not for $name {
                type Output = Self;

                #[inline(always)]
                fn not(self) -> Self {
                    Self::from_raw(raw_not(self.into_raw()))
                }
            }
        )*
    };
}

/// `+=`, `-=` and `*=` in terms of the binary operators.
macro_rules! impl_assign_ops {
    ($($name:ident),* $(,)?) => {
        $(
            impl ::std::ops::AddAssign for $name {
                #[inline(always)]
                fn add_assign(&mut self, rhs: Self) {
                    *self = *self + rhs;
                }
            }

            impl ::std::ops::SubAssign for $name {
                #[inline(always)]
                fn sub_assign(&mut self, rhs: Self) {
                    *self = *self - rhs;
                }
            }

            impl ::std::ops::MulAssign for $name {
                #[inline(always)]
                fn mul_assign(&mut self, rhs: Self) {
                    *self = *self * rhs;
                }
            }
        )*
    };
}

/// `[a0, a1, a2, a3]`, each lane right-aligned in 13 columns.
macro_rules! impl_float_display {
    () => {
        impl ::std::fmt::Display for F32x4 {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let [a0, a1, a2, a3] = self.to_array();
                write!(f, "[{a0:>13}, {a1:>13}, {a2:>13}, {a3:>13}]")
            }
        }
    };
}

/// Binds a backend's `F32x4`/`I32x4` and its `lanes::select` to the traits the
/// math engine is written against.
macro_rules! impl_simd_traits {
    () => {
        impl $crate::simd::traits::SimdFloat for F32x4 {
            type Bits = I32x4;

            #[inline(always)]
            fn splat(value: f32) -> Self {
                F32x4::splat(value)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                F32x4::floor(self)
            }

            #[inline(always)]
            fn eq_mask(self, rhs: Self) -> Self {
                self.cmp_eq(rhs).as_f32x4()
            }

            #[inline(always)]
            fn lt_mask(self, rhs: Self) -> Self {
                self.cmp_lt(rhs).as_f32x4()
            }

            #[inline(always)]
            fn gt_mask(self, rhs: Self) -> Self {
                self.cmp_gt(rhs).as_f32x4()
            }

            #[inline(always)]
            fn nan_mask(self) -> Self {
                (!self.cmp_eq(self)).as_f32x4()
            }

            #[inline(always)]
            fn blend(self, other: Self, mask: Self) -> Self {
                lanes::select(self, other, mask)
            }

            #[inline(always)]
            fn to_bits(self) -> I32x4 {
                self.as_i32x4()
            }

            #[inline(always)]
            fn from_bits(bits: I32x4) -> Self {
                bits.as_f32x4()
            }

            #[inline(always)]
            fn to_int(self) -> I32x4 {
                self.to_i32x4()
            }

            #[inline(always)]
            fn from_int(int: I32x4) -> Self {
                int.to_f32x4()
            }
        }

        impl $crate::simd::traits::SimdInt for I32x4 {
            #[inline(always)]
            fn splat(value: i32) -> Self {
                I32x4::splat(value)
            }

            #[inline(always)]
            fn shl<const N: i32>(self) -> Self {
                I32x4::shl::<N>(self)
            }

            #[inline(always)]
            fn shr<const N: i32>(self) -> Self {
                I32x4::shr::<N>(self)
            }
        }
    };
}
