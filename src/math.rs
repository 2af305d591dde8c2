//! Vectorized natural logarithm and exponential for four packed `f32` lanes.
//!
//! Both functions follow the single-precision Cephes reductions and are
//! written once against [`SimdFloat`], so every backend runs the same sequence
//! of IEEE operations and produces the same bits. Multiplies and adds are kept
//! separate (no fused multiply-add) for that reason.
//!
//! # Accuracy
//!
//! For normal positive finite inputs `logf_vec` stays within about two ULP of
//! `f32::ln`. Subnormal inputs are scaled into the normal range first, so they
//! are handled with the same accuracy. `expf_vec` stays within about two ULP of
//! `f32::exp` over `[-87.3, 88.7]`.
//!
//! # Special values
//!
//! | input      | `logf_vec` | `expf_vec` |
//! |------------|------------|------------|
//! | `+0`, `-0` | `-inf`     | `1`        |
//! | `< 0`      | NaN        | finite     |
//! | `+inf`     | `+inf`     | `+inf`     |
//! | `-inf`     | NaN        | `+0`       |
//! | NaN        | NaN        | NaN        |
//!
//! `expf_vec` returns `+inf` above `88.722_84` and `+0` below `-87.336_55`,
//! instead of chasing subnormal results.
//!
//! # Examples
//!
//! ```rust
//! use vec128::{expf_vec, logf_vec, F32x4};
//!
//! let x = F32x4::from_array([1.0, 0.0, -1.0, f32::INFINITY]);
//! let y = logf_vec(x).to_array();
//! assert_eq!(y[0], 0.0);
//! assert_eq!(y[1], f32::NEG_INFINITY);
//! assert!(y[2].is_nan());
//! assert_eq!(y[3], f32::INFINITY);
//!
//! assert_eq!(expf_vec(F32x4::splat(0.0)), F32x4::splat(1.0));
//! ```

use std::io;

use crate::error::Result;
use crate::simd::traits::{SimdFloat, SimdInt};
use crate::simd::F32x4;

const SQRT_HALF: f32 = 0.707_106_77;

/// ln(2) split so that `e * LN2_HI` is exact for any float exponent.
const LN2_HI: f32 = 0.693_359_375;
const LN2_LO: f32 = -2.121_944_4e-4;

/// 2^23, brings subnormals into the normal range.
const SUBNORMAL_SCALE: f32 = 8_388_608.0;

#[allow(clippy::excessive_precision)]
const LOG_POLY: [f32; 9] = [
    7.037_683_629_2e-2,
    -1.151_461_031_0e-1,
    1.167_699_874_0e-1,
    -1.242_014_084_6e-1,
    1.424_932_278_7e-1,
    -1.666_805_766_5e-1,
    2.000_071_476_5e-1,
    -2.499_999_399_3e-1,
    3.333_333_117_4e-1,
];

/// Largest input whose exponential is finite.
const EXP_HI: f32 = 88.722_84;

/// ln of the smallest normal `f32`.
const EXP_LO: f32 = -87.336_55;

#[allow(clippy::excessive_precision)]
const EXP_POLY: [f32; 6] = [
    1.987_569_150_0e-4,
    1.398_199_950_7e-3,
    8.333_451_907_3e-3,
    4.166_579_589_4e-2,
    1.666_666_545_9e-1,
    5.000_000_120_1e-1,
];

/// Horner evaluation, highest degree first.
#[inline(always)]
fn horner<V: SimdFloat>(x: V, coefficients: &[f32]) -> V {
    coefficients
        .iter()
        .skip(1)
        .fold(V::splat(coefficients[0]), |acc, &c| acc * x + V::splat(c))
}

/// Bits of `2^k` for `k` in the normal exponent range.
#[inline(always)]
fn pow2<I: SimdInt>(k: I) -> I {
    (k + I::splat(127)).shl::<23>()
}

/// Natural logarithm of every lane, for any backend.
#[inline(always)]
pub fn logf<V: SimdFloat>(x: V) -> V {
    let zero = V::splat(0.0);
    let one = V::splat(1.0);

    let nan = x.nan_mask();
    let is_zero = x.eq_mask(zero);
    let negative = x.lt_mask(zero);
    let is_inf = x.eq_mask(V::splat(f32::INFINITY));

    // subnormals (and the lanes overwritten below) get 23 extra exponent bits
    let tiny = x.lt_mask(V::splat(f32::MIN_POSITIVE));
    let x_scaled = x.blend(x * V::splat(SUBNORMAL_SCALE), tiny);
    let e_bias = zero.blend(V::splat(23.0), tiny);

    // x = m * 2^e with m in [0.5, 1)
    let bits = x_scaled.to_bits();
    let exponent = (bits.shr::<23>() & V::Bits::splat(0xff)) - V::Bits::splat(126);
    let mantissa = (bits & V::Bits::splat(0x007f_ffff)) | V::Bits::splat(0x3f00_0000);
    let m = V::from_bits(mantissa);
    let mut e = V::from_int(exponent) - e_bias;

    // move m into [sqrt(1/2), sqrt(2)) and take r = m - 1
    let below = m.lt_mask(V::splat(SQRT_HALF));
    e = e - (one & below);
    let r = (m - one).blend((m + m) - one, below);

    let z = r * r;
    let mut y = horner(r, &LOG_POLY) * r * z;
    y = y + e * V::splat(LN2_LO);
    y = y - z * V::splat(0.5);
    let mut out = r + y;
    out = out + e * V::splat(LN2_HI);

    out.blend(V::splat(f32::NAN), negative)
        .blend(V::splat(f32::NEG_INFINITY), is_zero)
        .blend(V::splat(f32::INFINITY), is_inf)
        .blend(x, nan)
}

/// Exponential of every lane, for any backend.
#[inline(always)]
pub fn expf<V: SimdFloat>(x: V) -> V {
    let zero = V::splat(0.0);
    let one = V::splat(1.0);

    let overflow = x.gt_mask(V::splat(EXP_HI));
    let underflow = x.lt_mask(V::splat(EXP_LO));
    let nan = x.nan_mask();

    // keep the reduction in range so the integer conversion below is exact
    let x_safe = x.blend(zero, overflow | underflow | nan);

    // n = round(x / ln2), r = x - n ln2
    let n = (x_safe * V::splat(std::f32::consts::LOG2_E) + V::splat(0.5)).floor();
    let r = x_safe - n * V::splat(LN2_HI) - n * V::splat(LN2_LO);

    let z = r * r;
    let y = horner(r, &EXP_POLY) * z + r + one;

    // 2^n in two steps so n = 128 and n = -126 stay representable
    let k = n.to_int();
    let half = k.shr::<1>();
    let rest = k - half;
    let scale_lo = V::from_bits(pow2(half));
    let scale_hi = V::from_bits(pow2(rest));
    let out = y * scale_lo * scale_hi;

    out.blend(V::splat(f32::INFINITY), overflow)
        .blend(zero, underflow)
        .blend(x, nan)
}

/// Natural logarithm of four packed lanes.
///
/// `ln(±0) = -inf`, `ln(x < 0) = NaN`, `ln(+inf) = +inf`, NaN is passed
/// through. Lanes never influence each other.
#[inline(always)]
pub fn logf_vec(x: F32x4) -> F32x4 {
    logf(x)
}

/// Exponential of four packed lanes.
///
/// Saturates to `+inf` for large inputs and to `+0` for very negative ones,
/// NaN is passed through. Lanes never influence each other.
#[inline(always)]
pub fn expf_vec(x: F32x4) -> F32x4 {
    expf(x)
}

/// Writes the four lanes of `v`, in order, to `sink`.
///
/// The text is the vector's `Display` form, `[a0, a1, a2, a3]` with each lane
/// right-aligned in 13 columns and no trailing newline. The vector itself is
/// not modified; a failing sink is reported as [`Vec128Error::Io`].
///
/// [`Vec128Error::Io`]: crate::error::Vec128Error::Io
///
/// ```rust
/// use vec128::{dump_float, F32x4};
///
/// let mut out = Vec::new();
/// dump_float(&mut out, F32x4::from_array([1.0, -2.5, 0.0, 8.0])).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "[            1,          -2.5,             0,             8]"
/// );
/// ```
pub fn dump_float<W: io::Write + ?Sized>(sink: &mut W, v: F32x4) -> Result<()> {
    write!(sink, "{v}")?;
    Ok(())
}
