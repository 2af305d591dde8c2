//! # vec128
//!
//! Portable 128-bit SIMD vectors for numeric inner loops.
//!
//! One register type per lane layout (`F32x4`, `U8x16`, `I16x8`, ...) with
//! zero-cost bit views between them, a handful of branch-free lane
//! primitives, and vectorized `ln`/`exp` accurate to a couple of ULP. The
//! same API is backed by SSE2 on x86, NEON on AArch64, and pure Rust
//! everywhere else; see [`simd`] for how the backend is chosen.
//!
//! ## Quick start
//!
//! ```rust
//! use vec128::{any_gt_float, hsum_float, logf_vec, select, F32x4};
//!
//! let a = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(hsum_float(a), 10.0);
//!
//! // zero out lanes below 2.5 without branching
//! let keep = a.cmp_ge(F32x4::splat(2.5)).as_f32x4();
//! let masked = select(F32x4::splat(0.0), a, keep);
//! assert_eq!(masked.to_array(), [0.0, 0.0, 3.0, 4.0]);
//!
//! assert!(any_gt_float(a, F32x4::splat(3.5)));
//! assert_eq!(logf_vec(F32x4::splat(1.0)), F32x4::splat(0.0));
//! ```
//!
//! ## Modules
//!
//! - [`simd`]: register types, views and [`simd::lanes`] primitives
//! - [`math`]: `logf_vec`, `expf_vec`, `dump_float`
//! - [`slice`]: whole-buffer kernels, optionally parallel via rayon
//! - [`error`]: the error type returned by the slice kernels and `dump_float`

pub mod error;
pub mod math;
pub mod simd;
pub mod slice;

pub use error::{Result, Vec128Error};
pub use math::{dump_float, expf_vec, logf_vec};
pub use simd::lanes::{
    any_gt_float, any_gt_s16, hmax_s16, hmax_u8, hsum_float, leftshift_float, rightshift_float,
    select,
};
pub use simd::{
    Backend, F32x2, F32x4, I16x8, I32x4, I64x1, I64x2, I8x16, I8x8, U16x8, U32x4, U64x1, U64x2,
    U8x16, U8x8, BACKEND,
};
