//! 128-bit vector registers and the lane primitives built on them.
//!
//! One register can be viewed as `f32x4`, `i8x16`/`u8x16`, `i16x8`/`u16x8`,
//! `i32x4`/`u32x4` or `i64x2`/`u64x2`; a 64-bit half as `f32x2`,
//! `i8x8`/`u8x8` or `i64x1`/`u64x1`. Switching views with an `as_*` method is
//! a pure bit reinterpretation: it never converts a value and round-trips
//! exactly. Lane 0 is always the least significant lane.
//!
//! # Backends
//!
//! The build script picks exactly one backend for the target and this module
//! re-exports its types and [`lanes`] primitives:
//!
//! - `sse`: x86/x86_64 with SSE2
//! - `neon`: aarch64 with NEON
//! - [`portable`]: pure Rust, used everywhere else
//!
//! The portable backend is always compiled and serves as the bit-exact
//! reference for the native ones. Enable the `portable` cargo feature, or set
//! `VEC128_BACKEND=portable`, to build against it on any target.
//!
//! ```rust
//! use vec128::simd::{F32x4, U32x4};
//!
//! let v = F32x4::from_array([1.0, -2.0, 0.5, 8.0]);
//! let bits: U32x4 = v.as_u32x4();
//! assert_eq!(bits.to_array()[0], 1.0f32.to_bits());
//! assert_eq!(bits.as_f32x4(), v);
//! ```

use std::fmt;

#[macro_use]
mod macros;

pub mod traits;

pub mod portable;

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

#[cfg(sse)]
pub use sse::*;

#[cfg(neon)]
pub use neon::*;

#[cfg(fallback)]
pub use portable::*;

/// Instruction set family the re-exported types are compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Sse,
    Neon,
    Portable,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Sse => "sse",
            Backend::Neon => "neon",
            Backend::Portable => "portable",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The backend selected at build time.
#[cfg(sse)]
pub const BACKEND: Backend = Backend::Sse;

/// The backend selected at build time.
#[cfg(neon)]
pub const BACKEND: Backend = Backend::Neon;

/// The backend selected at build time.
#[cfg(fallback)]
pub const BACKEND: Backend = Backend::Portable;
