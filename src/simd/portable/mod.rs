//! Pure-Rust backend.
//!
//! A 128-bit register is a single `u128` and a 64-bit one a `u64`; lanes are
//! packed from the least significant bits up, so views behave exactly like the
//! little-endian hardware registers on every host. The implementation is
//! plain lane-by-lane arithmetic: it is the fallback for targets
//! without a native backend and the reference the native backends are tested
//! against.

mod vectors;

pub mod lanes;

pub use vectors::*;

impl_simd_traits!();
