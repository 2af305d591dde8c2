//! ARM NEON backend for AArch64.
//!
//! NEON keeps a distinct register type per lane layout (`float32x4_t`,
//! `int16x8_t`, `uint8x8_t`, ...), so every wrapper holds its natural type
//! and views go through `vreinterpret`. The raw storage word shared by all
//! views is `uint8x16_t` for full registers and `uint8x8_t` for halves.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any AArch64 processor (Apple Silicon, AWS Graviton, Cortex-A)
//! - **Compilation**: selected by the build script when the target has `neon`
//!
//! Horizontal maximums use the across-vector `vmaxv` instructions, which only
//! exist on AArch64. 32-bit ARM targets use the portable backend.

mod vectors;

pub mod lanes;

pub use vectors::*;

impl_simd_traits!();
