//! SSE2 backend for x86 and x86_64.
//!
//! SSE2 has one float register type (`__m128`) and one integer register type
//! (`__m128i`) regardless of lane width, so integer views are free and the
//! float/integer switch is a single cast. The 64-bit types live in the low half
//! of an `__m128i` with the upper half kept at zero.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any x86_64 CPU, or x86 with SSE2
//! - **Compilation**: selected by the build script when the target has `sse2`
//!
//! Only SSE2 instructions are used. In particular `floor` is emulated with a
//! truncating conversion, since `roundps` needs SSE4.1.

mod vectors;

pub mod lanes;

pub use vectors::*;

impl_simd_traits!();
