//! Public API for the equirect-resample crate.
//!
//! This module provides the high-level API: the [`Downsampler`] builder and
//! its [`DownsampleError`] type.

mod downsampler;
mod error;

pub use downsampler::Downsampler;
pub use error::DownsampleError;
