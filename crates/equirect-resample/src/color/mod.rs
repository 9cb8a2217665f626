//! Color types and conversion utilities
//!
//! Type-safe color handling with a compile-time distinction between the
//! sRGB encoding stored in pixel containers and the linear light the
//! resampler averages in.
//!
//! # Example
//!
//! ```
//! use equirect_resample::{LinearRgb, Srgb};
//!
//! // Decode a stored pixel
//! let linear = LinearRgb::from_srgb_bytes([128, 64, 32]);
//!
//! // After filtering, encode for storage
//! let bytes = Srgb::from(linear).to_bytes_truncated();
//! assert!((bytes[0] as i32 - 128).abs() <= 1);
//! ```

mod linear_rgb;
mod srgb;
pub mod transfer;

pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
