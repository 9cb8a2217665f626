// Generated decode table carries more digits than f32 holds
#![allow(clippy::excessive_precision)]

//! equirect-resample: area-correct downsampling of equirectangular panoramas
//!
//! An equirectangular image stores longitude along x and colatitude along y.
//! Near the poles a pixel covers a vanishing patch of the sphere, so plain
//! box filtering weights polar content far too heavily and smears it
//! sideways. This crate provides three strategies that map each output pixel
//! to a weighted combination of input pixels while accounting for that
//! distortion.
//!
//! # Quick Start
//!
//! ```
//! use equirect_resample::{Downsampler, Image, LinearRgb, ResampleStrategy};
//!
//! let input = Image::filled("in.ppm", 32, 16, LinearRgb::new(0.5, 0.25, 0.125));
//! let output = Downsampler::new(ResampleStrategy::Box)
//!     .downsample(&input, "output.ppm", 8, 4)
//!     .unwrap();
//!
//! assert_eq!((output.width(), output.height()), (8, 4));
//! ```
//!
//! # Strategies
//!
//! Selected via [`ResampleStrategy`]:
//!
//! - **Nearest**: picks one source pixel. A baseline, no filtering.
//! - **Box**: averages the covered source rectangle, rows weighted by
//!   `sin(colatitude)`, the relative solid angle of a row.
//! - **Geodesic** (default): Gaussian over a disc on the sphere, sampled in
//!   the tangent plane at each output direction. See [`GeodesicKernel`].
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded, as stored in pixel containers
//! - [`LinearRgb`]: linear light, the only space the resampler averages in
//!
//! Averaging sRGB values darkens every edge between light and dark regions;
//! decode to linear on load and encode back on save.
//!
//! # Coordinates
//!
//! ```text
//!   u: 0 ------------- 0.5 ------------- 1   (longitude, wraps)
//! v 0  +y pole
//!   |
//! 0.5  -x (seam)       +x               -x
//!   |
//!   1  -y pole                               (colatitude, clamps)
//! ```
//!
//! [`to_sphere`] and [`to_uv`] convert between the two.

pub mod api;
pub mod color;
pub mod geometry;
pub mod image;
pub mod resample;


pub use api::{DownsampleError, Downsampler};
pub use color::{LinearRgb, Srgb};
pub use geometry::{to_sphere, to_uv, Vec2, Vec3};
pub use image::{Image, PixelBuffer};
pub use resample::{
    box_row_weight, gauss, GeodesicKernel, ParseStrategyError, ResampleOptions, ResampleStrategy,
    DEFAULT_MAX_STRETCH,
};
