//! Resampling strategies.
//!
//! Every strategy answers the same question: which weighted combination of
//! input pixels becomes this output pixel. They differ in how the footprint
//! of an output pixel is chosen:
//!
//! - **Nearest**: a single source pixel, no filtering.
//! - **Box**: the axis-aligned source rectangle the output pixel covers, with
//!   rows weighted by `sin(colatitude)` so polar rows, which cover less of
//!   the sphere, contribute less.
//! - **Geodesic**: a Gaussian over a disc on the sphere, sampled in the
//!   tangent plane of the output direction and re-projected per sample. The
//!   footprint stays isotropic near the poles where the box rectangle
//!   degenerates into a thin sliver of the sphere.
//!
//! All strategies work in linear light and write the output row by row
//! through disjoint mutable row slices; the input is only ever borrowed
//! immutably.

mod box_filter;
mod geodesic;
mod nearest;
mod options;
mod strategy;

pub use box_filter::box_row_weight;
pub use geodesic::{gauss, GeodesicKernel};
pub use options::{ResampleOptions, DEFAULT_MAX_STRETCH};
pub use strategy::{ParseStrategyError, ResampleStrategy};

use std::ops::Range;

/// Source pixels covered by output index `o` along one axis.
///
/// `[floor(input * o / output), floor(input * (o + 1) / output))`, never
/// empty while `output <= input`.
#[inline]
pub(crate) fn source_span(o: usize, output: usize, input: usize) -> Range<usize> {
    (input * o / output)..(input * (o + 1) / output)
}
