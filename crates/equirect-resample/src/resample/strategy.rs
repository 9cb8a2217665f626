//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use super::options::ResampleOptions;
use super::{box_filter, geodesic, nearest};
use crate::image::PixelBuffer;

/// Resampling strategy, chosen once per run.
///
/// All strategies read the input buffer only and write every output pixel
/// exactly once.
///
/// # Example
///
/// ```
/// use equirect_resample::ResampleStrategy;
///
/// let strategy: ResampleStrategy = "box".parse().unwrap();
/// assert_eq!(strategy, ResampleStrategy::Box);
/// assert_eq!(ResampleStrategy::default(), ResampleStrategy::Geodesic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleStrategy {
    /// Copy the source pixel at the scaled position. No filtering.
    Nearest,

    /// Average the covered source rectangle, weighting each row by the
    /// solid angle it subtends.
    Box,

    /// Gaussian filter over a geodesic disc, sampled in the tangent plane
    /// of each output direction.
    #[default]
    Geodesic,
}

impl ResampleStrategy {
    /// Every strategy, cheapest first.
    pub const ALL: [ResampleStrategy; 3] = [Self::Nearest, Self::Box, Self::Geodesic];

    /// Fill `output` from `input`.
    ///
    /// `output` must be no larger than `input` in either axis; the
    /// [`Downsampler`](crate::Downsampler) enforces this before calling.
    pub fn resample(self, input: &PixelBuffer, output: &mut PixelBuffer, options: &ResampleOptions) {
        match self {
            Self::Nearest => nearest::resample(input, output),
            Self::Box => box_filter::resample(input, output),
            Self::Geodesic => geodesic::resample(input, output, options),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Box => "box",
            Self::Geodesic => "geodesic",
        }
    }
}

impl fmt::Display for ResampleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResampleStrategy {
    type Err = ParseStrategyError;

    /// Case-insensitive; `gauss` and `gaussian` select [`Self::Geodesic`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "box" => Ok(Self::Box),
            "geodesic" | "gauss" | "gaussian" => Ok(Self::Geodesic),
            _ => Err(ParseStrategyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    input: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \"{}\" (expected nearest, box or geodesic)",
            self.input
        )
    }
}

impl std::error::Error for ParseStrategyError {}
