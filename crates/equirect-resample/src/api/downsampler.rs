//! Downsampler builder -- the primary entry point for the crate.
//!
//! [`Downsampler`] validates the requested geometry, picks the strategy and
//! drives it over the whole output image.

use super::error::DownsampleError;
use crate::image::{Image, PixelBuffer};
use crate::resample::{ResampleOptions, ResampleStrategy};

/// High-level downsampler for equirectangular images.
///
/// # Design
///
/// - The strategy is fixed at construction; it never depends on pixel data
/// - Configuration methods consume and return `self`
/// - [`downsample()`](Self::downsample) takes `&self`, so one downsampler
///   can process many images
///
/// # Example
///
/// ```
/// use equirect_resample::{Downsampler, Image, LinearRgb, ResampleStrategy};
///
/// let grey = LinearRgb::new(0.2, 0.2, 0.2);
/// let input = Image::filled("in.ppm", 16, 8, grey);
///
/// let downsampler = Downsampler::new(ResampleStrategy::Geodesic);
/// let output = downsampler.downsample(&input, "output.ppm", 4, 2).unwrap();
///
/// assert_eq!(output.width(), 4);
/// assert_eq!(output.height(), 2);
/// assert!((output.get(0, 0).r - 0.2).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Downsampler {
    strategy: ResampleStrategy,
    options: ResampleOptions,
}

impl Downsampler {
    pub fn new(strategy: ResampleStrategy) -> Self {
        Self {
            strategy,
            options: ResampleOptions::default(),
        }
    }

    /// Set the latitude stretch clamp of the geodesic strategy.
    #[inline]
    pub fn max_stretch(mut self, max_stretch: f32) -> Self {
        self.options = self.options.max_stretch(max_stretch);
        self
    }

    /// Replace all resampling options at once.
    #[inline]
    pub fn options(mut self, options: ResampleOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn strategy(&self) -> ResampleStrategy {
        self.strategy
    }

    #[inline]
    pub fn resample_options(&self) -> &ResampleOptions {
        &self.options
    }

    /// Check that an `input` sized image can be reduced to `output`.
    pub fn check_dimensions(
        input: (usize, usize),
        output: (usize, usize),
    ) -> Result<(), DownsampleError> {
        if output.0 > input.0 || output.1 > input.1 {
            return Err(DownsampleError::Upsampling { output, input });
        }
        if output.0 == 0 || output.1 == 0 {
            return Err(DownsampleError::EmptyTarget { output });
        }
        Ok(())
    }

    /// Produce a new `width` x `height` image named `name` from `input`.
    ///
    /// The input is only read. On error nothing is allocated or computed.
    pub fn downsample(
        &self,
        input: &Image,
        name: impl Into<String>,
        width: usize,
        height: usize,
    ) -> Result<Image, DownsampleError> {
        Self::check_dimensions((input.width(), input.height()), (width, height))?;

        let mut buffer = PixelBuffer::new(width, height);
        self.strategy
            .resample(input.buffer(), &mut buffer, &self.options);
        Ok(Image::from_buffer(name, buffer))
    }
}
