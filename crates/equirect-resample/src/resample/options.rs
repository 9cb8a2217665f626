//! Resampling options.

/// Default clamp on the latitude stretch factor of the geodesic filter.
pub const DEFAULT_MAX_STRETCH: f32 = 8.0;

/// Tunables for the resampling strategies.
///
/// Only the geodesic strategy reads these; nearest and box have no
/// parameters.
///
/// # Example
///
/// ```
/// use equirect_resample::ResampleOptions;
///
/// let options = ResampleOptions::new().max_stretch(4.0);
/// assert_eq!(options.max_stretch, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleOptions {
    /// Upper bound on `1 / sin(colatitude)` when widening the geodesic
    /// kernel toward the poles. Bounds both cost and footprint there.
    ///
    /// Default: `8.0`
    pub max_stretch: f32,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            max_stretch: DEFAULT_MAX_STRETCH,
        }
    }
}

impl ResampleOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stretch clamp. Values below 1.0 (and NaN) are raised to 1.0,
    /// the stretch at the equator.
    #[inline]
    pub fn max_stretch(mut self, max_stretch: f32) -> Self {
        self.max_stretch = max_stretch.max(1.0);
        self
    }
}
