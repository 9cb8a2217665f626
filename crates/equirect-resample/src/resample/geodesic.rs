//! Geodesic Gaussian strategy.
//!
//! For each output pixel the kernel walks a square grid of offsets in the
//! plane tangent to the sphere at the output direction, pushes every offset
//! back onto the sphere, and looks up the source pixel there. The footprint
//! is a disc on the sphere rather than a rectangle in texture space, so it
//! does not smear sideways near the poles.
//!
//! Near the poles one output pixel spans far more longitude than at the
//! equator, so the grid is widened by `1 / sin(colatitude)`, clamped to
//! [`ResampleOptions::max_stretch`].

use std::f32::consts::PI;

use super::options::ResampleOptions;
use crate::color::LinearRgb;
use crate::geometry::{to_sphere, to_uv, Vec2, Vec3};
use crate::image::PixelBuffer;

/// Isotropic 2D Gaussian with `sigma = r / 3`, evaluated at offset `(x, y)`.
///
/// A zero radius degenerates to a single tap of weight 1.
///
/// # Example
/// ```
/// use equirect_resample::gauss;
/// assert_eq!(gauss(3.0, -2.0, 0.0), 1.0);
/// assert!(gauss(0.0, 0.0, 3.0) > gauss(1.0, 0.0, 3.0));
/// ```
#[inline]
pub fn gauss(x: f32, y: f32, r: f32) -> f32 {
    if r == 0.0 {
        return 1.0;
    }
    let sigma = r / 3.0;
    let two_sigma_sq = 2.0 * sigma * sigma;
    (-(x * x + y * y) / two_sigma_sq).exp() / (PI * two_sigma_sq)
}

/// Per-image parameters of the geodesic filter.
///
/// Everything here depends only on the input and output dimensions; the
/// per-pixel work happens in [`GeodesicKernel::samples`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeodesicKernel {
    input_width: usize,
    input_height: usize,
    output_width: usize,
    output_height: usize,
    radius: usize,
    delta: f32,
    max_stretch: f32,
}

impl GeodesicKernel {
    /// # Panics
    /// Panics if either output dimension is zero.
    pub fn new(input: (usize, usize), output: (usize, usize), options: &ResampleOptions) -> Self {
        let (iw, ih) = input;
        let (ow, oh) = output;
        assert!(ow > 0 && oh > 0, "output dimensions must be non-zero");

        // Half the larger downscale ratio, ratios taken in floating point
        let ratio = (iw as f32 / ow as f32).max(ih as f32 / oh as f32);
        let radius = (ratio / 2.0).floor() as usize;

        // One tangent-plane step is roughly one source pixel of arc
        let delta = 1.0 / (iw as f32 / 2.0).max(ih as f32);

        Self {
            input_width: iw,
            input_height: ih,
            output_width: ow,
            output_height: oh,
            radius,
            delta,
            max_stretch: options.max_stretch.max(1.0),
        }
    }

    /// Base kernel radius in offset steps, shared by every output pixel.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Tangent-plane distance covered by one offset step.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Latitude stretch at colatitude `v`: `min(max_stretch, 1 / sin(v * pi))`.
    #[inline]
    pub fn stretch(&self, v: f32) -> f32 {
        let s = (v * PI).sin();
        if s <= 0.0 {
            return self.max_stretch;
        }
        (1.0 / s).min(self.max_stretch)
    }

    /// Half-width of the offset grid for output row `oj`.
    #[inline]
    pub fn extent(&self, oj: usize) -> i32 {
        let v = oj as f32 / self.output_height as f32;
        (self.radius as f32 * self.stretch(v)).round() as i32
    }

    /// Orthonormal tangent frame `(orth0, orth1)` at `center`.
    #[inline]
    pub fn tangent_frame(center: Vec3) -> (Vec3, Vec3) {
        let orth0 = center.orthogonal();
        let orth1 = orth0.cross(center);
        (orth0, orth1)
    }

    /// Source pixel under texture coordinate `uv`.
    ///
    /// Longitude wraps around the seam; colatitude clamps at the poles.
    #[inline]
    pub fn source_index(&self, uv: Vec2) -> (usize, usize) {
        let (iw, ih) = (self.input_width as i64, self.input_height as i64);
        let ii = ((iw as f32 * uv.u).floor() as i64).rem_euclid(iw);
        let ij = ((ih as f32 * uv.v).floor() as i64).clamp(0, ih - 1);
        (ii as usize, ij as usize)
    }

    /// Every tap of the kernel for output pixel `(oi, oj)` as
    /// `(source column, source row, weight)`.
    pub fn samples(&self, oi: usize, oj: usize) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let uv = Vec2::new(
            oi as f32 / self.output_width as f32,
            oj as f32 / self.output_height as f32,
        );
        let center = to_sphere(uv);
        let (orth0, orth1) = Self::tangent_frame(center);
        let extent = self.extent(oj);
        let delta = self.delta;

        (-extent..=extent).flat_map(move |aj| {
            (-extent..=extent).map(move |ai| {
                let offset = (delta * ai as f32) * orth0 + (delta * aj as f32) * orth1;
                let dir = (center + offset).normalize();
                let (ii, ij) = self.source_index(to_uv(dir));
                let weight = gauss(ai as f32, aj as f32, extent as f32);
                (ii, ij, weight)
            })
        })
    }

    /// Normalized weighted sum of the kernel taps for output pixel `(oi, oj)`.
    pub fn filter(&self, input: &PixelBuffer, oi: usize, oj: usize) -> LinearRgb {
        let mut sum = LinearRgb::ZERO;
        let mut weight_sum = 0.0f32;
        for (ii, ij, weight) in self.samples(oi, oj) {
            sum = sum.mul_add(weight, input.get(ii, ij));
            weight_sum += weight;
        }
        sum / weight_sum
    }
}

pub(crate) fn resample(input: &PixelBuffer, output: &mut PixelBuffer, options: &ResampleOptions) {
    if output.width() == 0 || output.height() == 0 {
        return;
    }
    let kernel = GeodesicKernel::new(
        (input.width(), input.height()),
        (output.width(), output.height()),
        options,
    );

    for (oj, row) in output.rows_mut().enumerate() {
        for (oi, pixel) in row.iter_mut().enumerate() {
            *pixel = kernel.filter(input, oi, oj);
        }
    }
}
