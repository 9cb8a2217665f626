//! sRGB color type
//!
//! sRGB is the encoding pixel containers store. It is never averaged
//! directly; convert to [`LinearRgb`] first.

use super::linear_rgb::LinearRgb;
use super::transfer::{decode_u8, linear_to_srgb, srgb_to_linear};

/// A color in gamma-encoded sRGB.
///
/// Values are nominally in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f32,
    /// Green channel (gamma-encoded)
    pub g: f32,
    /// Blue channel (gamma-encoded)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use equirect_resample::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B] by truncating `255 * channel`.
    ///
    /// No clamping is applied beyond the saturating float-to-integer cast,
    /// so a channel above 1.0 lands on 255 and a negative one on 0.
    ///
    /// # Example
    /// ```
    /// use equirect_resample::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// assert_eq!(color.to_bytes_truncated(), [255, 127, 0]);
    /// ```
    #[inline]
    pub fn to_bytes_truncated(self) -> [u8; 3] {
        [
            (255.0 * self.r) as u8,
            (255.0 * self.g) as u8,
            (255.0 * self.b) as u8,
        ]
    }
}

impl From<LinearRgb> for Srgb {
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        LinearRgb::new(
            srgb_to_linear(srgb.r),
            srgb_to_linear(srgb.g),
            srgb_to_linear(srgb.b),
        )
    }
}

impl LinearRgb {
    /// Decode an 8-bit sRGB triple straight to linear light.
    ///
    /// Equivalent to `LinearRgb::from(Srgb::from_bytes(bytes))` but reads the
    /// build-time table instead of evaluating `powf` per channel.
    #[inline]
    pub fn from_srgb_bytes(bytes: [u8; 3]) -> Self {
        LinearRgb::new(decode_u8(bytes[0]), decode_u8(bytes[1]), decode_u8(bytes[2]))
    }
}
