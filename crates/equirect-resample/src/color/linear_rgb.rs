//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Every resampling strategy averages in this space.

use std::ops::{Add, AddAssign, Div, Mul};

/// A color in linear RGB color space.
///
/// Values are in the range 0.0..=1.0 for decoded input, but weighted sums
/// exceed that range until they are normalized by the total weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Black, and the starting value of every accumulator.
    pub const ZERO: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// `self + weight * sample`, the accumulation step of every filter.
    #[inline]
    pub fn mul_add(self, weight: f32, sample: LinearRgb) -> Self {
        Self {
            r: weight * sample.r + self.r,
            g: weight * sample.g + self.g,
            b: weight * sample.b + self.b,
        }
    }

    /// Channels as an array, in R, G, B order.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Add for LinearRgb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for LinearRgb {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for LinearRgb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Div<f32> for LinearRgb {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}
