//! Flat row-major storage of linear-light pixels.

use crate::color::LinearRgb;

/// A fixed-size, row-major grid of [`LinearRgb`] pixels.
///
/// The pixel count is always exactly `width * height`; there is no resizing.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<LinearRgb>,
}

impl PixelBuffer {
    /// Create a buffer filled with `color`.
    pub fn filled(width: usize, height: usize, color: LinearRgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Create a black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, LinearRgb::ZERO)
    }

    /// Wrap existing row-major pixels.
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<LinearRgb>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `i`, row `j`.
    ///
    /// # Panics
    /// Panics if `i >= width` or `j >= height`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> LinearRgb {
        assert!(i < self.width && j < self.height, "pixel ({i}, {j}) out of bounds");
        self.pixels[self.width * j + i]
    }

    /// Overwrite the pixel at column `i`, row `j`.
    ///
    /// # Panics
    /// Panics if `i >= width` or `j >= height`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, color: LinearRgb) {
        assert!(i < self.width && j < self.height, "pixel ({i}, {j}) out of bounds");
        self.pixels[self.width * j + i] = color;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[LinearRgb] {
        &self.pixels
    }

    /// Disjoint mutable rows, top to bottom.
    ///
    /// Each row is a separate `&mut` slice, so per-row work can be handed to
    /// independent workers without any locking.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [LinearRgb]> {
        // chunks_mut panics on a zero chunk size
        let width = self.width.max(1);
        self.pixels.chunks_mut(width)
    }
}
