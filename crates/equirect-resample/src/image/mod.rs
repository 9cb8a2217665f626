//! Images: a named, owned [`PixelBuffer`].

mod buffer;

pub use buffer::PixelBuffer;

use crate::color::LinearRgb;

/// An equirectangular image in linear light.
///
/// `name` identifies where the image came from or will be written to. The
/// pixel buffer is owned exclusively; input and output images never alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    name: String,
    buffer: PixelBuffer,
}

impl Image {
    /// A black image of the given size.
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self::from_buffer(name, PixelBuffer::new(width, height))
    }

    /// A uniform image.
    pub fn filled(name: impl Into<String>, width: usize, height: usize, color: LinearRgb) -> Self {
        Self::from_buffer(name, PixelBuffer::filled(width, height, color))
    }

    pub fn from_buffer(name: impl Into<String>, buffer: PixelBuffer) -> Self {
        Self {
            name: name.into(),
            buffer,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Pixel at column `i`, row `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> LinearRgb {
        self.buffer.get(i, j)
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}
