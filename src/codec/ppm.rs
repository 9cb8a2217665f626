//! Binary PPM (P6) reader and writer.
//!
//! Only 8-bit containers are accepted. Pixels are decoded to linear light on
//! load and encoded back to sRGB on save; nothing between those two points
//! ever sees gamma-encoded values.
//!
//! Header grammar, as accepted here:
//!
//! ```text
//! "P6" (ws | comment)+ width (ws | comment)+ height (ws | comment)+ maxval ws <raster>
//! comment := '#' <anything up to and including '\n'>
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use std::path::Path;

use equirect_resample::{Image, LinearRgb, PixelBuffer, Srgb};

use crate::error::PpmError;

/// The only maxval this codec reads or writes.
pub const MAXVAL: u32 = 255;

/// Load a P6 file from disk. The image is named after `path`.
pub fn load_ppm(path: impl AsRef<Path>) -> Result<Image, PpmError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|source| PpmError::Open {
        name: name.clone(),
        source,
    })?;
    read_ppm(BufReader::new(file), &name)
}

/// Decode a P6 stream.
///
/// `name` only labels errors and the returned image.
pub fn read_ppm<R: BufRead>(mut reader: R, name: &str) -> Result<Image, PpmError> {
    let mut header = HeaderReader {
        reader: &mut reader,
        name,
    };
    header.magic()?;
    let width = header.field("width")?;
    let height = header.field("height")?;
    let maxval = header.field("maxval")?;
    header.raster_separator()?;

    if maxval != MAXVAL {
        return Err(PpmError::UnsupportedDepth {
            name: name.to_string(),
            maxval,
        });
    }
    if width == 0 || height == 0 {
        return Err(malformed(name, format!("zero-sized image {width}x{height}")));
    }

    let (width, height) = (width as usize, height as usize);
    let row_len = width
        .checked_mul(3)
        .ok_or_else(|| malformed(name, format!("width {width} too large")))?;
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| malformed(name, format!("image {width}x{height} too large")))?;

    // Grown row by row so a lying header cannot force a huge allocation
    let mut pixels = Vec::new();
    let mut row = vec![0u8; row_len];
    for _ in 0..height {
        reader.read_exact(&mut row).map_err(|e| read_error(name, e))?;
        pixels.extend(
            row.chunks_exact(3)
                .map(|c| LinearRgb::from_srgb_bytes([c[0], c[1], c[2]])),
        );
    }

    let buffer = PixelBuffer::from_pixels(width, height, pixels)
        .ok_or_else(|| malformed(name, "pixel count mismatch".to_string()))?;
    Ok(Image::from_buffer(name, buffer))
}

/// Encode `image` as P6 into `writer`.
///
/// Each channel is written as `255 * srgb(c)` truncated, with no clamping
/// beyond the saturating float-to-byte cast.
pub fn write_ppm<W: Write>(mut writer: W, image: &Image) -> io::Result<()> {
    writeln!(writer, "P6 {} {} {}", image.width(), image.height(), MAXVAL)?;
    let mut row = Vec::with_capacity(image.width() * 3);
    for pixels in image.buffer().pixels().chunks(image.width().max(1)) {
        row.clear();
        for &p in pixels {
            row.extend_from_slice(&Srgb::from(p).to_bytes_truncated());
        }
        writer.write_all(&row)?;
    }
    writer.flush()
}

/// Encode `image` to an in-memory P6 container.
pub fn encode_ppm(image: &Image) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(32 + image.width() * image.height() * 3);
    // Writing to a Vec cannot fail
    let _ = write_ppm(&mut bytes, image);
    bytes
}

/// Write `image` to `path`.
///
/// The container is fully encoded before the file is created, and a failed
/// write removes the partial file, so `path` either holds a complete image
/// or nothing new.
pub fn save_ppm(image: &Image, path: impl AsRef<Path>) -> Result<(), PpmError> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let bytes = encode_ppm(image);

    let mut file = File::create(path).map_err(|source| PpmError::Create {
        name: name.clone(),
        source,
    })?;
    if let Err(source) = file.write_all(&bytes).and_then(|()| file.flush()) {
        drop(file);
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(file = %name, %e, "Failed to remove partial output");
        }
        return Err(PpmError::Write { name, source });
    }
    Ok(())
}

fn malformed(name: &str, reason: String) -> PpmError {
    PpmError::Malformed {
        name: name.to_string(),
        reason,
    }
}

fn read_error(name: &str, e: io::Error) -> PpmError {
    if e.kind() == ErrorKind::UnexpectedEof {
        PpmError::Truncated {
            name: name.to_string(),
        }
    } else {
        PpmError::Read {
            name: name.to_string(),
            source: e,
        }
    }
}

/// Byte-level cursor over the ASCII header.
struct HeaderReader<'a, R> {
    reader: &'a mut R,
    name: &'a str,
}

impl<R: BufRead> HeaderReader<'_, R> {
    fn peek(&mut self) -> Result<Option<u8>, PpmError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(read_error(self.name, e)),
            }
        }
    }

    /// Next byte; end of stream is a truncation.
    fn next(&mut self) -> Result<u8, PpmError> {
        let byte = self.peek()?.ok_or_else(|| PpmError::Truncated {
            name: self.name.to_string(),
        })?;
        self.reader.consume(1);
        Ok(byte)
    }

    fn magic(&mut self) -> Result<(), PpmError> {
        if self.next()? != b'P' || self.next()? != b'6' {
            return Err(PpmError::NotP6 {
                name: self.name.to_string(),
            });
        }
        Ok(())
    }

    /// Skip at least one whitespace byte or comment.
    fn separator(&mut self, field: &str) -> Result<(), PpmError> {
        let mut skipped = false;
        loop {
            match self.peek()? {
                Some(b'#') => {
                    while self.next()? != b'\n' {}
                }
                Some(b) if b.is_ascii_whitespace() => self.reader.consume(1),
                Some(_) if skipped => return Ok(()),
                Some(b) => {
                    return Err(malformed(
                        self.name,
                        format!("unexpected {:?} before {field}", b as char),
                    ))
                }
                None => {
                    return Err(PpmError::Truncated {
                        name: self.name.to_string(),
                    })
                }
            }
            skipped = true;
        }
    }

    /// A separator followed by an unsigned decimal field.
    fn field(&mut self, field: &str) -> Result<u32, PpmError> {
        self.separator(field)?;
        let mut value: u32 = 0;
        let mut digits = 0;
        while let Some(b @ b'0'..=b'9') = self.peek()? {
            self.reader.consume(1);
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u32))
                .ok_or_else(|| malformed(self.name, format!("{field} out of range")))?;
            digits += 1;
        }
        if digits == 0 {
            let found = self.peek()?.map(|b| b as char);
            return Err(malformed(
                self.name,
                format!("non-numeric {field} (found {found:?})"),
            ));
        }
        Ok(value)
    }

    /// Exactly one whitespace byte between maxval and the raster.
    fn raster_separator(&mut self) -> Result<(), PpmError> {
        let b = self.next()?;
        if !b.is_ascii_whitespace() {
            return Err(malformed(
                self.name,
                format!("unexpected {:?} after maxval", b as char),
            ));
        }
        Ok(())
    }
}
