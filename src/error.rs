use std::io;

use equirect_resample::DownsampleError;
use thiserror::Error;

/// Failure reading or writing a P6 pixel container.
///
/// Every variant names the file involved.
#[derive(Debug, Error)]
pub enum PpmError {
    #[error("could not open \"{name}\" file to read: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("file \"{name}\" not P6 image")]
    NotP6 { name: String },

    #[error("could not read image file \"{name}\": {reason}")]
    Malformed { name: String, reason: String },

    #[error("cant read \"{name}\", only 8 bit per channel sRGB supported (maxval {maxval})")]
    UnsupportedDepth { name: String, maxval: u32 },

    #[error("EOF while reading from \"{name}\"")]
    Truncated { name: String },

    #[error("could not read from \"{name}\": {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("could not open \"{name}\" file to write: {source}")]
    Create {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("could not write to file \"{name}\": {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// A `WIDTHxHEIGHT` argument that does not parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionSpecError {
    #[error("missing 'x' separator in \"{0}\" (expected WIDTHxHEIGHT)")]
    MissingSeparator(String),

    #[error("invalid {axis} \"{value}\" (expected a decimal integer)")]
    InvalidNumber { axis: &'static str, value: String },

    #[error("\"{0}\" has a zero width or height")]
    Zero(String),
}

/// Anything that stops a downsampling run.
#[derive(Debug, Error)]
pub enum PanoramaError {
    #[error(transparent)]
    Ppm(#[from] PpmError),

    #[error("cannot downsample \"{name}\": {source}")]
    Geometry {
        name: String,
        #[source]
        source: DownsampleError,
    },
}
