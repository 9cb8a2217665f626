//! Errors raised before any resampling starts.

use std::fmt;

/// The requested output geometry cannot be produced from the input.
///
/// Resampling itself has no failure modes; these are the only errors the
/// [`Downsampler`](crate::Downsampler) reports, and it reports them before
/// touching any pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownsampleError {
    /// Output larger than input in at least one axis.
    Upsampling {
        /// Requested output (width, height)
        output: (usize, usize),
        /// Input (width, height)
        input: (usize, usize),
    },
    /// Output has a zero dimension.
    EmptyTarget {
        /// Requested output (width, height)
        output: (usize, usize),
    },
}

impl fmt::Display for DownsampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownsampleError::Upsampling { output, input } => write!(
                f,
                "output {}x{} must be smaller or equal to input {}x{}",
                output.0, output.1, input.0, input.1
            ),
            DownsampleError::EmptyTarget { output } => write!(
                f,
                "output {}x{} must have a non-zero width and height",
                output.0, output.1
            ),
        }
    }
}

impl std::error::Error for DownsampleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DownsampleError::Upsampling {
            output: (8, 4),
            input: (4, 2),
        };
        assert_eq!(err.to_string(), "output 8x4 must be smaller or equal to input 4x2");

        let err = DownsampleError::EmptyTarget { output: (0, 4) };
        assert_eq!(
            err.to_string(),
            "output 0x4 must have a non-zero width and height"
        );
    }
}
