use std::fmt;
use std::str::FromStr;

use crate::error::DimensionSpecError;

/// Target size given on the command line as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSpec {
    pub width: usize,
    pub height: usize,
}

impl DimensionSpec {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl FromStr for DimensionSpec {
    type Err = DimensionSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| DimensionSpecError::MissingSeparator(s.to_string()))?;

        let parse = |axis: &'static str, value: &str| {
            // usize::from_str accepts a leading '+', which is not a dimension
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DimensionSpecError::InvalidNumber {
                    axis,
                    value: value.to_string(),
                });
            }
            value
                .parse::<usize>()
                .map_err(|_| DimensionSpecError::InvalidNumber {
                    axis,
                    value: value.to_string(),
                })
        };

        let spec = Self::new(parse("width", width)?, parse("height", height)?);
        if spec.width == 0 || spec.height == 0 {
            return Err(DimensionSpecError::Zero(s.to_string()));
        }
        Ok(spec)
    }
}

impl fmt::Display for DimensionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
