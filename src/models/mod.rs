mod config;
mod dimension_spec;

pub use config::{PanoramaConfig, CONFIG_ENV};
pub use dimension_spec::DimensionSpec;
