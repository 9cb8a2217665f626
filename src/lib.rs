//! panorama: downsample equirectangular panoramas stored as binary PPM.
//!
//! Resampling itself lives in the `equirect-resample` crate; this crate adds
//! the P6 codec, configuration and the load → downsample → save pipeline
//! behind the `panorama` binary.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
