//! Pixel container codecs

mod ppm;

pub use ppm::{encode_ppm, load_ppm, read_ppm, save_ppm, write_ppm, MAXVAL};
