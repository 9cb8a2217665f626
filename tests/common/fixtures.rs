//! Test fixtures and constants.

use std::path::{Path, PathBuf};

/// 8-bit sRGB colors used across tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const TEAL: [u8; 3] = [40, 160, 150];
}

/// Build a P6 container from row-major pixels
pub fn ppm_bytes(width: usize, height: usize, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), width * height, "fixture pixel count");
    let mut bytes = format!("P6 {width} {height} 255\n").into_bytes();
    for p in pixels {
        bytes.extend_from_slice(p);
    }
    bytes
}

/// A single color everywhere
pub fn uniform_ppm(width: usize, height: usize, color: [u8; 3]) -> Vec<u8> {
    ppm_bytes(width, height, &vec![color; width * height])
}

/// Columns alternate red, blue, red, blue
pub fn stripes_ppm(width: usize, height: usize) -> Vec<u8> {
    let pixels: Vec<[u8; 3]> = (0..height)
        .flat_map(|_| {
            (0..width).map(|i| {
                if i % 2 == 0 {
                    colors::RED
                } else {
                    colors::BLUE
                }
            })
        })
        .collect();
    ppm_bytes(width, height, &pixels)
}

/// The 4x2 red/blue stripe image
pub fn stripes_4x2() -> Vec<u8> {
    stripes_ppm(4, 2)
}

/// Write `bytes` to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
