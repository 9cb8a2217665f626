//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert `bytes` is a P6 container of the given size and return its raster.
pub fn assert_ppm(bytes: &[u8], width: usize, height: usize) -> &[u8] {
    let header = format!("P6 {width} {height} 255\n");
    assert_eq!(
        String::from_utf8_lossy(&bytes[..header.len().min(bytes.len())]),
        header,
        "unexpected header"
    );
    let raster = &bytes[header.len()..];
    assert_eq!(raster.len(), width * height * 3, "raster length");
    raster
}

/// Assert every pixel of `raster` is within `tolerance` of `color`
pub fn assert_uniform(raster: &[u8], color: [u8; 3], tolerance: u8) {
    for (idx, pixel) in raster.chunks_exact(3).enumerate() {
        for c in 0..3 {
            assert!(
                pixel[c].abs_diff(color[c]) <= tolerance,
                "pixel {idx} is {pixel:?}, expected {color:?} ± {tolerance}"
            );
        }
    }
}

/// Pure red or pure blue, allowing the one-step truncation loss at 255
pub fn is_pure_red_or_blue(pixel: &[u8]) -> bool {
    matches!(pixel, [r, 0, 0] if *r >= 254) || matches!(pixel, [0, 0, b] if *b >= 254)
}
