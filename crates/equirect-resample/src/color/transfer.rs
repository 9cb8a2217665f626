//! sRGB transfer functions
//!
//! The curve uses the classic breakpoint constant (`K0 = 0.03928`) rather than
//! the IEC 61966-2-1 breakpoint of 0.04045. The two differ only in the
//! fourth decimal of the toe and both round-trip every 8-bit code value.

// Include the generated byte decode table from build.rs
include!(concat!(env!("OUT_DIR"), "/decode_lut.rs"));

const K0: f32 = 0.03928;
const A: f32 = 0.055;
const PHI: f32 = 12.92;
const GAMMA: f32 = 2.4;

/// Gamma-encoded sRGB value to linear light.
///
/// Not clamped: inputs outside 0.0..=1.0 follow the curve's formula.
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= K0 {
        v / PHI
    } else {
        ((v + A) / (1.0 + A)).powf(GAMMA)
    }
}

/// Linear light to gamma-encoded sRGB.
///
/// Not clamped, so out-of-range intermediate values pass through to the
/// caller unchanged in sign and magnitude order.
#[inline]
pub fn linear_to_srgb(v: f32) -> f32 {
    if v <= K0 / PHI {
        v * PHI
    } else {
        (1.0 + A) * v.powf(1.0 / GAMMA) - A
    }
}

/// Decode an 8-bit sRGB code value to linear light via the build-time table.
#[inline]
pub fn decode_u8(c: u8) -> f32 {
    DECODE_U8[c as usize]
}
