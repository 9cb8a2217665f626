//! Equirectangular texture coordinates <-> unit sphere directions.
//!
//! The `0.5` phase offset on `u` puts the panorama seam (`u = 0`) at the
//! `-x` axis. Both directions must use the same offset or every resampled
//! image comes out rotated by half a turn.

use std::f32::consts::{PI, TAU};

use super::vector::{Vec2, Vec3};

/// Map a texture coordinate onto the unit sphere.
///
/// `v = 0` is the `+y` pole, `v = 1` the `-y` pole.
#[inline]
pub fn to_sphere(uv: Vec2) -> Vec3 {
    let theta = uv.v * PI;
    let phi = (uv.u - 0.5) * TAU;
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_theta * phi.cos(), cos_theta, sin_theta * phi.sin())
}

/// Map a unit direction back to a texture coordinate.
///
/// `u` comes back in 0.0..=1.0; callers wrap it. `y` is clamped to
/// [-1, 1] first so a renormalized direction never produces NaN.
#[inline]
pub fn to_uv(dir: Vec3) -> Vec2 {
    let u = 0.5 + dir.z.atan2(dir.x) / TAU;
    let v = dir.y.clamp(-1.0, 1.0).acos() / PI;
    Vec2::new(u, v)
}
