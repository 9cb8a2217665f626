//! Vector algebra and the equirectangular spherical projection.

mod sphere;
mod vector;

pub use sphere::{to_sphere, to_uv};
pub use vector::{Vec2, Vec3};
