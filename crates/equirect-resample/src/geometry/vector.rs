//! Small fixed-size vectors for texture coordinates and sphere directions.

use std::ops::{Add, Mul, Neg, Sub};

/// A normalized equirectangular texture coordinate.
///
/// `u` is longitude in 0.0..1.0 (wrapping), `v` is colatitude in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub u: f32,
    pub v: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.u + rhs.u, self.v + rhs.v)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.u * rhs, self.v * rhs)
    }
}

/// A 3D vector: a direction on the unit sphere, or a tangent-plane offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector has no direction; it is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        self * (1.0 / len)
    }

    /// A unit vector perpendicular to `self`.
    ///
    /// Picks whichever of `(0, -z, y)`, `(z, 0, -x)`, `(-y, x, 0)` drops the
    /// component of smallest magnitude, so the candidate is never close to
    /// zero length. Ties go to the later candidate.
    pub fn orthogonal(self) -> Self {
        let (ax, ay, az) = (self.x.abs(), self.y.abs(), self.z.abs());
        let candidate = if ax < ay && ax < az {
            Self::new(0.0, -self.z, self.y)
        } else if ay < az {
            Self::new(self.z, 0.0, -self.x)
        } else {
            Self::new(-self.y, self.x, 0.0)
        };
        candidate.normalize()
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn assert_unit(v: Vec3) {
        assert!((v.length() - 1.0).abs() < EPS, "expected unit length, got {v:?}");
    }

    #[test]
    fn test_cross_of_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_unit(v.normalize());
        assert_eq!(Vec3::default().normalize(), Vec3::default());
    }

    #[test]
    fn test_orthogonal_is_perpendicular_unit() {
        let samples = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.3, -0.8, 0.52),
            Vec3::new(-0.577, 0.577, 0.577),
            Vec3::new(1e-7, 1.0, -1e-7),
        ];
        for v in samples {
            let v = v.normalize();
            let o = v.orthogonal();
            assert_unit(o);
            assert!(o.dot(v).abs() < EPS, "{o:?} not perpendicular to {v:?}");
        }
    }

    #[test]
    fn test_orthogonal_drops_smallest_component() {
        // |x| smallest
        assert_eq!(Vec3::new(0.0, 0.5, 1.0).orthogonal().x, 0.0);
        // |y| smallest
        assert_eq!(Vec3::new(1.0, 0.1, 2.0).orthogonal().y, 0.0);
        // |z| smallest
        assert_eq!(Vec3::new(1.0, 2.0, 0.1).orthogonal().z, 0.0);
    }

    #[test]
    fn test_orthogonal_ties_go_to_later_candidate() {
        // |x| == |y| == |z|: the (-y, x, 0) candidate wins
        let o = Vec3::new(1.0, 1.0, 1.0).orthogonal();
        assert_eq!(o.z, 0.0);
        // |x| == |y| < |z|: (z, 0, -x) wins
        let o = Vec3::new(1.0, 1.0, 2.0).orthogonal();
        assert_eq!(o.y, 0.0);
    }

    #[test]
    fn test_tangent_frame_is_orthonormal() {
        let n = Vec3::new(0.2, 0.9, -0.4).normalize();
        let t0 = n.orthogonal();
        let t1 = t0.cross(n);
        assert_unit(t1);
        assert!(t0.dot(t1).abs() < EPS);
        assert!(t1.dot(n).abs() < EPS);
    }

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(0.25, 0.5);
        assert_eq!(a + a, a * 2.0);
    }
}
