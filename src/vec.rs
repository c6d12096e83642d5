//! 3D vector type for the cloth engine.

use crate::float::Float;
use core::ops::{Add, Sub, Neg, Mul, Div};

/// 3D vector. A plain `Copy` value: every operation returns a new vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length.
    ///
    /// Unguarded: a zero-length vector yields NaN components. Cloth geometry
    /// never produces one unless the mesh has collapsed.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// True if any component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { self.scale(s) }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;
    fn div(self, s: F) -> Self {
        Vec3 { x: self.x / s, y: self.y / s, z: self.z / s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_length() {
        let v = Vec3::new(2.0f32, 3.0, 6.0);
        assert!((v.length() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_cross() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        let k = i.cross(j);
        assert!((k.x - 0.0).abs() < 1e-6);
        assert!((k.y - 0.0).abs() < 1e-6);
        assert!((k.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cross_is_anticommutative() {
        let a = Vec3::new(1.0f32, 2.0, 3.0);
        let b = Vec3::new(-4.0f32, 0.5, 2.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert!(a.cross(b).dot(a).abs() < 1e-5);
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec3::new(0.0f32, -3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.y + 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector_is_not_finite() {
        let n = Vec3::<f32>::zero().normalize();
        assert!(!n.is_finite());
    }

    #[test]
    fn scalar_operators() {
        let v = Vec3::new(1.0f32, -2.0, 4.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 8.0));
        assert_eq!(v / 2.0, Vec3::new(0.5, -1.0, 2.0));
    }

    #[test]
    fn distance_calculation() {
        let a = Vec3::new(0.0f32, 0.0, 0.0);
        let b = Vec3::new(3.0f32, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
