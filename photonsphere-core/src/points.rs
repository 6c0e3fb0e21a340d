use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in the 3D scene (x, y horizontal, z vertical).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point in the z = 0 plane.
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance from the vertical axis, ignoring z.
    pub fn planar_radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    pub fn into_parts(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// Evenly spaced values over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_construction() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.into_parts(), (1.0, 2.0, 3.0));
        assert_eq!(Point3::planar(4.0, 5.0).z, 0.0);
    }

    #[test]
    fn test_norm_and_planar_radius() {
        let p = Point3::new(3.0, 4.0, 12.0);
        assert_eq!(p.planar_radius(), 5.0);
        assert_eq!(p.norm(), 13.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Point3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Point3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(-15.0, 15.0, 28);
        assert_eq!(values.len(), 28);
        assert_eq!(values[0], -15.0);
        assert_eq!(values[27], 15.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_point_serialization_roundtrip() {
        let original = Point3::new(1.25, -2.5, 0.0);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
