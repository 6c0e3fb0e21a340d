//! Rotations that place a 2D orbital-plane solution into the 3D scene.
//!
//! A photon orbit in Schwarzschild spacetime stays in one plane, so a single
//! planar solution can be reused for any ray direction: tilt the plane about
//! the Y axis by the polar angle θ, then spin it about the Z axis by the
//! azimuth φ. Both steps are rotations, so distances from the origin are
//! preserved.

use crate::Point3;
use serde::{Deserialize, Serialize};

/// Orientation of an orbital plane in the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Tilt about the Y axis.
    pub theta: f64,
    /// Rotation about the Z axis.
    pub phi: f64,
}

impl Orientation {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Apply the tilt then the azimuthal rotation.
    pub fn apply(&self, point: Point3) -> Point3 {
        rotate_about_z(rotate_about_y(point, self.theta), self.phi)
    }
}

/// Polar (r, φ) in the orbital plane to planar Cartesian.
#[inline]
pub fn polar_to_planar(r: f64, phi: f64) -> Point3 {
    let (sin, cos) = phi.sin_cos();
    Point3::planar(r * cos, r * sin)
}

/// Tilt about the Y axis. A point on the +X axis rises towards +Z for positive θ.
#[inline]
pub fn rotate_about_y(p: Point3, theta: f64) -> Point3 {
    let (sin, cos) = theta.sin_cos();
    Point3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Counter-clockwise rotation about the Z axis.
#[inline]
pub fn rotate_about_z(p: Point3, phi: f64) -> Point3 {
    let (sin, cos) = phi.sin_cos();
    Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}
