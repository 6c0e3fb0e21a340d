//! Placement of planar orbit solutions and flat-space comparison rays in 3D.

use photonsphere_core::{linspace, polar_to_planar, ImpactParameter, OrbitSample, Orientation, Point3};

/// Convert orbital-plane samples to scene coordinates.
///
/// Each (r, φ) sample becomes (r cos φ, r sin φ, 0), is tilted about Y by
/// `orientation.theta` and then rotated about Z by `orientation.phi`.
pub fn to_cartesian_3d(samples: &[OrbitSample], orientation: Orientation) -> Vec<Point3> {
    samples
        .iter()
        .map(|s| orientation.apply(polar_to_planar(s.radius(), s.phi)))
        .collect()
}

/// Straight line a ray with impact parameter `b` would follow without gravity.
///
/// The line is tangent to the curved ray where it enters at (`entry_radius`, 0):
/// it heads inward at angle α to the radial direction with sin α = b / r₀, so
/// its closest approach to the origin is b. Points span [-length, length]
/// either side of the closest approach and share the curved ray's orientation.
/// When b exceeds the entry radius the line only grazes the entry circle.
pub fn straight_ray_3d(
    b: ImpactParameter,
    orientation: Orientation,
    entry_radius: f64,
    length: f64,
    samples: usize,
) -> Vec<Point3> {
    let b = b.get();
    let sin_alpha = (b / entry_radius).min(1.0);
    let cos_alpha = (1.0 - sin_alpha * sin_alpha).sqrt();
    let closest = Point3::planar(b * sin_alpha, b * cos_alpha);
    let direction = Point3::planar(-cos_alpha, sin_alpha);

    linspace(-length, length, samples)
        .into_iter()
        .map(|t| orientation.apply(closest + direction * t))
        .collect()
}
