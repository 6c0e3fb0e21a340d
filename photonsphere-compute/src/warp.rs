//! Funnel-shaped "warped spacetime" background grid.
//!
//! Purely decorative geometry: a lattice whose height sinks towards the
//! horizon. Nothing here feeds back into the ray integration.

use photonsphere_core::{linspace, GridLine, Point3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Depth assigned to any point at or inside the horizon.
pub const WARP_CLAMP_DEPTH: f64 = -15.0;
/// Overall depth scale k.
pub const WARP_SCALE: f64 = 6.0;
/// Taper exponent p.
pub const WARP_TAPER_EXPONENT: f64 = 0.3;
/// Radius substituted for r = 0.
pub const WARP_MIN_RADIUS: f64 = 0.01;
/// Radial lines start this far out, in horizon radii.
pub const RADIAL_START_FACTOR: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpGeometry {
    /// Schwarzschild radius rs.
    pub horizon_radius: f64,
    /// Radius where the funnel flattens out.
    pub max_radius: f64,
}

impl WarpGeometry {
    pub fn new(horizon_radius: f64, max_radius: f64) -> Self {
        Self {
            horizon_radius,
            max_radius,
        }
    }

    /// Vertical displacement at planar radius `r`.
    ///
    /// −k·√(rs/r)·(1 − r/rMax)^p outside the horizon, the clamp depth inside
    /// it, and zero from `max_radius` outwards.
    pub fn depth(&self, r: f64) -> f64 {
        let r = if r > 0.0 { r } else { WARP_MIN_RADIUS };
        if r <= self.horizon_radius {
            return WARP_CLAMP_DEPTH;
        }
        if r >= self.max_radius {
            return 0.0;
        }
        let taper = (1.0 - r / self.max_radius).powf(WARP_TAPER_EXPONENT);
        -WARP_SCALE * (self.horizon_radius / r).sqrt() * taper
    }

    fn warped(&self, x: f64, y: f64) -> Point3 {
        Point3::new(x, y, self.depth(x.hypot(y)))
    }

    /// Square lattice over [-extent, extent]², one set of lines per axis.
    ///
    /// Returns `2 * line_count` lines: first those at constant x, then those
    /// at constant y, each with `samples` points.
    pub fn cartesian_grid(&self, extent: f64, line_count: usize, samples: usize) -> Vec<GridLine> {
        let offsets = linspace(-extent, extent, line_count);
        let along = linspace(-extent, extent, samples);

        let constant_x = offsets.iter().map(|&x| {
            GridLine::new(along.iter().map(|&y| self.warped(x, y)).collect())
        });
        let constant_y = offsets.iter().map(|&y| {
            GridLine::new(along.iter().map(|&x| self.warped(x, y)).collect())
        });

        constant_x.chain(constant_y).collect()
    }

    /// Spokes from just outside the horizon out to `max_radius`.
    pub fn radial_grid(&self, line_count: usize, samples: usize) -> Vec<GridLine> {
        let radii = linspace(
            RADIAL_START_FACTOR * self.horizon_radius,
            self.max_radius,
            samples,
        );

        (0..line_count)
            .map(|i| {
                let angle = TAU * i as f64 / line_count as f64;
                let (sin, cos) = angle.sin_cos();
                GridLine::new(
                    radii
                        .iter()
                        .map(|&r| Point3::new(r * cos, r * sin, self.depth(r)))
                        .collect(),
                )
            })
            .collect()
    }
}

/// Free-function form of [`WarpGeometry::depth`].
pub fn warp_depth(r: f64, horizon_radius: f64, max_radius: f64) -> f64 {
    WarpGeometry::new(horizon_radius, max_radius).depth(r)
}

/// Radius band of a cartesian grid line, used to pick its style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridBand {
    Near,
    Mid,
    Far,
    Outer,
}

impl GridBand {
    pub fn from_mean_radius(r: f64) -> Self {
        if r < 4.0 {
            GridBand::Near
        } else if r < 7.0 {
            GridBand::Mid
        } else if r < 10.0 {
            GridBand::Far
        } else {
            GridBand::Outer
        }
    }

    pub fn style(self) -> LineStyle {
        match self {
            GridBand::Near => LineStyle::new("#DD0000", 0.8, 1.2),
            GridBand::Mid => LineStyle::new("#FF6633", 0.7, 1.0),
            GridBand::Far => LineStyle::new("#FFAA55", 0.6, 0.9),
            GridBand::Outer => LineStyle::new("#4488FF", 0.5, 0.8),
        }
    }
}

/// Color, opacity and stroke width handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub alpha: f32,
    pub width: f32,
}

impl LineStyle {
    pub fn new(color: &str, alpha: f32, width: f32) -> Self {
        Self {
            color: color.to_string(),
            alpha,
            width,
        }
    }

    /// Style of the radial funnel spokes.
    pub fn radial() -> Self {
        Self::new("#DD3333", 0.6, 0.9)
    }
}
