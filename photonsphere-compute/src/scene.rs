//! Everything the renderer needs for one run, computed up front.

use crate::catalog::{RayClass, RayConfig, TrajectoryCatalog};
use crate::integrator::GeodesicIntegrator;
use crate::projector::straight_ray_3d;
use crate::warp::{GridBand, LineStyle, WarpGeometry};
use photonsphere_core::{
    AnimationConfig, GridConfig, GridLine, PhotonError, Point3, RayOutcome, RayPath,
    SimulationConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledGridLine {
    pub line: GridLine,
    pub style: LineStyle,
}

/// Curved and straight paths for one catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedRay {
    /// Legend text, e.g. "escape b=10.0".
    pub label: String,
    pub class: RayClass,
    pub color: String,
    pub outcome: RayOutcome,
    pub curved: RayPath,
    pub straight: Vec<Point3>,
}

impl RenderedRay {
    /// Whether the integrator agreed with the catalog's classification.
    pub fn matches_class(&self) -> bool {
        matches!(
            (self.class, self.outcome),
            (RayClass::Escape, RayOutcome::Escaped) | (RayClass::Capture, RayOutcome::Captured)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub horizon_radius: f64,
    pub plot_limit: f64,
    pub grid_lines: Vec<StyledGridLine>,
    pub radial_lines: Vec<StyledGridLine>,
    pub rays: Vec<RenderedRay>,
    pub animation: AnimationConfig,
}

/// Warped background lattice, styled by mean radius band.
pub fn build_grid(horizon_radius: f64, grid: &GridConfig) -> Vec<StyledGridLine> {
    WarpGeometry::new(horizon_radius, grid.plot_limit)
        .cartesian_grid(grid.plot_limit, grid.cartesian_lines, grid.cartesian_samples)
        .into_iter()
        .map(|line| {
            let style = GridBand::from_mean_radius(line.mean_planar_radius()).style();
            StyledGridLine { line, style }
        })
        .collect()
}

pub fn build_radial_lines(horizon_radius: f64, grid: &GridConfig) -> Vec<StyledGridLine> {
    WarpGeometry::new(horizon_radius, grid.plot_limit)
        .radial_grid(grid.radial_lines, grid.radial_samples)
        .into_iter()
        .map(|line| StyledGridLine {
            line,
            style: LineStyle::radial(),
        })
        .collect()
}

pub fn ray_label(ray: &RayConfig) -> String {
    format!("{} b={:.1}", ray.class, ray.impact_parameter.get())
}

/// Integrate one ray and build its flat-space companion.
pub fn render_ray(
    integrator: &GeodesicIntegrator,
    ray: &RayConfig,
    straight_length: f64,
    straight_samples: usize,
) -> RenderedRay {
    let curved = integrator.integrate(ray.impact_parameter, ray.orientation);
    let straight = straight_ray_3d(
        ray.impact_parameter,
        ray.orientation,
        integrator.start_radius(),
        straight_length,
        straight_samples,
    );

    let rendered = RenderedRay {
        label: ray_label(ray),
        class: ray.class,
        color: ray.color.clone(),
        outcome: curved.outcome,
        curved,
        straight,
    };

    if rendered.outcome == RayOutcome::Indeterminate {
        log::warn!(
            "Ray b={} did not resolve within the angular span; consider more steps or a wider span",
            ray.impact_parameter.get()
        );
    } else if !rendered.matches_class() {
        log::warn!(
            "Ray b={} labelled {} but {}",
            ray.impact_parameter.get(),
            ray.class,
            rendered.outcome
        );
    }

    rendered
}

/// Validate the configuration and compute the grid plus every catalog ray.
pub fn build_scene(
    config: &SimulationConfig,
    catalog: &TrajectoryCatalog,
) -> Result<Scene, PhotonError> {
    config.validate()?;

    let horizon_radius = config.physics.schwarzschild_radius();
    let integrator = GeodesicIntegrator::new(&config.physics);

    let rays: Vec<RenderedRay> = catalog
        .iter()
        .map(|ray| {
            render_ray(
                &integrator,
                ray,
                config.grid.straight_ray_length(),
                config.grid.straight_ray_samples,
            )
        })
        .collect();

    let scene = Scene {
        horizon_radius,
        plot_limit: config.grid.plot_limit,
        grid_lines: build_grid(horizon_radius, &config.grid),
        radial_lines: build_radial_lines(horizon_radius, &config.grid),
        rays,
        animation: config.animation,
    };

    log::info!(
        "Scene ready: {} rays, {} grid lines, {} radial lines",
        scene.rays.len(),
        scene.grid_lines.len(),
        scene.radial_lines.len()
    );

    Ok(scene)
}

/// Scene for the built-in catalog.
pub fn build_standard_scene(config: &SimulationConfig) -> Result<Scene, PhotonError> {
    config.validate()?;
    let catalog = TrajectoryCatalog::standard(&config.physics)?;
    build_scene(config, &catalog)
}
