//! Simulation configuration.
//!
//! Physical constants, grid geometry and animation pacing are read-only for
//! the lifetime of a run. Every struct deserializes with defaults so a
//! renderer can send only the fields it wants to override.

use crate::PhotonError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Upper bound on integration steps per ray.
pub const MAX_STEPS: u32 = 1_000_000;
/// Upper bound on any grid line or sample count.
pub const MAX_GRID_COUNT: usize = 10_000;

/// Physical constants and integration parameters, in geometric units (G = c = 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Black hole mass M.
    pub mass: f64,
    /// Radius at which rays start and beyond which they count as escaped.
    pub integration_radius: f64,
    /// Total azimuthal span covered by the integrator.
    pub angular_span: f64,
    /// Number of fixed RK4 steps across `angular_span`.
    pub steps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            integration_radius: 15.0,
            angular_span: 6.0 * PI,
            steps: 3000,
        }
    }
}

impl PhysicsConfig {
    /// Event horizon radius rs = 2M.
    pub fn schwarzschild_radius(&self) -> f64 {
        2.0 * self.mass
    }

    /// Radius of circular photon orbits, 3M.
    pub fn photon_sphere_radius(&self) -> f64 {
        3.0 * self.mass
    }

    /// Impact parameter separating captured from escaping rays, 3√3·M.
    pub fn critical_impact_parameter(&self) -> f64 {
        3.0 * 3.0_f64.sqrt() * self.mass
    }

    /// Fixed integration step h.
    pub fn step_size(&self) -> f64 {
        self.angular_span / self.steps as f64
    }

    pub fn validate(&self) -> Result<(), PhotonError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhotonError::InvalidConfig(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if !(self.integration_radius.is_finite()
            && self.integration_radius > self.schwarzschild_radius())
        {
            return Err(PhotonError::InvalidConfig(format!(
                "integration radius {} must lie outside the horizon at {}",
                self.integration_radius,
                self.schwarzschild_radius()
            )));
        }
        if !(self.angular_span.is_finite() && self.angular_span > 0.0) {
            return Err(PhotonError::InvalidConfig(format!(
                "angular span must be positive, got {}",
                self.angular_span
            )));
        }
        if self.steps == 0 || self.steps > MAX_STEPS {
            return Err(PhotonError::InvalidConfig(format!(
                "step count must be between 1 and {}, got {}",
                MAX_STEPS, self.steps
            )));
        }
        Ok(())
    }
}

/// Geometry of the warped background lattice and comparison rays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Half-extent of the plotted cube; also the radius where the warp tapers to zero.
    pub plot_limit: f64,
    pub cartesian_lines: usize,
    pub cartesian_samples: usize,
    pub radial_lines: usize,
    pub radial_samples: usize,
    pub straight_ray_samples: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            plot_limit: 15.0,
            cartesian_lines: 28,
            cartesian_samples: 100,
            radial_lines: 20,
            radial_samples: 50,
            straight_ray_samples: 300,
        }
    }
}

impl GridConfig {
    /// Half-length of the straight comparison ray.
    pub fn straight_ray_length(&self) -> f64 {
        2.0 * self.plot_limit
    }

    pub fn validate(&self) -> Result<(), PhotonError> {
        if !(self.plot_limit.is_finite() && self.plot_limit > 0.0) {
            return Err(PhotonError::InvalidConfig(format!(
                "plot limit must be positive, got {}",
                self.plot_limit
            )));
        }
        if self.cartesian_lines < 2 || self.cartesian_samples < 2 {
            return Err(PhotonError::InvalidConfig(
                "cartesian grid needs at least 2 lines and 2 samples per line".to_string(),
            ));
        }
        if self.radial_samples < 2 || self.straight_ray_samples < 2 {
            return Err(PhotonError::InvalidConfig(
                "radial lines and straight rays need at least 2 samples".to_string(),
            ));
        }
        let counts = [
            ("cartesian_lines", self.cartesian_lines),
            ("cartesian_samples", self.cartesian_samples),
            ("radial_lines", self.radial_lines),
            ("radial_samples", self.radial_samples),
            ("straight_ray_samples", self.straight_ray_samples),
        ];
        if let Some((name, count)) = counts.iter().find(|(_, n)| *n > MAX_GRID_COUNT) {
            return Err(PhotonError::InvalidConfig(format!(
                "{} must be at most {}, got {}",
                name, MAX_GRID_COUNT, count
            )));
        }
        Ok(())
    }
}

/// Animation pacing. Does not influence integration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub frames: u32,
    pub interval_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 150,
            interval_ms: 50,
        }
    }
}

impl AnimationConfig {
    /// Playback rate used when exporting frames.
    pub fn fps(&self) -> u32 {
        1000 / self.interval_ms.max(1)
    }
}

/// Complete startup configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub grid: GridConfig,
    pub animation: AnimationConfig,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), PhotonError> {
        self.physics.validate()?;
        self.grid.validate()?;
        if self.animation.frames == 0 {
            return Err(PhotonError::InvalidConfig(
                "animation needs at least one frame".to_string(),
            ));
        }
        Ok(())
    }
}
