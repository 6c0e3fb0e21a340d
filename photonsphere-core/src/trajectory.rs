// photonsphere-core/src/trajectory.rs

use crate::{PhotonError, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest inverse radius used when converting u back to r = 1/u.
pub const MIN_INVERSE_RADIUS: f64 = 1e-9;

/// Distance of closest approach of an incoming ray in flat space.
///
/// Always positive and finite; construct with [`ImpactParameter::new`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ImpactParameter(f64);

impl ImpactParameter {
    pub fn new(value: f64) -> Result<Self, PhotonError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(PhotonError::InvalidImpactParameter(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ImpactParameter {
    type Error = PhotonError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImpactParameter> for f64 {
    fn from(b: ImpactParameter) -> f64 {
        b.0
    }
}

/// Position on the photon orbit in the inverse-radius formulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    /// Inverse radial distance u = 1/r.
    pub u: f64,
    /// Slope du/dφ. Positive while the photon falls inwards.
    pub du_dphi: f64,
}

impl OrbitState {
    pub fn new(u: f64, du_dphi: f64) -> Self {
        Self { u, du_dphi }
    }

    /// Radius r = 1/u, with u clamped away from zero.
    #[inline]
    pub fn radius(&self) -> f64 {
        1.0 / self.u.max(MIN_INVERSE_RADIUS)
    }
}

/// One integrator output: azimuth plus the state reached there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSample {
    pub phi: f64,
    pub state: OrbitState,
}

impl OrbitSample {
    pub fn radius(&self) -> f64 {
        self.state.radius()
    }
}

/// How an integration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RayOutcome {
    /// Crossed the event horizon.
    Captured,
    /// Turned around and receded past the starting radius.
    Escaped,
    /// Ran out of angular span before either happened.
    Indeterminate,
}

impl RayOutcome {
    pub fn is_resolved(self) -> bool {
        !matches!(self, RayOutcome::Indeterminate)
    }
}

impl fmt::Display for RayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RayOutcome::Captured => "captured",
            RayOutcome::Escaped => "escaped",
            RayOutcome::Indeterminate => "indeterminate",
        };
        f.write_str(label)
    }
}

/// A planar orbit solution: samples up to and including the stopping step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<OrbitSample>,
    pub outcome: RayOutcome,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn radii(&self) -> Vec<f64> {
        self.samples.iter().map(OrbitSample::radius).collect()
    }

    pub fn last(&self) -> Option<&OrbitSample> {
        self.samples.last()
    }

    /// Azimuth swept from the first to the last sample.
    pub fn swept_angle(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.phi - first.phi,
            _ => 0.0,
        }
    }

    /// Smallest radius reached along the path.
    pub fn periapsis(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(OrbitSample::radius)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// A ray placed in the scene: 3D points with the orbital radius at each point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayPath {
    pub points: Vec<Point3>,
    pub radii: Vec<f64>,
    pub outcome: RayOutcome,
}

impl RayPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One polyline of the warped background lattice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub points: Vec<Point3>,
}

impl GridLine {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Mean distance of the line's samples from the vertical axis.
    pub fn mean_planar_radius(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let total: f64 = self.points.iter().map(Point3::planar_radius).sum();
        total / self.points.len() as f64
    }
}
