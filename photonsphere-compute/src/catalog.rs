use photonsphere_core::{ImpactParameter, Orientation, PhotonError, PhysicsConfig};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Expected fate of a catalog ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RayClass {
    Escape,
    Capture,
}

impl RayClass {
    pub fn as_str(self) -> &'static str {
        match self {
            RayClass::Escape => "escape",
            RayClass::Capture => "capture",
        }
    }

    /// Class implied by the photon sphere: captured strictly below b_crit,
    /// escaping strictly above. A ray exactly at b_crit has no class.
    pub fn for_impact_parameter(b: ImpactParameter, physics: &PhysicsConfig) -> Option<Self> {
        let critical = physics.critical_impact_parameter();
        if b.get() < critical {
            Some(RayClass::Capture)
        } else if b.get() > critical {
            Some(RayClass::Escape)
        } else {
            None
        }
    }
}

impl fmt::Display for RayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ray to compute and display. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayConfig {
    pub impact_parameter: ImpactParameter,
    pub orientation: Orientation,
    pub class: RayClass,
    pub color: String,
}

impl RayConfig {
    pub fn new(
        impact_parameter: f64,
        theta: f64,
        phi: f64,
        class: RayClass,
        color: impl Into<String>,
    ) -> Result<Self, PhotonError> {
        Ok(Self {
            impact_parameter: ImpactParameter::new(impact_parameter)?,
            orientation: Orientation::new(theta, phi),
            class,
            color: color.into(),
        })
    }
}

/// Entry of the built-in catalog, with b expressed in units of M.
struct StandardRay {
    b_over_mass: f64,
    theta: f64,
    phi: f64,
    class: RayClass,
    color: &'static str,
}

static STANDARD_RAYS: &[StandardRay] = &[
    StandardRay {
        b_over_mass: 10.0,
        theta: 0.0,
        phi: 0.0,
        class: RayClass::Escape,
        color: "#FFD700",
    },
    StandardRay {
        b_over_mass: 9.0,
        theta: PI / 6.0,
        phi: PI / 4.0,
        class: RayClass::Escape,
        color: "#FFA500",
    },
    StandardRay {
        b_over_mass: 8.5,
        theta: -PI / 6.0,
        phi: PI / 2.0,
        class: RayClass::Escape,
        color: "#FFDB58",
    },
    StandardRay {
        b_over_mass: 5.0,
        theta: PI / 8.0,
        phi: -PI / 6.0,
        class: RayClass::Capture,
        color: "#FF1493",
    },
    StandardRay {
        b_over_mass: 4.5,
        theta: -PI / 8.0,
        phi: 3.0 * PI / 4.0,
        class: RayClass::Capture,
        color: "#FF69B4",
    },
    StandardRay {
        b_over_mass: 4.0,
        theta: PI / 12.0,
        phi: PI,
        class: RayClass::Capture,
        color: "#FF6B9D",
    },
];

/// Validated, read-only list of rays.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryCatalog {
    rays: Vec<RayConfig>,
}

impl TrajectoryCatalog {
    /// Build a catalog, rejecting rays whose class contradicts the photon sphere.
    pub fn new(rays: Vec<RayConfig>, physics: &PhysicsConfig) -> Result<Self, PhotonError> {
        let critical = physics.critical_impact_parameter();
        for ray in &rays {
            if RayClass::for_impact_parameter(ray.impact_parameter, physics) != Some(ray.class) {
                return Err(PhotonError::ClassificationMismatch {
                    impact_parameter: ray.impact_parameter.get(),
                    critical,
                    class: ray.class.as_str(),
                });
            }
        }
        Ok(Self { rays })
    }

    /// Three escaping and three captured rays, scaled to the configured mass.
    pub fn standard(physics: &PhysicsConfig) -> Result<Self, PhotonError> {
        let rays = STANDARD_RAYS
            .iter()
            .map(|r| {
                RayConfig::new(
                    r.b_over_mass * physics.mass,
                    r.theta,
                    r.phi,
                    r.class,
                    r.color,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rays, physics)
    }

    pub fn rays(&self) -> &[RayConfig] {
        &self.rays
    }

    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RayConfig> {
        self.rays.iter()
    }

    pub fn of_class(&self, class: RayClass) -> impl Iterator<Item = &RayConfig> {
        self.rays.iter().filter(move |r| r.class == class)
    }
}
