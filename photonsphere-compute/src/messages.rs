use crate::catalog::{RayClass, RayConfig};
use crate::scene::{RenderedRay, Scene};
use photonsphere_core::{PhotonError, PhysicsConfig, SimulationConfig};
use serde::{Deserialize, Serialize};

/// Wire form of a [`RayConfig`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RaySpec {
    pub impact_parameter: f64,
    #[serde(default)]
    pub theta: f64,
    #[serde(default)]
    pub phi: f64,
    pub class: RayClass,
    pub color: String,
}

impl TryFrom<RaySpec> for RayConfig {
    type Error = PhotonError;

    fn try_from(spec: RaySpec) -> Result<Self, Self::Error> {
        RayConfig::new(
            spec.impact_parameter,
            spec.theta,
            spec.phi,
            spec.class,
            spec.color,
        )
    }
}

/// Messages sent from the renderer to the compute layer
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum RendererRequest {
    /// Compute the grid and all rays. `rays: None` uses the built-in catalog.
    BuildScene {
        #[serde(default)]
        config: SimulationConfig,
        #[serde(default)]
        rays: Option<Vec<RaySpec>>,
    },

    /// Compute a single ray on demand
    IntegrateRay {
        #[serde(default)]
        physics: PhysicsConfig,
        ray: RaySpec,
        /// Half-length of the straight comparison ray; defaults to twice the plot limit
        #[serde(default)]
        straight_length: Option<f64>,
    },
}

/// Messages sent from the compute layer back to the renderer
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum ComputeResponse {
    Scene { scene: Scene },

    Ray { ray: RenderedRay },

    /// Request could not be served
    Error { error: String },
}

impl From<PhotonError> for ComputeResponse {
    fn from(err: PhotonError) -> Self {
        ComputeResponse::Error {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_scene_defaults() {
        let json = r#"{"type":"BuildScene"}"#;
        let msg: RendererRequest = serde_json::from_str(json).unwrap();
        match msg {
            RendererRequest::BuildScene { config, rays } => {
                assert_eq!(config, SimulationConfig::default());
                assert!(rays.is_none());
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_integrate_ray_deserialization() {
        let json = r##"{"type":"IntegrateRay","ray":{"impact_parameter":7.0,"class":"escape","color":"#FFD700"}}"##;
        let msg: RendererRequest = serde_json::from_str(json).unwrap();
        match msg {
            RendererRequest::IntegrateRay {
                physics,
                ray,
                straight_length,
            } => {
                assert_eq!(physics.mass, 1.0);
                assert_eq!(ray.impact_parameter, 7.0);
                assert_eq!(ray.theta, 0.0);
                assert!(straight_length.is_none());
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_error_response_serialization() {
        let msg: ComputeResponse = PhotonError::InvalidImpactParameter(-1.0).into();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"Error\""));
        assert!(json.contains("-1"));
    }

    #[test]
    fn test_responses_use_struct_variants() {
        let scene = crate::scene::build_standard_scene(&SimulationConfig::default()).unwrap();
        let json = serde_json::to_value(ComputeResponse::Scene { scene }).unwrap();
        assert_eq!(json["type"], "Scene");
        assert!(json["scene"]["rays"].is_array());

        let error = serde_json::to_value(ComputeResponse::Error {
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(error, serde_json::json!({"type": "Error", "error": "boom"}));
    }

    #[test]
    fn test_ray_spec_conversion_validates() {
        let spec = RaySpec {
            impact_parameter: -2.0,
            theta: 0.0,
            phi: 0.0,
            class: RayClass::Capture,
            color: "#FF1493".to_string(),
        };
        assert!(RayConfig::try_from(spec).is_err());
    }
}
