//! Request dispatch, independent of the JavaScript bridge.

use crate::catalog::{RayConfig, TrajectoryCatalog};
use crate::integrator::GeodesicIntegrator;
use crate::messages::{ComputeResponse, RaySpec, RendererRequest};
use crate::scene::{build_scene, render_ray};
use photonsphere_core::{GridConfig, PhotonError, PhysicsConfig, SimulationConfig};

/// Serve a request. Failures become [`ComputeResponse::Error`].
pub fn handle(request: RendererRequest) -> ComputeResponse {
    let result = match request {
        RendererRequest::BuildScene { config, rays } => scene_response(&config, rays),
        RendererRequest::IntegrateRay {
            physics,
            ray,
            straight_length,
        } => ray_response(&physics, ray, straight_length),
    };

    result.unwrap_or_else(|err| {
        log::error!("Request failed: {}", err);
        err.into()
    })
}

/// Parse, serve and serialize a JSON request.
pub fn handle_request(message_json: &str) -> String {
    let response = match serde_json::from_str::<RendererRequest>(message_json) {
        Ok(request) => handle(request),
        Err(err) => PhotonError::from(err).into(),
    };
    serde_json::to_string(&response).unwrap_or_else(|err| {
        format!(r#"{{"type":"Error","error":"Failed to serialize response: {}"}}"#, err)
    })
}

fn scene_response(
    config: &SimulationConfig,
    rays: Option<Vec<RaySpec>>,
) -> Result<ComputeResponse, PhotonError> {
    config.validate()?;
    let catalog = match rays {
        Some(specs) => {
            let rays = specs
                .into_iter()
                .map(RayConfig::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            TrajectoryCatalog::new(rays, &config.physics)?
        }
        None => TrajectoryCatalog::standard(&config.physics)?,
    };
    let scene = build_scene(config, &catalog)?;
    Ok(ComputeResponse::Scene { scene })
}

fn ray_response(
    physics: &PhysicsConfig,
    spec: RaySpec,
    straight_length: Option<f64>,
) -> Result<ComputeResponse, PhotonError> {
    physics.validate()?;
    let grid = GridConfig::default();
    let ray = RayConfig::try_from(spec)?;
    let catalog = TrajectoryCatalog::new(vec![ray], physics)?;
    let integrator = GeodesicIntegrator::new(physics);
    let rendered = render_ray(
        &integrator,
        &catalog.rays()[0],
        straight_length.unwrap_or_else(|| grid.straight_ray_length()),
        grid.straight_ray_samples,
    );
    Ok(ComputeResponse::Ray { ray: rendered })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RayClass;
    use photonsphere_core::RayOutcome;

    #[test]
    fn malformed_json_yields_error_response() {
        let response = handle_request("{not json");
        assert!(response.contains("\"type\":\"Error\""));
    }

    #[test]
    fn unknown_message_type_yields_error_response() {
        let response = handle_request(r#"{"type":"Explode"}"#);
        let parsed: ComputeResponse = serde_json::from_str(&response).unwrap();
        assert!(matches!(parsed, ComputeResponse::Error { .. }));
    }

    #[test]
    fn integrate_ray_request() {
        let json = r##"{"type":"IntegrateRay","ray":{"impact_parameter":3.0,"class":"capture","color":"#FF1493"}}"##;
        let parsed: ComputeResponse = serde_json::from_str(&handle_request(json)).unwrap();
        match parsed {
            ComputeResponse::Ray { ray } => {
                assert_eq!(ray.outcome, RayOutcome::Captured);
                assert_eq!(ray.straight.len(), 300);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn oversized_step_count_is_rejected() {
        let json = r##"{"type":"IntegrateRay","physics":{"steps":4294967295},"ray":{"impact_parameter":7.0,"class":"escape","color":"#FFD700"}}"##;
        let parsed: ComputeResponse = serde_json::from_str(&handle_request(json)).unwrap();
        match parsed {
            ComputeResponse::Error { error } => assert!(error.contains("step count")),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let json = r#"{"type":"BuildScene","config":{"grid":{"cartesian_samples":18446744073709551615}}}"#;
        let parsed: ComputeResponse = serde_json::from_str(&handle_request(json)).unwrap();
        assert!(matches!(parsed, ComputeResponse::Error { .. }));
    }

    #[test]
    fn ray_at_critical_impact_parameter_is_rejected() {
        let physics = PhysicsConfig::default();
        for class in [RayClass::Escape, RayClass::Capture] {
            let response = handle(RendererRequest::IntegrateRay {
                physics,
                ray: RaySpec {
                    impact_parameter: physics.critical_impact_parameter(),
                    theta: 0.0,
                    phi: 0.0,
                    class,
                    color: "#FFFFFF".to_string(),
                },
                straight_length: None,
            });
            match response {
                ComputeResponse::Error { error } => assert!(error.contains("cannot be classified")),
                other => panic!("unexpected response {:?}", other),
            }
        }
    }

    #[test]
    fn ray_response_carries_label() {
        let json = r##"{"type":"IntegrateRay","ray":{"impact_parameter":10.0,"class":"escape","color":"#FFD700"}}"##;
        let parsed: ComputeResponse = serde_json::from_str(&handle_request(json)).unwrap();
        match parsed {
            ComputeResponse::Ray { ray } => assert_eq!(ray.label, "escape b=10.0"),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn mislabelled_ray_is_rejected() {
        let json = r##"{"type":"IntegrateRay","ray":{"impact_parameter":3.0,"class":"escape","color":"#FFD700"}}"##;
        let parsed: ComputeResponse = serde_json::from_str(&handle_request(json)).unwrap();
        match parsed {
            ComputeResponse::Error { error } => assert!(error.contains("cannot be classified")),
            other => panic!("unexpected response {:?}", other),
        }
    }
}
