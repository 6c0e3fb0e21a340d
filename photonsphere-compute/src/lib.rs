pub mod bindings;
pub mod catalog;
pub mod handler;
pub mod integrator;
pub mod messages;
pub mod playback;
pub mod projector;
pub mod scene;
pub mod warp;

pub use catalog::{RayClass, RayConfig, TrajectoryCatalog};
pub use handler::{handle, handle_request};
pub use integrator::{rk4_step, GeodesicIntegrator};
pub use messages::{ComputeResponse, RaySpec, RendererRequest};
pub use playback::{reveal_count, AutoRotate, Playback, PlaybackState, ViewAngles};
pub use projector::{straight_ray_3d, to_cartesian_3d};
pub use scene::{
    build_scene, build_standard_scene, ray_label, RenderedRay, Scene, StyledGridLine,
};
pub use warp::{warp_depth, GridBand, LineStyle, WarpGeometry};

// Re-export core types for convenience
pub use photonsphere_core::*;
