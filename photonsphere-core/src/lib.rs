pub mod config;
pub mod error;
pub mod points;
pub mod trajectory;
pub mod transforms;

pub use config::{
    AnimationConfig, GridConfig, PhysicsConfig, SimulationConfig, MAX_GRID_COUNT, MAX_STEPS,
};
pub use error::PhotonError;
pub use points::{linspace, Point3};
pub use trajectory::{
    GridLine, ImpactParameter, OrbitSample, OrbitState, RayOutcome, RayPath, Trajectory,
    MIN_INVERSE_RADIUS,
};
pub use transforms::{polar_to_planar, rotate_about_y, rotate_about_z, Orientation};
