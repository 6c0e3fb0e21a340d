//! Fixed-step RK4 integration of the Schwarzschild photon orbit.
//!
//! Works in the inverse-radius formulation u = 1/r, where the orbit equation
//! becomes d²u/dφ² = 3M·u² − u. Rays start at the integration radius with the
//! slope given by the conserved first integral
//! (du/dφ)² = 1/b² − u² + 2M·u³, then march in φ until they cross the
//! horizon, recede past the starting radius, or exhaust the angular span.

use crate::projector::to_cartesian_3d;
use photonsphere_core::{
    ImpactParameter, OrbitSample, OrbitState, Orientation, PhysicsConfig, RayOutcome, RayPath,
    Trajectory,
};

/// Samples reserved up front; longer orbits grow the buffer as they go.
const MAX_PREALLOCATED_SAMPLES: usize = 16_384;

fn sample_capacity(steps: u32) -> usize {
    (steps as usize).min(MAX_PREALLOCATED_SAMPLES).saturating_add(1)
}

/// Photon-orbit integrator bound to one set of physical constants.
#[derive(Clone, Copy, Debug)]
pub struct GeodesicIntegrator {
    mass: f64,
    horizon_u: f64,
    start_u: f64,
    step: f64,
    steps: u32,
}

impl GeodesicIntegrator {
    /// `physics` is expected to have passed [`PhysicsConfig::validate`].
    pub fn new(physics: &PhysicsConfig) -> Self {
        Self {
            mass: physics.mass,
            horizon_u: 1.0 / physics.schwarzschild_radius(),
            start_u: 1.0 / physics.integration_radius,
            step: physics.step_size(),
            steps: physics.steps,
        }
    }

    /// Radius at which every ray enters the integration region.
    pub fn start_radius(&self) -> f64 {
        1.0 / self.start_u
    }

    /// Initial state for a ray arriving from flat space with impact parameter `b`.
    ///
    /// A negative radicand (b beyond the starting radius, or rounding near the
    /// critical value) is clamped to a zero slope.
    pub fn initial_state(&self, b: ImpactParameter) -> OrbitState {
        let b = b.get();
        let u = self.start_u;
        let radicand = 1.0 / (b * b) - u * u + 2.0 * self.mass * u * u * u;
        OrbitState::new(u, radicand.max(0.0).sqrt())
    }

    /// Integrate the planar orbit for impact parameter `b`.
    pub fn integrate_orbit(&self, b: ImpactParameter) -> Trajectory {
        let mut state = self.initial_state(b);
        let mut phi = 0.0;
        let mut samples = Vec::with_capacity(sample_capacity(self.steps));
        samples.push(OrbitSample { phi, state });

        let mut outcome = RayOutcome::Indeterminate;

        for i in 1..=self.steps {
            state = rk4_step(self.mass, state, self.step);
            phi = self.step * i as f64;
            samples.push(OrbitSample { phi, state });

            if state.u > self.horizon_u {
                outcome = RayOutcome::Captured;
                break;
            }
            if state.u < self.start_u && state.du_dphi < 0.0 {
                outcome = RayOutcome::Escaped;
                break;
            }
        }

        log::debug!(
            "b={:.4}: {} after {} steps (phi={:.3})",
            b.get(),
            outcome,
            samples.len() - 1,
            phi
        );

        Trajectory { samples, outcome }
    }

    /// Integrate and place the ray in the scene.
    pub fn integrate(&self, b: ImpactParameter, orientation: Orientation) -> RayPath {
        let trajectory = self.integrate_orbit(b);
        RayPath {
            points: to_cartesian_3d(&trajectory.samples, orientation),
            radii: trajectory.radii(),
            outcome: trajectory.outcome,
        }
    }
}

/// Right-hand side of the first-order system (u, u′)′ = (u′, 3M·u² − u).
#[inline]
fn orbit_derivative(mass: f64, s: OrbitState) -> OrbitState {
    OrbitState::new(s.du_dphi, 3.0 * mass * s.u * s.u - s.u)
}

#[inline]
fn offset(s: OrbitState, k: OrbitState, h: f64) -> OrbitState {
    OrbitState::new(s.u + h * k.u, s.du_dphi + h * k.du_dphi)
}

/// One classical fourth-order Runge-Kutta step of size `h`.
///
/// The system is autonomous in φ, so φ does not enter the stages.
pub fn rk4_step(mass: f64, s: OrbitState, h: f64) -> OrbitState {
    let k1 = orbit_derivative(mass, s);
    let k2 = orbit_derivative(mass, offset(s, k1, 0.5 * h));
    let k3 = orbit_derivative(mass, offset(s, k2, 0.5 * h));
    let k4 = orbit_derivative(mass, offset(s, k3, h));

    OrbitState::new(
        s.u + h / 6.0 * (k1.u + 2.0 * k2.u + 2.0 * k3.u + k4.u),
        s.du_dphi + h / 6.0 * (k1.du_dphi + 2.0 * k2.du_dphi + 2.0 * k3.du_dphi + k4.du_dphi),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(value: f64) -> ImpactParameter {
        ImpactParameter::new(value).unwrap()
    }

    fn first_integral(mass: f64, b: f64, s: OrbitState) -> f64 {
        s.du_dphi * s.du_dphi + s.u * s.u - 2.0 * mass * s.u.powi(3) - 1.0 / (b * b)
    }

    #[test]
    fn initial_slope_satisfies_orbit_equation() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let state = integrator.initial_state(b(7.0));
        assert_eq!(state.u, 1.0 / 15.0);
        assert!(state.du_dphi > 0.0);
        assert!(first_integral(1.0, 7.0, state).abs() < 1e-15);
    }

    #[test]
    fn negative_radicand_clamps_to_zero_slope() {
        // b well beyond the starting radius has no real slope at r = 15
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let state = integrator.initial_state(b(40.0));
        assert_eq!(state.du_dphi, 0.0);
    }

    #[test]
    fn rk4_step_conserves_first_integral() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let mut state = integrator.initial_state(b(8.0));
        for _ in 0..200 {
            state = rk4_step(1.0, state, 0.01);
        }
        assert!(first_integral(1.0, 8.0, state).abs() < 1e-10);
    }

    #[test]
    fn flat_space_step_matches_harmonic_motion() {
        // With M = 0, u'' = -u; starting at (0, 1) gives u = sin φ
        let state = rk4_step(0.0, OrbitState::new(0.0, 1.0), 0.1);
        assert!((state.u - 0.1_f64.sin()).abs() < 1e-6);
        assert!((state.du_dphi - 0.1_f64.cos()).abs() < 1e-6);
    }

    #[test]
    fn captured_ray_ends_inside_horizon() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let trajectory = integrator.integrate_orbit(b(3.0));
        assert_eq!(trajectory.outcome, RayOutcome::Captured);
        let last = trajectory.last().unwrap();
        assert!(last.state.u > 0.5);
        assert!(last.radius() < 2.0);
    }

    #[test]
    fn escaped_ray_ends_receding() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let trajectory = integrator.integrate_orbit(b(7.0));
        assert_eq!(trajectory.outcome, RayOutcome::Escaped);
        let last = trajectory.last().unwrap();
        assert!(last.state.u < 1.0 / 15.0);
        assert!(last.state.du_dphi < 0.0);
        // Turning point lies outside the photon sphere
        assert!(trajectory.periapsis().unwrap() > 3.0);
    }

    #[test]
    fn short_span_is_indeterminate() {
        let physics = PhysicsConfig {
            angular_span: 0.5,
            steps: 100,
            ..Default::default()
        };
        let trajectory = GeodesicIntegrator::new(&physics).integrate_orbit(b(10.0));
        assert_eq!(trajectory.outcome, RayOutcome::Indeterminate);
        assert_eq!(trajectory.len(), 101);
        assert!((trajectory.swept_angle() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn samples_start_at_integration_radius() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let trajectory = integrator.integrate_orbit(b(9.0));
        let first = trajectory.samples[0];
        assert_eq!(first.phi, 0.0);
        assert!((first.radius() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn sample_reservation_is_bounded() {
        assert_eq!(sample_capacity(0), 1);
        assert_eq!(sample_capacity(3000), 3001);
        assert_eq!(sample_capacity(u32::MAX), MAX_PREALLOCATED_SAMPLES + 1);
    }

    #[test]
    fn start_radius_matches_integration_radius() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        assert!((integrator.start_radius() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn integrate_pairs_points_with_radii() {
        let integrator = GeodesicIntegrator::new(&PhysicsConfig::default());
        let path = integrator.integrate(b(4.5), Orientation::new(0.3, 1.1));
        assert_eq!(path.points.len(), path.radii.len());
        assert_eq!(path.outcome, RayOutcome::Captured);
        for (point, r) in path.points.iter().zip(&path.radii) {
            assert!((point.norm() - r).abs() < 1e-9);
        }
    }
}
