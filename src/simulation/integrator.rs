//! Fixed-step time integrator for the rolling mass
//!
//! Advances the constrained state with semi-implicit Euler, driven by the
//! tangent-projection gravity model: gravity is resolved onto the local
//! tangent direction of the curve via the slope angle
//!
//! First-order accurate; a small `dt` keeps the motion smooth and bounded

use crate::simulation::curve::Curve;
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::params::Parameters;
use crate::simulation::trajectory::{Trajectory, TrajectoryPoint};

/// Run one complete simulation and return the full trajectory
///
/// The mass starts at rest at x = 0 and stays on the curve; sample i holds
/// the state at time `i * dt`, with `num_steps()` samples in total. Either
/// the whole trajectory is produced or an error is returned, never a prefix
pub fn simulate(curve: Curve, params: &Parameters) -> Result<Trajectory> {
    // Reject bad parameters before any stepping
    params.validate()?;

    let g = params.gravity; // gravitational acceleration
    let dt = params.dt; // fixed time step

    let n = params.num_steps();
    let mut points = Vec::with_capacity(n);

    // Initial conditions: at rest at the origin, t = 0
    points.push(TrajectoryPoint { x: 0.0, v: 0.0 });

    for i in 1..n {
        let prev = points[i - 1];

        // Local slope of the constraint curve at the previous position
        let slope = curve.derivative(prev.x);

        // A curve with an undefined or blown-up derivative invalidates the step
        if !slope.is_finite() {
            return Err(SimulationError::NumericalInstability {
                step: i,
                x: prev.x,
                v: prev.v,
            });
        }

        // Tangent angle, then the component of g along the tangent direction.
        // Using atan/sin rather than the raw slope keeps steep sections from
        // being over-weighted
        let angle = slope.atan();
        let accel = g * angle.sin();

        // Kick: v_i = v_{i-1} + a * dt
        let v = prev.v + accel * dt;

        // Drift with the new velocity: x_i = x_{i-1} + v_i * dt
        let x = prev.x + v * dt;

        // A non-finite state is a failed run, not a truncated one
        if !x.is_finite() || !v.is_finite() {
            return Err(SimulationError::NumericalInstability { step: i, x, v });
        }

        points.push(TrajectoryPoint { x, v });
    }

    Ok(Trajectory::new(points, dt))
}
