//! Numerical and physical parameters for one simulation run
//!
//! `Parameters` holds runtime settings:
//! - gravitational acceleration `gravity`,
//! - fixed integration step `dt`,
//! - total simulated time `duration`
//!
//! Together `duration` and `dt` determine the number of integration steps,
//! `num_steps() = floor(duration / dt)`

use crate::simulation::error::{Result, SimulationError};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f64, // gravitational acceleration g
    pub dt: f64, // fixed time step
    pub duration: f64, // total simulated time
}

impl Parameters {
    /// Check every precondition before a run; no clamping, no silent correction
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "gravity must be finite and non-negative, got {}",
                self.gravity
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        if !self.duration.is_finite() || self.duration <= self.dt {
            return Err(SimulationError::InvalidParameter(format!(
                "duration must be finite and longer than one step, got {}",
                self.duration
            )));
        }
        Ok(())
    }

    /// Number of discrete samples in the trajectory, index 0 at t = 0
    pub fn num_steps(&self) -> usize {
        (self.duration / self.dt).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_steps_is_floor_of_ratio() {
        let p = Parameters { gravity: 9.81, dt: 0.01, duration: 5.0 };
        assert_eq!(p.num_steps(), 500);

        let p = Parameters { gravity: 9.81, dt: 0.3, duration: 1.0 };
        assert_eq!(p.num_steps(), 3);
    }

    #[test]
    fn zero_gravity_is_valid() {
        let p = Parameters { gravity: 0.0, dt: 0.01, duration: 1.0 };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn negative_gravity_is_rejected() {
        let p = Parameters { gravity: -9.81, dt: 0.01, duration: 1.0 };
        assert!(p.validate().is_err());
    }
}
