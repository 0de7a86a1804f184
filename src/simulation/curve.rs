//! Curve families the mass is constrained to
//!
//! Each variant carries an exact analytic value/derivative pair:
//! - `Parabola`: y = x^2,   y' = 2x
//! - `Sine`:     y = sin x, y' = cos x
//! - `Cubic`:    y = x^3,   y' = 3x^2
//!
//! The derivative is always the analytic one, never a finite-difference
//! approximation, so integration error does not compound with sampling error

use crate::simulation::error::{Result, SimulationError};

/// Supported curve family, selected once per run
///
/// Adding a family means adding a variant and its two match arms; the
/// integrator only ever calls `derivative`, it never branches on the identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Parabola,
    Sine,
    Cubic,
}

impl Curve {
    /// Resolve a scenario-file name ("parabola", "sine", "cubic") to a variant
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "parabola" => Ok(Curve::Parabola),
            "sine" => Ok(Curve::Sine),
            "cubic" => Ok(Curve::Cubic),
            other => Err(SimulationError::UnknownCurve(other.to_string())),
        }
    }

    /// y at horizontal position `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Curve::Parabola => x * x,
            Curve::Sine => x.sin(),
            Curve::Cubic => x * x * x,
        }
    }

    /// dy/dx at horizontal position `x` (exact analytic derivative)
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Curve::Parabola => 2.0 * x,
            Curve::Sine => x.cos(),
            Curve::Cubic => 3.0 * x * x,
        }
    }

    /// Elementwise evaluation, used for sampling the static backdrop
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}
