//! Error types for the simulation core
//!
//! Every failure of a `simulate` call is one of these variants; there is no
//! partial or degraded success, a run either yields a full trajectory or an error

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Requested curve name is not one of the supported families
    #[error("unknown curve: {0:?}")]
    UnknownCurve(String),

    /// A parameter failed its precondition before any stepping began
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A step produced a non-finite slope or state; the run is abandoned
    #[error("non-finite state at step {step}: x = {x}, v = {v}")]
    NumericalInstability { step: usize, x: f64, v: f64 },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
