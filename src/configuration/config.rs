//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – playback options (frame rate, looping)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   fps: 100.0            # playback samples per second
//!   loop_playback: true   # restart after the last sample
//!
//! parameters:
//!   gravity: 9.81         # gravitational acceleration g
//!   dt: 0.01              # fixed integration step
//!   duration: 5.0         # total simulated time
//!
//! curve: "parabola"       # parabola | sine | cubic
//! ```
//!
//! The curve name stays a plain string here; resolving it to a runtime
//! variant (and rejecting unknown names) happens in scenario building

use serde::Deserialize;

/// Playback configuration for the viewer
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub fps: Option<f64>, // playback samples per second, defaults to 100
    pub loop_playback: Option<bool>, // restart playback at the end, defaults to false
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub gravity: f64, // gravitational acceleration g
    pub dt: f64, // fixed time step size
    pub duration: f64, // total simulated time
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // playback configuration
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub curve: String, // curve family the mass is constrained to
}
