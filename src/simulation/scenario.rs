//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - playback settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the selected constraint curve (`Curve`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! playback and drawing systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::curve::Curve;
use crate::simulation::engine::Engine;
use crate::simulation::error::Result;
use crate::simulation::params::Parameters;

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it carries the playback settings, numerical parameters, and the curve the
/// mass is constrained to. The trajectory itself is produced separately by
/// `simulate` so the viewer only ever replays a finished run
#[derive(Debug, Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub curve: Curve,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Curve: resolve the scenario-file name to a runtime variant
        let curve = Curve::from_name(&cfg.curve)?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            gravity: p_cfg.gravity,
            dt: p_cfg.dt,
            duration: p_cfg.duration,
        };

        // Engine (runtime) from EngineConfig, optional fields defaulted
        let e_cfg = cfg.engine;
        let engine = Engine {
            fps: e_cfg.fps.unwrap_or(100.0),
            loop_playback: e_cfg.loop_playback.unwrap_or(false),
        };

        Ok(Self {
            engine,
            parameters,
            curve,
        })
    }
}
