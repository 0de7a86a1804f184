pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::curve::Curve;
pub use simulation::error::SimulationError;
pub use simulation::integrator::simulate;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::trajectory::{Trajectory, TrajectoryPoint, NVec2};

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};

pub use visualization::rollsim_vis2d::run_viewer;

pub use benchmark::benchmark::bench_simulate;
