use rollsim::configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig};
use rollsim::simulation::curve::Curve;
use rollsim::simulation::error::SimulationError;
use rollsim::simulation::integrator::simulate;
use rollsim::simulation::params::Parameters;
use rollsim::simulation::scenario::Scenario;

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        gravity: 9.81,
        dt: 0.01,
        duration: 5.0,
    }
}

/// All built-in curve families
pub fn all_curves() -> [Curve; 3] {
    [Curve::Parabola, Curve::Sine, Curve::Cubic]
}

// ==================================================================================
// Curve tests
// ==================================================================================

#[test]
fn derivative_matches_finite_difference() {
    let samples = [-2.0, 0.0, 1.0, 3.0];
    let h = 1e-6;

    for curve in all_curves() {
        for x in samples {
            // Central difference of evaluate should agree with the analytic derivative
            let fd = (curve.evaluate(x + h) - curve.evaluate(x - h)) / (2.0 * h);
            let exact = curve.derivative(x);

            assert!(
                (fd - exact).abs() < 1e-4,
                "{curve:?} at x = {x}: finite difference {fd} vs analytic {exact}"
            );
        }
    }
}

#[test]
fn unknown_curve_name_is_rejected() {
    let err = Curve::from_name("catenary").unwrap_err();
    assert!(matches!(err, SimulationError::UnknownCurve(_)));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn zero_gravity_produces_no_motion() {
    let params = Parameters {
        gravity: 0.0,
        ..test_params()
    };

    for curve in all_curves() {
        let trajectory = simulate(curve, &params).unwrap();

        for (i, p) in trajectory.points().iter().enumerate() {
            assert_eq!(p.x, 0.0, "{curve:?} moved at sample {i} with g = 0");
            assert_eq!(p.v, 0.0, "{curve:?} gained velocity at sample {i} with g = 0");
        }
    }
}

#[test]
fn trajectory_length_is_floor_of_duration_over_dt() {
    let trajectory = simulate(Curve::Parabola, &test_params()).unwrap();
    assert_eq!(trajectory.len(), 500);

    let params = Parameters {
        gravity: 9.81,
        dt: 0.3,
        duration: 1.0,
    };
    let trajectory = simulate(Curve::Sine, &params).unwrap();
    assert_eq!(trajectory.len(), 3);
}

#[test]
fn identical_inputs_give_identical_output() {
    let params = test_params();

    for curve in all_curves() {
        let a = simulate(curve, &params).unwrap();
        let b = simulate(curve, &params).unwrap();

        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.points().iter().zip(b.points().iter()) {
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.v, pb.v);
        }
    }
}

#[test]
fn parabola_equilibrium_start_stays_at_origin() {
    // The parabola is flat at the origin, so a mass starting at rest there
    // must not move on its own
    let params = Parameters {
        gravity: 9.81,
        dt: 0.01,
        duration: 1.0,
    };
    let trajectory = simulate(Curve::Parabola, &params).unwrap();

    let first = trajectory.get(1).unwrap();
    assert_eq!(first.x, 0.0);
    assert_eq!(first.v, 0.0);

    for p in trajectory.points() {
        assert_eq!(p.x, 0.0);
        assert_eq!(p.v, 0.0);
    }
}

#[test]
fn sine_first_step_updates_velocity_before_position() {
    // At x = 0 the sine slope is cos(0) = 1, so the first step is
    //   a  = g * sin(atan(1))
    //   v1 = a * dt
    //   x1 = v1 * dt
    // x1 uses the already-updated velocity (semi-implicit ordering)
    let params = test_params();
    let trajectory = simulate(Curve::Sine, &params).unwrap();

    let a = params.gravity * (1.0f64).atan().sin();
    let v1 = a * params.dt;
    let x1 = v1 * params.dt;

    let first = trajectory.get(1).unwrap();
    assert!((first.v - v1).abs() < 1e-15, "v1 = {}, expected {v1}", first.v);
    assert!((first.x - x1).abs() < 1e-15, "x1 = {}, expected {x1}", first.x);
}

#[test]
fn trajectory_time_and_position_are_derived() {
    let params = test_params();
    let trajectory = simulate(Curve::Sine, &params).unwrap();

    assert_eq!(trajectory.time(0), 0.0);
    assert!((trajectory.time(250) - 2.5).abs() < 1e-12);

    // y is always recomputed through the curve, never stored
    let p = trajectory.get(100).unwrap();
    let pos = trajectory.position(100, Curve::Sine).unwrap();
    assert_eq!(pos.x, p.x);
    assert_eq!(pos.y, Curve::Sine.evaluate(p.x));
}

// ==================================================================================
// Error taxonomy tests
// ==================================================================================

#[test]
fn zero_timestep_is_rejected() {
    let params = Parameters {
        gravity: 9.81,
        dt: 0.0,
        duration: 5.0,
    };
    let err = simulate(Curve::Parabola, &params).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter(_)));
}

#[test]
fn zero_duration_is_rejected() {
    let params = Parameters {
        gravity: 9.81,
        dt: 0.01,
        duration: 0.0,
    };
    let err = simulate(Curve::Parabola, &params).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter(_)));
}

#[test]
fn negative_gravity_is_rejected() {
    let params = Parameters {
        gravity: -9.81,
        dt: 0.01,
        duration: 5.0,
    };
    let err = simulate(Curve::Parabola, &params).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter(_)));
}

// ==================================================================================
// Scenario building tests
// ==================================================================================

/// Minimal config with no optional engine fields set
pub fn test_config(curve: &str) -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            fps: None,
            loop_playback: None,
        },
        parameters: ParametersConfig {
            gravity: 9.81,
            dt: 0.01,
            duration: 5.0,
        },
        curve: curve.to_string(),
    }
}

#[test]
fn scenario_build_resolves_curve_and_defaults() {
    let scenario = Scenario::build_scenario(test_config("sine")).unwrap();

    assert_eq!(scenario.curve, Curve::Sine);
    assert_eq!(scenario.engine.fps, 100.0);
    assert!(!scenario.engine.loop_playback);
    assert_eq!(scenario.parameters.num_steps(), 500);
}

#[test]
fn scenario_build_rejects_unknown_curve() {
    let err = Scenario::build_scenario(test_config("spiral")).unwrap_err();
    assert!(matches!(err, SimulationError::UnknownCurve(_)));
}

#[test]
fn scenario_config_parses_from_yaml() {
    let yaml = r#"
engine:
  fps: 60.0
  loop_playback: true
parameters:
  gravity: 9.81
  dt: 0.01
  duration: 5.0
curve: "cubic"
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.curve, Curve::Cubic);
    assert_eq!(scenario.engine.fps, 60.0);
    assert!(scenario.engine.loop_playback);
}

#[test]
fn non_finite_step_surfaces_as_instability() {
    // An absurd step size overflows x on the very first update; the run must
    // fail instead of continuing with a corrupted state
    let params = Parameters {
        gravity: 9.81,
        dt: 1e300,
        duration: 1e301,
    };
    let err = simulate(Curve::Sine, &params).unwrap_err();
    assert!(matches!(err, SimulationError::NumericalInstability { step: 1, .. }));
}
