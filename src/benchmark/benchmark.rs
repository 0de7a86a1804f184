use std::time::Instant;

use crate::simulation::curve::Curve;
use crate::simulation::integrator::simulate;
use crate::simulation::params::Parameters;

/// Helper to build parameters for a run of `steps` samples
fn make_params(steps: usize) -> Parameters {
    let dt = 0.001;
    Parameters {
        gravity: 9.81,
        dt,
        duration: steps as f64 * dt,
    }
}

/// Benchmark `simulate` for each curve family over a range of step counts
/// Paste output directly into excel to graph
pub fn bench_simulate() {
    let curves = [
        ("parabola", Curve::Parabola),
        ("sine", Curve::Sine),
        ("cubic", Curve::Cubic),
    ];

    println!("curve,steps,ms");

    for (name, curve) in curves {
        // Steps of 20_000 to give a smooth graph without minutes of runtime
        for steps in (20_000..=200_000).step_by(20_000) {
            let params = make_params(steps);

            // Small runs: average over a few repeats to smooth noise
            let repeats = if steps <= 60_000 { 5 } else { 1 };

            // Warm up
            let _ = simulate(curve, &params).expect("benchmark run failed");

            let t0 = Instant::now();
            for _ in 0..repeats {
                let _ = simulate(curve, &params).expect("benchmark run failed");
            }
            let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
            let ms = elapsed / repeats as f64;

            println!("{},{},{:.6}", name, steps, ms);
        }
    }
}
