//! Wall-clock timing of the force accumulator and of full simulation steps

use std::time::Instant;

use crate::simulation::forces::ForceAccumulator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::sun;
use crate::simulation::states::{Body, NVec3};
use crate::simulation::system::SimulationState;
use crate::simulation::units::EARTH_MASS;

/// Timing for one body count
#[derive(Debug, Clone, Copy)]
pub struct BenchRow {
    pub n: usize,
    pub force_ms: f64, // one accumulation pass
    pub planar_step_ms: f64,
    pub spatial_step_ms: f64,
}

/// Sun plus `n - 1` deterministic orbiters, no rand needed
pub fn make_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    if n == 0 {
        return bodies;
    }
    bodies.push(sun());

    for i in 1..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 500.0,
            (i_f * 0.13).cos() * 500.0,
            0.0,
        );
        bodies.push(Body::new(format!("body-{i}"), EARTH_MASS, 6.371e6, x, NVec3::zeros()));
    }
    bodies
}

fn time_ms<F: FnMut()>(reps: usize, mut f: F) -> f64 {
    // Warm up
    f();

    let t0 = Instant::now();
    for _ in 0..reps {
        f();
    }
    t0.elapsed().as_secs_f64() * 1000.0 / reps as f64
}

/// Time the force pass and planar/spatial steps for each `n`
pub fn bench_steps(ns: &[usize], reps: usize) -> Vec<BenchRow> {
    let reps = reps.max(1);
    let params = Parameters::default();

    ns.iter().map(|&n| {
        let template = make_bodies(n);

        let forces = ForceAccumulator::gravity(params.min_separation);
        let mut bodies = template.clone();
        let force_ms = time_ms(reps, || {
            forces.accumulate_forces(&mut bodies);
            for b in bodies.iter_mut() {
                b.reset_force();
            }
        });

        let mut planar = SimulationState::with_parameters(params.clone());
        planar.initialize_with(template.clone());
        let planar_step_ms = time_ms(reps, || planar.step(1.0 / 60.0));

        let mut spatial = SimulationState::with_parameters(params.clone());
        spatial.initialize_with(template);
        spatial.set_spatial_mode(true);
        let spatial_step_ms = time_ms(reps, || spatial.step(1.0 / 60.0));

        BenchRow { n, force_ms, planar_step_ms, spatial_step_ms }
    }).collect()
}

/// Print CSV for a doubling range of body counts.
/// Paste output directly into a spreadsheet to graph
pub fn bench_gravity() {
    let ns = [10, 20, 40, 80, 160, 320, 640];

    println!("N,force_ms,planar_ms,spatial_ms");
    for row in bench_steps(&ns, 20) {
        println!("{},{:.6},{:.6},{:.6}", row.n, row.force_ms, row.planar_step_ms, row.spatial_step_ms);
    }
}
