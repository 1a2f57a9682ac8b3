//! Fixed-step integrators for a single body
//!
//! Provides the planar semi-implicit Euler step, driven by the force already
//! deposited on the body, and the spatial damped Euler step, which computes
//! its own net force against a snapshot of the other bodies

use super::forces::pair_force;
use super::params::Parameters;
use super::states::{Body, NVec3};
use super::units;

/// Advance one body by semi-implicit Euler.
/// `dt` is real elapsed time already multiplied by the user time scale;
/// the velocity is updated first and the new velocity moves the position
pub fn planar_step(body: &mut Body, dt: f64) {
    let h = units::scaled_time(dt);

    // a = F / m
    let a = body.f / body.mass();

    // v_n+1 = v_n + h a_n
    body.v += h * a;

    // x_n+1 = x_n + h v_n+1
    body.x += h * body.v;
}

/// Advance the body at `index` by damped explicit Euler.
///
/// The net force is recomputed from `positions` (one entry per body, taken
/// before any body in this step moved), ignoring whatever is in `body.f`.
/// The step is `dt * SIM_SECONDS_PER_UNIT * params.spatial_damping`.
/// Anchors are left untouched
pub fn spatial_step(bodies: &mut [Body], index: usize, positions: &[NVec3], dt: f64, params: &Parameters) {
    let (xi, mi) = match bodies.get(index) {
        Some(b) if !b.is_anchor() => (b.x, b.mass()),
        _ => return,
    };

    let mut net = NVec3::zeros();
    for (j, (other, xj)) in bodies.iter().zip(positions.iter()).enumerate() {
        if j == index {
            continue;
        }
        net += pair_force(&xi, mi, xj, other.mass(), params.min_separation);
    }

    let h = units::scaled_time(dt) * params.spatial_damping;
    let a = net / mi;

    let body = &mut bodies[index];
    body.x_prev = body.x;

    // x_n+1 = x_n + h v_n, then v_n+1 = v_n + h a_n
    body.x += h * body.v;
    body.v += h * a;
}
