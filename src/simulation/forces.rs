//! Force contributors for the engine
//!
//! Defines the [`ForceTerm`] trait, the [`ForceAccumulator`] that runs a set
//! of terms over the bodies, and direct O(n^2) Newtonian gravity with a
//! separation floor

use crate::simulation::states::{Body, NVec3};
use crate::simulation::units;

/// Trait for force sources operating on an ordered slice of bodies.
/// Implementations add their contribution into `body.f` for each body
pub trait ForceTerm {
    fn accumulate(&self, bodies: &mut [Body]);
}

/// Collection of force terms. Each term deposits into the bodies'
/// accumulated force; nothing is cleared here, that happens after integration
pub struct ForceAccumulator {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl Default for ForceAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Accumulator with Newtonian gravity as its only term
    pub fn gravity(min_separation: f64) -> Self {
        Self::new().with(NewtonianGravity { min_separation })
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Add every term's contribution to `bodies[i].f`
    pub fn accumulate_forces(&self, bodies: &mut [Body]) {
        for term in &self.terms {
            term.accumulate(bodies);
        }
    }
}

/// Gravitational force on a body at `xi` (mass `mi`) from a body at `xj`
/// (mass `mj`), in display-scaled newtons.
///
/// The separation is clamped to `min_separation` (display units) before the
/// force law is evaluated. Coincident bodies get no force since there is no
/// direction to apply it in
pub fn pair_force(xi: &NVec3, mi: f64, xj: &NVec3, mj: f64, min_separation: f64) -> NVec3 {
    // r points from i to j, so i is pulled along +r
    let r = xj - xi;
    let dist = r.norm();
    if dist == 0.0 {
        return NVec3::zeros();
    }

    let clamped = dist.max(min_separation);
    let dist_m = units::display_to_distance(clamped);
    let magnitude = units::gravitational_force(mi, mj, dist_m);

    // back into display-scaled force units
    let magnitude_display = magnitude * units::DISTANCE_SCALE;

    (r / dist) * magnitude_display
}

/// Direct Newtonian gravity over all unordered pairs
pub struct NewtonianGravity {
    pub min_separation: f64, // display units
}

impl ForceTerm for NewtonianGravity {
    fn accumulate(&self, bodies: &mut [Body]) {
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j, one evaluation per pair
        for i in 0..n {
            for j in (i + 1)..n {
                let force = pair_force(
                    &bodies[i].x,
                    bodies[i].mass(),
                    &bodies[j].x,
                    bodies[j].mass(),
                    self.min_separation,
                );

                // equal and opposite
                bodies[i].add_force(force);
                bodies[j].add_force(-force);
            }
        }
    }
}
