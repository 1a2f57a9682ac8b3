//! Simulation state and step orchestration
//!
//! `SimulationState` owns the ordered body list (index 0 is the anchor by
//! convention), the runtime [`Engine`] flags, the numerical [`Parameters`]
//! and the reset baseline. It is the only mutator of the bodies; the force
//! accumulator and integrators borrow them for the duration of one step.

use tracing::{debug, info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::{Dimension, Engine};
use crate::simulation::forces::ForceAccumulator;
use crate::simulation::integrator::{planar_step, spatial_step};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{solar_system, Scenario};
use crate::simulation::states::{Body, InitialCondition, NVec3};
use crate::simulation::units;

pub struct SimulationState {
    bodies: Vec<Body>,
    engine: Engine,
    parameters: Parameters,
    forces: ForceAccumulator,
    initial: Vec<InitialCondition>, // reset baseline, one entry per body
    elapsed: f64, // simulated seconds since the last initialize/reset
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Empty simulation with default parameters
    pub fn new() -> Self {
        Self::with_parameters(Parameters::default())
    }

    /// Out-of-range parameters are repaired, see [`Parameters::sanitized`]
    pub fn with_parameters(parameters: Parameters) -> Self {
        let parameters = parameters.sanitized();
        Self {
            bodies: Vec::new(),
            engine: Engine::default(),
            forces: ForceAccumulator::gravity(parameters.min_separation),
            parameters,
            initial: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Build from a scenario config and snapshot its bodies as the baseline.
    /// Spatial scenarios keep their z components, planar ones are flattened
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let Scenario { engine, parameters, bodies } = Scenario::build_scenario(cfg);
        let mut state = Self::with_parameters(parameters);
        state.engine = engine;
        state.initialize_with(bodies);
        state
    }

    /// Clear everything and populate the canonical solar system
    pub fn initialize(&mut self) {
        self.initialize_with(solar_system());
    }

    /// Clear everything and populate `bodies`, snapshotting them as the baseline
    pub fn initialize_with(&mut self, bodies: Vec<Body>) {
        self.clear();
        for body in bodies {
            self.add_body(body);
        }
        self.snapshot();
        info!(bodies = self.bodies.len(), "simulation initialized");
    }

    /// Advance by `real_dt` units of real time, scaled by the time scale.
    /// No-op while paused
    pub fn step(&mut self, real_dt: f64) {
        if self.engine.paused {
            return;
        }
        if !(real_dt.is_finite() && real_dt > 0.0) {
            debug!(real_dt, "ignoring non-positive step");
            return;
        }

        let dt = real_dt * self.engine.time_scale;

        match self.engine.dimension {
            Dimension::Planar => {
                self.forces.accumulate_forces(&mut self.bodies);
                for body in self.bodies.iter_mut() {
                    planar_step(body, dt);
                }
            }
            Dimension::Spatial => {
                // every body integrates against the positions at the start of the step
                let positions: Vec<NVec3> = self.bodies.iter().map(|b| b.x).collect();
                for i in 0..self.bodies.len() {
                    spatial_step(&mut self.bodies, i, &positions, dt, &self.parameters);
                }
            }
        }

        for body in self.bodies.iter_mut() {
            body.reset_force();
        }

        self.elapsed += units::scaled_time(dt);
    }

    // =========================================================================================
    // Runtime flags
    // =========================================================================================

    /// Set the time scale, clamped into the configured bounds
    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.engine.time_scale = self.parameters.clamp_time_scale(time_scale);
    }

    pub fn time_scale(&self) -> f64 {
        self.engine.time_scale
    }

    pub fn pause(&mut self) {
        self.engine.paused = true;
    }

    pub fn resume(&mut self) {
        self.engine.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.engine.paused = !self.engine.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.engine.paused
    }

    /// Switch between planar and spatial integration.
    ///
    /// Entering spatial mode seeds every body from its planar state (z = 0)
    /// and sets `x_prev = x - v * previous_step`. Entering planar mode pins z to 0.
    pub fn set_spatial_mode(&mut self, enabled: bool) {
        let target = if enabled { Dimension::Spatial } else { Dimension::Planar };
        if target == self.engine.dimension {
            return;
        }

        let h = self.parameters.previous_step;
        for body in self.bodies.iter_mut() {
            body.flatten();
            if enabled {
                body.x_prev = body.x - body.v * h;
            }
        }

        self.engine.dimension = target;
        info!(dimension = ?target, "dimension changed");
    }

    pub fn toggle_spatial_mode(&mut self) {
        self.set_spatial_mode(!self.is_spatial_mode());
    }

    pub fn is_spatial_mode(&self) -> bool {
        self.engine.is_spatial()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    // =========================================================================================
    // Snapshot / reset
    // =========================================================================================

    /// Capture the current positions and velocities as the reset baseline
    pub fn snapshot(&mut self) {
        self.initial = self.bodies.iter().map(|b| InitialCondition { x: b.x, v: b.v }).collect();
        self.elapsed = 0.0;
    }

    /// Restore every body from the baseline and zero its force.
    /// No-op if the baseline does not have exactly one entry per body
    pub fn reset(&mut self) {
        if self.initial.is_empty() || self.initial.len() != self.bodies.len() {
            warn!(bodies = self.bodies.len(), baseline = self.initial.len(), "reset skipped, baseline does not match bodies");
            return;
        }

        for (body, ic) in self.bodies.iter_mut().zip(self.initial.iter()) {
            body.set_position(ic.x);
            body.set_velocity(ic.v);
            body.reset_force();
            if self.engine.dimension == Dimension::Planar {
                body.flatten();
            }
        }
        self.elapsed = 0.0;
        info!("simulation reset to initial conditions");
    }

    pub fn initial_conditions(&self) -> &[InitialCondition] {
        &self.initial
    }

    /// Simulated seconds since the last initialize, snapshot or reset
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    // =========================================================================================
    // Bodies
    // =========================================================================================

    /// Append a body. In planar mode its z is pinned to 0, in spatial mode
    /// `x_prev` is seeded the same way a mode switch does
    pub fn add_body(&mut self, mut body: Body) {
        match self.engine.dimension {
            Dimension::Planar => body.flatten(),
            Dimension::Spatial => body.x_prev = body.x - body.v * self.parameters.previous_step,
        }
        self.bodies.push(body);
    }

    /// Remove all bodies and the baseline
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.initial.clear();
        self.elapsed = 0.0;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn get_body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn get_body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// First body with this name
    pub fn find_body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn find_body_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.name() == name)
    }

    /// The body at index 0, conventionally the anchor
    pub fn central_body(&self) -> Option<&Body> {
        self.bodies.first()
    }

    /// Override a body's position, z pinned in planar mode. Returns false if the index is out of range
    pub fn set_position(&mut self, index: usize, x: NVec3) -> bool {
        match self.bodies.get_mut(index) {
            Some(b) => {
                b.set_position(x);
                if self.engine.dimension == Dimension::Planar {
                    b.flatten();
                }
                true
            }
            None => false,
        }
    }

    /// Override a body's velocity, z pinned in planar mode. Returns false if the index is out of range
    pub fn set_velocity(&mut self, index: usize, v: NVec3) -> bool {
        match self.bodies.get_mut(index) {
            Some(b) => {
                b.set_velocity(v);
                if self.engine.dimension == Dimension::Planar {
                    b.flatten();
                }
                true
            }
            None => false,
        }
    }

    // =========================================================================================
    // Diagnostics
    // =========================================================================================

    /// Kinetic plus pairwise potential energy in joules.
    /// Separations below the distance floor are evaluated at the floor
    pub fn total_energy(&self) -> f64 {
        let kinetic: f64 = self.bodies.iter().map(|b| {
            let speed = units::display_to_velocity(b.v.norm());
            0.5 * b.mass() * speed * speed
        }).sum();

        let mut potential = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let r = units::display_to_distance(bi.distance_to(bj).max(self.parameters.min_separation));
                potential -= units::G * bi.mass() * bj.mass() / r;
            }
        }

        kinetic + potential
    }

    /// Mass-weighted mean position in display units; origin if there is no mass
    pub fn center_of_mass(&self) -> NVec3 {
        let total: f64 = self.bodies.iter().map(|b| b.mass()).sum();
        if total <= 0.0 {
            return NVec3::zeros();
        }
        let weighted = self.bodies.iter().fold(NVec3::zeros(), |acc, b| acc + b.x * b.mass());
        weighted / total
    }
}
