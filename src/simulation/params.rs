//! Numerical parameters for the simulation
//!
//! `Parameters` holds the tuning that stays fixed during a run:
//! - time-scale bounds used when clamping user input,
//! - the separation floor for the force law,
//! - the spatial-mode damping factor and the previous-position seed step

use super::units;

pub const TIME_SCALE_MIN: f64 = 0.1;
pub const TIME_SCALE_MAX: f64 = 10.0;
pub const MIN_SEPARATION_METERS: f64 = 1e6;
pub const SPATIAL_DAMPING: f64 = 0.1;
pub const PREVIOUS_STEP: f64 = 0.016; // simulated seconds

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub time_scale_min: f64, // lower clamp for the time scale, > 0
    pub time_scale_max: f64, // upper clamp for the time scale
    pub min_separation: f64, // distance floor in display units
    pub spatial_damping: f64, // multiplier on the spatial-mode step
    pub previous_step: f64, // step used to seed x_prev when entering spatial mode
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            time_scale_min: TIME_SCALE_MIN,
            time_scale_max: TIME_SCALE_MAX,
            min_separation: units::distance_to_display(MIN_SEPARATION_METERS),
            spatial_damping: SPATIAL_DAMPING,
            previous_step: PREVIOUS_STEP,
        }
    }
}

impl Parameters {
    /// Repair values that would break the engine. Swapped time-scale bounds
    /// are reordered; any other non-finite or out-of-range field falls back
    /// to its default
    pub fn sanitized(mut self) -> Self {
        let defaults = Parameters::default();

        if self.time_scale_min > self.time_scale_max {
            std::mem::swap(&mut self.time_scale_min, &mut self.time_scale_max);
        }
        if !(self.time_scale_min.is_finite() && self.time_scale_min > 0.0 && self.time_scale_max.is_finite()) {
            self.time_scale_min = defaults.time_scale_min;
            self.time_scale_max = defaults.time_scale_max;
        }
        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            self.min_separation = defaults.min_separation;
        }
        if !(self.spatial_damping.is_finite() && self.spatial_damping > 0.0) {
            self.spatial_damping = defaults.spatial_damping;
        }
        if !(self.previous_step.is_finite() && self.previous_step >= 0.0) {
            self.previous_step = defaults.previous_step;
        }
        self
    }

    /// Clamp a requested time scale into `[time_scale_min, time_scale_max]`.
    /// NaN falls back to the lower bound. Never panics, even on unsanitized bounds
    pub fn clamp_time_scale(&self, requested: f64) -> f64 {
        if requested.is_nan() {
            return self.time_scale_min;
        }
        requested.max(self.time_scale_min).min(self.time_scale_max)
    }
}
