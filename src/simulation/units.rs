//! Physical constants and unit conversions
//!
//! The engine works in two unit systems:
//! - physical units (meters, seconds, kilograms) for the force law and diagnostics
//! - display units (one unit = `1 / DISTANCE_SCALE` meters) for positions and velocities
//!
//! Time is always simulated seconds; one unit of real time advances the
//! simulation by `SIM_SECONDS_PER_UNIT` seconds before the time-scale multiplier.

pub const G: f64 = 6.67430e-11; // gravitational constant (m^3 kg^-1 s^-2)
pub const AU: f64 = 1.496e11; // astronomical unit (m)
pub const SUN_MASS: f64 = 1.989e30; // kg
pub const EARTH_MASS: f64 = 5.972e24; // kg, reference planetary mass

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // Julian year

/// Display units per meter (1 display unit = 1e9 m)
pub const DISTANCE_SCALE: f64 = 1e-9;

/// Simulated seconds per unit of real elapsed time (1 real second = 1 day)
pub const SIM_SECONDS_PER_UNIT: f64 = SECONDS_PER_DAY;

/// Meters -> display units
pub fn distance_to_display(meters: f64) -> f64 {
    meters * DISTANCE_SCALE
}

/// Display units -> meters
pub fn display_to_distance(display: f64) -> f64 {
    display / DISTANCE_SCALE
}

/// m/s -> display units per simulated second
pub fn velocity_to_display(mps: f64) -> f64 {
    mps * DISTANCE_SCALE
}

/// Display units per simulated second -> m/s
pub fn display_to_velocity(display: f64) -> f64 {
    display / DISTANCE_SCALE
}

/// Real elapsed time -> simulated seconds (before the user time-scale)
pub fn scaled_time(real_dt: f64) -> f64 {
    real_dt * SIM_SECONDS_PER_UNIT
}

/// Newtonian force magnitude `G m1 m2 / r^2` in newtons, `r` in meters.
/// Returns 0 for non-positive separations
pub fn gravitational_force(m1: f64, m2: f64, r: f64) -> f64 {
    if r <= 0.0 {
        return 0.0;
    }
    G * m1 * m2 / (r * r)
}

/// Circular orbit speed `sqrt(G M / r)` in m/s
pub fn orbital_velocity(central_mass: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    (G * central_mass / distance).sqrt()
}

/// Escape speed `sqrt(2 G M / r)` in m/s
pub fn escape_velocity(mass: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    (2.0 * G * mass / radius).sqrt()
}

/// `(current - initial) / |initial|`, or 0 when `initial` is zero
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    if initial == 0.0 {
        return 0.0;
    }
    (current - initial) / initial.abs()
}
