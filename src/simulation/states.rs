//! Core state types for the simulation.
//!
//! A `Body` carries a single 3-component kinematic state (`NVec3`). Planar
//! mode uses the same vectors with z pinned to 0, so there is no second
//! representation to keep in sync.
//!
//! Positions are in display units, velocities in display units per simulated
//! second and forces in display-scaled newtons (see [`crate::simulation::units`]).

use nalgebra::Vector3;
use serde::Deserialize;

use super::units;

pub type NVec3 = Vector3<f64>;

/// Role of a body in the system. The anchor is the orbital center and is
/// held fixed by the spatial integrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyRole {
    Anchor,
    #[default]
    Orbiter,
}

/// RGB presentation color, carried on the body for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    role: BodyRole,
    mass: f64, // kg, fixed at creation
    radius: f64, // physical radius (m)
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub f: NVec3, // accumulated force for the current step
    pub x_prev: NVec3, // previous position, recorded by the spatial integrator only
    pub visual_radius: f64, // display units
    pub color: Color,
}

impl Body {
    /// Create an orbiter. The visual radius starts at the physical radius in
    /// display units
    pub fn new(name: impl Into<String>, mass: f64, radius: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            name: name.into(),
            role: BodyRole::Orbiter,
            mass,
            radius,
            x,
            v,
            f: NVec3::zeros(),
            x_prev: x,
            visual_radius: units::distance_to_display(radius),
            color: Color::default(),
        }
    }

    /// Mark this body as the anchor
    pub fn anchor(mut self) -> Self {
        self.role = BodyRole::Anchor;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_visual_radius(mut self, visual_radius: f64) -> Self {
        self.visual_radius = visual_radius;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> BodyRole {
        self.role
    }

    pub fn is_anchor(&self) -> bool {
        self.role == BodyRole::Anchor
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_position(&mut self, x: NVec3) {
        self.x = x;
    }

    pub fn set_velocity(&mut self, v: NVec3) {
        self.v = v;
    }

    pub fn set_visual_radius(&mut self, visual_radius: f64) {
        self.visual_radius = visual_radius;
    }

    pub fn add_force(&mut self, f: NVec3) {
        self.f += f;
    }

    pub fn reset_force(&mut self) {
        self.f = NVec3::zeros();
    }

    /// Separation from another body in display units
    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.x - self.x).norm()
    }

    /// Hit test of a display-space point in the xy plane against the visual disc
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x.x;
        let dy = py - self.x.y;
        dx * dx + dy * dy <= self.visual_radius * self.visual_radius
    }

    /// Drop the z component of position and velocity
    pub fn flatten(&mut self) {
        self.x.z = 0.0;
        self.v.z = 0.0;
        self.f.z = 0.0;
    }
}

/// Position and velocity captured as the reset baseline for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialCondition {
    pub x: NVec3,
    pub v: NVec3,
}
