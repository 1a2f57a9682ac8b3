//! Build simulation scenarios
//!
//! Produces the ordered body lists a `SimulationState` is populated from:
//! - the canonical solar system (Sun, eight planets, major moons) on circular orbits
//! - bodies mapped from a YAML-facing [`ScenarioConfig`]
//!
//! The anchor always comes first.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Color, NVec3};
use crate::simulation::units::{self, AU, EARTH_MASS, SUN_MASS};

const SUN_RADIUS: f64 = 696_340e3; // m
const SUN_VISUAL_RADIUS: f64 = 20.0;
const PLANET_MIN_VISUAL_RADIUS: f64 = 3.0;
const MOON_MIN_VISUAL_RADIUS: f64 = 1.5;

struct PlanetSpec {
    name: &'static str,
    earth_masses: f64,
    radius: f64, // m
    distance_au: f64,
    color: Color,
    visual_scale: f64,
}

struct MoonSpec {
    name: &'static str,
    parent: &'static str,
    mass: f64, // kg
    radius: f64, // m
    distance: f64, // m from parent
    color: Color,
    visual_scale: f64,
}

const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { name: "Mercury", earth_masses: 0.0553, radius: 2439.7e3, distance_au: 0.39, color: Color::rgb(169, 169, 169), visual_scale: 5.0 },
    PlanetSpec { name: "Venus", earth_masses: 0.815, radius: 6051.8e3, distance_au: 0.72, color: Color::rgb(255, 198, 73), visual_scale: 4.0 },
    PlanetSpec { name: "Earth", earth_masses: 1.0, radius: 6371e3, distance_au: 1.0, color: Color::rgb(100, 149, 237), visual_scale: 4.0 },
    PlanetSpec { name: "Mars", earth_masses: 0.107, radius: 3389.5e3, distance_au: 1.52, color: Color::rgb(205, 92, 92), visual_scale: 3.0 },
    PlanetSpec { name: "Jupiter", earth_masses: 317.8, radius: 69911e3, distance_au: 5.2, color: Color::rgb(255, 165, 0), visual_scale: 2.0 },
    PlanetSpec { name: "Saturn", earth_masses: 95.2, radius: 58232e3, distance_au: 9.5, color: Color::rgb(218, 165, 32), visual_scale: 1.8 },
    PlanetSpec { name: "Uranus", earth_masses: 14.5, radius: 25362e3, distance_au: 19.2, color: Color::rgb(64, 224, 208), visual_scale: 1.5 },
    PlanetSpec { name: "Neptune", earth_masses: 17.1, radius: 24622e3, distance_au: 30.1, color: Color::rgb(65, 105, 225), visual_scale: 1.5 },
];

const MOONS: [MoonSpec; 8] = [
    MoonSpec { name: "Moon", parent: "Earth", mass: 7.342e22, radius: 1737.4e3, distance: 384_400e3, color: Color::rgb(200, 200, 200), visual_scale: 2.0 },
    MoonSpec { name: "Io", parent: "Jupiter", mass: 8.9319e22, radius: 1821.6e3, distance: 421_700e3, color: Color::rgb(255, 255, 102), visual_scale: 1.5 },
    MoonSpec { name: "Europa", parent: "Jupiter", mass: 4.7998e22, radius: 1560.8e3, distance: 671_034e3, color: Color::rgb(210, 180, 140), visual_scale: 1.5 },
    MoonSpec { name: "Ganymede", parent: "Jupiter", mass: 1.4819e23, radius: 2634.1e3, distance: 1_070_412e3, color: Color::rgb(160, 160, 160), visual_scale: 1.5 },
    MoonSpec { name: "Callisto", parent: "Jupiter", mass: 1.0759e23, radius: 2410.3e3, distance: 1_882_709e3, color: Color::rgb(105, 105, 105), visual_scale: 1.5 },
    MoonSpec { name: "Titan", parent: "Saturn", mass: 1.3452e23, radius: 2574.7e3, distance: 1_221_870e3, color: Color::rgb(238, 203, 139), visual_scale: 1.5 },
    MoonSpec { name: "Titania", parent: "Uranus", mass: 3.527e21, radius: 788.4e3, distance: 435_910e3, color: Color::rgb(190, 190, 210), visual_scale: 1.5 },
    MoonSpec { name: "Triton", parent: "Neptune", mass: 2.139e22, radius: 1353.4e3, distance: 354_759e3, color: Color::rgb(176, 196, 222), visual_scale: 1.5 },
];

/// The Sun at rest at the origin
pub fn sun() -> Body {
    Body::new("Sun", SUN_MASS, SUN_RADIUS, NVec3::zeros(), NVec3::zeros())
        .anchor()
        .with_color(Color::YELLOW)
        .with_visual_radius(SUN_VISUAL_RADIUS)
}

/// A body on a circular orbit of radius `distance` (m) around `center`.
/// Placed on +x from the center, moving along +y relative to it
pub fn orbiting(name: &str, mass: f64, radius: f64, center: &Body, distance: f64) -> Body {
    let offset = NVec3::new(units::distance_to_display(distance), 0.0, 0.0);
    let speed = units::velocity_to_display(units::orbital_velocity(center.mass(), distance));
    let v = NVec3::new(0.0, speed, 0.0);
    Body::new(name, mass, radius, center.x + offset, center.v + v)
}

fn scaled_visual_radius(radius: f64, scale: f64, min: f64) -> f64 {
    (units::distance_to_display(radius) * scale).max(min)
}

/// Sun, planets and major moons in insertion order: anchor first, then each
/// planet, then moons after all planets
pub fn solar_system() -> Vec<Body> {
    let sun = sun();
    let mut bodies = Vec::with_capacity(1 + PLANETS.len() + MOONS.len());

    let planets: Vec<Body> = PLANETS.iter().map(|p| {
        orbiting(p.name, p.earth_masses * EARTH_MASS, p.radius, &sun, p.distance_au * AU)
            .with_color(p.color)
            .with_visual_radius(scaled_visual_radius(p.radius, p.visual_scale, PLANET_MIN_VISUAL_RADIUS))
    }).collect();

    let moons: Vec<Body> = MOONS.iter().filter_map(|m| {
        let parent = planets.iter().find(|p| p.name() == m.parent)?;
        Some(
            orbiting(m.name, m.mass, m.radius, parent, m.distance)
                .with_color(m.color)
                .with_visual_radius(scaled_visual_radius(m.radius, m.visual_scale, MOON_MIN_VISUAL_RADIUS)),
        )
    }).collect();

    bodies.push(sun);
    bodies.extend(planets);
    bodies.extend(moons);
    bodies
}

fn vec3(vals: &[f64]) -> NVec3 {
    NVec3::new(
        vals.first().copied().unwrap_or(0.0),
        vals.get(1).copied().unwrap_or(0.0),
        vals.get(2).copied().unwrap_or(0.0),
    )
}

impl From<&BodyConfig> for Body {
    fn from(bc: &BodyConfig) -> Self {
        let mut body = Body::new(bc.name.clone(), bc.mass, bc.radius, vec3(&bc.x), vec3(&bc.v));
        if bc.anchor {
            body = body.anchor();
        }
        if let Some(color) = bc.color {
            body = body.with_color(color);
        }
        if let Some(r) = bc.visual_radius {
            body = body.with_visual_radius(r);
        }
        body
    }
}

/// Runtime bundle constructed from a [`ScenarioConfig`]: the engine flags,
/// parameters and the initial bodies
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Self {
        let parameters = cfg.parameters();
        let engine = cfg.engine(&parameters);

        // Bodies: map `BodyConfig` -> runtime `Body`, canonical system if none given
        let bodies = if cfg.bodies.is_empty() {
            solar_system()
        } else {
            cfg.bodies.iter().map(Body::from).collect()
        };

        Self {
            engine,
            parameters,
            bodies,
        }
    }
}
