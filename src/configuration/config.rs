//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – initial runtime flags (dimension, pause, time scale)
//! - [`ParametersConfig`] – numerical tuning, each field falling back to the built-in value
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional. With no `bodies` the canonical solar system is built.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   spatial: false          # false -> planar, true -> spatial
//!   paused: false
//!   time_scale: 1.0
//!
//! parameters:
//!   time_scale_min: 0.1
//!   time_scale_max: 10.0
//!   min_separation: 1.0e-3  # display units
//!   spatial_damping: 0.1
//!   previous_step: 0.016
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     radius: 6.9634e8
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     anchor: true
//!     visual_radius: 20.0
//!     color: { r: 255, g: 255, b: 0 }
//!   - name: Earth
//!     mass: 5.972e24
//!     radius: 6.371e6
//!     x: [149.6, 0.0]
//!     v: [0.0, 2.978e-5]
//! ```
//!
//! Positions are display units, velocities display units per simulated second.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::{ConfigError, ConfigResult};
use crate::simulation::engine::{Dimension, Engine};
use crate::simulation::params::Parameters;
use crate::simulation::states::Color;

/// Initial runtime flags
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub spatial: bool, // `false` - planar simulation, `true` - spatial simulation
    pub paused: bool,
    pub time_scale: Option<f64>, // clamped into the parameter bounds
}

/// Overrides for [`Parameters`]
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub time_scale_min: Option<f64>,
    pub time_scale_max: Option<f64>,
    pub min_separation: Option<f64>, // display units
    pub spatial_damping: Option<f64>,
    pub previous_step: Option<f64>,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub radius: f64, // physical radius (m)
    pub x: Vec<f64>, // [x, y] or [x, y, z], display units
    pub v: Vec<f64>, // display units per simulated second
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub visual_radius: Option<f64>,
    #[serde(default)]
    pub anchor: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from a YAML string
    pub fn from_yaml_str(src: &str) -> ConfigResult<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a scenario file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&src)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let params = self.parameters();
        if !(params.time_scale_min > 0.0 && params.time_scale_min <= params.time_scale_max) {
            return Err(ConfigError::TimeScaleBounds {
                min: params.time_scale_min,
                max: params.time_scale_max,
            });
        }

        for (field, value, allow_zero) in [
            ("min_separation", params.min_separation, true),
            ("spatial_damping", params.spatial_damping, false),
            ("previous_step", params.previous_step, true),
        ] {
            let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
            if !(value.is_finite() && in_range) {
                return Err(ConfigError::InvalidParameter { field, value });
            }
        }

        let mut seen = HashSet::new();
        for body in &self.bodies {
            body.validate()?;
            if !seen.insert(body.name.as_str()) {
                return Err(ConfigError::DuplicateName(body.name.clone()));
            }
        }
        Ok(())
    }

    /// Runtime parameters: built-in defaults with this config's overrides applied
    pub fn parameters(&self) -> Parameters {
        let p = &self.parameters;
        let mut params = Parameters::default();
        if let Some(v) = p.time_scale_min {
            params.time_scale_min = v;
        }
        if let Some(v) = p.time_scale_max {
            params.time_scale_max = v;
        }
        if let Some(v) = p.min_separation {
            params.min_separation = v;
        }
        if let Some(v) = p.spatial_damping {
            params.spatial_damping = v;
        }
        if let Some(v) = p.previous_step {
            params.previous_step = v;
        }
        params
    }

    /// Runtime engine flags, time scale clamped into `params`' bounds
    pub fn engine(&self, params: &Parameters) -> Engine {
        let e = &self.engine;
        Engine {
            dimension: if e.spatial { Dimension::Spatial } else { Dimension::Planar },
            paused: e.paused,
            time_scale: params.clamp_time_scale(e.time_scale.unwrap_or(1.0)),
        }
    }
}

impl BodyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(self.mass > 0.0) {
            return Err(ConfigError::NonPositive { body: self.name.clone(), field: "mass", value: self.mass });
        }
        if !(self.radius > 0.0) {
            return Err(ConfigError::NonPositive { body: self.name.clone(), field: "radius", value: self.radius });
        }
        for (field, vals) in [("x", &self.x), ("v", &self.v)] {
            if !(2..=3).contains(&vals.len()) {
                return Err(ConfigError::Dimension { body: self.name.clone(), field, len: vals.len() });
            }
            if vals.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::NonFinite { body: self.name.clone(), field });
            }
        }
        Ok(())
    }
}
