//! High-level runtime engine settings
//!
//! Selects the dimension (planar/spatial) and carries the pause flag and the
//! user time scale. Owned by the `SimulationState` and read by each step

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    #[default]
    Planar, // 2D, z pinned to 0, semi-implicit Euler
    Spatial, // 3D, per-body damped Euler
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub dimension: Dimension,
    pub paused: bool,
    pub time_scale: f64, // multiplier on real elapsed time
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            dimension: Dimension::Planar,
            paused: false,
            time_scale: 1.0,
        }
    }
}

impl Engine {
    pub fn is_spatial(&self) -> bool {
        self.dimension == Dimension::Spatial
    }
}
