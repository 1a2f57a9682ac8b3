pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyRole, Color, InitialCondition, NVec3};
pub use simulation::forces::{pair_force, ForceAccumulator, ForceTerm, NewtonianGravity};
pub use simulation::integrator::{planar_step, spatial_step};
pub use simulation::engine::{Dimension, Engine};
pub use simulation::params::Parameters;
pub use simulation::scenario::{solar_system, Scenario};
pub use simulation::system::SimulationState;

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};
pub use configuration::error::{ConfigError, ConfigResult};

pub use benchmark::benchmark::{bench_gravity, bench_steps, BenchRow};
