//! Error types for scenario loading

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body `{body}`: `{field}` needs 2 or 3 components, got {len}")]
    Dimension { body: String, field: &'static str, len: usize },

    #[error("body `{body}`: `{field}` must be positive, got {value}")]
    NonPositive { body: String, field: &'static str, value: f64 },

    #[error("body `{body}`: `{field}` has a non-finite component")]
    NonFinite { body: String, field: &'static str },

    #[error("parameter `{field}` out of range, got {value}")]
    InvalidParameter { field: &'static str, value: f64 },

    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    #[error("time scale bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    TimeScaleBounds { min: f64, max: f64 },
}
