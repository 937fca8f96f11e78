use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by a caller-supplied tree accessor
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core library errors
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tree accessor failed")]
    Accessor(#[source] BoxError),

    #[error("Failed to write rendered tree")]
    Write(#[from] std::io::Error),

    #[error("IO error at path '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Wrap an arbitrary accessor failure
    pub fn accessor(err: impl Into<BoxError>) -> Self {
        TreeError::Accessor(err.into())
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
