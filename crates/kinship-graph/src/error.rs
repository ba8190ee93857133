//! Error types for engine configuration

use thiserror::Error;

/// Errors raised while loading or validating engine configuration
///
/// Graph operations themselves are total and never fail; bad relationship
/// data degrades to an incomplete result instead.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
