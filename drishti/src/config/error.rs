//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered to TOML
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Values parsed but are out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}
