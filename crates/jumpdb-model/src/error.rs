//! Errors raised while loading pipeline configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown field '{name}' in {section}")]
    UnknownField { name: String, section: &'static str },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
