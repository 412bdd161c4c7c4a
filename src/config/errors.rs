use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read configuration at [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Configuration is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration key [{key}] has an invalid value: {message}")]
    InvalidValue {
        key: String,
        message: String
    },
    #[error("Configuration key [{key}] names unknown column [{column}]")]
    UnknownColumn {
        key: String,
        column: String
    }
}

impl ConfigError {
    pub fn invalid_value(key: &str, message: impl ToString) -> Self {
        Self::InvalidValue { key: key.to_string(), message: message.to_string() }
    }

    pub fn unknown_column(key: &str, column: &str) -> Self {
        Self::UnknownColumn { key: key.to_string(), column: column.to_string() }
    }
}
