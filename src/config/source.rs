use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use toml::Table;
use tracing::debug;

use crate::config::errors::ConfigError;

/// Key-value view over a parsed TOML configuration document.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: Option<PathBuf>,
    table: Table
}

impl ConfigSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let table = read_table(&path)?;

        debug!("Loaded configuration [{}] with {} keys", path.display(), table.len());

        Ok(Self { path: Some(path), table })
    }

    //NOTE: sources built from a string have nothing to reload
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            self.table = read_table(path)?;
            debug!("Reloaded configuration [{}]", path.display());
        }

        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// `default` when the key is absent, `InvalidValue` when it has the wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.table.get(key) {
            Some(value) => value.clone().try_into()
                .map_err(|error| ConfigError::invalid_value(key, error)),
            None => Ok(default)
        }
    }
}

impl FromStr for ConfigSource {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(Self { path: None, table: toml::from_str(content)? })
    }
}

fn read_table(path: &Path) -> Result<Table, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

    Ok(toml::from_str(&content)?)
}
