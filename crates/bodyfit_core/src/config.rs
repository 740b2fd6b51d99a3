//! JSON configuration files.
//!
//! Every configurable type derives `Deserialize` with `#[serde(default)]`,
//! so a file only needs the fields it overrides.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> ConfigResult<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(value)
}
