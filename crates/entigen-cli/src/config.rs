use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "entigen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error in {path}: {source}")]
    TomlDecode {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from `entigen.toml`.
///
/// Every value is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntigenConfig {
    pub database: DatabaseConfig,
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub schema: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub prefix: Option<String>,
    pub namespace: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub ignore_tables: Vec<String>,
}

/// Load the explicit config file, or `entigen.toml` when it exists, or defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<EntigenConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(EntigenConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<EntigenConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlDecode {
        path: path.to_path_buf(),
        source,
    })
}
