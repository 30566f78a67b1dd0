//! Which endgames a registry should know about.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::endgame::{EndgameKind, ScaleKind, ValueKind};
use crate::error::EndgameError;

/// Code lists for the two evaluator families, read from TOML:
///
/// ```toml
/// value = ["KPK", "KBNK"]
/// scale = ["KRPKR"]
/// ```
///
/// A missing list falls back to the standard set for that family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub value: Vec<String>,
    pub scale: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            value: ValueKind::REGISTERED.iter().map(|k| k.code().to_string()).collect(),
            scale: ScaleKind::REGISTERED.iter().map(|k| k.code().to_string()).collect(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, EndgameError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EndgameError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EndgameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            value = config.value.len(),
            scale = config.scale.len(),
            "loaded registry config"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
