//! Конфиг стола: границы ставки из JSON.
//!
//! Все поля необязательны, по умолчанию – значения range-контрола
//! (`min = 0`, `max = 500`, `step = 1`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BetBounds, BoundsError, Chips};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

/// Сырые границы ставки, как они лежат в конфиге.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BetBoundsConfig {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl Default for BetBoundsConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 500,
            step: 1,
        }
    }
}

impl BetBoundsConfig {
    /// Проверить и превратить в доменные границы.
    pub fn validate(&self) -> Result<BetBounds, BoundsError> {
        BetBounds::new(Chips(self.min), Chips(self.max), Chips(self.step))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub bounds: BetBoundsConfig,
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn bet_bounds(&self) -> Result<BetBounds, ConfigError> {
        Ok(self.bounds.validate()?)
    }
}
