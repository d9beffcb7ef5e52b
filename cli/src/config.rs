//! Simulation configuration.
//!
//! Loaded from a TOML file via [`CinderConfig::from_toml_file`]; every field
//! has a default so an empty file is valid. Command-line flags override file
//! values.

use std::path::Path;

use cinder_types::{AccountId, BurnParams};
use cinder_utils::LogFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(String),

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("cannot serialize config: {0}")]
    Serialize(String),

    #[error("invalid burner account: {0}")]
    InvalidAccount(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CinderConfig {
    #[serde(default)]
    pub log_format: LogFormat,

    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Hex account that burns in simulations.
    #[serde(default = "default_burner_account")]
    pub burner_account: String,

    /// Whole tokens credited to the burner before the first burn.
    #[serde(default = "default_initial_balance")]
    pub initial_balance: u64,

    #[serde(default = "default_genesis_height")]
    pub genesis_height: u64,

    /// Unix seconds of the genesis block.
    #[serde(default = "default_genesis_timestamp")]
    pub genesis_timestamp: u64,

    #[serde(default = "default_block_time_secs")]
    pub block_time_secs: u64,

    #[serde(default)]
    pub params: BurnParams,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_burner_account() -> String {
    AccountId::from_low_u64(1).to_string()
}

fn default_initial_balance() -> u64 {
    1_000
}

fn default_genesis_height() -> u64 {
    1
}

fn default_genesis_timestamp() -> u64 {
    1_700_000_000
}

fn default_block_time_secs() -> u64 {
    12
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CinderConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn burner(&self) -> Result<AccountId, ConfigError> {
        self.burner_account
            .parse()
            .map_err(|e| ConfigError::InvalidAccount(format!("{}: {e}", self.burner_account)))
    }
}

impl Default for CinderConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            burner_account: default_burner_account(),
            initial_balance: default_initial_balance(),
            genesis_height: default_genesis_height(),
            genesis_timestamp: default_genesis_timestamp(),
            block_time_secs: default_block_time_secs(),
            params: BurnParams::default(),
        }
    }
}
