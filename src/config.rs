//! Configuration management for TallyChain

use crate::error::{ChainError, Result};
use crate::transaction::SENTINEL_KEY;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "tallychain.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub genesis: GenesisConfig,
    #[serde(default)]
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenesisConfig {
    #[serde(default = "default_sentinel_key")]
    pub sender_key: String,
    #[serde(default = "default_sentinel_key")]
    pub receiver_key: String,
    /// Fixed genesis timestamp in UNIX seconds; the current time when unset.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            sender_key: default_sentinel_key(),
            receiver_key: default_sentinel_key(),
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub index_policy: IndexPolicy,
}

/// How `append` numbers a new block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// The new block takes the next free position (`len`).
    #[default]
    Sequential,
    /// The new block repeats the current tail's index (`len - 1`).
    RepeatTail,
}

impl IndexPolicy {
    pub fn next_index(self, chain_len: usize) -> u64 {
        match self {
            IndexPolicy::Sequential => chain_len as u64,
            IndexPolicy::RepeatTail => chain_len.saturating_sub(1) as u64,
        }
    }
}

fn default_sentinel_key() -> String {
    SENTINEL_KEY.to_string()
}

/// Load `tallychain.toml` from the working directory, falling back to
/// defaults when the file is absent.
pub fn load_config() -> Result<Config> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from(path)
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = fs::read_to_string(path.as_ref())?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;

    // Validate critical values
    if config.genesis.sender_key.is_empty() {
        return Err(ChainError::ConfigError("genesis.sender_key must not be empty".to_string()));
    }

    if config.genesis.receiver_key.is_empty() {
        return Err(ChainError::ConfigError("genesis.receiver_key must not be empty".to_string()));
    }

    Ok(config)
}
