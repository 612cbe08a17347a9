//! Runtime configuration.
//!
//! Loaded from a TOML file (default `swap.toml`). Every field has a default,
//! so an empty file or a missing one yields a working configuration.
//!
//! ```toml
//! order_capacity = 1024
//! event_capacity = 1024
//! display_decimals = 18
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::types::units::MAX_DECIMALS;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Swap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwapConfig {
    /// Orders to pre-allocate in the registry
    pub order_capacity: usize,
    /// Records to pre-allocate in the event log
    pub event_capacity: usize,
    /// Decimals used when rendering amounts in logs
    pub display_decimals: u32,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            order_capacity: 1024,
            event_capacity: 1024,
            display_decimals: 18,
        }
    }
}

impl SwapConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SwapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the given TOML file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("{} not found, using default config", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Reject values the swap cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_capacity == 0 {
            return Err(ConfigError::Invalid("order_capacity must be > 0".into()));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid("event_capacity must be > 0".into()));
        }
        if self.display_decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "display_decimals must be <= {MAX_DECIMALS}"
            )));
        }
        Ok(())
    }
}
