//! Analyzer configuration
//!
//! ROM / version identity stamped on every result plus the defaults for a
//! repeat run. The host can pass it as JSON; missing keys fall back to the
//! defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ROM_ID: &str = "12ROM";
pub const DEFAULT_VERSION: &str = "v1.0.0";
pub const DEFAULT_BUILD: &str = "2026-01-02T07:30";
pub const DEFAULT_REPEAT_COUNT: u32 = 10;
pub const DEFAULT_REPEAT_INTERVAL_MS: u32 = 300;

/// Errors from loading or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Repeat count must be at least 1")]
    ZeroRepeatCount,

    #[error("Repeat interval must be at least 1 ms")]
    ZeroInterval,

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identity and repeat settings for one session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RomConfig {
    pub rom_id: String,
    pub version: String,
    /// Build tag, only reported in the load banner
    pub build: String,
    pub repeat_count: u32,
    pub repeat_interval_ms: u32,
}

impl Default for RomConfig {
    fn default() -> Self {
        Self {
            rom_id: DEFAULT_ROM_ID.to_string(),
            version: DEFAULT_VERSION.to_string(),
            build: DEFAULT_BUILD.to_string(),
            repeat_count: DEFAULT_REPEAT_COUNT,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL_MS,
        }
    }
}

impl RomConfig {
    /// Parse and validate a JSON config
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_repeat(self.repeat_count, self.repeat_interval())
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.repeat_interval_ms))
    }
}

/// A repeat run needs at least one tick and a non-zero period
pub fn validate_repeat(count: u32, interval: Duration) -> Result<(), ConfigError> {
    if count == 0 {
        return Err(ConfigError::ZeroRepeatCount);
    }
    if interval.is_zero() {
        return Err(ConfigError::ZeroInterval);
    }
    Ok(())
}
