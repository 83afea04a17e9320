//! Configuration Management
//!
//! Loads harness configuration from TOML files.
//! Configuration includes:
//! - Buffer settings (capacity, storage variant)
//! - Logging settings (filter directive, output format)

use crate::buffer::Variant;
use crate::errors::{self, RingError};
use crate::observability::telemetry::LOG_ENV_VAR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

/// Largest capacity the harness will allocate from config or flags.
pub const MAX_CAPACITY: usize = 1 << 24;

pub const CAPACITY_ENV_VAR: &str = "RINGFIFO_CAPACITY";
pub const VARIANT_ENV_VAR: &str = "RINGFIFO_VARIANT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line events (default)
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    #[serde(default = "default_capacity")]
    pub capacity: NonZeroUsize,
    #[serde(default)]
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "warn" or "ringfifo=trace"
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            variant: Variant::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_capacity() -> NonZeroUsize {
    NonZeroUsize::MIN
}
fn default_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load from `path` (or the default locations), then apply the
    /// `RINGFIFO_*` environment and validate.
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading overrides through `lookup` instead of
    /// the process environment.
    pub fn load_with<F>(path: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str(&content).context("Failed to parse config")?
            }
            None => {
                let home_config = dirs::home_dir().map(|h| h.join(".config/ringfifo/config.toml"));

                let mut default_paths = vec![std::path::PathBuf::from("ringfifo.toml")];
                default_paths.extend(home_config);

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        loaded = Some(toml::from_str(&content).with_context(|| {
                            format!("Failed to parse config {}", p.display())
                        })?);
                        break;
                    }
                }
                loaded.unwrap_or_default()
            }
        };

        config.apply_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Override settings from environment-style lookups.
    ///
    /// Values that fail to parse are ignored, matching how a missing variable
    /// is treated.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(capacity) = lookup(CAPACITY_ENV_VAR) {
            if let Ok(n) = capacity.trim().parse::<NonZeroUsize>() {
                self.buffer.capacity = n;
            }
        }
        if let Some(variant) = lookup(VARIANT_ENV_VAR) {
            if let Ok(v) = variant.parse::<Variant>() {
                self.buffer.variant = v;
            }
        }
        if let Some(level) = lookup(LOG_ENV_VAR) {
            self.logging.level = level;
        }
    }

    /// Reject settings that parse but cannot be used.
    pub fn validate(&self) -> errors::Result<()> {
        if self.buffer.capacity.get() > MAX_CAPACITY {
            return Err(RingError::Config(format!(
                "buffer.capacity {} exceeds the maximum of {}",
                self.buffer.capacity, MAX_CAPACITY
            )));
        }
        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            RingError::Config(format!(
                "invalid logging.level '{}': {}",
                self.logging.level, e
            ))
        })?;
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
