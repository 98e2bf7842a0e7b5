//! Store configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional config file.
pub const CONFIG_ENV_VAR: &str = "RHINO_CONFIG";

/// Default cap on the quantity of a single line item.
pub const DEFAULT_MAX_QUANTITY: i64 = 9999;

/// Errors found while validating a loaded configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Store name is blank.
    #[error("Store name must not be empty")]
    EmptyStoreName,

    /// Currency is not a three-letter code.
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Quantity cap below one.
    #[error("Quantity cap must be at least 1, got {0}")]
    InvalidQuantityCap(i64),
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StoreConfig {
    /// Load config from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: StoreConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Load the file named by `RHINO_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::EmptyStoreName);
        }

        let code = &self.store.currency;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCurrencyCode(code.clone()));
        }

        if self.store.max_quantity_per_item < 1 {
            return Err(ConfigError::InvalidQuantityCap(
                self.store.max_quantity_per_item,
            ));
        }

        Ok(())
    }
}

/// Store metadata and cart limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code prices are quoted in.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Highest quantity a single line item may hold.
    #[serde(default = "default_max_quantity")]
    pub max_quantity_per_item: i64,
}

fn default_store_name() -> String {
    "RhinoFuse".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_max_quantity() -> i64 {
    DEFAULT_MAX_QUANTITY
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
            max_quantity_per_item: default_max_quantity(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive (e.g. `info` or `rhino_commerce=debug`).
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}
