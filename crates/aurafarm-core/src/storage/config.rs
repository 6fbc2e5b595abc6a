//! TOML-based application configuration.
//!
//! Stores:
//! - Rule thresholds (policy values for the task engine)
//! - Auto-refresh period
//! - Simulated data settings
//! - Optional snapshot file to read instead of simulated data
//!
//! Configuration is stored at `~/.config/aurafarm/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::dashboard::DEFAULT_REFRESH_SECS;
use crate::error::ConfigError;
use crate::rules::{RuleEngine, RuleThresholds};

/// Refresh scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Simulated data settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Perturb the baseline readings on each refresh
    #[serde(default)]
    pub jitter: bool,
    /// Fixed RNG seed; unset means a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/aurafarm/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file read on refresh instead of simulated data.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    #[serde(default)]
    pub thresholds: RuleThresholds,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

fn default_interval_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Replace the leaf at `key`, typed after the value it replaces.
    ///
    /// A null leaf has no type to go by: it becomes a number when `value`
    /// parses as one, unless `text_for_null` is set.
    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
        text_for_null: bool,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                // "none" clears optional fields; required ones reject the
                // null when the tree is deserialized back into a Config.
                let new_value = match (existing, value) {
                    (_, "none" | "null") => serde_json::Value::Null,
                    (serde_json::Value::Bool(_), _) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    (serde_json::Value::Number(_), _) => parse_number(value)
                        .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
                    (serde_json::Value::Null, _) if text_for_null => {
                        serde_json::Value::String(value.into())
                    }
                    (serde_json::Value::Null, _) => parse_number(value)
                        .unwrap_or_else(|| serde_json::Value::String(value.into())),
                    (serde_json::Value::Object(_) | serde_json::Value::Array(_), _) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    (serde_json::Value::String(_), _) => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, or defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or carries
    /// invalid thresholds.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        cfg.thresholds.validate()?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Update a value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value does not fit the
    /// field's type, or the resulting thresholds are invalid. On error the
    /// config is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let base = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        let attempt = |text_for_null: bool| -> Result<Config, ConfigError> {
            let mut json = base.clone();
            Self::set_json_value_by_path(&mut json, key, value, text_for_null)?;
            serde_json::from_value(json).map_err(|e| invalid(e.to_string()))
        };

        // Unset optionals accept "2024" as a path as well as a seed.
        let updated = attempt(false).or_else(|e| match e {
            ConfigError::InvalidValue { .. } => attempt(true).map_err(|_| e),
            other => Err(other),
        })?;
        updated.thresholds.validate()?;
        *self = updated;
        Ok(())
    }

    /// Rule engine using the configured thresholds.
    pub fn engine(&self) -> RuleEngine {
        RuleEngine::with_thresholds(self.thresholds.clone())
    }
}

fn parse_number(value: &str) -> Option<serde_json::Value> {
    if let Ok(n) = value.parse::<u64>() {
        Some(serde_json::Value::Number(n.into()))
    } else if let Ok(n) = value.parse::<f64>() {
        serde_json::Number::from_f64(n).map(serde_json::Value::Number)
    } else {
        None
    }
}
