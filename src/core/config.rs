//! Manager configuration
//!
//! A plain settings value that can be deserialized (e.g. from JSON) and
//! applied to a manager with [`LogManager::configure`](super::LogManager::configure).
//!
//! ```
//! use log_pipeline::{ManagerConfig, Severity};
//!
//! let config = ManagerConfig::from_json(r#"{ "level": "debug", "autostart": false }"#).unwrap();
//! assert_eq!(config.level, Severity::Debug);
//! assert!(config.file.is_none());
//! ```

use super::error::{LoggerError, Result};
use super::severity::Severity;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Global threshold
    #[serde(deserialize_with = "deserialize_severity")]
    pub level: Severity,

    /// Optional file sink; truncated when applied
    pub file: Option<PathBuf>,

    /// Start the consumer once the rest of the config is applied
    pub autostart: bool,
}

impl ManagerConfig {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.file {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::config("ManagerConfig", "file path is empty"));
            }
        }
        Ok(())
    }
}

// Accepts the same spellings as `Severity::from_str` ("warning", "trace3", ...).
fn deserialize_severity<'de, D>(deserializer: D) -> std::result::Result<Severity, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}
