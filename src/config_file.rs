//! Configuration file support
//!
//! Loads bridge configuration, logging settings and an optional scenario from
//! TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{BridgeConfig, DEFAULT_CHANGE_EVENT, DEFAULT_ID_PREFIX};
use crate::error::Result;
use crate::sim::Scenario;

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Bridge settings
    #[serde(default)]
    pub bridge: BridgeSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Scripted media load for the demo binary
    pub scenario: Option<Scenario>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// Reserved prefix for synthesized track ids
    pub id_prefix: Option<String>,
    /// Name of the active-language event
    pub change_event: Option<String>,
    /// Log unresolved selections at warn level
    pub report_unresolved: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl LoggingSettings {
    pub fn is_json(&self) -> bool {
        self.format.as_deref() == Some("json")
    }
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            bridge: BridgeSettings {
                id_prefix: Some(DEFAULT_ID_PREFIX.to_string()),
                change_event: Some(DEFAULT_CHANGE_EVENT.to_string()),
                report_unresolved: Some(true),
            },
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
            scenario: Some(Scenario::demo()),
        }
    }

    /// Convert to BridgeConfig, rejecting values the bridge cannot work with
    pub fn into_bridge_config(self) -> Result<BridgeConfig> {
        let defaults = BridgeConfig::default();
        let config = BridgeConfig {
            id_prefix: self.bridge.id_prefix.unwrap_or(defaults.id_prefix),
            change_event: self.bridge.change_event.unwrap_or(defaults.change_event),
            report_unresolved: self
                .bridge
                .report_unresolved
                .unwrap_or(defaults.report_unresolved),
            log_level: self
                .logging
                .map(|l| l.level)
                .unwrap_or(defaults.log_level),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
