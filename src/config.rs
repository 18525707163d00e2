//! Bridge configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BridgeError, Result};

/// Prefix carried by every track id the bridge synthesizes
pub const DEFAULT_ID_PREFIX: &str = "dash-audio-";

/// Event raised on the player when the active audio language changes
pub const DEFAULT_CHANGE_EVENT: &str = "shakaaudiotrackchange";

/// Bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Reserved prefix for synthesized track ids; anything without it is foreign
    pub id_prefix: String,

    /// Name of the active-language event triggered on the player
    pub change_event: String,

    /// Log unresolved selections at warn level instead of debug
    pub report_unresolved: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            change_event: DEFAULT_CHANGE_EVENT.to_string(),
            report_unresolved: true,
            log_level: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Synthesize the track id for the descriptor at `index`
    pub fn track_id(&self, index: usize) -> String {
        format!("{}{}", self.id_prefix, index)
    }

    /// Whether `id` was synthesized by the bridge
    pub fn is_synthesized_id(&self, id: &str) -> bool {
        id.starts_with(&self.id_prefix)
    }

    /// Reject values the bridge cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.id_prefix.is_empty() {
            return Err(BridgeError::Config(
                "id_prefix must not be empty, every track would look synthesized".to_string(),
            ));
        }
        if self.change_event.is_empty() {
            return Err(BridgeError::Config("change_event must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: BridgeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
