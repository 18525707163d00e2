//! Scripted media loads
//!
//! A scenario describes the engine catalog, the native tracks a platform adds
//! before the bridge is set up, and a list of steps to replay. Scenarios are
//! read from the `[scenario]` table of the config file.

use serde::{Deserialize, Serialize};

use crate::config::BridgeConfig;
use crate::track::StreamTrackDescriptor;

use super::{MemoryEngine, MemoryPlayer, Session};

/// One step of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// The platform adds its own audio track
    InjectNative {
        id: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        enabled: bool,
    },
    /// The player signals its first frame of data
    DataReady,
    /// The user picks a track by id
    Select { id: String },
    /// The engine unloads the media
    Unload,
}

/// Scripted media load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Catalog index the engine reports as playing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<usize>,
    /// Native track ids present before setup
    #[serde(default)]
    pub native_tracks: Vec<String>,
    /// Engine audio catalog
    pub tracks: Vec<StreamTrackDescriptor>,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// English plus a French dub, with a native track that shows up late
    pub fn demo() -> Self {
        Self {
            active: None,
            native_tracks: vec!["native-0".to_string()],
            tracks: vec![
                StreamTrackDescriptor::new("en"),
                StreamTrackDescriptor::with_role("fr", "dub"),
            ],
            steps: vec![
                ScenarioStep::InjectNative {
                    id: "native-1".to_string(),
                    label: String::new(),
                    enabled: true,
                },
                ScenarioStep::DataReady,
                ScenarioStep::Select {
                    id: "dash-audio-1".to_string(),
                },
                ScenarioStep::Unload,
                ScenarioStep::Select {
                    id: "dash-audio-0".to_string(),
                },
            ],
        }
    }

    /// Set up the bridge and replay every step
    pub fn run(&self, config: BridgeConfig) -> Session {
        let mut player = MemoryPlayer::new();
        for id in &self.native_tracks {
            player.inject_native(id, "", "und", true);
        }

        let mut engine = MemoryEngine::new(self.tracks.clone());
        if let Some(index) = self.active {
            engine = engine.with_active(index);
        }

        let mut session = Session::start(player, engine, config);
        for (number, step) in self.steps.iter().enumerate() {
            tracing::debug!("Step {}: {:?}", number + 1, step);
            match step {
                ScenarioStep::InjectNative { id, label, enabled } => {
                    session.inject_native(id, label, "und", *enabled)
                }
                ScenarioStep::DataReady => session.data_ready(),
                ScenarioStep::Select { id } => {
                    if !session.select(id) {
                        tracing::warn!("Step {}: no audio track with id {:?}", number + 1, id);
                    }
                }
                ScenarioStep::Unload => session.unload(),
            }
        }
        session
    }
}
