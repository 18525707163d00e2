//! DASH audio track bridge
//!
//! Keeps a video player's audio track list in sync with an adaptive-streaming
//! engine that carries several languages and roles: imports the engine's tracks
//! into the player, removes the native tracks some platforms add on load, and
//! forwards the user's track switches back to the engine.

pub mod bridge;
pub mod capability;
pub mod config;
pub mod config_file;
pub mod error;
pub mod sim;
pub mod track;

#[cfg(test)]
mod integration;

pub use bridge::{setup_audio_tracks, AudioTrackBridge, BridgeEvent, BridgeStats};
pub use capability::{ListenerId, PlayerSurface, StreamEngine};
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use track::{derive_label, ActiveLanguageEvent, PlayerAudioTrack, StreamTrackDescriptor};
