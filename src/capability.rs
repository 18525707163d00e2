//! Capabilities the bridge consumes from its two collaborators
//!
//! The player framework and the stream engine evolve independently; the bridge
//! only ever talks to them through these two traits. Both are implemented by the
//! in-memory doubles in [`crate::sim`].

use crate::track::{PlayerAudioTrack, StreamTrackDescriptor};

/// Handle for a listener registration, used to deregister it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The player framework's playback surface and its audio track list
pub trait PlayerSurface {
    /// Enumerate the audio track list in container order
    fn audio_tracks(&self) -> Vec<PlayerAudioTrack>;

    /// Number of entries in the audio track list
    fn audio_track_count(&self) -> usize {
        self.audio_tracks().len()
    }

    /// Drop every audio track, native or not
    fn clear_audio_tracks(&mut self);

    /// Append a track to the list
    fn add_audio_track(&mut self, track: PlayerAudioTrack);

    /// Remove the track with this id; false if it was not in the list
    fn remove_audio_track(&mut self, id: &str) -> bool;

    /// Set the enabled flag of the track with this id; false if it was not found
    fn set_audio_track_enabled(&mut self, id: &str, enabled: bool) -> bool;

    /// Subscribe to `change` notifications of the audio track list
    fn add_track_change_listener(&mut self) -> ListenerId;

    /// Subscribe once to the first "data ready" (`loadeddata`) signal
    fn once_data_ready(&mut self) -> ListenerId;

    /// Release a subscription made through this surface
    fn remove_listener(&mut self, id: ListenerId);

    /// Raise an event on the player for downstream listeners
    fn trigger(&mut self, event: &str, payload: serde_json::Value);
}

/// The adaptive-streaming engine
pub trait StreamEngine {
    /// Ordered audio catalog
    fn audio_languages_and_roles(&self) -> Vec<StreamTrackDescriptor>;

    /// The track the engine is currently playing, when it can tell
    fn active_audio_track(&self) -> Option<StreamTrackDescriptor> {
        None
    }

    /// Switch the engine's audio to this language and role
    fn select_audio_language(&mut self, language: &str, role: Option<&str>);

    /// Subscribe to the engine's `unloading` signal
    fn add_unloading_listener(&mut self) -> ListenerId;

    /// Release an `unloading` subscription
    fn remove_unloading_listener(&mut self, id: ListenerId);
}
