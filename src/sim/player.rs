//! In-memory player framework

use crate::bridge::BridgeEvent;
use crate::capability::{ListenerId, PlayerSurface};
use crate::track::{ActiveLanguageEvent, PlayerAudioTrack};

/// A player whose audio track list lives in memory
///
/// Mutations of the enabled flags queue a `change` notification for every
/// registered change listener; notifications queued while one is already
/// pending are merged into it.
#[derive(Debug, Default)]
pub struct MemoryPlayer {
    tracks: Vec<PlayerAudioTrack>,
    change_listeners: Vec<ListenerId>,
    data_ready_listeners: Vec<ListenerId>,
    next_listener: u64,
    pending: Vec<BridgeEvent>,
    triggered: Vec<(String, serde_json::Value)>,
}

impl MemoryPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current audio track list
    pub fn tracks(&self) -> &[PlayerAudioTrack] {
        &self.tracks
    }

    /// Events raised through `trigger`, in order
    pub fn triggered(&self) -> &[(String, serde_json::Value)] {
        &self.triggered
    }

    /// Active-language payloads raised under `event`
    pub fn active_language_events(&self, event: &str) -> Vec<ActiveLanguageEvent> {
        self.triggered
            .iter()
            .filter(|(name, _)| name == event)
            .filter_map(|(_, payload)| ActiveLanguageEvent::from_payload(payload))
            .collect()
    }

    pub fn change_listener_count(&self) -> usize {
        self.change_listeners.len()
    }

    pub fn data_ready_listener_count(&self) -> usize {
        self.data_ready_listeners.len()
    }

    /// Add a track the way a platform media stack would, bypassing the bridge
    pub fn inject_native(&mut self, id: &str, label: &str, language: &str, enabled: bool) {
        self.tracks
            .push(PlayerAudioTrack::new(id, label, language, enabled));
    }

    /// Switch to the track with this id, disabling every other track
    ///
    /// Returns false if no such track exists.
    pub fn user_select(&mut self, id: &str) -> bool {
        if !self.tracks.iter().any(|t| t.id == id) {
            return false;
        }
        let mut changed = false;
        for track in &mut self.tracks {
            let enabled = track.id == id;
            if track.enabled != enabled {
                track.enabled = enabled;
                changed = true;
            }
        }
        if changed {
            self.notify_change();
        }
        true
    }

    /// Flip a single track's flag without touching the others
    pub fn user_set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        self.set_audio_track_enabled(id, enabled)
    }

    /// Signal that the first frame of media data is available
    ///
    /// One-shot listeners are consumed.
    pub fn fire_data_ready(&mut self) {
        if self.data_ready_listeners.is_empty() {
            return;
        }
        self.data_ready_listeners.clear();
        self.pending.push(BridgeEvent::DataReady);
    }

    /// Drain the queued notifications
    pub fn take_pending(&mut self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.pending)
    }

    fn notify_change(&mut self) {
        if self.change_listeners.is_empty() {
            return;
        }
        if !self.pending.contains(&BridgeEvent::TrackListChanged) {
            self.pending.push(BridgeEvent::TrackListChanged);
        }
    }

    fn allocate_listener(&mut self) -> ListenerId {
        self.next_listener += 1;
        ListenerId(self.next_listener)
    }
}

impl PlayerSurface for MemoryPlayer {
    fn audio_tracks(&self) -> Vec<PlayerAudioTrack> {
        self.tracks.clone()
    }

    fn audio_track_count(&self) -> usize {
        self.tracks.len()
    }

    fn clear_audio_tracks(&mut self) {
        self.tracks.clear();
    }

    fn add_audio_track(&mut self, track: PlayerAudioTrack) {
        self.tracks.push(track);
    }

    fn remove_audio_track(&mut self, id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        self.tracks.len() != before
    }

    fn set_audio_track_enabled(&mut self, id: &str, enabled: bool) -> bool {
        let Some(track) = self.tracks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if track.enabled != enabled {
            track.enabled = enabled;
            self.notify_change();
        }
        true
    }

    fn add_track_change_listener(&mut self) -> ListenerId {
        let id = self.allocate_listener();
        self.change_listeners.push(id);
        id
    }

    fn once_data_ready(&mut self) -> ListenerId {
        let id = self.allocate_listener();
        self.data_ready_listeners.push(id);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.change_listeners.retain(|l| *l != id);
        self.data_ready_listeners.retain(|l| *l != id);
    }

    fn trigger(&mut self, event: &str, payload: serde_json::Value) {
        self.triggered.push((event.to_string(), payload));
    }
}
