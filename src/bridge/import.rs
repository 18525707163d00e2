//! Track import - engine catalog into the player's audio track list

use crate::capability::{PlayerSurface, StreamEngine};
use crate::track::{PlayerAudioTrack, StreamTrackDescriptor};

use super::AudioTrackBridge;

/// Index of the track to start enabled
///
/// The engine's reported active track is matched against the snapshot; when it
/// reports none, or one that is not in the snapshot, the first track wins.
pub fn initial_active_index(
    descriptors: &[StreamTrackDescriptor],
    active: Option<&StreamTrackDescriptor>,
) -> usize {
    active
        .and_then(|active| descriptors.iter().position(|d| d == active))
        .unwrap_or(0)
}

impl AudioTrackBridge {
    /// Replace the player's audio tracks with one synthesized track per descriptor
    pub fn on_import<P, E>(&mut self, player: &mut P, engine: &E)
    where
        P: PlayerSurface + ?Sized,
        E: StreamEngine + ?Sized,
    {
        self.descriptors = engine.audio_languages_and_roles();

        // Some platforms create a native track while loading; start from an empty list.
        let existing = player.audio_track_count();
        if existing > 0 {
            tracing::debug!("Clearing {} pre-existing audio track(s)", existing);
            player.clear_audio_tracks();
        }

        if self.descriptors.is_empty() {
            tracing::debug!("Stream engine reported no audio tracks");
            return;
        }

        let active = engine.active_audio_track();
        let active_index = initial_active_index(&self.descriptors, active.as_ref());

        for (index, descriptor) in self.descriptors.iter().enumerate() {
            let is_active = index == active_index;
            let id = self.config.track_id(index);

            if is_active {
                self.emit_active_language(player, &descriptor.language);
            }

            tracing::debug!(
                "Adding audio track {} label={:?} enabled={}",
                id,
                descriptor.label(),
                is_active
            );
            player.add_audio_track(PlayerAudioTrack::from_descriptor(id, descriptor, is_active));
        }

        self.stats.imported = self.descriptors.len();
    }
}
