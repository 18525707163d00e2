//! Quirk correction - drop platform-native tracks once media data is ready
//!
//! Some platform media stacks add their own audio track entry while loading,
//! sometimes after the import already ran. Once the first frame is available the
//! list is pruned to the synthesized tracks and the first one is enabled.

use crate::capability::PlayerSurface;
use crate::config::BridgeConfig;
use crate::track::PlayerAudioTrack;

use super::AudioTrackBridge;

/// Tracks in `tracks` whose id does not carry the reserved prefix
pub fn find_foreign_tracks<'a>(
    config: &BridgeConfig,
    tracks: &'a [PlayerAudioTrack],
) -> Vec<&'a PlayerAudioTrack> {
    tracks
        .iter()
        .filter(|t| !config.is_synthesized_id(&t.id))
        .collect()
}

impl AudioTrackBridge {
    /// Handle the one-shot "data ready" signal
    ///
    /// Runs correction once, also when the engine already unloaded; later
    /// signals are ignored.
    pub fn on_data_ready<P>(&mut self, player: &mut P)
    where
        P: PlayerSurface + ?Sized,
    {
        if let Some(id) = self.data_ready_listener.take() {
            player.remove_listener(id);
        }

        if self.corrected {
            tracing::debug!("Ignoring repeated data-ready, tracks already corrected");
            return;
        }

        let removed = self.correct_tracks(player);
        self.corrected = true;

        tracing::info!(
            "Audio tracks corrected, {} native track(s) removed",
            removed
        );
    }

    /// Remove foreign tracks and enable only the first synthesized one
    ///
    /// Safe to call again: a second pass finds nothing to remove and leaves the
    /// same single track enabled. Returns the number of tracks removed.
    pub fn correct_tracks<P>(&mut self, player: &mut P) -> usize
    where
        P: PlayerSurface + ?Sized,
    {
        let tracks = player.audio_tracks();
        let foreign = find_foreign_tracks(&self.config, &tracks);

        for track in &foreign {
            tracing::warn!(
                "Removing native audio track id={:?} label={:?}",
                track.id,
                track.label
            );
            player.remove_audio_track(&track.id);
        }
        let removed = foreign.len();
        self.stats.foreign_removed += removed;

        let remaining = player.audio_tracks();
        for (index, track) in remaining.iter().enumerate() {
            player.set_audio_track_enabled(&track.id, index == 0);
        }

        removed
    }
}
