//! Selection forwarding - player track switches back into the stream engine

use crate::capability::{PlayerSurface, StreamEngine};
use crate::error::{BridgeError, Result};
use crate::track::{PlayerAudioTrack, StreamTrackDescriptor};

use super::AudioTrackBridge;

/// Map the first enabled player track back to its engine descriptor by label
///
/// Later enabled tracks in the same list are ignored.
pub fn resolve_selection<'a>(
    descriptors: &'a [StreamTrackDescriptor],
    tracks: &[PlayerAudioTrack],
) -> Result<&'a StreamTrackDescriptor> {
    let enabled = tracks
        .iter()
        .find(|t| t.enabled)
        .ok_or(BridgeError::NoEnabledTrack)?;

    descriptors
        .iter()
        .find(|d| d.label() == enabled.label)
        .ok_or_else(|| BridgeError::UnresolvedSelection {
            label: enabled.label.clone(),
        })
}

impl AudioTrackBridge {
    /// Handle a `change` notification from the player's audio track list
    pub fn on_track_list_changed<P, E>(&mut self, player: &mut P, engine: &mut E)
    where
        P: PlayerSurface + ?Sized,
        E: StreamEngine + ?Sized,
    {
        if self.change_listener.is_none() {
            if self.unloaded {
                self.stats.ignored_after_unload += 1;
            } else {
                self.stats.ignored_before_attach += 1;
            }
            tracing::debug!("Ignoring audio track change, bridge is not listening");
            return;
        }

        let tracks = player.audio_tracks();
        let descriptor = match resolve_selection(&self.descriptors, &tracks) {
            Ok(descriptor) => descriptor.clone(),
            Err(BridgeError::NoEnabledTrack) => {
                // Normal while a switch is in flight.
                self.stats.no_selection += 1;
                tracing::debug!("No enabled audio track, nothing to forward");
                return;
            }
            Err(err) => {
                self.stats.unresolved += 1;
                if self.config.report_unresolved {
                    tracing::warn!("{}", err);
                } else {
                    tracing::debug!("{}", err);
                }
                self.last_fault = Some(err);
                return;
            }
        };

        self.emit_active_language(player, &descriptor.language);
        tracing::debug!(
            "Selecting engine audio language={} role={:?}",
            descriptor.language,
            descriptor.role
        );
        engine.select_audio_language(&descriptor.language, descriptor.role.as_deref());
        self.stats.forwarded += 1;
    }

    /// Stop forwarding; the engine is unloading the media
    ///
    /// Only the change and unloading subscriptions are released. A pending
    /// data-ready subscription stays, so correction still runs once.
    pub fn on_unloading<P, E>(&mut self, player: &mut P, engine: &mut E)
    where
        P: PlayerSurface + ?Sized,
        E: StreamEngine + ?Sized,
    {
        if let Some(id) = self.change_listener.take() {
            player.remove_listener(id);
        }
        if let Some(id) = self.unloading_listener.take() {
            engine.remove_unloading_listener(id);
        }

        if !self.unloaded {
            self.unloaded = true;
            tracing::info!("Stream engine unloading, audio track bridge detached");
        }
    }
}
