//! A media load driven end to end against the in-memory collaborators

use crate::bridge::{setup_audio_tracks, AudioTrackBridge};
use crate::config::BridgeConfig;

use super::{MemoryEngine, MemoryPlayer};

/// Upper bound on notification rounds per step, against a misbehaving double
const MAX_PUMP_ROUNDS: usize = 64;

/// Player, engine and bridge of one media load
///
/// Plays the host event loop: every step drains the notifications the player
/// and engine queued and dispatches them to the bridge until both are quiet.
#[derive(Debug)]
pub struct Session {
    pub player: MemoryPlayer,
    pub engine: MemoryEngine,
    bridge: AudioTrackBridge,
}

impl Session {
    /// Attach a bridge to the player and engine
    pub fn start(mut player: MemoryPlayer, mut engine: MemoryEngine, config: BridgeConfig) -> Self {
        let bridge = setup_audio_tracks(&mut player, &mut engine, config);
        let mut session = Self {
            player,
            engine,
            bridge,
        };
        session.pump();
        session
    }

    pub fn bridge(&self) -> &AudioTrackBridge {
        &self.bridge
    }

    /// The player has its first frame of data
    pub fn data_ready(&mut self) {
        self.player.fire_data_ready();
        self.pump();
    }

    /// The user picks a track in the player UI
    pub fn select(&mut self, id: &str) -> bool {
        let found = self.player.user_select(id);
        self.pump();
        found
    }

    /// The platform adds a native track behind the bridge's back
    pub fn inject_native(&mut self, id: &str, label: &str, language: &str, enabled: bool) {
        self.player.inject_native(id, label, language, enabled);
        self.pump();
    }

    /// The engine unloads the media
    pub fn unload(&mut self) {
        self.engine.unload();
        self.pump();
    }

    fn pump(&mut self) {
        for _ in 0..MAX_PUMP_ROUNDS {
            let mut events = self.player.take_pending();
            events.extend(self.engine.take_pending());
            if events.is_empty() {
                return;
            }
            for event in events {
                tracing::trace!("Dispatching {:?}", event);
                self.bridge.handle(event, &mut self.player, &mut self.engine);
            }
        }
        tracing::warn!(
            "Notifications still pending after {} rounds, giving up",
            MAX_PUMP_ROUNDS
        );
    }
}
