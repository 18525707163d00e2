//! Audio track bridge
//!
//! Keeps the player's audio track list in step with the stream engine:
//! - Track import: engine catalog -> synthesized player tracks
//! - Quirk correction: drop platform-native tracks once data is ready
//! - Selection forwarding: player track switches -> engine language/role
//! - Teardown when the engine unloads

pub mod import;
pub mod quirks;
pub mod selection;
pub mod stats;

pub use stats::BridgeStats;

use crate::capability::{ListenerId, PlayerSurface, StreamEngine};
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::track::{ActiveLanguageEvent, StreamTrackDescriptor};

/// Notifications the bridge reacts to, dispatched by the host event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeEvent {
    /// The player has its first frame of media data (`loadeddata`)
    DataReady,
    /// The player's audio track list fired `change`
    TrackListChanged,
    /// The stream engine is unloading the current media
    Unloading,
}

/// State holder for one media load
#[derive(Debug)]
pub struct AudioTrackBridge {
    config: BridgeConfig,
    /// Catalog snapshot taken at import
    descriptors: Vec<StreamTrackDescriptor>,
    data_ready_listener: Option<ListenerId>,
    change_listener: Option<ListenerId>,
    unloading_listener: Option<ListenerId>,
    corrected: bool,
    unloaded: bool,
    stats: BridgeStats,
    last_fault: Option<BridgeError>,
}

impl AudioTrackBridge {
    /// Create a bridge that has not imported anything yet
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            descriptors: Vec::new(),
            data_ready_listener: None,
            change_listener: None,
            unloading_listener: None,
            corrected: false,
            unloaded: false,
            stats: BridgeStats::default(),
            last_fault: None,
        }
    }

    /// Import the engine's tracks and subscribe to the player and engine signals
    pub fn attach<P, E>(&mut self, player: &mut P, engine: &mut E)
    where
        P: PlayerSurface + ?Sized,
        E: StreamEngine + ?Sized,
    {
        self.on_import(player, &*engine);

        self.data_ready_listener = Some(player.once_data_ready());
        self.change_listener = Some(player.add_track_change_listener());
        self.unloading_listener = Some(engine.add_unloading_listener());

        tracing::info!(
            "Audio track bridge attached with {} track(s)",
            self.descriptors.len()
        );
    }

    /// Dispatch a notification to the matching operation
    pub fn handle<P, E>(&mut self, event: BridgeEvent, player: &mut P, engine: &mut E)
    where
        P: PlayerSurface + ?Sized,
        E: StreamEngine + ?Sized,
    {
        match event {
            BridgeEvent::DataReady => self.on_data_ready(player),
            BridgeEvent::TrackListChanged => self.on_track_list_changed(player, engine),
            BridgeEvent::Unloading => self.on_unloading(player, engine),
        }
    }

    /// Catalog snapshot the bridge maps player tracks against
    pub fn descriptors(&self) -> &[StreamTrackDescriptor] {
        &self.descriptors
    }

    /// Configuration the bridge was created with
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Diagnostics counters for this media load
    pub fn stats(&self) -> &BridgeStats {
        &self.stats
    }

    /// Most recent non-fatal problem, if any
    pub fn last_fault(&self) -> Option<&BridgeError> {
        self.last_fault.as_ref()
    }

    /// Whether quirk correction has run
    pub fn is_corrected(&self) -> bool {
        self.corrected
    }

    /// Whether change notifications are still being forwarded
    pub fn is_listening(&self) -> bool {
        self.change_listener.is_some()
    }

    fn emit_active_language<P>(&self, player: &mut P, language: &str)
    where
        P: PlayerSurface + ?Sized,
    {
        let event = ActiveLanguageEvent::new(language);
        tracing::debug!("Active audio language is now {}", language);
        player.trigger(&self.config.change_event, event.to_payload());
    }
}

/// Set up audio track synchronization between a player and a stream engine
///
/// Returns the bridge state holder; the host event loop feeds it
/// [`BridgeEvent`]s through [`AudioTrackBridge::handle`].
pub fn setup_audio_tracks<P, E>(
    player: &mut P,
    engine: &mut E,
    config: BridgeConfig,
) -> AudioTrackBridge
where
    P: PlayerSurface + ?Sized,
    E: StreamEngine + ?Sized,
{
    let mut bridge = AudioTrackBridge::new(config);
    bridge.attach(player, engine);
    bridge
}
