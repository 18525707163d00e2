//! In-memory stream engine

use crate::bridge::BridgeEvent;
use crate::capability::{ListenerId, StreamEngine};
use crate::track::StreamTrackDescriptor;

/// A stream engine with a fixed audio catalog that records selection calls
#[derive(Debug, Default)]
pub struct MemoryEngine {
    catalog: Vec<StreamTrackDescriptor>,
    active: Option<usize>,
    selections: Vec<(String, Option<String>)>,
    unloading_listeners: Vec<ListenerId>,
    next_listener: u64,
    pending: Vec<BridgeEvent>,
}

impl MemoryEngine {
    pub fn new(catalog: Vec<StreamTrackDescriptor>) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// Report the catalog entry at `index` as the playing track
    pub fn with_active(mut self, index: usize) -> Self {
        self.active = Some(index);
        self
    }

    /// Every `select_audio_language` call, in order
    pub fn selections(&self) -> &[(String, Option<String>)] {
        &self.selections
    }

    pub fn unloading_listener_count(&self) -> usize {
        self.unloading_listeners.len()
    }

    /// Start unloading the current media
    pub fn unload(&mut self) {
        if !self.unloading_listeners.is_empty() {
            self.pending.push(BridgeEvent::Unloading);
        }
    }

    /// Drain the queued notifications
    pub fn take_pending(&mut self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl StreamEngine for MemoryEngine {
    fn audio_languages_and_roles(&self) -> Vec<StreamTrackDescriptor> {
        self.catalog.clone()
    }

    fn active_audio_track(&self) -> Option<StreamTrackDescriptor> {
        self.active.and_then(|i| self.catalog.get(i)).cloned()
    }

    fn select_audio_language(&mut self, language: &str, role: Option<&str>) {
        self.selections
            .push((language.to_string(), role.map(str::to_string)));

        if let Some(index) = self
            .catalog
            .iter()
            .position(|d| d.language == language && d.role.as_deref() == role)
        {
            self.active = Some(index);
        }
    }

    fn add_unloading_listener(&mut self) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.unloading_listeners.push(id);
        id
    }

    fn remove_unloading_listener(&mut self, id: ListenerId) {
        self.unloading_listeners.retain(|l| *l != id);
    }
}
