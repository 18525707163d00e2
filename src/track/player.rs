//! Player framework audio tracks

use serde::{Deserialize, Serialize};

use super::descriptor::StreamTrackDescriptor;

/// Kind given to every synthesized track
pub const MAIN_KIND: &str = "main";

/// Audio track as the player framework sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAudioTrack {
    pub id: String,
    pub label: String,
    pub language: String,
    pub enabled: bool,
    pub kind: String,
}

impl PlayerAudioTrack {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        language: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            language: language.into(),
            enabled,
            kind: MAIN_KIND.to_string(),
        }
    }

    /// Synthesize the player track for an engine descriptor
    pub fn from_descriptor(id: String, descriptor: &StreamTrackDescriptor, enabled: bool) -> Self {
        Self::new(id, descriptor.label(), descriptor.language.clone(), enabled)
    }
}

/// Payload of the active-language event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLanguageEvent {
    pub language: String,
}

impl ActiveLanguageEvent {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// JSON payload handed to the player's `trigger`
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({ "language": self.language })
    }

    /// Read a payload back; `None` if it is not an active-language payload
    pub fn from_payload(payload: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(payload.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_descriptor() {
        let d = StreamTrackDescriptor::with_role("fr", "dub");
        let track = PlayerAudioTrack::from_descriptor("dash-audio-1".to_string(), &d, false);
        assert_eq!(track.id, "dash-audio-1");
        assert_eq!(track.label, "fr (dub)");
        assert_eq!(track.language, "fr");
        assert_eq!(track.kind, MAIN_KIND);
        assert!(!track.enabled);
    }

    #[test]
    fn test_event_payload() {
        let event = ActiveLanguageEvent::new("en");
        let payload = event.to_payload();
        assert_eq!(payload["language"], "en");
        assert_eq!(ActiveLanguageEvent::from_payload(&payload), Some(event));
    }

    #[test]
    fn test_foreign_payload_rejected() {
        let payload = serde_json::json!({ "volume": 0.5 });
        assert_eq!(ActiveLanguageEvent::from_payload(&payload), None);
    }
}
