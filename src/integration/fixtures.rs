//! Test fixtures for integration tests
//!
//! Catalogs and player states seen on real platforms.

use crate::sim::MemoryPlayer;
use crate::track::StreamTrackDescriptor;

/// Test catalog description
#[derive(Debug, Clone)]
pub struct TestCatalog {
    pub name: &'static str,
    pub tracks: Vec<StreamTrackDescriptor>,
}

impl TestCatalog {
    /// English main track plus a French dub
    pub fn english_french_dub() -> Self {
        Self {
            name: "english_french_dub",
            tracks: vec![
                StreamTrackDescriptor::new("en"),
                StreamTrackDescriptor::with_role("fr", "dub"),
            ],
        }
    }

    /// One language in several roles
    pub fn english_roles() -> Self {
        Self {
            name: "english_roles",
            tracks: vec![
                StreamTrackDescriptor::with_role("en", "main"),
                StreamTrackDescriptor::with_role("en", "commentary"),
                StreamTrackDescriptor::with_role("en", "description"),
            ],
        }
    }

    /// A single untagged track
    pub fn single() -> Self {
        Self {
            name: "single",
            tracks: vec![StreamTrackDescriptor::new("und")],
        }
    }

    /// Engine without audio
    pub fn empty() -> Self {
        Self {
            name: "empty",
            tracks: Vec::new(),
        }
    }

    /// Get all test catalogs
    pub fn all() -> Vec<Self> {
        vec![
            Self::english_french_dub(),
            Self::english_roles(),
            Self::single(),
            Self::empty(),
        ]
    }
}

/// Player that already created one native track while loading
pub fn player_with_native_track() -> MemoryPlayer {
    let mut player = MemoryPlayer::new();
    player.inject_native("1", "", "en", true);
    player
}
