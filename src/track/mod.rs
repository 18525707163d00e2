//! Audio track models
//!
//! Both sides of the bridge:
//! - Stream engine descriptors (language + optional role)
//! - Player framework tracks (synthesized id, derived label, enabled flag)
//! - The active-language event raised when the playing language changes

pub mod descriptor;
pub mod player;

pub use descriptor::{derive_label, StreamTrackDescriptor};
pub use player::{ActiveLanguageEvent, PlayerAudioTrack, MAIN_KIND};
