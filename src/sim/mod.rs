//! In-memory collaborators
//!
//! Stand-ins for the player framework and the stream engine:
//! - `MemoryPlayer`: audio track list, listeners, native track injection
//! - `MemoryEngine`: fixed catalog, recorded selection calls, unloading
//! - `Session`: dispatches their notifications to a bridge
//! - `Scenario`: scripted media loads replayed by the binary

pub mod engine;
pub mod player;
pub mod scenario;
pub mod session;

pub use engine::MemoryEngine;
pub use player::MemoryPlayer;
pub use scenario::{Scenario, ScenarioStep};
pub use session::Session;
