//! Integration testing module
//!
//! End-to-end tests of the bridge against the in-memory player and engine:
//! - Import, correction and forwarding in sequence
//! - Platform quirks (native tracks before and after setup)
//! - Teardown on unload

pub mod e2e;
pub mod fixtures;
