//! Bridge diagnostics counters

use serde::Serialize;

/// What the bridge has done over the lifetime of one media load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BridgeStats {
    /// Player tracks synthesized at import
    pub imported: usize,
    /// Platform-native tracks removed by quirk correction
    pub foreign_removed: usize,
    /// Selections forwarded to the stream engine
    pub forwarded: usize,
    /// Enabled tracks whose label matched no descriptor
    pub unresolved: usize,
    /// Change notifications seen while no track was enabled
    pub no_selection: usize,
    /// Change notifications that arrived before the bridge subscribed
    pub ignored_before_attach: usize,
    /// Change notifications that arrived after unloading
    pub ignored_after_unload: usize,
}
