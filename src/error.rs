use thiserror::Error;

/// Main error type for the audio track bridge
///
/// None of these are fatal to playback. The bridge itself never returns the
/// selection variants to its caller; they are logged and kept as the last fault
/// for diagnostics.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A standard I/O error while reading or writing a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or does not match the expected layout
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The config could not be written as TOML
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A config value is out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// A change notification arrived while no audio track was enabled
    #[error("No enabled audio track in the player track list")]
    NoEnabledTrack,

    /// The enabled player track does not map back to any engine descriptor
    #[error("Enabled audio track could not be resolved: label={label}")]
    UnresolvedSelection { label: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BridgeError>;
