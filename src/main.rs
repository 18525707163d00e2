//! DASH audio track bridge simulator
//!
//! Replays a scripted media load against in-memory player and engine doubles
//! and logs what the bridge does at every step.

use std::path::PathBuf;

use clap::Parser;
use dash_audio_bridge::config_file::{generate_default_config, ConfigFile, LoggingSettings};
use dash_audio_bridge::sim::Scenario;
use dash_audio_bridge::{BridgeConfig, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "dash-audio-bridge";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file with [bridge], [logging] and [scenario] tables
    #[arg(default_value = "bridge.toml")]
    config: PathBuf,

    /// Write a default configuration file to this path and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "bridge.toml")]
    generate_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.generate_config {
        generate_default_config(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    // Load configuration
    let config_path = &cli.config;
    let (config_file, load_error) = if config_path.exists() {
        match ConfigFile::from_file(config_path) {
            Ok(cf) => (cf, None),
            Err(e) => (ConfigFile::default_config(), Some(e)),
        }
    } else {
        (ConfigFile::default_config(), None)
    };

    let json = config_file
        .logging
        .as_ref()
        .map(LoggingSettings::is_json)
        .unwrap_or(false);
    let scenario = config_file.scenario.clone().unwrap_or_else(Scenario::demo);
    let (config, settings_error) = match config_file.into_bridge_config() {
        Ok(config) => (config, None),
        Err(e) => (BridgeConfig::default(), Some(e)),
    };

    init_logging(&config.log_level, json);
    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path.display(),
            e
        );
    }
    if let Some(e) = settings_error {
        tracing::warn!("Invalid bridge settings: {}. Using defaults.", e);
    }
    tracing::info!("Configuration loaded: {:?}", config);

    let change_event = config.change_event.clone();
    let session = scenario.run(config);

    for track in session.player.tracks() {
        tracing::info!(
            "Track id={} label={:?} language={} enabled={}",
            track.id,
            track.label,
            track.language,
            track.enabled
        );
    }
    for event in session.player.active_language_events(&change_event) {
        tracing::info!("Active language event: {}", event.language);
    }
    for (language, role) in session.engine.selections() {
        tracing::info!("Engine selection: language={} role={:?}", language, role);
    }
    tracing::info!("Bridge stats: {:?}", session.bridge().stats());
    if let Some(fault) = session.bridge().last_fault() {
        tracing::warn!("Last fault: {}", fault);
    }

    Ok(())
}

/// Default filter directive when `RUST_LOG` is not set
fn filter_directive(level: &str) -> String {
    format!("dash_audio_bridge={}", level)
}

/// Initialize logging with tracing
fn init_logging(level: &str, json: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter_directive(level).into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from([APP_NAME]).unwrap();
        assert_eq!(cli.config, PathBuf::from("bridge.toml"));
        assert!(cli.generate_config.is_none());
    }

    #[test]
    fn test_cli_config_path_and_generate() {
        let cli = Cli::try_parse_from([APP_NAME, "custom.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));

        let cli = Cli::try_parse_from([APP_NAME, "--generate-config", "out.toml"]).unwrap();
        assert_eq!(cli.generate_config, Some(PathBuf::from("out.toml")));

        let cli = Cli::try_parse_from([APP_NAME, "--generate-config"]).unwrap();
        assert_eq!(cli.generate_config, Some(PathBuf::from("bridge.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from([APP_NAME, "--verbose"]).is_err());
    }

    #[test]
    fn test_filter_uses_configured_level() {
        let file: ConfigFile = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        let config = file.into_bridge_config().unwrap();
        assert_eq!(filter_directive(&config.log_level), "dash_audio_bridge=debug");
        assert_eq!(
            filter_directive(&BridgeConfig::default().log_level),
            "dash_audio_bridge=info"
        );
    }
}
