//! End-to-end integration tests

use crate::config::BridgeConfig;
use crate::integration::fixtures::{player_with_native_track, TestCatalog};
use crate::sim::{MemoryEngine, MemoryPlayer, Session};
use crate::track::ActiveLanguageEvent;

const EVENT: &str = "shakaaudiotrackchange";

fn start(player: MemoryPlayer, catalog: &TestCatalog) -> Session {
    Session::start(
        player,
        MemoryEngine::new(catalog.tracks.clone()),
        BridgeConfig::default(),
    )
}

fn enabled_ids(session: &Session) -> Vec<String> {
    session
        .player
        .tracks()
        .iter()
        .filter(|t| t.enabled)
        .map(|t| t.id.clone())
        .collect()
}

#[test]
fn test_import_across_catalogs() {
    for catalog in TestCatalog::all() {
        let session = start(MemoryPlayer::new(), &catalog);
        let tracks = session.player.tracks();

        assert_eq!(tracks.len(), catalog.tracks.len(), "{}", catalog.name);
        for (track, descriptor) in tracks.iter().zip(&catalog.tracks) {
            assert_eq!(track.language, descriptor.language, "{}", catalog.name);
        }

        let expected_enabled = usize::from(!catalog.tracks.is_empty());
        assert_eq!(enabled_ids(&session).len(), expected_enabled, "{}", catalog.name);
        assert_eq!(
            session.player.active_language_events(EVENT).len(),
            expected_enabled,
            "{}",
            catalog.name
        );
    }
}

#[test]
fn test_full_lifecycle() {
    let catalog = TestCatalog::english_french_dub();
    let mut session = start(player_with_native_track(), &catalog);

    // Import replaced the native track.
    assert_eq!(enabled_ids(&session), vec!["dash-audio-0"]);
    assert_eq!(
        session.player.active_language_events(EVENT),
        vec![ActiveLanguageEvent::new("en")]
    );

    // Edge-style bogus track added after import.
    session.inject_native("native-1", "", "und", false);
    session.data_ready();
    let ids: Vec<_> = session.player.tracks().iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec!["dash-audio-0", "dash-audio-1"]);
    assert_eq!(enabled_ids(&session), vec!["dash-audio-0"]);

    session.select("dash-audio-1");
    assert_eq!(
        session.engine.selections(),
        &[("fr".to_string(), Some("dub".to_string()))]
    );
    assert_eq!(
        session.player.active_language_events(EVENT),
        vec![ActiveLanguageEvent::new("en"), ActiveLanguageEvent::new("fr")]
    );

    session.select("dash-audio-0");
    assert_eq!(session.engine.selections().len(), 2);
    assert_eq!(session.engine.selections()[1], ("en".to_string(), None::<String>));

    session.unload();
    session.select("dash-audio-1");
    assert_eq!(session.engine.selections().len(), 2);
    assert_eq!(session.player.change_listener_count(), 0);
}

#[test]
fn test_roles_of_one_language() {
    let catalog = TestCatalog::english_roles();
    let mut session = start(MemoryPlayer::new(), &catalog);
    session.data_ready();

    session.select("dash-audio-2");

    assert_eq!(
        session.engine.selections(),
        &[("en".to_string(), Some("description".to_string()))]
    );
    assert_eq!(session.player.tracks()[2].label, "en (description)");
}

#[test]
fn test_engine_starts_on_second_track() {
    let catalog = TestCatalog::english_french_dub();
    let mut session = Session::start(
        MemoryPlayer::new(),
        MemoryEngine::new(catalog.tracks.clone()).with_active(1),
        BridgeConfig::default(),
    );
    assert_eq!(enabled_ids(&session), vec!["dash-audio-1"]);

    // Correction moves the player back to the first track and tells the engine.
    session.data_ready();

    assert_eq!(enabled_ids(&session), vec!["dash-audio-0"]);
    assert_eq!(session.engine.selections(), &[("en".to_string(), None::<String>)]);
}

#[test]
fn test_empty_catalog_lifecycle() {
    let mut session = start(player_with_native_track(), &TestCatalog::empty());

    session.data_ready();
    session.unload();

    assert!(session.player.tracks().is_empty());
    assert!(session.player.triggered().is_empty());
    assert!(session.engine.selections().is_empty());
    assert!(session.bridge().last_fault().is_none());
}

#[test]
fn test_unknown_native_selection_is_skipped() {
    let catalog = TestCatalog::english_french_dub();
    let mut session = start(MemoryPlayer::new(), &catalog);
    session.data_ready();

    session.inject_native("native-7", "Original", "und", false);
    session.select("native-7");

    assert!(session.engine.selections().is_empty());
    assert_eq!(session.bridge().stats().unresolved, 1);
}
