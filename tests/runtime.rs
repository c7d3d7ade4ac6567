//! Runtime tests - debounced saves, speech, restore

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use mathscribe::input::KeyEvent;
use mathscribe::messages::{Msg, SettingsMsg};
use mathscribe::runtime::{NullSpeech, Runtime};
use mathscribe::session::{JsonFileStore, MemoryStore, SessionBundle, SessionStore};
use mathscribe::{AppModel, EditorConfig};
use tempfile::TempDir;

/// A store whose saves always fail
#[derive(Default)]
struct BrokenStore {
    attempts: usize,
}

impl SessionStore for BrokenStore {
    fn load(&mut self) -> Result<Option<SessionBundle>> {
        bail!("disk on fire")
    }

    fn save(&mut self, _bundle: &SessionBundle) -> Result<()> {
        self.attempts += 1;
        bail!("disk on fire")
    }
}

#[test]
fn test_burst_of_edits_saves_once() {
    let mut rt = Runtime::new(AppModel::default(), MemoryStore::default(), NullSpeech);
    let start = Instant::now();

    for (i, token) in ["a", "b", "c", "d"].into_iter().enumerate() {
        rt.dispatch_at(Msg::insert(token), start + Duration::from_millis(i as u64 * 100));
    }

    assert!(!rt.flush_due(start + Duration::from_millis(1000)));
    assert!(rt.flush_due(start + Duration::from_millis(1300)));
    assert_eq!(rt.store().saves, 1);

    let saved = rt.store().bundle.clone().unwrap();
    assert_eq!(saved.tabs.entries[0].lines.to_string(), "abcd");
}

#[test]
fn test_typed_keys_debounce_like_messages() {
    let mut rt = Runtime::new(AppModel::default(), MemoryStore::default(), NullSpeech);
    let start = Instant::now();

    for (i, text) in ["2", "plus", "3", "enter"].into_iter().enumerate() {
        let event: KeyEvent = text.parse().unwrap();
        rt.handle_key_at(&event, start + Duration::from_millis(i as u64 * 200));
    }

    // Last key at +600ms pushes the deadline to +1600ms
    assert!(!rt.flush_due(start + Duration::from_millis(1500)));
    assert_eq!(rt.store().saves, 0);
    assert!(rt.flush_due(start + Duration::from_millis(1600)));
    assert_eq!(rt.store().saves, 1);

    let saved = rt.store().bundle.clone().unwrap();
    assert_eq!(saved.tabs.entries[0].lines.to_string(), "2+3\n");
}

#[test]
fn test_unmapped_key_schedules_nothing() {
    let mut rt = Runtime::new(AppModel::default(), MemoryStore::default(), NullSpeech);
    let event: KeyEvent = "escape".parse().unwrap();

    assert!(rt.handle_key_at(&event, Instant::now()).is_none());
    assert!(rt.pending_save().is_none());
}

#[test]
fn test_flush_without_pending_save_is_noop() {
    let mut rt = Runtime::new(AppModel::default(), MemoryStore::default(), NullSpeech);
    assert!(!rt.flush());
    assert_eq!(rt.store().saves, 0);
}

#[test]
fn test_navigation_does_not_save() {
    let mut rt = Runtime::new(AppModel::default(), MemoryStore::default(), NullSpeech);
    rt.dispatch(Msg::move_cursor(mathscribe::messages::Direction::Right));
    assert!(rt.pending_save().is_none());
}

#[test]
fn test_settings_change_is_saved() {
    let mut rt = Runtime::new(AppModel::default(), MemoryStore::default(), NullSpeech);
    rt.dispatch(Msg::Settings(SettingsMsg::SetSymbolSize(100)));
    assert!(rt.flush());

    let saved = rt.store().bundle.clone().unwrap();
    assert_eq!(saved.settings.symbol_size, 32);
}

#[test]
fn test_failed_save_is_not_fatal_and_stays_pending() {
    let mut rt = Runtime::new(AppModel::default(), BrokenStore::default(), NullSpeech);
    rt.dispatch(Msg::insert("x"));

    assert!(!rt.flush());
    assert!(rt.pending_save().is_some());
    assert!(rt.is_dirty());
    assert_eq!(rt.store().attempts, 1);

    // The editor keeps working
    rt.dispatch(Msg::insert("y"));
    assert_eq!(rt.model.buffer().to_string(), "xy");
}

#[test]
fn test_restore_falls_back_when_load_fails() {
    let rt = Runtime::restore(BrokenStore::default(), NullSpeech, EditorConfig::default());
    assert_eq!(rt.model.tabs.len(), 1);
    assert!(rt.model.buffer().is_blank());
}

#[test]
fn test_restore_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut rt = Runtime::restore(
        JsonFileStore::new(&path),
        NullSpeech,
        EditorConfig::default(),
    );
    rt.dispatch(Msg::insert("e"));
    rt.dispatch(Msg::insert("^"));
    assert!(rt.flush());

    let rt = Runtime::restore(
        JsonFileStore::new(&path),
        NullSpeech,
        EditorConfig::default(),
    );
    assert_eq!(rt.model.buffer().to_string(), "e^");
    assert!(!rt.is_dirty());
}
