//! Tests for committing values through a color preference

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use colorpref::{Color, ColorPreference, Error};
use common::{rgb_preference, RecordingStore, BLUE, GREEN, RED};

fn preference() -> ColorPreference {
    let mut pref = ColorPreference::from_config(&rgb_preference("accent")).unwrap();
    pref.load_initial_value(false, Some(Color(GREEN)));
    pref
}

// ===================
// Commit flow
// ===================

#[test]
fn test_set_value_without_listener_persists_once() {
    let mut pref = preference();
    let mut store = RecordingStore::default();

    assert!(pref.set_value(Color(BLUE), &mut store).unwrap());

    assert_eq!(pref.value(), Some(Color(BLUE)));
    assert_eq!(store.puts, vec![("accent".to_string(), BLUE)]);
    assert_eq!(pref.revision(), 1);
}

#[test]
fn test_set_value_with_accepting_listener() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut pref = preference();
    let recorded = Rc::clone(&seen);
    pref.set_on_change(move |color| {
        recorded.borrow_mut().push(color);
        true
    });
    let mut store = RecordingStore::default();

    assert!(pref.set_value(Color(RED), &mut store).unwrap());

    assert_eq!(*seen.borrow(), vec![Color(RED)]);
    assert_eq!(pref.value(), Some(Color(RED)));
    assert_eq!(store.puts.len(), 1);
}

#[test]
fn test_same_value_is_committed_again() {
    let mut pref = preference();
    let mut store = RecordingStore::default();

    assert!(pref.set_value(Color(GREEN), &mut store).unwrap());
    assert_eq!(store.puts, vec![("accent".to_string(), GREEN)]);
}

// ===================
// Veto flow
// ===================

#[test]
fn test_veto_leaves_state_and_store_untouched() {
    let mut pref = preference();
    pref.set_on_change(|_| false);
    let mut store = RecordingStore::default();

    assert!(!pref.set_value(Color(BLUE), &mut store).unwrap());

    assert_eq!(pref.value(), Some(Color(GREEN)));
    assert!(store.puts.is_empty());
    assert_eq!(pref.revision(), 0);
}

#[test]
fn test_listener_can_veto_selectively() {
    let mut pref = preference();
    pref.set_on_change(|color| color != Color(RED));
    let mut store = RecordingStore::default();

    assert!(!pref.set_value(Color(RED), &mut store).unwrap());
    assert!(pref.set_value(Color(BLUE), &mut store).unwrap());

    assert_eq!(pref.value(), Some(Color(BLUE)));
    assert_eq!(store.puts, vec![("accent".to_string(), BLUE)]);
}

// ===================
// Invariants
// ===================

#[test]
fn test_out_of_palette_value_never_persisted() {
    let mut pref = preference();
    let mut store = RecordingStore::default();

    let err = pref.set_value(Color::WHITE, &mut store).unwrap_err();

    assert!(matches!(err, Error::ColorNotInPalette(c, ref key) if c == Color::WHITE && key == "accent"));
    assert_eq!(pref.value(), Some(Color(GREEN)));
    assert!(store.puts.is_empty());
}

#[test]
fn test_hydration_does_not_write() {
    let store = RecordingStore::with_value("accent", RED);
    let mut pref = ColorPreference::from_config(&rgb_preference("accent")).unwrap();
    pref.set_on_change(|_| panic!("hydration must not consult the listener"));

    pref.hydrate(&store);

    assert_eq!(pref.value(), Some(Color(RED)));
    assert!(store.puts.is_empty());
}
