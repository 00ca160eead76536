//! Tests for the in-memory event store.

use chrono::{TimeZone, Utc};
use quorum_engine::{Event, EventStore, InMemoryEventStore, QuorumError};

fn event(id: &str, title: &str) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        start_time: Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2026, 9, 1, 11, 0, 0).unwrap(),
        created_by: "u1".to_string(),
        participants: vec![],
        time_slots: vec![],
        availability: vec![],
        best_time: None,
    }
}

#[test]
fn create_then_get_roundtrips() {
    let mut store = InMemoryEventStore::new();
    store.create(event("e1", "Sync")).unwrap();

    let fetched = store.get("e1").unwrap();
    assert_eq!(fetched.title, "Sync");
}

#[test]
fn get_missing_event_is_none() {
    let store = InMemoryEventStore::new();
    assert!(store.get("nope").is_none());
}

#[test]
fn create_duplicate_id_fails() {
    let mut store = InMemoryEventStore::new();
    store.create(event("e1", "Sync")).unwrap();

    let err = store.create(event("e1", "Other")).unwrap_err();
    assert!(matches!(err, QuorumError::DuplicateEvent(id) if id == "e1"));
}

#[test]
fn update_replaces_wholesale() {
    let mut store = InMemoryEventStore::new();
    store.create(event("e1", "Sync")).unwrap();

    store.update(event("e1", "Renamed")).unwrap();
    assert_eq!(store.get("e1").unwrap().title, "Renamed");
}

#[test]
fn update_missing_event_fails() {
    let mut store = InMemoryEventStore::new();
    let err = store.update(event("e1", "Sync")).unwrap_err();
    assert!(matches!(err, QuorumError::EventNotFound(id) if id == "e1"));
}

#[test]
fn delete_removes_the_event() {
    let mut store = InMemoryEventStore::new();
    store.create(event("e1", "Sync")).unwrap();

    store.delete("e1").unwrap();
    assert!(store.get("e1").is_none());
}

#[test]
fn delete_missing_event_fails() {
    let mut store = InMemoryEventStore::new();
    let err = store.delete("e1").unwrap_err();
    assert!(matches!(err, QuorumError::EventNotFound(id) if id == "e1"));
}

#[test]
fn list_is_ordered_by_id() {
    let mut store = InMemoryEventStore::new();
    store.create(event("e2", "Second")).unwrap();
    store.create(event("e1", "First")).unwrap();

    let ids: Vec<String> = store.list().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["e1", "e2"]);
}

#[test]
fn from_events_keeps_the_last_duplicate() {
    let store = InMemoryEventStore::from_events(vec![event("e1", "Old"), event("e1", "New")]);
    assert_eq!(store.get("e1").unwrap().title, "New");
}
