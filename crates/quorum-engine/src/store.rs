//! Event repository: create/read/update/delete by event id.
//!
//! The store is an explicit trait injected into [`crate::service::EventService`]
//! rather than ambient shared state, so callers control where events live and
//! how writes are serialized.

use std::collections::BTreeMap;

use crate::error::{QuorumError, Result};
use crate::event::Event;

/// Repository of [`Event`] records keyed by event id.
pub trait EventStore {
    /// Insert a new event. Fails if an event with the same id already exists.
    fn create(&mut self, event: Event) -> Result<()>;

    /// Fetch an event by id. A missing event is `None`, not an error.
    fn get(&self, id: &str) -> Option<Event>;

    /// Replace an existing event wholesale. Fails if the id is unknown.
    fn update(&mut self, event: Event) -> Result<()>;

    /// Remove an event. Fails if the id is unknown.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// All events, ordered by id.
    fn list(&self) -> Vec<Event>;
}

/// In-memory [`EventStore`] backed by a `BTreeMap` (stable id ordering).
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: BTreeMap<String, Event>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list of events, e.g. one deserialized from disk.
    /// Later duplicates of an id replace earlier ones.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }
}

impl EventStore for InMemoryEventStore {
    fn create(&mut self, event: Event) -> Result<()> {
        if self.events.contains_key(&event.id) {
            return Err(QuorumError::DuplicateEvent(event.id));
        }
        self.events.insert(event.id.clone(), event);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Event> {
        self.events.get(id).cloned()
    }

    fn update(&mut self, event: Event) -> Result<()> {
        if !self.events.contains_key(&event.id) {
            return Err(QuorumError::EventNotFound(event.id));
        }
        self.events.insert(event.id.clone(), event);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.events
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| QuorumError::EventNotFound(id.to_string()))
    }

    fn list(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }
}
