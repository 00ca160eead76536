//! Coordination service: records responses and keeps the best time current.
//!
//! Wraps an [`EventStore`] and performs each read–recompute–write as a single
//! synchronous call. The service holds no lock of its own; a deployment with
//! concurrent writers must serialize calls per store (per-event lock or
//! single-writer queue) to keep response recording atomic.

use std::collections::BTreeMap;

use crate::availability::{Availability, Response};
use crate::best_time::{select_best_slot, BestTime};
use crate::error::{QuorumError, Result};
use crate::event::{Event, Participant, RsvpStatus};
use crate::store::EventStore;

/// What to do with a stored best time when recomputation yields no winner.
///
/// Under `Retain` (the default) a best time, once set, is never cleared: when
/// all positive responses are later withdrawn, the stale value remains on the
/// event. `Clear` removes the stored best time instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleBestTime {
    /// Keep the previously stored best time when scores drop to zero.
    #[default]
    Retain,
    /// Clear the stored best time when no slot has a positive score.
    Clear,
}

/// Event coordination over an injected [`EventStore`].
#[derive(Debug)]
pub struct EventService<S: EventStore> {
    store: S,
    stale_policy: StaleBestTime,
}

impl<S: EventStore> EventService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            stale_policy: StaleBestTime::default(),
        }
    }

    pub fn with_stale_policy(store: S, stale_policy: StaleBestTime) -> Self {
        Self {
            store,
            stale_policy,
        }
    }

    /// Hand the store back, e.g. to persist it after a batch of calls.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn create_event(&mut self, event: Event) -> Result<()> {
        self.store.create(event)
    }

    pub fn event(&self, id: &str) -> Result<Event> {
        self.store
            .get(id)
            .ok_or_else(|| QuorumError::EventNotFound(id.to_string()))
    }

    pub fn update_event(&mut self, event: Event) -> Result<()> {
        self.store.update(event)
    }

    pub fn delete_event(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)
    }

    pub fn events(&self) -> Vec<Event> {
        self.store.list()
    }

    /// Upsert `user_id`'s RSVP status on an event.
    pub fn rsvp(&mut self, event_id: &str, user_id: &str, status: RsvpStatus) -> Result<()> {
        let mut event = self.event(event_id)?;
        match event.participants.iter().position(|p| p.user_id == user_id) {
            Some(i) => event.participants[i].status = status,
            None => event.participants.push(Participant {
                user_id: user_id.to_string(),
                status,
            }),
        }
        self.store.update(event)
    }

    /// Record `user_id`'s availability for an event and refresh its best time.
    ///
    /// The submitted responses replace any prior record for that user wholesale;
    /// nothing is merged, so a resubmission must include every slot the user
    /// wants recorded. Returns the event's best time after recomputation (which
    /// may be a retained stale value under [`StaleBestTime::Retain`]).
    pub fn record_response(
        &mut self,
        event_id: &str,
        user_id: &str,
        responses: BTreeMap<usize, Response>,
    ) -> Result<Option<BestTime>> {
        let mut event = self.event(event_id)?;

        let record = Availability::new(user_id, responses);
        match event.availability.iter().position(|a| a.user_id == user_id) {
            Some(i) => event.availability[i] = record,
            None => event.availability.push(record),
        }

        self.recompute_best_time(&mut event);
        let best = event.best_time.clone();
        self.store.update(event)?;
        Ok(best)
    }

    fn recompute_best_time(&self, event: &mut Event) {
        match select_best_slot(&event.time_slots, &event.availability) {
            Some(best) => event.best_time = Some(best),
            None => {
                if self.stale_policy == StaleBestTime::Clear {
                    event.best_time = None;
                }
                // Retain: decline to overwrite; a previously stored best time
                // stays even though its score has dropped to zero.
            }
        }
    }
}
