//! Tri-state availability responses and per-user availability records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A participant's response for a single time slot.
///
/// Serialized lowercase ("available", "unavailable", "maybe").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Available,
    Unavailable,
    Maybe,
}

/// One user's responses for one event, keyed by slot index.
///
/// At most one record exists per (event, user) pair. Resubmitting replaces the
/// record wholesale — a partial resubmission is NOT merged with prior responses,
/// so a user who wants a slot recorded must include it every time.
///
/// The map may cover any subset of the event's slots; indices with no entry
/// count toward neither the available nor the maybe tally. Indices outside the
/// event's slot list can never match a real slot and are ignored when scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub user_id: String,
    pub responses: BTreeMap<usize, Response>,
}

impl Availability {
    pub fn new(user_id: impl Into<String>, responses: BTreeMap<usize, Response>) -> Self {
        Self {
            user_id: user_id.into(),
            responses,
        }
    }

    /// The user's response at `slot_index`, if any.
    pub fn response_at(&self, slot_index: usize) -> Option<Response> {
        self.responses.get(&slot_index).copied()
    }
}
