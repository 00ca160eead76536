//! Event records: the unit of coordination.
//!
//! An event names a tentative start/end instant, invites participants, proposes
//! candidate time slots, and accumulates per-user availability. The derived
//! best time is stored on the event and refreshed whenever availability changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::Availability;
use crate::best_time::BestTime;
use crate::slot::TimeSlot;

/// A participant's attendance reply, independent of per-slot availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// An invited participant and their RSVP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub status: RsvpStatus,
}

/// An event record as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Tentative start instant, before a best time is agreed.
    pub start_time: DateTime<Utc>,
    /// Tentative end instant.
    pub end_time: DateTime<Utc>,
    pub created_by: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Candidate slots, in proposal order. Availability responses address these
    /// by index.
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// At most one record per user; insertion order is first-response order.
    #[serde(default)]
    pub availability: Vec<Availability>,
    /// Derived from `time_slots` + `availability`; absent until some slot has a
    /// positive score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<BestTime>,
}

impl Event {
    /// The availability record for `user_id`, if the user has responded.
    pub fn availability_for(&self, user_id: &str) -> Option<&Availability> {
        self.availability.iter().find(|a| a.user_id == user_id)
    }
}
