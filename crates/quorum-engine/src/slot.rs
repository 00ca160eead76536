//! Candidate time slots proposed for a meeting.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A candidate day/start/end triple proposed for a meeting.
///
/// Slots carry no identifier of their own — a slot is addressed by its position
/// in the event's ordered slot list, and availability responses refer to slots
/// by that index. Times are wall-clock local times; no timezone is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
