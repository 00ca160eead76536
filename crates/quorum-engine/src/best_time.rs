//! Slot scoring and best-time selection.
//!
//! For each candidate slot, counts `available` and `maybe` responses across all
//! availability records and computes `score = available + 0.5 * maybe`. The
//! highest-scoring slot wins; ties go to the lowest index. A maximum score of
//! zero means no best time exists.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::availability::{Availability, Response};
use crate::slot::TimeSlot;

/// Response tallies for a single slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotScore {
    /// Position of the slot in the event's slot list.
    pub index: usize,
    /// Number of records that answered `available` for this slot.
    pub available_count: usize,
    /// Number of records that answered `maybe` for this slot.
    pub maybe_count: usize,
}

impl SlotScore {
    /// Weighted score: `available` counts 1, `maybe` counts 0.5.
    pub fn score(&self) -> f64 {
        self.available_count as f64 + 0.5 * self.maybe_count as f64
    }
}

/// The selected best meeting time for an event.
///
/// `attendees` is the winning slot's score rounded to the nearest whole number
/// (halves round up), not a literal headcount — two `maybe` responses show up
/// as one attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTime {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub attendees: u32,
}

/// Tally `available` and `maybe` responses for every slot.
///
/// Returns one [`SlotScore`] per slot, in slot order. Records that have no
/// entry for a given index contribute to neither count; entries whose index is
/// out of range never match a slot and are ignored.
pub fn score_slots(slots: &[TimeSlot], availabilities: &[Availability]) -> Vec<SlotScore> {
    slots
        .iter()
        .enumerate()
        .map(|(index, _)| {
            let available_count = availabilities
                .iter()
                .filter(|a| a.response_at(index) == Some(Response::Available))
                .count();
            let maybe_count = availabilities
                .iter()
                .filter(|a| a.response_at(index) == Some(Response::Maybe))
                .count();
            SlotScore {
                index,
                available_count,
                maybe_count,
            }
        })
        .collect()
}

/// Select the best slot: the one with the maximum score, lowest index on ties.
///
/// Returns `None` when the slot list is empty or when no slot has a positive
/// score (no responses at all, or everyone unavailable). "No best time" is a
/// normal outcome, not an error — callers decide what to do with a previously
/// stored best time in that case (see [`crate::service::StaleBestTime`]).
pub fn select_best_slot(slots: &[TimeSlot], availabilities: &[Availability]) -> Option<BestTime> {
    let scores = score_slots(slots, availabilities);

    // Strictly-greater comparison keeps the first (lowest-index) slot on ties,
    // matching a stable descending sort.
    let best = scores
        .iter()
        .max_by(|a, b| a.score().total_cmp(&b.score()).then(b.index.cmp(&a.index)))?;

    if best.score() <= 0.0 {
        return None;
    }

    let slot = &slots[best.index];
    Some(BestTime {
        day: slot.day,
        start_time: slot.start_time,
        end_time: slot.end_time,
        // f64::round is half-away-from-zero, so a lone "maybe" (0.5) counts
        // as one attendee.
        attendees: best.score().round() as u32,
    })
}
