//! Property-based tests for slot scoring using proptest.
//!
//! These tests verify invariants that should hold for *any* combination of
//! slots and availability records, not just the specific examples in
//! `best_time_tests.rs`.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use quorum_engine::{score_slots, select_best_slot, Availability, Response, TimeSlot};

// ---------------------------------------------------------------------------
// Strategies — generate slot lists and availability records
// ---------------------------------------------------------------------------

fn arb_response() -> impl Strategy<Value = Response> {
    prop_oneof![
        Just(Response::Available),
        Just(Response::Unavailable),
        Just(Response::Maybe),
    ]
}

/// Generate a slot on an arbitrary day in 2026. Day capped at 28 to avoid
/// invalid month/day combos. Slot times are fixed; scoring never looks at them.
fn arb_slot() -> impl Strategy<Value = TimeSlot> {
    (1u32..=12, 1u32..=28).prop_map(|(m, d)| TimeSlot {
        day: NaiveDate::from_ymd_opt(2026, m, d).unwrap(),
        start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
    })
}

fn arb_slots(max: usize) -> impl Strategy<Value = Vec<TimeSlot>> {
    prop::collection::vec(arb_slot(), 0..=max)
}

/// Responses over slot indices 0..8 — deliberately allowed to exceed the slot
/// count so out-of-range entries get generated too.
fn arb_responses() -> impl Strategy<Value = BTreeMap<usize, Response>> {
    prop::collection::btree_map(0usize..8, arb_response(), 0..=8)
}

fn arb_availabilities(max_users: usize) -> impl Strategy<Value = Vec<Availability>> {
    prop::collection::vec(arb_responses(), 0..=max_users).prop_map(|maps| {
        maps.into_iter()
            .enumerate()
            .map(|(i, responses)| Availability::new(format!("u{}", i), responses))
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// One score per slot, in slot order, regardless of input shape.
    #[test]
    fn scores_align_with_slots(
        slots in arb_slots(6),
        availabilities in arb_availabilities(5),
    ) {
        let scores = score_slots(&slots, &availabilities);
        prop_assert_eq!(scores.len(), slots.len());
        for (i, s) in scores.iter().enumerate() {
            prop_assert_eq!(s.index, i);
        }
    }

    /// Tallies never exceed the number of records, and the two tallies for a
    /// slot never overlap (a record answers each slot at most once).
    #[test]
    fn tallies_are_bounded_by_record_count(
        slots in arb_slots(6),
        availabilities in arb_availabilities(5),
    ) {
        for s in score_slots(&slots, &availabilities) {
            prop_assert!(s.available_count + s.maybe_count <= availabilities.len());
        }
    }

    /// Adding an `available` response for a slot never decreases its score.
    #[test]
    fn adding_available_is_monotone(
        slots in arb_slots(6),
        availabilities in arb_availabilities(5),
        target in 0usize..6,
    ) {
        prop_assume!(target < slots.len());

        let before = score_slots(&slots, &availabilities);
        let mut extended = availabilities.clone();
        extended.push(Availability::new(
            "extra",
            [(target, Response::Available)].into_iter().collect(),
        ));
        let after = score_slots(&slots, &extended);

        prop_assert!(after[target].score() >= before[target].score());
        // Other slots are untouched by the new record.
        for i in 0..slots.len() {
            if i != target {
                prop_assert_eq!(after[i].score(), before[i].score());
            }
        }
    }

    /// Adding a `maybe` response for a slot never decreases its score.
    #[test]
    fn adding_maybe_is_monotone(
        slots in arb_slots(6),
        availabilities in arb_availabilities(5),
        target in 0usize..6,
    ) {
        prop_assume!(target < slots.len());

        let before = score_slots(&slots, &availabilities);
        let mut extended = availabilities.clone();
        extended.push(Availability::new(
            "extra",
            [(target, Response::Maybe)].into_iter().collect(),
        ));
        let after = score_slots(&slots, &extended);

        prop_assert!(after[target].score() >= before[target].score());
    }

    /// The selected slot carries the maximum score, and is the lowest index
    /// among slots sharing that maximum.
    #[test]
    fn selection_is_max_score_lowest_index(
        slots in arb_slots(6),
        availabilities in arb_availabilities(5),
    ) {
        let scores = score_slots(&slots, &availabilities);
        let best = select_best_slot(&slots, &availabilities);

        let max = scores.iter().map(|s| s.score()).fold(0.0f64, f64::max);
        match best {
            None => prop_assert!(slots.is_empty() || max == 0.0),
            Some(bt) => {
                prop_assert!(max > 0.0);
                let winner = scores
                    .iter()
                    .find(|s| s.score() == max)
                    .expect("a slot must carry the max score");
                prop_assert_eq!(bt.day, slots[winner.index].day);
                prop_assert_eq!(bt.start_time, slots[winner.index].start_time);
                prop_assert_eq!(bt.attendees, winner.score().round() as u32);
            }
        }
    }

    /// Records full of `unavailable` answers never produce a best time.
    #[test]
    fn all_unavailable_never_selects(
        slots in arb_slots(6),
        users in 0usize..5,
    ) {
        let availabilities: Vec<Availability> = (0..users)
            .map(|i| {
                let responses: BTreeMap<usize, Response> = (0..slots.len())
                    .map(|idx| (idx, Response::Unavailable))
                    .collect();
                Availability::new(format!("u{}", i), responses)
            })
            .collect();

        prop_assert_eq!(select_best_slot(&slots, &availabilities), None);
    }
}
