//! # quorum-engine
//!
//! Availability polling and best-meeting-time selection for event coordination.
//!
//! An event proposes an ordered list of candidate time slots; each participant
//! submits a tri-state response (available / unavailable / maybe) per slot. The
//! engine scores every slot (`available` counts 1, `maybe` counts 0.5) and picks
//! the highest-scoring slot as the best meeting time.
//!
//! ## Modules
//!
//! - [`slot`] — Candidate time slots (day + wall-clock start/end)
//! - [`availability`] — Tri-state responses and per-user availability records
//! - [`best_time`] — Slot scoring and best-time selection (the pure core)
//! - [`event`] — Event records with participants, slots, and the derived best time
//! - [`store`] — The [`store::EventStore`] repository trait + in-memory implementation
//! - [`service`] — Coordination service that records responses and keeps the
//!   best time up to date
//! - [`error`] — Error types

pub mod availability;
pub mod best_time;
pub mod error;
pub mod event;
pub mod service;
pub mod slot;
pub mod store;

pub use availability::{Availability, Response};
pub use best_time::{select_best_slot, score_slots, BestTime, SlotScore};
pub use error::QuorumError;
pub use event::{Event, Participant, RsvpStatus};
pub use service::{EventService, StaleBestTime};
pub use slot::TimeSlot;
pub use store::{EventStore, InMemoryEventStore};
