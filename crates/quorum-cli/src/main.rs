//! `quorum` CLI — coordinate an event's availability poll from the command line.
//!
//! Events live in a JSON file (an array of event records). Every command loads
//! the file, applies one change through the coordination service, and writes the
//! file back.
//!
//! ## Usage
//!
//! ```sh
//! # Create an event with two candidate slots
//! quorum -f events.json create --id kickoff --title "Project Kickoff" \
//!     --created-by alice \
//!     --start 2026-09-01T10:00:00Z --end 2026-09-01T11:00:00Z \
//!     --slot "2026-09-01 10:00 11:00" --slot "2026-09-02 14:00 15:00"
//!
//! # See the candidate slots and the indices a respond spec refers to
//! quorum -f events.json slots --event kickoff
//!
//! # Record a participant's responses (wholesale — include every slot you want kept)
//! quorum -f events.json respond --event kickoff --user bob \
//!     --responses "0=available,1=maybe"
//!
//! # RSVP to the invitation itself
//! quorum -f events.json rsvp --event kickoff --user bob --status accepted
//!
//! # Show the current best meeting time
//! quorum -f events.json best --event kickoff
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use quorum_engine::{
    BestTime, Event, EventService, EventStore, InMemoryEventStore, Response, RsvpStatus,
    StaleBestTime, TimeSlot,
};

#[derive(Parser)]
#[command(name = "quorum", version, about = "Availability polling and best-time selection")]
struct Cli {
    /// Path to the JSON events file (created on first write)
    #[arg(short, long, default_value = "events.json")]
    file: PathBuf,

    /// Clear a stored best time when all positive responses are withdrawn
    /// (default keeps the last computed value)
    #[arg(long)]
    clear_stale_best: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    Create {
        /// Event id (must be unique within the file)
        #[arg(long)]
        id: String,
        /// Event title
        #[arg(long)]
        title: String,
        /// Event description
        #[arg(long, default_value = "")]
        description: String,
        /// Creator's user id
        #[arg(long)]
        created_by: String,
        /// Tentative start instant (RFC 3339, e.g. 2026-09-01T10:00:00Z)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Tentative end instant (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,
        /// Candidate slot as "DAY START END" (e.g. "2026-09-01 10:00 11:00"); repeatable
        #[arg(long)]
        slot: Vec<String>,
    },
    /// Show one event in full
    Show {
        /// Event id
        #[arg(long)]
        id: String,
    },
    /// List all events
    List,
    /// List an event's candidate slots with their indices
    Slots {
        /// Event id
        #[arg(long)]
        event: String,
    },
    /// Delete an event
    Delete {
        /// Event id
        #[arg(long)]
        id: String,
    },
    /// Record or replace a participant's RSVP
    Rsvp {
        /// Event id
        #[arg(long)]
        event: String,
        /// Participant's user id
        #[arg(long)]
        user: String,
        /// One of: pending, accepted, declined
        #[arg(long)]
        status: String,
    },
    /// Record a participant's availability responses (replaces any prior record)
    Respond {
        /// Event id
        #[arg(long)]
        event: String,
        /// Participant's user id
        #[arg(long)]
        user: String,
        /// Comma-separated "INDEX=RESPONSE" pairs, e.g. "0=available,1=maybe"
        #[arg(long)]
        responses: String,
    },
    /// Show the current best meeting time for an event
    Best {
        /// Event id
        #[arg(long)]
        event: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = load_store(&cli.file)?;
    let policy = if cli.clear_stale_best {
        StaleBestTime::Clear
    } else {
        StaleBestTime::Retain
    };
    let mut service = EventService::with_stale_policy(store, policy);

    match cli.command {
        Commands::Create {
            id,
            title,
            description,
            created_by,
            start,
            end,
            slot,
        } => {
            let time_slots = slot
                .iter()
                .map(|s| parse_slot(s))
                .collect::<Result<Vec<TimeSlot>>>()?;
            let event = Event {
                id: id.clone(),
                title,
                description,
                start_time: start,
                end_time: end,
                created_by,
                participants: vec![],
                time_slots,
                availability: vec![],
                best_time: None,
            };
            service.create_event(event)?;
            save_store(&cli.file, service.into_store())?;
            println!("Created event '{}'", id);
        }
        Commands::Show { id } => {
            let event = service.event(&id)?;
            let json = serde_json::to_string_pretty(&event)?;
            println!("{}", json);
        }
        Commands::List => {
            for event in service.events() {
                let best = match &event.best_time {
                    Some(bt) => format_best_time(bt),
                    None => "no best time yet".to_string(),
                };
                println!(
                    "{}  {} ({} slots, {} responses) — {}",
                    event.id,
                    event.title,
                    event.time_slots.len(),
                    event.availability.len(),
                    best
                );
            }
        }
        Commands::Slots { event } => {
            let event = service.event(&event)?;
            if event.time_slots.is_empty() {
                println!("No slots proposed");
            }
            // Indices are what a respond spec refers to, so print them first.
            for (index, slot) in event.time_slots.iter().enumerate() {
                println!(
                    "{}  {} {} - {}",
                    index,
                    slot.day.format("%a, %b %-d"),
                    slot.start_time.format("%-I:%M %p"),
                    slot.end_time.format("%-I:%M %p")
                );
            }
        }
        Commands::Delete { id } => {
            service.delete_event(&id)?;
            save_store(&cli.file, service.into_store())?;
            println!("Deleted event '{}'", id);
        }
        Commands::Rsvp {
            event,
            user,
            status,
        } => {
            let status = parse_rsvp(&status)?;
            service.rsvp(&event, &user, status)?;
            save_store(&cli.file, service.into_store())?;
            println!("Recorded RSVP for '{}'", user);
        }
        Commands::Respond {
            event,
            user,
            responses,
        } => {
            let responses = parse_responses(&responses)?;
            let best = service.record_response(&event, &user, responses)?;
            save_store(&cli.file, service.into_store())?;
            match best {
                Some(bt) => println!("Best time: {}", format_best_time(&bt)),
                None => println!("No best time yet"),
            }
        }
        Commands::Best { event } => {
            let event = service.event(&event)?;
            match &event.best_time {
                Some(bt) => println!("Best time: {}", format_best_time(bt)),
                None => println!("No best time yet"),
            }
        }
    }

    Ok(())
}

/// Load the event store from a JSON file. A missing file is an empty store.
fn load_store(path: &Path) -> Result<InMemoryEventStore> {
    if !path.exists() {
        return Ok(InMemoryEventStore::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file: {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events file: {}", path.display()))?;
    Ok(InMemoryEventStore::from_events(events))
}

/// Write the event store back as a pretty-printed JSON array.
fn save_store(path: &Path, store: InMemoryEventStore) -> Result<()> {
    let events = store.list();
    let json = serde_json::to_string_pretty(&events)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write events file: {}", path.display()))?;
    Ok(())
}

/// Parse a "DAY START END" slot spec, e.g. "2026-09-01 10:00 11:00".
fn parse_slot(spec: &str) -> Result<TimeSlot> {
    let parts: Vec<&str> = spec.split_whitespace().collect();
    let [day, start, end] = parts.as_slice() else {
        bail!("Invalid slot '{}': expected \"DAY START END\"", spec);
    };
    let day: NaiveDate = day
        .parse()
        .with_context(|| format!("Invalid slot day: {}", day))?;
    Ok(TimeSlot {
        day,
        start_time: parse_wall_time(start)?,
        end_time: parse_wall_time(end)?,
    })
}

/// Accept both "10:00" and "10:00:00".
fn parse_wall_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .with_context(|| format!("Invalid time: {}", raw))
}

/// Parse a comma-separated "INDEX=RESPONSE" list into a responses map.
fn parse_responses(raw: &str) -> Result<BTreeMap<usize, Response>> {
    let mut responses = BTreeMap::new();
    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((index, response)) = pair.split_once('=') else {
            bail!("Invalid response '{}': expected INDEX=RESPONSE", pair);
        };
        let index: usize = index
            .trim()
            .parse()
            .with_context(|| format!("Invalid slot index: {}", index))?;
        responses.insert(index, parse_response(response.trim())?);
    }
    if responses.is_empty() {
        bail!("No responses given: expected e.g. \"0=available,1=maybe\"");
    }
    Ok(responses)
}

fn parse_response(raw: &str) -> Result<Response> {
    match raw {
        "available" => Ok(Response::Available),
        "unavailable" => Ok(Response::Unavailable),
        "maybe" => Ok(Response::Maybe),
        other => bail!(
            "Unknown response: '{}'. Expected available, unavailable, or maybe",
            other
        ),
    }
}

fn parse_rsvp(raw: &str) -> Result<RsvpStatus> {
    match raw {
        "pending" => Ok(RsvpStatus::Pending),
        "accepted" => Ok(RsvpStatus::Accepted),
        "declined" => Ok(RsvpStatus::Declined),
        other => bail!(
            "Unknown RSVP status: '{}'. Expected pending, accepted, or declined",
            other
        ),
    }
}

/// Render a best time as "Tue, Sep 1 10:00 AM - 11:00 AM (2 attendees)".
fn format_best_time(best: &BestTime) -> String {
    format!(
        "{} {} - {} ({} {})",
        best.day.format("%a, %b %-d"),
        best.start_time.format("%-I:%M %p"),
        best.end_time.format("%-I:%M %p"),
        best.attendees,
        if best.attendees == 1 {
            "attendee"
        } else {
            "attendees"
        }
    )
}
