//! The immutable calendar event value type.
//!
//! Equality and hashing use the full (name, start, end) triple. Ordering is a
//! weak preorder on `start` alone, exposed through explicit methods rather
//! than `PartialOrd` so the two relations never get mixed up: two distinct
//! events sharing a start are neither before nor after each other.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::instant::{format_instant, parse_instant, Instant};
use crate::overlap;

/// A named, time-bounded event.
///
/// No `start <= end` check is made; inverted and zero-length events are
/// representable and flow through the overlap predicate unchanged.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    name: String,
    start: Instant,
    end: Instant,
}

impl Event {
    pub fn new(name: impl Into<String>, start: Instant, end: Instant) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Length of the event in whole minutes. Negative for inverted events.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Compare two events by start time only.
    ///
    /// `Ordering::Equal` means "same start", not "same event".
    pub fn cmp_start(&self, other: &Event) -> Ordering {
        self.start.cmp(&other.start)
    }

    pub fn starts_before(&self, other: &Event) -> bool {
        self.start < other.start
    }

    pub fn starts_at_or_before(&self, other: &Event) -> bool {
        self.start <= other.start
    }

    pub fn starts_after(&self, other: &Event) -> bool {
        self.start > other.start
    }

    pub fn starts_at_or_after(&self, other: &Event) -> bool {
        self.start >= other.start
    }

    /// Whether this event intersects the half-open range `[start, end)`.
    ///
    /// See [`overlap::overlaps`] for the exact boundary rules.
    pub fn overlaps(&self, start: Instant, end: Instant) -> bool {
        overlap::overlaps(self.start, self.end, start, end)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(name={}, start={}, end={})",
            self.name, self.start, self.end
        )
    }
}

/// Renders the indented block used by the calendar display.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {}:\n    Start: {}\n    End: {}",
            self.name,
            format_instant(&self.start),
            format_instant(&self.end)
        )
    }
}

/// An event as it arrives from outside: instants still in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl TryFrom<EventRecord> for Event {
    type Error = CalendarError;

    fn try_from(record: EventRecord) -> Result<Self> {
        let start = parse_instant(&record.start)?;
        let end = parse_instant(&record.end)?;
        Ok(Event::new(record.name, start, end))
    }
}
