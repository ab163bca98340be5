//! The shared calendar: a named set of events with range and conflict queries.
//!
//! Range queries are a linear scan with the overlap predicate, and conflict
//! detection runs one range query per event, giving O(n²) overall. Calendars
//! are single-owner values; share one across threads only behind a lock.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::conflict::{self, Conflict};
use crate::error::{CalendarError, Result};
use crate::event::Event;
use crate::event_set::{json_kind, EventSet};
use crate::instant::Instant;

/// A named collection of unique events.
///
/// Conflicting events may be stored side by side; use
/// [`Calendar::has_conflicts`] or [`Calendar::conflicts`] to find them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    name: String,
    events: EventSet,
}

#[derive(Serialize)]
struct CalendarDocument<'a> {
    name: &'a str,
    events: Vec<&'a Event>,
}

impl Calendar {
    /// Create an empty calendar.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_events(name, EventSet::new())
    }

    /// Create a calendar holding `events`. Duplicates collapse into one.
    pub fn with_events(name: impl Into<String>, events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            name: name.into(),
            events: events.into_iter().collect(),
        }
    }

    /// Create a calendar from items that must each convert into an event.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if any item fails to convert;
    /// no calendar is created in that case.
    pub fn try_with_events<I>(name: impl Into<String>, items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: TryInto<Event, Error = CalendarError>,
    {
        let events = EventSet::try_collect(items)?;
        Ok(Self {
            name: name.into(),
            events,
        })
    }

    /// Load a calendar from a JSON document `{"name": ..., "events": [...]}`.
    ///
    /// `name` defaults to the empty string and `events` to an empty list.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if the text is not JSON, the
    /// document is not an object, `name` is not a string, or `events` is not
    /// a list of valid events.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| CalendarError::invalid(format!("calendar is not valid JSON: {}", e)))?;

        let Value::Object(fields) = &document else {
            return Err(CalendarError::invalid(format!(
                "calendar must be an object, not {}",
                json_kind(&document)
            )));
        };

        let name = match fields.get("name") {
            None => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(CalendarError::invalid(format!(
                    "name must be a string, not {}",
                    json_kind(other)
                )))
            }
        };

        let events = match fields.get("events") {
            None => EventSet::new(),
            Some(value) => EventSet::from_json_value(value)?,
        };

        debug!(calendar = %name, events = events.len(), "calendar loaded");

        Ok(Self { name, events })
    }

    /// Serialise the calendar as a JSON document, events in display order.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        let document = CalendarDocument {
            name: &self.name,
            events: self.sorted_events(),
        };
        serde_json::to_string_pretty(&document).map_err(|e| {
            CalendarError::invalid(format!("calendar could not be serialised: {}", e))
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn events(&self) -> &EventSet {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }

    /// Insert an event. Re-adding an existing event is a no-op.
    pub fn add_event(&mut self, event: Event) {
        debug!(calendar = %self.name, event = %event.name(), "add_event");
        let inserted = self.events.add(event);
        debug!(calendar = %self.name, inserted, events = self.len(), "add_event finished");
    }

    /// Remove an event. Removing an absent event is a no-op.
    pub fn remove_event(&mut self, event: &Event) {
        let removed = self.events.remove(event);
        debug!(calendar = %self.name, event = %event.name(), removed, "remove_event");
    }

    /// Every event intersecting the half-open range `[start, end)`.
    ///
    /// The result is a snapshot in unspecified order.
    pub fn events_between(&self, start: Instant, end: Instant) -> Vec<Event> {
        let matches: Vec<Event> = self.overlapping(start, end).cloned().collect();
        trace!(
            calendar = %self.name,
            %start,
            %end,
            matches = matches.len(),
            "events_between"
        );
        matches
    }

    /// Whether any two distinct events overlap.
    ///
    /// Each event's own range is queried against the whole set, so this is
    /// O(n²) in the number of events.
    pub fn has_conflicts(&self) -> bool {
        let found = self.events.iter().any(|event| {
            self.overlapping(event.start(), event.end())
                .any(|other| other != event)
        });
        debug!(calendar = %self.name, events = self.len(), found, "has_conflicts");
        found
    }

    /// Every conflicting pair of events, each pair reported once.
    pub fn conflicts(&self) -> Vec<Conflict> {
        conflict::find_conflicts(self)
    }

    /// Events sorted by start time. Events sharing a start keep storage order.
    pub fn sorted_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by(|a, b| a.cmp_start(b));
        events
    }

    pub(crate) fn overlapping(
        &self,
        start: Instant,
        end: Instant,
    ) -> impl Iterator<Item = &Event> + '_ {
        self.events
            .iter()
            .filter(move |event| event.overlaps(start, end))
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<String> = self
            .sorted_events()
            .iter()
            .map(|event| event.to_string())
            .collect();
        write!(f, "{}:\n{}", self.name, blocks.join("\n"))
    }
}
