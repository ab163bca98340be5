//! De-duplicating event storage.
//!
//! `EventSet` is the narrow set interface the calendar is built on: add,
//! remove-if-present, membership, size and iteration. Iteration order is
//! unspecified.
//!
//! Bulk construction from unvalidated input is all-or-nothing: every item is
//! converted before any is stored, so a failure never leaves a partially
//! populated set behind.

use std::collections::hash_set;
use std::collections::HashSet;

use serde_json::Value;

use crate::error::{CalendarError, Result};
use crate::event::{Event, EventRecord};

/// An unordered set of unique events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    events: HashSet<Event>,
}

impl EventSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from items that must each convert into an [`Event`].
    ///
    /// # Errors
    /// Returns the first conversion error. No set is built in that case.
    pub fn try_collect<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: TryInto<Event, Error = CalendarError>,
    {
        let validated = items
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Event>>>()?;

        Ok(validated.into_iter().collect())
    }

    /// Build a set from a JSON value that must be an array of event objects.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidArgument` if `value` is not an array,
    /// if any element is not an event object, or if any instant is invalid.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(CalendarError::invalid(format!(
                "events must be a list, not {}",
                json_kind(value)
            )));
        };

        let records = items
            .iter()
            .map(|item| {
                if !item.is_object() {
                    return Err(CalendarError::invalid(format!(
                        "events must be a list of events, not {}",
                        json_kind(item)
                    )));
                }
                EventRecord::deserialize_from(item)
            })
            .collect::<Result<Vec<EventRecord>>>()?;

        Self::try_collect(records)
    }

    /// Insert an event. Returns `false` if it was already present.
    pub fn add(&mut self, event: Event) -> bool {
        self.events.insert(event)
    }

    /// Remove an event if present. Returns whether anything was removed.
    pub fn remove(&mut self, event: &Event) -> bool {
        self.events.remove(event)
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Event> {
        self.events.iter()
    }
}

impl EventRecord {
    fn deserialize_from(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| CalendarError::invalid(format!("malformed event: {}", e)))
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

impl FromIterator<Event> for EventSet {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<Event> for EventSet {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl IntoIterator for EventSet {
    type Item = Event;
    type IntoIter = hash_set::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventSet {
    type Item = &'a Event;
    type IntoIter = hash_set::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
