//! # shared-calendar
//!
//! A named, in-memory collection of time-bounded events with half-open range
//! queries and on-demand conflict detection.
//!
//! Events are immutable values ordered by start time only, while equality
//! and hashing consider the full (name, start, end) triple. A calendar may
//! legally hold conflicting events; conflicts are reported, never prevented.
//!
//! ## Modules
//!
//! - [`event`] — the immutable `Event` value type
//! - [`instant`] — textual instant parsing and display formats
//! - [`overlap`] — the half-open overlap predicate
//! - [`event_set`] — de-duplicating event storage with eager validation
//! - [`calendar`] — the `Calendar`: add/remove, range queries, conflicts
//! - [`conflict`] — pairwise conflict reports
//! - [`error`] — Error types

pub mod calendar;
pub mod conflict;
pub mod error;
pub mod event;
pub mod event_set;
pub mod instant;
pub mod overlap;

pub use calendar::Calendar;
pub use conflict::Conflict;
pub use error::CalendarError;
pub use event::{Event, EventRecord};
pub use event_set::EventSet;
pub use instant::{parse_instant, Instant};
