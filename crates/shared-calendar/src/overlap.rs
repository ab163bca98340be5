//! The half-open interval overlap predicate.
//!
//! An event `[es, ee)` overlaps a query range `[qs, qe)` iff any of:
//!
//! 1. `qs <= es < qe` — the event starts inside the range
//! 2. `qs < ee <= qe` — the event ends inside the range
//! 3. `es <= qs < ee` — the range starts inside the event
//! 4. `es < qe <= ee` — the range ends inside the event
//!
//! Clauses 1/3 and 2/4 cover much of the same ground from opposite sides.
//! They are kept as four clauses because the boundary behaviour for
//! zero-length and inverted intervals depends on exactly this form: an
//! event starting at `qe` or ending at `qs` is excluded, an event starting
//! at `qs` is included, and a zero-length event at `t` matches any range
//! with `qs <= t <= qe` other than the empty range at `t` itself.

use crate::instant::Instant;

/// Whether the event `[event_start, event_end)` intersects `[start, end)`.
pub fn overlaps(event_start: Instant, event_end: Instant, start: Instant, end: Instant) -> bool {
    (start <= event_start && event_start < end)
        || (start < event_end && event_end <= end)
        || (event_start <= start && start < event_end)
        || (event_start < end && end <= event_end)
}
