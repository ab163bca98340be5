//! Report conflicting event pairs within a calendar.
//!
//! Uses the same per-event range scan as [`Calendar::has_conflicts`], so a
//! calendar has conflicts exactly when this report is non-empty.

use serde::Serialize;
use tracing::debug;

use crate::calendar::Calendar;
use crate::event::Event;
use crate::instant::Instant;

/// A detected conflict between two events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// The earlier-starting event of the pair.
    pub event_a: Event,
    pub event_b: Event,
    /// `min(end) - max(start)` in minutes, floored at zero.
    pub overlap_minutes: i64,
}

/// Sort key making pair orientation and report order deterministic.
fn key(event: &Event) -> (Instant, &str, Instant) {
    (event.start(), event.name(), event.end())
}

/// Find every unordered pair of distinct, overlapping events in `calendar`.
///
/// Pairs are oriented so `event_a` sorts first by (start, name, end) and the
/// report is sorted by that same order.
pub fn find_conflicts(calendar: &Calendar) -> Vec<Conflict> {
    let mut pairs: Vec<(&Event, &Event)> = Vec::new();

    for event in calendar.events() {
        for other in calendar.overlapping(event.start(), event.end()) {
            if other == event {
                continue;
            }
            if key(event) <= key(other) {
                pairs.push((event, other));
            } else {
                pairs.push((other, event));
            }
        }
    }

    // A pair is usually found from both sides.
    pairs.sort_by(|x, y| (key(x.0), key(x.1)).cmp(&(key(y.0), key(y.1))));
    pairs.dedup();

    debug!(
        calendar = %calendar.name(),
        conflicts = pairs.len(),
        "conflict scan finished"
    );

    pairs
        .into_iter()
        .map(|(a, b)| {
            let overlap_start = a.start().max(b.start());
            let overlap_end = a.end().min(b.end());
            Conflict {
                event_a: a.clone(),
                event_b: b.clone(),
                overlap_minutes: (overlap_end - overlap_start).num_minutes().max(0),
            }
        })
        .collect()
}
