//! Tests for the Event value type: equality, hashing, start ordering, display.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};
use shared_calendar::{CalendarError, Event, EventRecord};

/// Helper to build a timezone-agnostic instant.
fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn hash_of(event: &Event) -> u64 {
    let mut hasher = DefaultHasher::new();
    event.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_iff_all_three_fields_match() {
    let e1 = Event::new("event1", at(2022, 1, 1, 0, 0), at(2022, 1, 2, 0, 0));
    let e2 = Event::new("event1", at(2022, 1, 1, 0, 0), at(2022, 1, 2, 0, 0));
    let e3 = Event::new("event2", at(2022, 1, 1, 0, 0), at(2022, 1, 2, 0, 0));
    let e4 = Event::new("event1", at(2022, 1, 2, 0, 0), at(2022, 1, 3, 0, 0));
    let e5 = Event::new("event1", at(2022, 1, 1, 0, 0), at(2022, 1, 31, 0, 0));

    assert_eq!(e1, e2);
    assert_ne!(e1, e3, "different name");
    assert_ne!(e1, e4, "different start");
    assert_ne!(e1, e5, "different end");
}

#[test]
fn equal_events_hash_equal() {
    let e1 = Event::new("standup", at(2022, 1, 1, 9, 0), at(2022, 1, 1, 9, 15));
    let e2 = Event::new("standup", at(2022, 1, 1, 9, 0), at(2022, 1, 1, 9, 15));
    assert_eq!(hash_of(&e1), hash_of(&e2));
}

#[test]
fn earlier_start_orders_first() {
    let e1 = Event::new("e1", at(2021, 1, 1, 0, 0), at(2021, 1, 2, 0, 0));
    let e2 = Event::new("e2", at(2021, 1, 2, 0, 0), at(2021, 1, 3, 0, 0));

    assert!(e1.starts_before(&e2));
    assert!(e1.starts_at_or_before(&e2));
    assert!(!e1.starts_after(&e2));
    assert!(!e1.starts_at_or_after(&e2));

    assert!(!e2.starts_before(&e1));
    assert!(!e2.starts_at_or_before(&e1));
    assert!(e2.starts_after(&e1));
    assert!(e2.starts_at_or_after(&e1));
}

#[test]
fn shared_start_is_neither_before_nor_after() {
    // Same start, different name and end: unequal but unordered.
    let e1 = Event::new("e1", at(2021, 1, 1, 0, 0), at(2021, 1, 2, 0, 0));
    let e2 = Event::new("e2", at(2021, 1, 1, 0, 0), at(2021, 1, 5, 0, 0));

    assert_ne!(e1, e2);
    assert!(!e1.starts_before(&e2));
    assert!(!e2.starts_before(&e1));
    assert!(!e1.starts_after(&e2));
    assert!(!e2.starts_after(&e1));
    assert!(e1.starts_at_or_before(&e2));
    assert!(e1.starts_at_or_after(&e2));
    assert_eq!(e1.cmp_start(&e2), std::cmp::Ordering::Equal);
}

#[test]
fn display_renders_indented_block() {
    let event = Event::new(
        "Tennis with Frank",
        at(2020, 1, 1, 0, 0),
        at(2020, 1, 2, 13, 45),
    );
    assert_eq!(
        event.to_string(),
        "  Tennis with Frank:\n    Start: 2020-01-01 00:00\n    End: 2020-01-02 13:45"
    );
}

#[test]
fn debug_names_every_field() {
    let event = Event::new(
        "Tennis with Frank",
        at(2020, 1, 1, 0, 0),
        at(2020, 1, 2, 0, 0),
    );
    assert_eq!(
        format!("{:?}", event),
        "Event(name=Tennis with Frank, start=2020-01-01 00:00:00, end=2020-01-02 00:00:00)"
    );
}

#[test]
fn inverted_event_is_accepted() {
    let event = Event::new("backwards", at(2020, 1, 2, 0, 0), at(2020, 1, 1, 0, 0));
    assert_eq!(event.duration_minutes(), -24 * 60);
}

#[test]
fn record_converts_with_textual_instants() {
    let record = EventRecord {
        name: "Lunch".to_string(),
        start: "2020-01-01 12:00".to_string(),
        end: "2020-01-01T13:30:00".to_string(),
    };
    let event = Event::try_from(record).unwrap();
    assert_eq!(event.start(), at(2020, 1, 1, 12, 0));
    assert_eq!(event.end(), at(2020, 1, 1, 13, 30));
    assert_eq!(event.duration_minutes(), 90);
}

#[test]
fn record_with_bad_instant_is_invalid_argument() {
    let record = EventRecord {
        name: "Lunch".to_string(),
        start: "noon".to_string(),
        end: "2020-01-01 13:00".to_string(),
    };
    let err = Event::try_from(record).unwrap_err();
    assert!(matches!(err, CalendarError::InvalidArgument(ref m) if m.contains("noon")));
}

#[test]
fn serde_json_roundtrip_preserves_identity() {
    let event = Event::new("Review", at(2020, 3, 4, 10, 0), at(2020, 3, 4, 11, 0));
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Review","start":"2020-03-04T10:00:00","end":"2020-03-04T11:00:00"}"#
    );
    let back: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn deserialising_bad_instant_fails() {
    let result: Result<Event, _> =
        serde_json::from_str(r#"{"name":"x","start":"soon","end":"2020-01-01"}"#);
    assert!(result.is_err());
}
