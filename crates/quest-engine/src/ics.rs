//! iCalendar output -- renders expanded occurrences as a `VCALENDAR` with one
//! `VEVENT` each.
//!
//! Instants are written in UTC form (`20260106T150000Z`), which every calendar
//! client accepts without a `VTIMEZONE` block. Output is deterministic for a
//! given event list and `DTSTAMP`.
//!
//! # Example
//! ```
//! use chrono::{TimeZone, Utc};
//! use quest_engine::ics::encode_calendar;
//!
//! let stamp = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
//! let ics = encode_calendar(&[], stamp);
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
//! assert!(ics.ends_with("END:VCALENDAR\r\n"));
//! ```

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, Event, EventLike};

use crate::expander::EventOccurrence;

/// Encode occurrences into an iCalendar document.
///
/// `stamp` becomes every event's `DTSTAMP`.
pub fn encode_calendar(events: &[EventOccurrence], stamp: DateTime<Utc>) -> String {
    let mut calendar = Calendar::new();
    for event in events {
        calendar.push(to_event(event, stamp));
    }
    calendar.done().to_string()
}

fn to_event(occurrence: &EventOccurrence, stamp: DateTime<Utc>) -> Event {
    let mut event = Event::new();
    event
        .uid(&occurrence.uid)
        .timestamp(stamp)
        .starts(occurrence.start.with_timezone(&Utc))
        .ends(occurrence.end.with_timezone(&Utc))
        .summary(&occurrence.name)
        .location(&occurrence.location);
    if !occurrence.description.is_empty() {
        event.description(&occurrence.description);
    }
    event.done()
}
