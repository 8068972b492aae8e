//! Tests for the iCalendar output.

use chrono::{DateTime, TimeZone, Utc};
use quest_engine::expander::DEFAULT_TIMEZONE;
use quest_engine::ics::encode_calendar;
use quest_engine::{expand_schedule, parse_schedule, EventOccurrence, ExpandOptions, ParseOptions};

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn event(name: &str, location: &str, description: &str) -> EventOccurrence {
    EventOccurrence {
        uid: "cs-138-5951-lec-20260106T150000Z@quest2cal".to_string(),
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        start: DEFAULT_TIMEZONE.with_ymd_and_hms(2026, 1, 6, 10, 0, 0).unwrap(),
        end: DEFAULT_TIMEZONE.with_ymd_and_hms(2026, 1, 6, 11, 20, 0).unwrap(),
    }
}

fn fixture() -> String {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.txt");
    std::fs::read_to_string(path).expect("schedule.txt fixture must exist")
}

/// Undo RFC 5545 line folding.
fn unfold(ics: &str) -> String {
    ics.replace("\r\n ", "").replace("\r\n\t", "")
}

#[test]
fn empty_calendar_is_well_formed() {
    let ics = encode_calendar(&[], stamp());
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.contains("VERSION:2.0\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(!ics.contains("BEGIN:VEVENT"));
}

#[test]
fn event_fields_in_utc() {
    let ics = unfold(&encode_calendar(&[event("CS 138 LEC", "EIT", "EIT 1015")], stamp()));

    assert!(ics.contains("BEGIN:VEVENT\r\n"));
    assert!(ics.contains("DTSTAMP:20260101T000000Z\r\n"));
    // 10:00 EST = 15:00 UTC
    assert!(ics.contains("DTSTART:20260106T150000Z\r\n"));
    assert!(ics.contains("DTEND:20260106T162000Z\r\n"));
    assert!(ics.contains("SUMMARY:CS 138 LEC\r\n"));
    assert!(ics.contains("LOCATION:EIT\r\n"));
    assert!(ics.contains("DESCRIPTION:EIT 1015\r\n"));
    assert!(ics.contains("UID:cs-138-5951-lec-20260106T150000Z@quest2cal\r\n"));
    assert!(ics.contains("END:VEVENT\r\n"));
}

#[test]
fn empty_description_omitted() {
    let ics = encode_calendar(&[event("CS 138 LEC", "TBA", "")], stamp());
    assert!(!ics.contains("DESCRIPTION"));
}

#[test]
fn multiline_description_stays_one_property() {
    let ics = unfold(&encode_calendar(
        &[event("CS 138 LEC", "EIT", "EIT 1015\nMike Godfrey")],
        stamp(),
    ));

    // Every content line is a component delimiter or a named property.
    for line in ics.split("\r\n").filter(|l| !l.is_empty()) {
        let name = line.split([':', ';']).next().unwrap_or_default();
        assert!(
            !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase() || c == '-'),
            "stray content line: {:?}",
            line
        );
    }
    assert!(ics.contains("Mike Godfrey"));
}

#[test]
fn long_lines_unfold_to_full_value() {
    let location =
        "Mike & Ophelia Lazaridis Quantum-Nano Centre (QNC) 1502 Lecture Theatre overflow seating east wing";
    let ics = encode_calendar(&[event("CS 138 LEC", location, "")], stamp());

    assert!(!ics.contains(location));
    assert!(unfold(&ics).contains(&format!("LOCATION:{}\r\n", location)));
}

#[test]
fn uids_unique_and_stable() {
    let courses = parse_schedule(&fixture(), &ParseOptions::default());
    let events = expand_schedule(&courses, &ExpandOptions::default());

    let first = encode_calendar(&events, stamp());
    let second = encode_calendar(&events, stamp());
    assert_eq!(first, second);

    let unfolded = unfold(&first);
    let uids: Vec<&str> = unfolded.lines().filter(|l| l.starts_with("UID:")).collect();
    let unique: std::collections::HashSet<&str> = uids.iter().copied().collect();
    assert_eq!(uids.len(), events.len());
    assert_eq!(unique.len(), uids.len());
}

#[test]
fn one_vevent_per_occurrence() {
    let courses = parse_schedule(&fixture(), &ParseOptions::default());
    let events = expand_schedule(&courses, &ExpandOptions::default());
    let ics = encode_calendar(&events, stamp());

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 65);
    assert_eq!(ics.matches("END:VEVENT").count(), 65);
}
