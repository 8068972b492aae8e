//! Tests for building-code resolution.

use quest_engine::{BuildingTable, LocationResolver, ScheduleError};

#[test]
fn known_code_keeps_room() {
    let table = BuildingTable::waterloo();
    let resolver = LocationResolver::new(&table, true);
    assert_eq!(
        resolver.resolve("EIT 1015"),
        "Centre for Environmental & Information Technology (EIT) 1015"
    );
}

#[test]
fn known_code_drops_room() {
    let table = BuildingTable::waterloo();
    let resolver = LocationResolver::new(&table, false);
    assert_eq!(resolver.resolve("MC 4020"), "Mathematics & Computer Building (MC)");
}

#[test]
fn code_without_room() {
    let table = BuildingTable::waterloo();
    let resolver = LocationResolver::new(&table, true);
    assert_eq!(resolver.resolve("PAC"), "Physical Activities Complex (PAC)");
}

#[test]
fn unknown_code_passes_through() {
    let table = BuildingTable::waterloo();
    let resolver = LocationResolver::new(&table, true);
    assert_eq!(resolver.resolve("XYZ 201"), "XYZ 201");
    assert_eq!(resolver.resolve("  Online  "), "Online");
}

#[test]
fn empty_room_is_unknown() {
    let table = BuildingTable::waterloo();
    let resolver = LocationResolver::new(&table, true);
    assert_eq!(resolver.resolve(""), "TBA");
    assert_eq!(resolver.resolve("   "), "TBA");
}

#[test]
fn alternate_table_from_json() {
    let table = BuildingTable::from_json(r#"{"SCI": "Science Hall (SCI)"}"#).unwrap();
    assert_eq!(table.len(), 1);

    let resolver = LocationResolver::new(&table, true);
    assert_eq!(resolver.resolve("SCI 100"), "Science Hall (SCI) 100");
    // The built-in table is not consulted.
    assert_eq!(resolver.resolve("EIT 1015"), "EIT 1015");
}

#[test]
fn malformed_json_rejected() {
    let err = BuildingTable::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, ScheduleError::BuildingTable(_)));
}

#[test]
fn code_with_whitespace_rejected() {
    let err = BuildingTable::from_json(r#"{"E 5": "Engineering 5"}"#).unwrap_err();
    assert!(matches!(err, ScheduleError::BuildingTable(_)));
}

#[test]
fn waterloo_table_is_populated() {
    let table = BuildingTable::waterloo();
    assert!(!table.is_empty());
    assert_eq!(table.get("DC"), Some("William G. Davis Computer Research Centre (DC)"));
    assert_eq!(table.get("NOPE"), None);
}
