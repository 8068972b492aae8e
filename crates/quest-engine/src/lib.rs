//! # quest-engine
//!
//! Converts a pasted class-schedule export into structured course records and
//! a flat list of timezone-correct calendar events.
//!
//! The export carries no field delimiters. Parsing locates a handful of
//! reliably recognizable anchors (course headers, section headers, date
//! ranges) and treats the text between them as payload. Expansion then walks
//! each meeting slot's date range day by day instead of emitting an RRULE, so
//! every event has its own explicit, DST-correct instants.
//!
//! ## Modules
//!
//! - [`parser`] — export text → [`CourseRecord`]s
//! - [`segment`] — leading/trailing anchor spanning used by the parser
//! - [`days`] — compact weekday abbreviations (`TTh`, `MWF`) → [`DaySet`]
//! - [`location`] — building-code lookup
//! - [`expander`] — meeting slot → [`EventOccurrence`]s
//! - [`dst`] — wall-clock → zoned instant, with a policy for DST gaps
//! - [`ics`] — occurrences → iCalendar document
//! - [`report`] — records → JSON dump
//! - [`source`] — reading the export
//! - [`error`] — Error types

pub mod days;
pub mod dst;
pub mod error;
pub mod expander;
pub mod ics;
pub mod location;
pub mod parser;
pub mod report;
pub mod segment;
pub mod source;
pub mod types;

pub use days::{parse_days, DaySet};
pub use dst::DstPolicy;
pub use error::ScheduleError;
pub use expander::{expand_schedule, expand_slot, EventOccurrence, EventText, ExpandOptions};
pub use location::{BuildingTable, LocationResolver};
pub use parser::{parse_schedule, ParseOptions};
pub use types::{ClassSectionRecord, CourseRecord, MeetingSlot, MissingInstructor};
