//! Parsed schedule records.
//!
//! All records are built in a single pass over the export and never mutated
//! afterwards.

use chrono::{NaiveDate, NaiveTime};

use crate::days::DaySet;

/// Marker rendered for a missing room or instructor.
pub const UNKNOWN: &str = "TBA";

/// Component code of exam/test sections. These never reach the output.
pub const TEST_COMPONENT: &str = "TST";

/// One course, e.g. `CS 138 - Intro Data Abstract & Implem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Subject and catalog number, single-spaced (`CS 138`).
    pub code: String,
    pub title: String,
    pub sections: Vec<ClassSectionRecord>,
}

/// One class section of a course (`5951 001 LEC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSectionRecord {
    pub class_number: String,
    pub section: String,
    /// Three-letter component code: `LEC`, `TUT`, `LAB`, ...
    pub component: String,
    pub slots: Vec<MeetingSlot>,
}

impl ClassSectionRecord {
    pub fn is_test(&self) -> bool {
        self.component == TEST_COMPONENT
    }
}

/// A recurring day/time/room pattern over an inclusive date range.
///
/// Only complete slots are constructed: `days` is non-empty,
/// `start_time < end_time` and `date_start <= date_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSlot {
    pub days: DaySet,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Room line as it appears in the export (`EIT 1015`), or empty.
    pub raw_location: String,
    pub location: String,
    pub instructor: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

/// How a slot with no instructor line renders its instructor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingInstructor {
    /// Render the [`UNKNOWN`] marker.
    #[default]
    Unknown,
    /// Render an empty string.
    Empty,
}

impl MissingInstructor {
    pub fn render(self) -> &'static str {
        match self {
            MissingInstructor::Unknown => UNKNOWN,
            MissingInstructor::Empty => "",
        }
    }
}
