//! Structured JSON dump of parsed records.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::days::DaySet;
use crate::error::{Result, ScheduleError};
use crate::types::{ClassSectionRecord, CourseRecord, MeetingSlot};

const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Serialize)]
struct CourseView<'a> {
    code: &'a str,
    title: &'a str,
    sections: Vec<SectionView<'a>>,
}

#[derive(Serialize)]
struct SectionView<'a> {
    class_number: &'a str,
    section: &'a str,
    component: &'a str,
    slots: Vec<SlotView<'a>>,
}

#[derive(Serialize)]
struct SlotView<'a> {
    days: DaySet,
    start_time: String,
    end_time: String,
    raw_location: &'a str,
    location: &'a str,
    instructor: &'a str,
    date_start: NaiveDate,
    date_end: NaiveDate,
    schedule: String,
}

impl<'a> From<&'a CourseRecord> for CourseView<'a> {
    fn from(course: &'a CourseRecord) -> Self {
        Self {
            code: &course.code,
            title: &course.title,
            sections: course.sections.iter().map(SectionView::from).collect(),
        }
    }
}

impl<'a> From<&'a ClassSectionRecord> for SectionView<'a> {
    fn from(section: &'a ClassSectionRecord) -> Self {
        Self {
            class_number: &section.class_number,
            section: &section.section,
            component: &section.component,
            slots: section.slots.iter().map(SlotView::from).collect(),
        }
    }
}

impl<'a> From<&'a MeetingSlot> for SlotView<'a> {
    fn from(slot: &'a MeetingSlot) -> Self {
        Self {
            days: slot.days,
            start_time: clock(slot.start_time),
            end_time: clock(slot.end_time),
            raw_location: &slot.raw_location,
            location: &slot.location,
            instructor: &slot.instructor,
            date_start: slot.date_start,
            date_end: slot.date_end,
            schedule: schedule_phrase(slot),
        }
    }
}

/// Pretty-printed JSON of the full course → section → slot tree.
///
/// # Errors
/// Returns `ScheduleError::Serialize` if JSON encoding fails.
pub fn to_json(courses: &[CourseRecord]) -> Result<String> {
    let views: Vec<CourseView<'_>> = courses.iter().map(CourseView::from).collect();
    serde_json::to_string_pretty(&views).map_err(|e| ScheduleError::Serialize(e.to_string()))
}

/// Human-readable recurrence, e.g.
/// `10:00AM - 11:20AM, weekly on tuesday and thursday from 01/06/2026 to 02/13/2026`.
pub fn schedule_phrase(slot: &MeetingSlot) -> String {
    format!(
        "{} - {}, weekly on {} from {} to {}",
        clock(slot.start_time),
        clock(slot.end_time),
        slot.days,
        slot.date_start.format(DATE_FORMAT),
        slot.date_end.format(DATE_FORMAT),
    )
}

fn clock(time: NaiveTime) -> String {
    time.format("%-I:%M%p").to_string()
}
