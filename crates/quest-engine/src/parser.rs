//! Schedule parser -- recovers course / section / slot structure from a
//! pasted schedule export.
//!
//! Parsing runs three levels of anchor spanning (see [`crate::segment`]):
//!
//! 1. course headers (`CS 138 - Intro Data Abstract & Implem`) carve the text
//!    into course bodies;
//! 2. section headers (`5951 001 LEC`) carve a course body into section bodies;
//! 3. date ranges (`01/06/2026 - 02/13/2026`) close each meeting slot inside a
//!    section body.
//!
//! Within a slot, the time range is mandatory. The day run sits immediately
//! before it; the room and instructor lines follow it. A slot with no lines
//! after the time always gets the unknown marker as its instructor;
//! [`MissingInstructor`] only applies once a room line is present.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};
use tracing::{debug, info, trace};

use crate::days::parse_days;
use crate::location::{BuildingTable, LocationResolver};
use crate::segment;
use crate::types::{ClassSectionRecord, CourseRecord, MeetingSlot, MissingInstructor, UNKNOWN};

static COURSE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2,5})\s+(\d{3}[A-Z]?)\s+-\s+([^\r\n]+)")
        .expect("valid course header regex")
});

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4,5})\s+(\d{3})\s+([A-Z]{3})\b").expect("valid section header regex")
});

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})").expect("valid date range regex")
});

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2})\s*([AP]M)\s*-\s*(\d{1,2}):(\d{2})\s*([AP]M)")
        .expect("valid time range regex")
});

/// The day run is the last word before the time range.
static DAY_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((?:Su|Th|M|T|W|F|S)+)\s*$").expect("valid day run regex"));

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub buildings: BuildingTable,
    /// Keep the room number after the building name is substituted.
    pub keep_room: bool,
    pub missing_instructor: MissingInstructor,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            buildings: BuildingTable::waterloo(),
            keep_room: true,
            missing_instructor: MissingInstructor::default(),
        }
    }
}

impl ParseOptions {
    fn resolver(&self) -> LocationResolver<'_> {
        LocationResolver::new(&self.buildings, self.keep_room)
    }
}

/// Parse a full export into course records, in document order.
///
/// Never fails: text that matches no anchor simply yields no records, and
/// incomplete slots are dropped.
pub fn parse_schedule(text: &str, options: &ParseOptions) -> Vec<CourseRecord> {
    let courses: Vec<CourseRecord> = segment::leading(text, &COURSE_HEADER)
        .into_iter()
        .map(|course| {
            let code = format!("{} {}", &course.anchor[1], &course.anchor[2]);
            trace!(%code, "course header");
            CourseRecord {
                title: course.anchor[3].trim().to_string(),
                sections: split_sections(course.body, options),
                code,
            }
        })
        .collect();

    info!(
        courses = courses.len(),
        slots = count_slots(&courses),
        "parsed schedule"
    );
    courses
}

/// Carve one course body into class sections.
///
/// `TST` sections are skipped without looking at their slots.
pub fn split_sections(body: &str, options: &ParseOptions) -> Vec<ClassSectionRecord> {
    segment::leading(body, &SECTION_HEADER)
        .into_iter()
        .filter_map(|section| {
            let record = ClassSectionRecord {
                class_number: section.anchor[1].to_string(),
                section: section.anchor[2].to_string(),
                component: section.anchor[3].to_string(),
                slots: Vec::new(),
            };
            if record.is_test() {
                debug!(class_number = %record.class_number, "skipping test section");
                return None;
            }
            trace!(
                class_number = %record.class_number,
                component = %record.component,
                "section header"
            );
            Some(ClassSectionRecord {
                slots: extract_slots(section.body, options),
                ..record
            })
        })
        .collect()
}

/// Extract every complete meeting slot from one section body.
pub fn extract_slots(body: &str, options: &ParseOptions) -> Vec<MeetingSlot> {
    let resolver = options.resolver();
    segment::trailing(body, &DATE_RANGE)
        .into_iter()
        .filter_map(|slot| {
            extract_slot(slot.lead, &slot.anchor, &resolver, options.missing_instructor)
        })
        .collect()
}

fn extract_slot(
    lead: &str,
    dates: &Captures<'_>,
    resolver: &LocationResolver<'_>,
    missing_instructor: MissingInstructor,
) -> Option<MeetingSlot> {
    let Some(time) = TIME_RANGE.captures(lead) else {
        debug!(lead = lead.trim(), "dropping slot without a time range");
        return None;
    };
    let whole = time.get(0)?;

    let (Some(start_time), Some(end_time)) = (
        clock_time(&time[1], &time[2], &time[3]),
        clock_time(&time[4], &time[5], &time[6]),
    ) else {
        debug!(time = whole.as_str(), "dropping slot with an invalid time");
        return None;
    };
    if start_time >= end_time {
        debug!(time = whole.as_str(), "dropping slot that ends before it starts");
        return None;
    }

    let days = DAY_RUN
        .captures(&lead[..whole.start()])
        .map(|run| parse_days(&run[1]))
        .unwrap_or_default();
    if days.is_empty() {
        debug!(lead = lead.trim(), "dropping slot without meeting days");
        return None;
    }

    let (Ok(date_start), Ok(date_end)) = (
        NaiveDate::parse_from_str(&dates[1], DATE_FORMAT),
        NaiveDate::parse_from_str(&dates[2], DATE_FORMAT),
    ) else {
        debug!(dates = &dates[0], "dropping slot with an invalid date");
        return None;
    };
    if date_start > date_end {
        debug!(dates = &dates[0], "dropping slot with a reversed date range");
        return None;
    }

    let mut lines = lead[whole.end()..]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());
    let raw_location = lines.next().unwrap_or_default().to_string();
    let instructors: Vec<&str> = lines.collect();
    let instructor = match (instructors.is_empty(), raw_location.is_empty()) {
        (false, _) => instructors.join(", "),
        (true, false) => missing_instructor.render().to_string(),
        (true, true) => UNKNOWN.to_string(),
    };

    Some(MeetingSlot {
        days,
        start_time,
        end_time,
        location: resolver.resolve(&raw_location),
        raw_location,
        instructor,
        date_start,
        date_end,
    })
}

/// Convert a 12-hour clock reading to a time of day.
fn clock_time(hour: &str, minute: &str, meridiem: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match (meridiem, hour) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        (_, h) => h + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Total number of slots across all courses.
pub fn count_slots(courses: &[CourseRecord]) -> usize {
    courses
        .iter()
        .flat_map(|course| &course.sections)
        .map(|section| section.slots.len())
        .sum()
}
