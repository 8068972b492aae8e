//! Occurrence expansion -- turns a recurring meeting slot into concrete,
//! timezone-attached calendar events.
//!
//! Slots are flattened to one event per meeting date instead of a single
//! RRULE event. Each occurrence carries its own zoned instants, so every
//! event is correct on both sides of a DST transition without depending on
//! the receiving calendar's rule evaluator.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::dst::{localize, DstPolicy};
use crate::error::{Result, ScheduleError};
use crate::types::{ClassSectionRecord, CourseRecord, MeetingSlot};

/// Default target zone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Toronto;

/// A single concrete calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOccurrence {
    /// Stable identifier: the slot key plus the UTC start instant.
    pub uid: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Display strings shared by every occurrence of a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventText {
    /// Course, class number and component, e.g. `cs-138-5951-lec`.
    pub key: String,
    pub name: String,
    pub location: String,
    pub description: String,
}

impl EventText {
    /// Build the display strings for a slot: `"CS 138 LEC"` as the name, the
    /// room line and instructor as the description.
    ///
    /// `lowercase` applies to name and description only.
    pub fn for_slot(
        course: &CourseRecord,
        section: &ClassSectionRecord,
        slot: &MeetingSlot,
        lowercase: bool,
    ) -> Self {
        let name = format!("{} {}", course.code, section.component);
        let key = slug(&format!(
            "{} {} {}",
            course.code, section.class_number, section.component
        ));
        let description = format!("{}\n{}", slot.raw_location, slot.instructor)
            .trim()
            .to_string();

        if lowercase {
            Self {
                key,
                name: name.to_lowercase(),
                location: slot.location.clone(),
                description: description.to_lowercase(),
            }
        } else {
            Self {
                key,
                name,
                location: slot.location.clone(),
                description,
            }
        }
    }
}

/// Expansion configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandOptions {
    pub timezone: Tz,
    pub dst_policy: DstPolicy,
    /// Lowercase event names and descriptions.
    pub lowercase: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            dst_policy: DstPolicy::default(),
            lowercase: false,
        }
    }
}

impl ExpandOptions {
    /// Default options targeting the named IANA zone.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTimezone` if `timezone` is not a valid
    /// IANA identifier.
    pub fn in_timezone(timezone: &str) -> Result<Self> {
        let timezone: Tz = timezone
            .parse()
            .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self {
            timezone,
            ..Self::default()
        })
    }
}

/// Expand one slot into its occurrences, in chronological order.
///
/// Walks every date from `date_start` to `date_end` inclusive and emits one
/// event for each date whose weekday is in the slot's day set. The zone is
/// attached once, after the date is combined with the wall-clock time.
///
/// An occurrence whose localized end does not fall after its start (a start
/// shifted past a DST gap beyond an unshifted end) is dropped.
pub fn expand_slot(
    slot: &MeetingSlot,
    text: &EventText,
    options: &ExpandOptions,
) -> Vec<EventOccurrence> {
    slot.date_start
        .iter_days()
        .take_while(|date| *date <= slot.date_end)
        .filter(|date| slot.days.contains(date.weekday()))
        .filter_map(|date| {
            let start = localize(date.and_time(slot.start_time), options.timezone, options.dst_policy)?;
            let end = localize(date.and_time(slot.end_time), options.timezone, options.dst_policy)?;
            if end <= start {
                debug!(%date, %start, %end, "dropping occurrence that ends before it starts");
                return None;
            }
            Some(EventOccurrence {
                uid: format!(
                    "{}-{}@quest2cal",
                    text.key,
                    start.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ")
                ),
                name: text.name.clone(),
                location: text.location.clone(),
                description: text.description.clone(),
                start,
                end,
            })
        })
        .collect()
}

/// Expand every slot of every non-test section, preserving document order.
pub fn expand_schedule(courses: &[CourseRecord], options: &ExpandOptions) -> Vec<EventOccurrence> {
    let mut events = Vec::new();

    for course in courses {
        for section in course.sections.iter().filter(|s| !s.is_test()) {
            for slot in &section.slots {
                let text = EventText::for_slot(course, section, slot, options.lowercase);
                events.extend(expand_slot(slot, &text, options));
            }
        }
    }

    tracing::info!(events = events.len(), timezone = %options.timezone, "expanded schedule");
    events
}

fn slug(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
