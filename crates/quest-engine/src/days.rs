//! Weekday abbreviation parsing.
//!
//! The export writes meeting days as a run of abbreviations with no
//! separators (`MWF`, `TTh`, `SuMWF`). The alphabet has a prefix collision:
//! `T` (Tuesday) is a valid code on its own and also the first character of
//! `Th` (Thursday), and likewise `S` / `Su`. Two-character codes are therefore
//! matched and stripped from the working copy before any single-character code
//! is tested.

use std::fmt;

use chrono::Weekday;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Two-character codes, in resolution order.
const TWO_CHAR_CODES: [(&str, Weekday); 2] = [("Su", Weekday::Sun), ("Th", Weekday::Thu)];

/// Single-character codes, tested only against what the two-character pass left.
const ONE_CHAR_CODES: [(char, Weekday); 5] = [
    ('M', Weekday::Mon),
    ('T', Weekday::Tue),
    ('W', Weekday::Wed),
    ('F', Weekday::Fri),
    ('S', Weekday::Sat),
];

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A set of weekdays, iterated Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a day. Returns `true` if it was not already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let bit = Self::bit(day);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.contains(*day))
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// Renders as `tuesday and thursday`.
impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            f.write_str(day_name(day))?;
        }
        Ok(())
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for day in self.iter() {
            seq.serialize_element(day_name(day))?;
        }
        seq.end()
    }
}

/// Lowercase English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Decompose a compact abbreviation run into the weekdays it names.
///
/// `Su` and `Th` are resolved first and removed from the working copy so that
/// their leading `S` / `T` cannot be counted again as Saturday / Tuesday. The
/// remaining single-character codes are then tested in the order
/// `M`, `T`, `W`, `F`, `S`. Characters outside the alphabet are ignored, and
/// repeated codes collapse to one day.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use quest_engine::days::parse_days;
///
/// let days = parse_days("TTh");
/// assert_eq!(days.iter().collect::<Vec<_>>(), vec![Weekday::Tue, Weekday::Thu]);
/// ```
pub fn parse_days(token: &str) -> DaySet {
    let mut rest = token.to_string();
    let mut days = DaySet::empty();

    for (code, day) in TWO_CHAR_CODES {
        if rest.contains(code) {
            days.insert(day);
            rest = rest.replace(code, "");
        }
    }

    for (code, day) in ONE_CHAR_CODES {
        if rest.contains(code) {
            days.insert(day);
        }
    }

    days
}
