//! DST handling when a wall-clock time is attached to a timezone.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

/// Policy for wall-clock times that fall in a spring-forward gap.
///
/// Times that occur twice (fall-back overlap) always resolve to the earlier
/// instant, regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DstPolicy {
    /// Drop the occurrence (e.g., 2:30 AM on the spring-forward date).
    Skip,
    /// Move past the gap by the size of the offset jump (2:30 AM becomes 3:30 AM).
    #[default]
    ShiftForward,
}

/// Attach `tz` to a naive wall-clock datetime.
///
/// Returns `None` only when the time does not exist in `tz` and the policy is
/// [`DstPolicy::Skip`].
pub fn localize(naive: NaiveDateTime, tz: Tz, policy: DstPolicy) -> Option<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Some(dt);
    }

    match policy {
        DstPolicy::Skip => None,
        DstPolicy::ShiftForward => shift_past_gap(naive, tz),
    }
}

/// Read `naive` with the UTC offset in effect before the gap, then express
/// that instant in `tz`.
fn shift_past_gap(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    let before = tz.from_local_datetime(&(naive - Duration::days(1))).earliest()?;
    let offset = before.offset().fix().local_minus_utc();
    let utc = naive - Duration::seconds(i64::from(offset));
    Some(tz.from_utc_datetime(&utc))
}
