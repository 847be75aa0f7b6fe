//! Per-host daily quota accounting
//!
//! A host may commit at most six hours of meetings per calendar day.
//! The sum is scoped to the day of the candidate booking; when a meeting
//! is being edited it is excluded from the sum so the check sees the
//! schedule as it would look after the edit.

use chrono::NaiveDate;

use crate::models::Meeting;

/// Maximum reserved hours per host per calendar day
pub const DAILY_QUOTA_HOURS: i64 = 6;

/// Hours a host has committed on `day`, over their meetings
///
/// `meetings` is the host's own bookings; `exclude` removes the meeting
/// being edited from the sum.
pub fn committed_hours(meetings: &[Meeting], day: NaiveDate, exclude: Option<i64>) -> i64 {
    meetings
        .iter()
        .filter(|m| m.start_time.date_naive() == day)
        .filter(|m| Some(m.id) != exclude)
        .map(Meeting::duration_hours)
        .sum()
}

/// Would adding `add_hours` on `day` push the host over the cap?
///
/// Landing exactly on the cap is allowed.
pub fn would_exceed_quota(
    meetings: &[Meeting],
    day: NaiveDate,
    add_hours: i64,
    exclude: Option<i64>,
) -> bool {
    committed_hours(meetings, day, exclude) + add_hours > DAILY_QUOTA_HOURS
}
