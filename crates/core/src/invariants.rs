//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use chrono::Timelike;
use std::collections::HashMap;

use crate::models::Meeting;
use crate::reservation::availability::overlaps;
use crate::reservation::quota::DAILY_QUOTA_HOURS;
use crate::reservation::window::{CLOSE_HOUR, OPEN_HOUR};

/// Validate that a persisted meeting has a legal shape
pub fn assert_meeting_invariants(meeting: &Meeting) {
    debug_assert!(
        meeting.start_time < meeting.end_time,
        "Meeting {} has non-forward interval {} -> {}",
        meeting.id,
        meeting.start_time,
        meeting.end_time
    );

    debug_assert!(
        meeting.start_time.minute() == 0
            && meeting.start_time.second() == 0
            && meeting.end_time.minute() == 0
            && meeting.end_time.second() == 0,
        "Meeting {} is not hour-aligned",
        meeting.id
    );

    debug_assert!(
        meeting.start_time.hour() >= OPEN_HOUR && meeting.end_time.hour() <= CLOSE_HOUR,
        "Meeting {} lies outside the operating window: {} -> {}",
        meeting.id,
        meeting.start_time,
        meeting.end_time
    );

    debug_assert!(
        meeting.start_time.date_naive() == meeting.end_time.date_naive(),
        "Meeting {} spans calendar days",
        meeting.id
    );
}

/// Validate that no two meetings in the same room overlap
pub fn assert_room_schedule_invariants(meetings: &[Meeting]) {
    for (i, a) in meetings.iter().enumerate() {
        for b in &meetings[i + 1..] {
            debug_assert!(
                a.room_id != b.room_id
                    || !overlaps(a.start_time, a.end_time, b.start_time, b.end_time),
                "Meetings {} and {} overlap in room {}",
                a.id,
                b.id,
                a.room_id
            );
        }
    }
}

/// Validate that no host exceeds the daily quota in a schedule
pub fn assert_host_quota_invariants(meetings: &[Meeting]) {
    let mut totals: HashMap<(&str, chrono::NaiveDate), i64> = HashMap::new();
    for m in meetings {
        *totals
            .entry((m.host_id.as_str(), m.start_time.date_naive()))
            .or_insert(0) += m.duration_hours();
    }

    for ((host_id, day), total) in totals {
        debug_assert!(
            total <= DAILY_QUOTA_HOURS,
            "Host {} has {} hours booked on {}, cap is {}",
            host_id,
            total,
            day,
            DAILY_QUOTA_HOURS
        );
    }
}
