//! Time-window legality checks
//!
//! A candidate interval must sit inside the daily operating window,
//! land on whole-hour boundaries, run forward within one calendar day,
//! and start strictly in the future. The first failing rule wins.

use chrono::{DateTime, Timelike, Utc};
use thiserror::Error;

/// First bookable hour of the day (inclusive)
pub const OPEN_HOUR: u32 = 9;

/// Last hour a meeting may end at (inclusive as an end hour)
pub const CLOSE_HOUR: u32 = 18;

/// Why a candidate window was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("rooms are only available between 09:00 and 18:00")]
    OutsideOperatingHours,

    #[error("start and end must fall on whole-hour boundaries")]
    NotHourAligned,

    #[error("end must be later than start")]
    EndNotAfterStart,

    #[error("a meeting must start and end on the same day")]
    SpansMultipleDays,

    #[error("a meeting must start in the future")]
    StartNotInFuture,
}

/// Validate a candidate interval against the window rules
pub fn validate(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), WindowError> {
    if start.hour() < OPEN_HOUR || end.hour() > CLOSE_HOUR {
        return Err(WindowError::OutsideOperatingHours);
    }

    if start.minute() != 0 || start.second() != 0 || end.minute() != 0 || end.second() != 0 {
        return Err(WindowError::NotHourAligned);
    }

    if start >= end {
        return Err(WindowError::EndNotAfterStart);
    }

    // Keeps hour-field duration arithmetic sound for quota accounting
    if start.date_naive() != end.date_naive() {
        return Err(WindowError::SpansMultipleDays);
    }

    if now >= start {
        return Err(WindowError::StartNotInFuture);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, min, sec).unwrap()
    }

    fn now() -> DateTime<Utc> {
        at(1, 8, 30, 0)
    }

    #[test]
    fn test_valid_window() {
        assert_eq!(validate(now(), at(1, 10, 0, 0), at(1, 12, 0, 0)), Ok(()));
    }

    #[test]
    fn test_full_day_window() {
        // 09:00-18:00 is the widest legal slot
        assert_eq!(validate(now(), at(1, 9, 0, 0), at(1, 18, 0, 0)), Ok(()));
    }

    #[test]
    fn test_before_opening() {
        assert_eq!(
            validate(now(), at(1, 8, 0, 0), at(1, 10, 0, 0)),
            Err(WindowError::OutsideOperatingHours)
        );
    }

    #[test]
    fn test_after_closing() {
        assert_eq!(
            validate(now(), at(1, 17, 0, 0), at(1, 19, 0, 0)),
            Err(WindowError::OutsideOperatingHours)
        );
    }

    #[test]
    fn test_not_hour_aligned() {
        assert_eq!(
            validate(now(), at(1, 10, 30, 0), at(1, 12, 0, 0)),
            Err(WindowError::NotHourAligned)
        );
        assert_eq!(
            validate(now(), at(1, 10, 0, 0), at(1, 12, 0, 15)),
            Err(WindowError::NotHourAligned)
        );
    }

    #[test]
    fn test_reversed_interval() {
        assert_eq!(
            validate(now(), at(1, 12, 0, 0), at(1, 10, 0, 0)),
            Err(WindowError::EndNotAfterStart)
        );
    }

    #[test]
    fn test_empty_interval() {
        assert_eq!(
            validate(now(), at(1, 12, 0, 0), at(1, 12, 0, 0)),
            Err(WindowError::EndNotAfterStart)
        );
    }

    #[test]
    fn test_multi_day_interval() {
        assert_eq!(
            validate(now(), at(1, 10, 0, 0), at(2, 11, 0, 0)),
            Err(WindowError::SpansMultipleDays)
        );
    }

    #[test]
    fn test_start_in_past() {
        assert_eq!(
            validate(at(1, 11, 0, 0), at(1, 10, 0, 0), at(1, 12, 0, 0)),
            Err(WindowError::StartNotInFuture)
        );
    }

    #[test]
    fn test_start_exactly_now() {
        // Strictly in the future: starting at the current instant is rejected
        assert_eq!(
            validate(at(1, 10, 0, 0), at(1, 10, 0, 0), at(1, 12, 0, 0)),
            Err(WindowError::StartNotInFuture)
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Both misaligned and reversed; operating-hours passes, alignment fires first
        assert_eq!(
            validate(now(), at(1, 12, 30, 0), at(1, 10, 30, 0)),
            Err(WindowError::NotHourAligned)
        );
    }
}
