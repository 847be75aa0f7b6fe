//! Room-overlap detection
//!
//! Intervals are half-open `[start, end)`: a meeting ending at 10:00
//! never conflicts with one starting at 10:00 in the same room. The
//! store query in `storage::meetings` mirrors this predicate in SQL.

use chrono::{DateTime, Utc};

use crate::models::Meeting;

/// Half-open interval overlap; touching endpoints do not conflict
pub fn overlaps(
    s1: DateTime<Utc>,
    e1: DateTime<Utc>,
    s2: DateTime<Utc>,
    e2: DateTime<Utc>,
) -> bool {
    s1 < e2 && e1 > s2
}

/// First meeting in `meetings` that conflicts with `[start, end)` in `room_id`
///
/// `exclude` skips the meeting being edited so a no-op update never
/// conflicts with itself.
pub fn first_conflict<'a>(
    meetings: &'a [Meeting],
    room_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude: Option<i64>,
) -> Option<&'a Meeting> {
    meetings
        .iter()
        .filter(|m| m.room_id == room_id)
        .filter(|m| Some(m.id) != exclude)
        .find(|m| overlaps(m.start_time, m.end_time, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0).unwrap()
    }

    fn meeting(id: i64, room_id: i64, start_hour: u32, end_hour: u32) -> Meeting {
        Meeting {
            id,
            room_id,
            host_id: "host-a".to_string(),
            start_time: at(start_hour),
            end_time: at(end_hour),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_overlap_symmetric() {
        assert!(overlaps(at(10), at(12), at(11), at(13)));
        assert!(overlaps(at(11), at(13), at(10), at(12)));
    }

    #[test]
    fn test_touching_endpoints_do_not_conflict() {
        assert!(!overlaps(at(9), at(10), at(10), at(11)));
        assert!(!overlaps(at(10), at(11), at(9), at(10)));
    }

    #[test]
    fn test_containment_conflicts() {
        assert!(overlaps(at(9), at(17), at(11), at(12)));
        assert!(overlaps(at(11), at(12), at(9), at(17)));
    }

    #[test]
    fn test_other_room_ignored() {
        let meetings = vec![meeting(1, 2, 10, 12)];

        assert!(first_conflict(&meetings, 1, at(10), at(12), None).is_none());
        assert!(first_conflict(&meetings, 2, at(11), at(13), None).is_some());
    }

    #[test]
    fn test_self_exclusion() {
        let meetings = vec![meeting(7, 1, 10, 12)];

        assert!(first_conflict(&meetings, 1, at(10), at(12), Some(7)).is_none());
        assert!(first_conflict(&meetings, 1, at(10), at(12), None).is_some());
    }
}
