//! Meeting model - a reserved time slot in a room

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A booked time slot in a meeting room
///
/// The id is assigned by the store on creation and immutable thereafter.
/// The host never changes after creation; room and times may be edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub room_id: i64,
    pub host_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    /// Reserved hours, counted by hour-field subtraction.
    ///
    /// Sound only for validated meetings: the window rules guarantee
    /// hour-aligned endpoints on a single calendar day.
    pub fn duration_hours(&self) -> i64 {
        i64::from(self.end_time.hour()) - i64::from(self.start_time.hour())
    }
}

/// Meeting with joined host and room information for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingDisplay {
    pub id: i64,
    pub room_id: i64,
    pub room_name: String,
    pub host_id: String,
    pub host_name: String,
    pub host_department: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl MeetingDisplay {
    pub fn format_slot(&self) -> String {
        format!(
            "{} {}-{}",
            self.start_time.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration_hours() {
        let meeting = Meeting {
            id: 1,
            room_id: 1,
            host_id: "ab12cd".to_string(),
            start_time: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap(),
            created_at: Utc::now(),
        };

        assert_eq!(meeting.duration_hours(), 3);
    }
}
