//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (SQLite, mock, future network backend).

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Host, Meeting, MeetingDisplay, Room};

/// Meeting repository operations
pub trait MeetingRepository {
    /// Persist a new meeting and return it with its assigned id
    fn create_meeting(
        &self,
        room_id: i64,
        host_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Meeting>;

    /// Find meeting by ID
    fn find_meeting_by_id(&self, id: i64) -> Result<Option<Meeting>>;

    /// Find meeting by ID with joined host and room info
    fn find_meeting_display(&self, id: i64) -> Result<Option<MeetingDisplay>>;

    /// List all meetings with joined host and room info
    fn list_meetings(&self) -> Result<Vec<MeetingDisplay>>;

    /// All meetings owned by a host
    fn find_meetings_by_host(&self, host_id: &str) -> Result<Vec<Meeting>>;

    /// Meetings in a room whose interval overlaps [start, end), excluding `exclude`
    fn find_overlapping_meetings(
        &self,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude: Option<i64>,
    ) -> Result<Vec<Meeting>>;

    /// Update room and times of an existing meeting
    fn update_meeting(
        &self,
        id: i64,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<()>;

    /// Delete a meeting
    fn delete_meeting(&self, id: i64) -> Result<()>;

    /// Delete every meeting, returning the number removed
    fn purge_meetings(&self) -> Result<u64>;
}

/// Host repository operations
pub trait HostRepository {
    /// Create a new host
    fn create_host(&self, host: &Host) -> Result<()>;

    /// Find host by ID
    fn find_host_by_id(&self, id: &str) -> Result<Option<Host>>;

    /// List all hosts
    fn list_hosts(&self) -> Result<Vec<Host>>;

    /// Update a host's name and department
    fn update_host(&self, host: &Host) -> Result<()>;

    /// Delete a host
    fn delete_host(&self, id: &str) -> Result<()>;
}

/// Room repository operations
pub trait RoomRepository {
    /// Create a room and return it with its assigned id
    fn create_room(&self, name: &str, capacity: u32) -> Result<Room>;

    /// Find room by ID
    fn find_room_by_id(&self, id: i64) -> Result<Option<Room>>;

    /// List all rooms
    fn list_rooms(&self) -> Result<Vec<Room>>;
}

/// Combined storage interface
///
/// Provides access to all repository operations.
/// Implementations may be backed by SQLite, mocks, or network.
pub trait Storage: MeetingRepository + HostRepository + RoomRepository {}

// Blanket implementation: any type implementing all traits implements Storage
impl<T> Storage for T where T: MeetingRepository + HostRepository + RoomRepository {}
