//! SQLite storage layer for Atrium

mod hosts;
mod meetings;
mod migrations;
mod parse;
mod rooms;
mod traits;

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::instrument;

use crate::error::Result;
use crate::models::{Host, Meeting, MeetingDisplay, Room};

pub use hosts::HostStore;
pub use meetings::MeetingStore;
pub use rooms::RoomStore;
pub use traits::{HostRepository, MeetingRepository, RoomRepository, Storage};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    /// Get meeting store
    pub fn meetings(&self) -> MeetingStore<'_> {
        MeetingStore::new(&self.conn)
    }

    /// Get host store
    pub fn hosts(&self) -> HostStore<'_> {
        HostStore::new(&self.conn)
    }

    /// Get room store
    pub fn rooms(&self) -> RoomStore<'_> {
        RoomStore::new(&self.conn)
    }
}

// Implement repository traits for Database
// This enables using Database through the trait interface

impl MeetingRepository for Database {
    fn create_meeting(
        &self,
        room_id: i64,
        host_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Meeting> {
        self.meetings().create(room_id, host_id, start_time, end_time)
    }

    fn find_meeting_by_id(&self, id: i64) -> Result<Option<Meeting>> {
        self.meetings().find_by_id(id)
    }

    fn find_meeting_display(&self, id: i64) -> Result<Option<MeetingDisplay>> {
        self.meetings().find_display_by_id(id)
    }

    fn list_meetings(&self) -> Result<Vec<MeetingDisplay>> {
        self.meetings().list_all()
    }

    fn find_meetings_by_host(&self, host_id: &str) -> Result<Vec<Meeting>> {
        self.meetings().find_by_host(host_id)
    }

    fn find_overlapping_meetings(
        &self,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude: Option<i64>,
    ) -> Result<Vec<Meeting>> {
        self.meetings()
            .find_overlapping(room_id, start_time, end_time, exclude)
    }

    fn update_meeting(
        &self,
        id: i64,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<()> {
        self.meetings().update(id, room_id, start_time, end_time)
    }

    fn delete_meeting(&self, id: i64) -> Result<()> {
        self.meetings().delete(id)
    }

    fn purge_meetings(&self) -> Result<u64> {
        self.meetings().purge_all()
    }
}

impl HostRepository for Database {
    fn create_host(&self, host: &Host) -> Result<()> {
        self.hosts().create(host)
    }

    fn find_host_by_id(&self, id: &str) -> Result<Option<Host>> {
        self.hosts().find_by_id(id)
    }

    fn list_hosts(&self) -> Result<Vec<Host>> {
        self.hosts().list_all()
    }

    fn update_host(&self, host: &Host) -> Result<()> {
        self.hosts().update(host)
    }

    fn delete_host(&self, id: &str) -> Result<()> {
        self.hosts().delete(id)
    }
}

impl RoomRepository for Database {
    fn create_room(&self, name: &str, capacity: u32) -> Result<Room> {
        self.rooms().create(name, capacity)
    }

    fn find_room_by_id(&self, id: i64) -> Result<Option<Room>> {
        self.rooms().find_by_id(id)
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        self.rooms().list_all()
    }
}
