//! Room storage operations
//!
//! Rooms are seeded once and then only read; catalog management is
//! intentionally not offered.

use chrono::Utc;
use rusqlite::{params, Connection, Row};
use tracing::instrument;

use super::parse::{parse_datetime, OptionalExt};
use crate::error::Result;
use crate::models::Room;

pub struct RoomStore<'a> {
    conn: &'a Connection,
}

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        name: row.get(1)?,
        capacity: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?)?,
    })
}

impl<'a> RoomStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create a room and return it with its assigned id
    #[instrument(skip(self))]
    pub fn create(&self, name: &str, capacity: u32) -> Result<Room> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO rooms (name, capacity, created_at) VALUES (?1, ?2, ?3)",
            params![name, capacity, created_at.to_rfc3339()],
        )?;

        Ok(Room {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            capacity,
            created_at,
        })
    }

    /// Find room by ID
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: i64) -> Result<Option<Room>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, capacity, created_at FROM rooms WHERE id = ?1")?;

        let room = stmt.query_row(params![id], room_from_row).optional()?;

        Ok(room)
    }

    /// List all rooms
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<Room>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, capacity, created_at FROM rooms ORDER BY name")?;

        let rooms = stmt
            .query_map([], room_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rooms)
    }
}
