//! Meeting storage operations

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::instrument;

use super::parse::{parse_datetime, to_sql_instant, OptionalExt};
use crate::error::Result;
use crate::models::{Meeting, MeetingDisplay};

pub struct MeetingStore<'a> {
    conn: &'a Connection,
}

const MEETING_COLUMNS: &str = "id, room_id, host_id, start_time, end_time, created_at";

fn meeting_from_row(row: &Row<'_>) -> rusqlite::Result<Meeting> {
    Ok(Meeting {
        id: row.get(0)?,
        room_id: row.get(1)?,
        host_id: row.get(2)?,
        start_time: parse_datetime(&row.get::<_, String>(3)?)?,
        end_time: parse_datetime(&row.get::<_, String>(4)?)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?)?,
    })
}

fn display_from_row(row: &Row<'_>) -> rusqlite::Result<MeetingDisplay> {
    Ok(MeetingDisplay {
        id: row.get(0)?,
        room_id: row.get(1)?,
        room_name: row.get(2)?,
        host_id: row.get(3)?,
        host_name: row.get(4)?,
        host_department: row.get(5)?,
        start_time: parse_datetime(&row.get::<_, String>(6)?)?,
        end_time: parse_datetime(&row.get::<_, String>(7)?)?,
    })
}

impl<'a> MeetingStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Persist a new meeting and return it with its assigned id
    #[instrument(skip(self))]
    pub fn create(
        &self,
        room_id: i64,
        host_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Meeting> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO meetings (room_id, host_id, start_time, end_time, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                room_id,
                host_id,
                to_sql_instant(start_time),
                to_sql_instant(end_time),
                created_at.to_rfc3339(),
            ],
        )?;

        Ok(Meeting {
            id: self.conn.last_insert_rowid(),
            room_id,
            host_id: host_id.to_string(),
            start_time,
            end_time,
            created_at,
        })
    }

    /// Find meeting by ID
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: i64) -> Result<Option<Meeting>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MEETING_COLUMNS} FROM meetings WHERE id = ?1"
        ))?;

        let meeting = stmt
            .query_row(params![id], meeting_from_row)
            .optional()?;

        Ok(meeting)
    }

    /// Find meeting by ID with joined host and room info
    #[instrument(skip(self))]
    pub fn find_display_by_id(&self, id: i64) -> Result<Option<MeetingDisplay>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.room_id, r.name, m.host_id, h.name, h.department,
                    m.start_time, m.end_time
             FROM meetings m
             INNER JOIN rooms r ON r.id = m.room_id
             INNER JOIN hosts h ON h.id = m.host_id
             WHERE m.id = ?1",
        )?;

        let display = stmt
            .query_row(params![id], display_from_row)
            .optional()?;

        Ok(display)
    }

    /// List all meetings with joined host and room info
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<MeetingDisplay>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.room_id, r.name, m.host_id, h.name, h.department,
                    m.start_time, m.end_time
             FROM meetings m
             INNER JOIN rooms r ON r.id = m.room_id
             INNER JOIN hosts h ON h.id = m.host_id
             ORDER BY m.start_time, m.id",
        )?;

        let meetings = stmt
            .query_map([], display_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(meetings)
    }

    /// All meetings owned by a host
    #[instrument(skip(self))]
    pub fn find_by_host(&self, host_id: &str) -> Result<Vec<Meeting>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MEETING_COLUMNS} FROM meetings WHERE host_id = ?1 ORDER BY start_time"
        ))?;

        let meetings = stmt
            .query_map(params![host_id], meeting_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(meetings)
    }

    /// Meetings in a room whose interval overlaps [start, end)
    ///
    /// Half-open semantics: touching endpoints do not count. `exclude`
    /// removes the meeting being edited from the comparison set.
    #[instrument(skip(self))]
    pub fn find_overlapping(
        &self,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        exclude: Option<i64>,
    ) -> Result<Vec<Meeting>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {MEETING_COLUMNS} FROM meetings
             WHERE room_id = ?1 AND start_time < ?2 AND end_time > ?3
               AND (?4 IS NULL OR id != ?4)
             ORDER BY start_time"
        ))?;

        let meetings = stmt
            .query_map(
                params![
                    room_id,
                    to_sql_instant(end_time),
                    to_sql_instant(start_time),
                    exclude,
                ],
                meeting_from_row,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(meetings)
    }

    /// Update room and times of an existing meeting (host is immutable)
    #[instrument(skip(self))]
    pub fn update(
        &self,
        id: i64,
        room_id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<()> {
        self.conn.execute(
            "UPDATE meetings SET room_id = ?1, start_time = ?2, end_time = ?3 WHERE id = ?4",
            params![
                room_id,
                to_sql_instant(start_time),
                to_sql_instant(end_time),
                id,
            ],
        )?;
        Ok(())
    }

    /// Delete a meeting
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM meetings WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Delete every meeting, returning the number removed
    ///
    /// Administrative reset; bypasses all validation.
    #[instrument(skip(self))]
    pub fn purge_all(&self) -> Result<u64> {
        let removed = self.conn.execute("DELETE FROM meetings", [])?;
        Ok(removed as u64)
    }
}
