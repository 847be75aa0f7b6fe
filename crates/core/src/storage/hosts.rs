//! Host storage operations
//!
//! The database is the single source of truth for host records; there is
//! no in-memory mirror.

use rusqlite::{params, Connection, Row};
use tracing::instrument;

use super::parse::{parse_datetime, OptionalExt};
use crate::error::Result;
use crate::models::Host;

pub struct HostStore<'a> {
    conn: &'a Connection,
}

fn host_from_row(row: &Row<'_>) -> rusqlite::Result<Host> {
    Ok(Host {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?)?,
    })
}

impl<'a> HostStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create a new host
    #[instrument(skip(self, host), fields(host_id = %host.id))]
    pub fn create(&self, host: &Host) -> Result<()> {
        self.conn.execute(
            "INSERT INTO hosts (id, name, department, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                host.id,
                host.name,
                host.department,
                host.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Find host by ID
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Result<Option<Host>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, department, created_at FROM hosts WHERE id = ?1")?;

        let host = stmt.query_row(params![id], host_from_row).optional()?;

        Ok(host)
    }

    /// List all hosts
    #[instrument(skip(self))]
    pub fn list_all(&self) -> Result<Vec<Host>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, department, created_at FROM hosts ORDER BY name")?;

        let hosts = stmt
            .query_map([], host_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(hosts)
    }

    /// Update a host's name and department
    #[instrument(skip(self, host), fields(host_id = %host.id))]
    pub fn update(&self, host: &Host) -> Result<()> {
        self.conn.execute(
            "UPDATE hosts SET name = ?1, department = ?2 WHERE id = ?3",
            params![host.name, host.department, host.id],
        )?;
        Ok(())
    }

    /// Delete a host (their meetings cascade)
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM hosts WHERE id = ?1", params![id])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Database;
    use crate::models::Host;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_host_crud() {
        let db = Database::open_in_memory().unwrap();
        let mut host = Host::new("Mina".to_string(), "Platform".to_string());

        db.hosts().create(&host).unwrap();
        assert_eq!(db.hosts().find_by_id(&host.id).unwrap().unwrap().name, "Mina");

        host.department = "Infra".to_string();
        db.hosts().update(&host).unwrap();
        assert_eq!(
            db.hosts().find_by_id(&host.id).unwrap().unwrap().department,
            "Infra"
        );

        db.hosts().delete(&host.id).unwrap();
        assert!(db.hosts().find_by_id(&host.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_cascades_to_meetings() {
        let db = Database::open_in_memory().unwrap();
        let room = db.rooms().create("Auditorium", 12).unwrap();
        let host = Host::new("Mina".to_string(), "Platform".to_string());
        db.hosts().create(&host).unwrap();

        let start = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).unwrap();
        let meeting = db.meetings().create(room.id, &host.id, start, end).unwrap();

        db.hosts().delete(&host.id).unwrap();
        assert!(db.meetings().find_by_id(meeting.id).unwrap().is_none());
    }
}
