//! Reservation engine
//!
//! Authorizes create/update/delete requests against the scheduling
//! rules: window legality first, then quota, then room availability
//! (cheapest and most likely to fail first). A failed check aborts
//! before any write; the store mutex is held across the whole
//! check-and-commit sequence so concurrent requests for the same room
//! or host cannot both pass their checks.

pub mod availability;
pub mod quota;
pub mod window;

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Timelike, Utc};
use tracing::{info, instrument};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::invariants::assert_meeting_invariants;
use crate::models::MeetingDisplay;
use crate::storage::Storage;

/// A candidate create or update mutation
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub room_id: i64,
    pub host_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl ReservationRequest {
    /// Hours this request would commit (window rules make this sound)
    fn requested_hours(&self) -> i64 {
        i64::from(self.end_time.hour()) - i64::from(self.start_time.hour())
    }
}

/// Orchestrates validation and persistence of reservations
///
/// Stateless between invocations; all durable state lives in the store.
pub struct ReservationEngine<S> {
    store: Arc<Mutex<S>>,
    clock: Arc<dyn Clock>,
}

impl<S: Storage> ReservationEngine<S> {
    pub fn new(store: Arc<Mutex<S>>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn with_system_clock(store: Arc<Mutex<S>>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// List all meetings with joined host and room data
    pub fn list_meetings(&self) -> Result<Vec<MeetingDisplay>> {
        self.store.lock().unwrap().list_meetings()
    }

    /// Fetch a single meeting with joined host and room data
    pub fn get_meeting(&self, meeting_id: i64) -> Result<MeetingDisplay> {
        self.store
            .lock()
            .unwrap()
            .find_meeting_display(meeting_id)?
            .ok_or_else(|| Error::NotFound(format!("Meeting {meeting_id} not found")))
    }

    /// Validate and persist a new reservation
    #[instrument(skip(self, req), fields(room_id = req.room_id, host_id = %req.host_id))]
    pub fn create_meeting(&self, req: &ReservationRequest) -> Result<MeetingDisplay> {
        let now = self.clock.now();
        window::validate(now, req.start_time, req.end_time)?;

        let store = self.store.lock().unwrap();

        let host_meetings = store.find_meetings_by_host(&req.host_id)?;
        let day = req.start_time.date_naive();
        if quota::would_exceed_quota(&host_meetings, day, req.requested_hours(), None) {
            return Err(Error::QuotaExceeded(format!(
                "host {} may reserve at most {} hours on {day}",
                req.host_id,
                quota::DAILY_QUOTA_HOURS
            )));
        }

        let conflicts =
            store.find_overlapping_meetings(req.room_id, req.start_time, req.end_time, None)?;
        if !conflicts.is_empty() {
            return Err(Error::RoomUnavailable(format!(
                "room {} is already reserved in that window",
                req.room_id
            )));
        }

        let meeting =
            store.create_meeting(req.room_id, &req.host_id, req.start_time, req.end_time)?;
        assert_meeting_invariants(&meeting);

        info!(meeting_id = meeting.id, "Meeting created");
        store
            .find_meeting_display(meeting.id)?
            .ok_or_else(|| Error::NotFound(format!("Meeting {} not found", meeting.id)))
    }

    /// Validate and persist changes to an existing reservation
    ///
    /// Room and times may change; the host never does. The meeting being
    /// edited is excluded from both the quota sum and the overlap set.
    #[instrument(skip(self, req), fields(room_id = req.room_id, host_id = %req.host_id))]
    pub fn update_meeting(
        &self,
        meeting_id: i64,
        req: &ReservationRequest,
    ) -> Result<MeetingDisplay> {
        let now = self.clock.now();
        let store = self.store.lock().unwrap();

        let existing = store
            .find_meeting_by_id(meeting_id)?
            .ok_or_else(|| Error::NotFound(format!("Meeting {meeting_id} not found")))?;
        if existing.host_id != req.host_id {
            return Err(Error::Unauthorized(
                "meetings can only be updated by their host".to_string(),
            ));
        }

        window::validate(now, req.start_time, req.end_time)?;

        let host_meetings = store.find_meetings_by_host(&req.host_id)?;
        let day = req.start_time.date_naive();
        if quota::would_exceed_quota(
            &host_meetings,
            day,
            req.requested_hours(),
            Some(meeting_id),
        ) {
            return Err(Error::QuotaExceeded(format!(
                "host {} may reserve at most {} hours on {day}",
                req.host_id,
                quota::DAILY_QUOTA_HOURS
            )));
        }

        let conflicts = store.find_overlapping_meetings(
            req.room_id,
            req.start_time,
            req.end_time,
            Some(meeting_id),
        )?;
        if !conflicts.is_empty() {
            return Err(Error::RoomUnavailable(format!(
                "room {} is already reserved in that window",
                req.room_id
            )));
        }

        store.update_meeting(meeting_id, req.room_id, req.start_time, req.end_time)?;
        if let Some(updated) = store.find_meeting_by_id(meeting_id)? {
            assert_meeting_invariants(&updated);
        }

        info!(meeting_id, "Meeting updated");
        store
            .find_meeting_display(meeting_id)?
            .ok_or_else(|| Error::NotFound(format!("Meeting {meeting_id} not found")))
    }

    /// Remove a reservation before it starts
    #[instrument(skip(self, host_id))]
    pub fn delete_meeting(&self, meeting_id: i64, host_id: &str) -> Result<MeetingDisplay> {
        let store = self.store.lock().unwrap();

        let existing = store
            .find_meeting_by_id(meeting_id)?
            .ok_or_else(|| Error::NotFound(format!("Meeting {meeting_id} not found")))?;
        if existing.host_id != host_id {
            return Err(Error::Unauthorized(
                "meetings can only be deleted by their host".to_string(),
            ));
        }

        if self.clock.now() >= existing.start_time {
            return Err(Error::AlreadyInProgress(format!(
                "meeting {meeting_id} has already started"
            )));
        }

        let display = store
            .find_meeting_display(meeting_id)?
            .ok_or_else(|| Error::NotFound(format!("Meeting {meeting_id} not found")))?;
        store.delete_meeting(meeting_id)?;

        info!(meeting_id, "Meeting deleted");
        Ok(display)
    }

    /// Remove every meeting, bypassing validation (administrative reset)
    #[instrument(skip(self))]
    pub fn purge_all(&self) -> Result<u64> {
        let removed = self.store.lock().unwrap().purge_meetings()?;
        info!(removed, "Purged all meetings");
        Ok(removed)
    }
}
