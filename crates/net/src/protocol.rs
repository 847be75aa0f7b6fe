//! Wire protocol message types
//!
//! All messages are JSON-serialized and length-prefixed on the wire.
//! Wire types mirror the core models but stay decoupled from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A meeting with joined host and room data, as sent to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMeeting {
    pub id: i64,
    pub room_id: i64,
    pub room_name: String,
    pub host_id: String,
    pub host_name: String,
    pub host_department: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Why a request was rejected (mirrors the engine's error taxonomy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectKind {
    NotFound,
    Unauthorized,
    InvalidWindow,
    QuotaExceeded,
    RoomUnavailable,
    AlreadyInProgress,
    /// Store or transport failure, not a client-input error
    Internal,
}

/// Requests a caller can issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// List all meetings
    ListMeetings,

    /// Fetch a single meeting
    GetMeeting { meeting_id: i64 },

    /// Reserve a room
    CreateMeeting {
        room_id: i64,
        host_id: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },

    /// Edit an existing reservation (host must own it)
    UpdateMeeting {
        meeting_id: i64,
        room_id: i64,
        host_id: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },

    /// Cancel a reservation before it starts
    DeleteMeeting { meeting_id: i64, host_id: String },

    /// Liveness probe
    Ping,
}

/// Responses the service sends back
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// All meetings
    Meetings { meetings: Vec<WireMeeting> },

    /// A single created, updated, or fetched meeting
    Meeting { meeting: WireMeeting },

    /// The meeting that was removed
    Deleted { meeting: WireMeeting },

    /// The request violated a scheduling rule or referenced missing data
    Rejected { kind: RejectKind, reason: String },

    /// Pong response to ping
    Pong,
}
