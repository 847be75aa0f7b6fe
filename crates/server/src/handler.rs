//! Maps wire requests onto the reservation engine

use std::sync::Arc;

use atrium_core::{Database, Error, MeetingDisplay, ReservationEngine, ReservationRequest};
use atrium_net::{Handler, RejectKind, Request, Response, WireMeeting};
use tracing::{info, warn};

/// Answers protocol requests by delegating to the engine
pub struct EngineHandler {
    engine: Arc<ReservationEngine<Database>>,
}

impl EngineHandler {
    pub fn new(engine: Arc<ReservationEngine<Database>>) -> Self {
        EngineHandler { engine }
    }
}

impl Handler for EngineHandler {
    fn handle(&self, request: Request) -> Response {
        match request {
            Request::Ping => Response::Pong,

            Request::ListMeetings => match self.engine.list_meetings() {
                Ok(meetings) => Response::Meetings {
                    meetings: meetings.into_iter().map(to_wire).collect(),
                },
                Err(e) => reject(e),
            },

            Request::GetMeeting { meeting_id } => respond(self.engine.get_meeting(meeting_id)),

            Request::CreateMeeting {
                room_id,
                host_id,
                start_time,
                end_time,
            } => {
                let req = ReservationRequest {
                    room_id,
                    host_id,
                    start_time,
                    end_time,
                };
                match self.engine.create_meeting(&req) {
                    Ok(meeting) => {
                        info!(meeting_id = meeting.id, slot = %meeting.format_slot(), "Meeting created");
                        Response::Meeting {
                            meeting: to_wire(meeting),
                        }
                    }
                    Err(e) => reject(e),
                }
            }

            Request::UpdateMeeting {
                meeting_id,
                room_id,
                host_id,
                start_time,
                end_time,
            } => {
                let req = ReservationRequest {
                    room_id,
                    host_id,
                    start_time,
                    end_time,
                };
                respond(self.engine.update_meeting(meeting_id, &req))
            }

            Request::DeleteMeeting {
                meeting_id,
                host_id,
            } => match self.engine.delete_meeting(meeting_id, &host_id) {
                Ok(meeting) => Response::Deleted {
                    meeting: to_wire(meeting),
                },
                Err(e) => reject(e),
            },
        }
    }
}

fn respond(result: atrium_core::Result<MeetingDisplay>) -> Response {
    match result {
        Ok(meeting) => Response::Meeting {
            meeting: to_wire(meeting),
        },
        Err(e) => reject(e),
    }
}

fn to_wire(meeting: MeetingDisplay) -> WireMeeting {
    WireMeeting {
        id: meeting.id,
        room_id: meeting.room_id,
        room_name: meeting.room_name,
        host_id: meeting.host_id,
        host_name: meeting.host_name,
        host_department: meeting.host_department,
        start_time: meeting.start_time,
        end_time: meeting.end_time,
    }
}

fn reject(error: Error) -> Response {
    let kind = match &error {
        Error::NotFound(_) => RejectKind::NotFound,
        Error::Unauthorized(_) => RejectKind::Unauthorized,
        Error::InvalidWindow(_) => RejectKind::InvalidWindow,
        Error::QuotaExceeded(_) => RejectKind::QuotaExceeded,
        Error::RoomUnavailable(_) => RejectKind::RoomUnavailable,
        Error::AlreadyInProgress(_) => RejectKind::AlreadyInProgress,
        Error::Database(_) | Error::Io(_) => RejectKind::Internal,
    };

    if kind == RejectKind::Internal {
        warn!(error = %error, "Request failed");
    }

    Response::Rejected {
        kind,
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::{FixedClock, Host, HostRepository, RoomRepository};
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    fn handler() -> (EngineHandler, String, i64) {
        let db = Database::open_in_memory().unwrap();
        let host = Host::new("Mina".to_string(), "Platform".to_string());
        let host_id = host.id.clone();
        db.create_host(&host).unwrap();
        let room = db.create_room("Auditorium", 30).unwrap();

        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap());
        let engine = Arc::new(ReservationEngine::new(
            Arc::new(Mutex::new(db)),
            Arc::new(clock),
        ));
        (EngineHandler::new(engine), host_id, room.id)
    }

    #[test]
    fn test_create_and_list() {
        let (handler, host_id, room_id) = handler();

        let response = handler.handle(Request::CreateMeeting {
            room_id,
            host_id: host_id.clone(),
            start_time: Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap(),
        });
        let created = match response {
            Response::Meeting { meeting } => meeting,
            other => panic!("unexpected response: {other:?}"),
        };
        assert_eq!(created.room_name, "Auditorium");
        assert_eq!(created.host_name, "Mina");

        match handler.handle(Request::ListMeetings) {
            Response::Meetings { meetings } => {
                assert_eq!(meetings.len(), 1);
                assert_eq!(meetings[0].id, created.id);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_window_violation_maps_to_invalid_window() {
        let (handler, host_id, room_id) = handler();

        let response = handler.handle(Request::CreateMeeting {
            room_id,
            host_id,
            start_time: Utc.with_ymd_and_hms(2026, 3, 2, 7, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
        });
        match response {
            Response::Rejected { kind, .. } => assert_eq!(kind, RejectKind::InvalidWindow),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_missing_meeting_maps_to_not_found() {
        let (handler, host_id, _room_id) = handler();

        let response = handler.handle(Request::DeleteMeeting {
            meeting_id: 42,
            host_id,
        });
        match response {
            Response::Rejected { kind, .. } => assert_eq!(kind, RejectKind::NotFound),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_ping() {
        let (handler, _, _) = handler();
        assert!(matches!(handler.handle(Request::Ping), Response::Pong));
    }
}
