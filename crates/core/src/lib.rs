//! Atrium Core Library
//!
//! Domain models, the reservation-validation engine, and SQLite storage
//! for the Atrium meeting-room service.

pub mod clock;
pub mod error;
pub mod invariants;
pub mod models;
pub mod reservation;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use models::*;
pub use reservation::window::WindowError;
pub use reservation::{ReservationEngine, ReservationRequest};
pub use storage::{
    Database, HostRepository, HostStore, MeetingRepository, MeetingStore, RoomRepository,
    RoomStore, Storage,
};
