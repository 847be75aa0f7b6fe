//! Error types for Atrium Core

use thiserror::Error;

use crate::reservation::window::WindowError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(#[from] WindowError),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Room unavailable: {0}")]
    RoomUnavailable(String),

    #[error("Meeting already in progress: {0}")]
    AlreadyInProgress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
