//! Data models for Atrium

mod host;
mod meeting;
mod room;

pub use host::*;
pub use meeting::*;
pub use room::*;
