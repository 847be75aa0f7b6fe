//! Atrium Network Library
//!
//! TCP transport for the reservation service.
//!
//! # Architecture
//!
//! - **Server**: accepts connections and answers one request per frame
//! - **Client**: connects and issues requests
//! - **Protocol**: length-prefixed JSON messages
//!
//! # Usage
//!
//! ```ignore
//! // Service side
//! let server = Server::start(7431, handler).await?;
//!
//! // Caller side
//! let mut client = Client::connect(server.addr()).await?;
//! let response = client.request(&Request::ListMeetings).await?;
//! ```

pub mod client;
pub mod error;
mod frame;
pub mod protocol;
pub mod server;

pub use client::Client;
pub use error::{Error, Result};
pub use protocol::{RejectKind, Request, Response, WireMeeting};
pub use server::{Handler, Server};

/// Default port for Atrium servers
pub const DEFAULT_PORT: u16 = 7431;
