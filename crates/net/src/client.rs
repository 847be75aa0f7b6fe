//! TCP client for the reservation service

use std::net::SocketAddr;

use tokio::io::{split, ReadHalf, WriteHalf};
use tokio::net::TcpStream;
use tracing::debug;

use crate::error::Result;
use crate::frame::{read_frame, write_frame};
use crate::protocol::{Request, Response};

/// Connection to a reservation server
pub struct Client {
    reader: ReadHalf<TcpStream>,
    writer: WriteHalf<TcpStream>,
}

impl Client {
    /// Connect to a server
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        debug!(%addr, "Connected");

        let (reader, writer) = split(stream);
        Ok(Client { reader, writer })
    }

    /// Send a request and wait for the response
    pub async fn request(&mut self, request: &Request) -> Result<Response> {
        write_frame(&mut self.writer, request).await?;
        read_frame(&mut self.reader).await
    }
}
