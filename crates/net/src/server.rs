//! TCP server for the reservation service
//!
//! Accepts connections and answers one response per request frame.
//! The actual scheduling decisions live behind the [`Handler`] trait,
//! so the transport stays free of domain logic.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::split;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::frame::{read_frame, write_frame};
use crate::protocol::{Request, Response};

/// Produces a response for each incoming request
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, request: Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Request) -> Response + Send + Sync + 'static,
{
    fn handle(&self, request: Request) -> Response {
        self(request)
    }
}

/// Running server handle
pub struct Server {
    addr: SocketAddr,
    shutdown_tx: broadcast::Sender<()>,
}

impl Server {
    /// Bind to the given port and start accepting connections
    pub async fn start<H: Handler>(port: u16, handler: Arc<H>) -> Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, _) = broadcast::channel(1);

        info!(%addr, "Server listening");

        tokio::spawn(accept_loop(listener, handler, shutdown_tx.subscribe()));

        Ok(Server { addr, shutdown_tx })
    }

    /// The address the server is bound to
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections
    pub fn shutdown(&self) {
        info!("Server shutting down");
        let _ = self.shutdown_tx.send(());
    }
}

async fn accept_loop<H: Handler>(
    listener: TcpListener,
    handler: Arc<H>,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        debug!(%peer, "Connection accepted");
                        tokio::spawn(handle_connection(stream, peer, handler.clone()));
                    }
                    Err(e) => {
                        error!(error = %e, "Accept failed");
                    }
                }
            }
            _ = shutdown_rx.recv() => {
                debug!("Accept loop stopped");
                break;
            }
        }
    }
}

async fn handle_connection<H: Handler>(stream: TcpStream, peer: SocketAddr, handler: Arc<H>) {
    let (mut reader, mut writer) = split(stream);

    loop {
        let request: Request = match read_frame(&mut reader).await {
            Ok(request) => request,
            Err(Error::ConnectionClosed) => {
                debug!(%peer, "Connection closed");
                break;
            }
            Err(e) => {
                warn!(%peer, error = %e, "Failed to read request");
                break;
            }
        };

        let response = handler.handle(request);

        if let Err(e) = write_frame(&mut writer, &response).await {
            warn!(%peer, error = %e, "Failed to write response");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;

    fn pong_handler(request: Request) -> Response {
        match request {
            Request::Ping => Response::Pong,
            _ => Response::Meetings { meetings: vec![] },
        }
    }

    #[tokio::test]
    async fn test_server_starts() {
        // Port 0 picks a free port
        let server = Server::start(0, Arc::new(pong_handler)).await.unwrap();
        assert_ne!(server.addr().port(), 0);
        server.shutdown();
    }

    #[tokio::test]
    async fn test_ping_pong() {
        let server = Server::start(0, Arc::new(pong_handler)).await.unwrap();

        let mut client = Client::connect(server.addr()).await.unwrap();
        let response = client.request(&Request::Ping).await.unwrap();
        assert!(matches!(response, Response::Pong));

        server.shutdown();
    }

    #[tokio::test]
    async fn test_multiple_requests_on_one_connection() {
        let server = Server::start(0, Arc::new(pong_handler)).await.unwrap();

        let mut client = Client::connect(server.addr()).await.unwrap();
        for _ in 0..3 {
            let response = client.request(&Request::ListMeetings).await.unwrap();
            match response {
                Response::Meetings { meetings } => assert!(meetings.is_empty()),
                other => panic!("unexpected response: {other:?}"),
            }
        }

        server.shutdown();
    }
}
