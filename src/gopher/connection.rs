use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::gopher::context::Context;
use crate::gopher::parser::parse_request;
use crate::gopher::request::Request;
use crate::gopher::router::Router;

/// Upper bound of the single request read.
pub const MAX_REQUEST_SIZE: usize = 4096;

/// One accepted client connection.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    server: Arc<ServerConfig>,
    router: Arc<Router>,
}

/// Lifecycle of a connection. The write half travels with the state so the
/// socket is closed in exactly one place.
pub enum ConnectionState {
    Idle(OwnedWriteHalf),
    Parsing(BytesMut, OwnedWriteHalf),
    Dispatching(Request, OwnedWriteHalf),
    Closed,
}

impl Connection {
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        server: Arc<ServerConfig>,
        router: Arc<Router>,
    ) -> Self {
        Self {
            stream,
            peer,
            server,
            router,
        }
    }

    /// Reads one request, answers it and closes the connection.
    ///
    /// The socket is shut down once dispatch returns, whether the handler
    /// succeeded or not. The handler's error, if any, is returned after that.
    pub async fn run(self) -> anyhow::Result<()> {
        let Connection {
            stream,
            peer,
            server,
            router,
        } = self;
        let (mut reader, writer) = stream.into_split();
        let mut state = ConnectionState::Idle(writer);

        loop {
            state = match state {
                ConnectionState::Idle(mut writer) => {
                    // A request is one short line; it is expected in one read.
                    let mut buf = BytesMut::with_capacity(MAX_REQUEST_SIZE);
                    let n = reader.read_buf(&mut buf).await?;

                    if n == 0 {
                        debug!(peer = %peer, "Client closed before sending a request");
                        writer.shutdown().await?;
                        ConnectionState::Closed
                    } else {
                        ConnectionState::Parsing(buf, writer)
                    }
                }

                ConnectionState::Parsing(buf, writer) => {
                    let request = parse_request(&buf);
                    match request.query() {
                        Some(query) => {
                            info!(peer = %peer, path = %request.path, query = %query, "Request");
                        }
                        None => {
                            info!(peer = %peer, path = %request.path, "Request");
                        }
                    }
                    ConnectionState::Dispatching(request, writer)
                }

                ConnectionState::Dispatching(request, writer) => {
                    let mut ctx = Context::new(request, Arc::clone(&server), writer);
                    let outcome = router.dispatch(&mut ctx).await;
                    let closed = ctx.close().await;
                    outcome?;
                    closed?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }
}

/// True when the error chain holds a reset or broken pipe, which only means
/// the client went away early.
pub fn is_disconnect(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|e| {
            matches!(
                e.kind(),
                io::ErrorKind::ConnectionReset | io::ErrorKind::BrokenPipe
            )
        })
}
