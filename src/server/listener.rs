use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::config::{Config, ServerConfig};
use crate::gopher::connection::{Connection, is_disconnect};
use crate::gopher::router::Router;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
    router: Arc<Router>,
}

impl Server {
    /// Binds the listening socket. Routes must be registered on `router`
    /// before this point; the table is read-only once serving.
    pub async fn bind(config: ServerConfig, router: Router) -> anyhow::Result<Self> {
        let addr = config.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        Ok(Self {
            listener,
            config: Arc::new(config),
            router: Arc::new(router),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, one task per connection.
    ///
    /// A failing connection never takes the listener down.
    pub async fn serve(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };
            debug!(peer = %peer, "Accepted connection");

            let conn = Connection::new(
                socket,
                peer,
                Arc::clone(&self.config),
                Arc::clone(&self.router),
            );
            tokio::spawn(async move {
                if let Err(e) = conn.run().await {
                    report(&e, peer);
                }
            });
        }
    }
}

fn report(err: &anyhow::Error, peer: SocketAddr) {
    if is_disconnect(err) {
        debug!(peer = %peer, error = %err, "Client disconnected early");
        return;
    }

    let io_err = err.chain().find_map(|c| c.downcast_ref::<io::Error>());
    warn!(
        peer = %peer,
        kind = ?io_err.map(io::Error::kind),
        code = ?io_err.and_then(io::Error::raw_os_error),
        error = %err,
        "Connection error"
    );
}

/// Binds and serves `router` with the server section of `cfg`.
pub async fn run(cfg: &Config, router: Router) -> anyhow::Result<()> {
    let server = Server::bind(cfg.server.clone(), router).await?;
    let listen = server.local_addr()?;
    info!(
        listen = %listen,
        "Hole is opened on gopher://{}:{}/",
        cfg.server.host,
        cfg.server.port
    );
    server.serve().await
}
