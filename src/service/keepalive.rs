//! Liveness HTTP endpoint.
//!
//! Hosting platforms ping the process over HTTP to decide whether it is up.
//! Every path answers `200 OK`; nothing here touches conversational state.

use std::{convert::Infallible, net::SocketAddr, time::Duration};

use http_body_util::Full;
use hyper::{Request, Response, body::Bytes, body::Incoming, server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info, instrument, warn};

use crate::base::types::{Res, Void};

const ALIVE_BODY: &str = "Akane is alive 💖";

async fn handle_request(_req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(Response::new(Full::new(Bytes::from_static(ALIVE_BODY.as_bytes()))))
}

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A bound liveness server that has not started accepting yet.
pub struct KeepAliveServer {
    listener: TcpListener,
}

impl KeepAliveServer {
    pub async fn bind(addr: &str) -> Res<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Res<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever; failed accepts are logged and skipped.
    #[instrument(name = "KeepAliveServer::serve", skip_all)]
    pub async fn serve(self) -> Void {
        info!(addr = %self.local_addr()?, "Keep-alive endpoint started");

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(err) => {
                    warn!("Keep-alive accept failed: {}", err);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                if let Err(err) = http1::Builder::new().serve_connection(io, service_fn(handle_request)).await {
                    warn!(?peer, "Keep-alive connection error: {}", err);
                }
            });
        }
    }
}

/// Bind the liveness endpoint and serve it in the background.
pub async fn spawn_keepalive_server(addr: &str) -> Res<SocketAddr> {
    let server = KeepAliveServer::bind(addr).await?;
    let local_addr = server.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = server.serve().await {
            error!(%local_addr, "Keep-alive server failed: {}", err);
        }
    });

    Ok(local_addr)
}
