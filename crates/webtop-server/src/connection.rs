//! Per-connection handler: read one request, route it, reply, close.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, warn};
use webtop_common::ErrorBody;

use crate::http::{self, Response};
use crate::routes::route;
use crate::server::AppState;

pub async fn handle_connection(mut stream: TcpStream, peer: SocketAddr, state: Arc<AppState>) {
    let read = http::read_request(&mut stream, state.max_body_bytes);
    let Ok(read) = tokio::time::timeout(state.read_timeout, read).await else {
        debug!(peer = %peer, timeout = ?state.read_timeout, "request not received in time");
        return;
    };

    let response = match read {
        Ok(request) => {
            debug!(peer = %peer, method = request.method.as_str(), path = %request.path, "request");
            route(&state, request).await
        }
        Err(e) => match e.status() {
            Some(status) => {
                warn!(peer = %peer, error = %e, "rejected request");
                Response::json(status, &ErrorBody::new(e.to_string()))
            }
            None => {
                debug!(peer = %peer, error = %e, "connection dropped");
                return;
            }
        },
    };

    debug!(peer = %peer, status = response.status, "response");
    if let Err(e) = http::write_response(&mut stream, &response).await {
        warn!(peer = %peer, error = %e, "failed to write response");
        return;
    }
    let _ = stream.shutdown().await;
}
