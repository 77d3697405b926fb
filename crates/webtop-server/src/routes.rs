//! Request routing.

use tracing::{debug, info};
use webtop_common::protocol::RUN_PATH;
use webtop_common::{CommandRequest, ErrorBody};

use crate::http::{Method, Request, Response};
use crate::server::AppState;
use crate::static_files;

/// Produce the response for one request.
pub async fn route(state: &AppState, request: Request) -> Response {
    match request.method {
        Method::Options => Response::empty(204),
        // Exact target match: `/run?x=1` is not the run endpoint.
        Method::Post if request.target == RUN_PATH => run_command(state, &request.body).await,
        Method::Post => Response::json(404, &ErrorBody::new("only /run accepts POST")),
        Method::Get => static_files::serve(&state.static_root, &request.path).await,
        Method::Head => static_files::serve(&state.static_root, &request.path)
            .await
            .without_body(),
        Method::Other(ref token) => {
            debug!(method = %token, "unsupported method");
            Response::json(501, &ErrorBody::new(format!("unsupported method {token}")))
        }
    }
}

async fn run_command(state: &AppState, body: &[u8]) -> Response {
    let Some(request) = parse_command(body) else {
        return Response::json(400, &ErrorBody::no_command());
    };

    info!(cmd = %request.cmd, "running command");
    let result = state.executor.run(&request.cmd).await;
    Response::json(200, &result)
}

/// Extract `cmd` from a `/run` body. An unparsable body counts as `{}`.
fn parse_command(body: &[u8]) -> Option<CommandRequest> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    CommandRequest::new(value.get("cmd")?.as_str()?)
}
