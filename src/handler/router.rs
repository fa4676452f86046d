//! Request routing dispatch module
//!
//! Entry point for processing one parsed request: method validation,
//! static/dynamic classification, and mapping dispatch failures to status
//! codes. Both binding errors and handler faults collapse to 500, matching
//! the baseline behavior this server reproduces; only an unknown route is
//! reported as 404.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::Reply;
use crate::logger;
use crate::routing::dispatcher::DispatchError;
use crate::routing::query;

/// A parsed request line. Headers are drained and discarded before this is
/// built; no body is ever read.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub target: String,
}

/// Main entry point for request handling
pub async fn handle_request(req: &Request, state: &AppState) -> Reply {
    // Only GET is served, on any path
    if req.method != "GET" {
        logger::log_warning(&format!("Method not allowed: {}", req.method));
        return Reply::method_not_allowed();
    }

    let (path, params) = query::parse_target(&req.target);

    if path.starts_with(&state.config.routing.dynamic_prefix) {
        match state.dispatcher.dispatch(&path, &params) {
            Ok(body) => Reply::dynamic_ok(&body),
            Err(DispatchError::RouteNotFound(_)) => Reply::not_found(),
            Err(err) => {
                logger::log_dispatch_failure(&path, &err.to_string());
                Reply::internal_error()
            }
        }
    } else {
        static_files::serve(&path, &state.config.routing).await
    }
}
