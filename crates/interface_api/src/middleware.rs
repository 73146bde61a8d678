//! API middleware

use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};

use tracing::info;

/// Header clients use to name the person acting
pub const ACTOR_HEADER: &str = "x-actor";

/// Actor named in the request headers, or "anonymous"
pub fn actor_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(ACTOR_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|actor| !actor.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

/// Audit logging middleware
///
/// Logs every API request with its actor, outcome and latency
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let actor = actor_from_headers(request.headers());

    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        actor = %actor,
        status = %status.as_u16(),
        duration_ms = whole_millis(duration),
        "API request"
    );

    response
}

/// Monotonic latency in whole milliseconds, saturating
fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
