use axum::{
    body::Body,
    extract::{Path, RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::server::{
    config::AppState, models::error::ErrorEnvelope, services::orchestration::UpstreamResponse,
};

/// GET /api/capability/:key/orchestration
///
/// Proxies the capability's orchestration state from the backend and relays
/// the response verbatim. The only local validation is rejecting an empty
/// key; key semantics and authorization belong to the backend. The raw query
/// string is forwarded untouched.
pub async fn get_orchestration(
    State(state): State<AppState>,
    Path(key): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    if key.trim().is_empty() {
        return ErrorEnvelope::new("INVALID_KEY", "Missing capability key")
            .into_response(StatusCode::BAD_REQUEST);
    }

    match state
        .orchestration
        .fetch_orchestration(&key, query.as_deref())
        .await
    {
        Ok(upstream) => relay(upstream),
        Err(e) => {
            error!("Orchestration proxy request failed: {}", e);
            e.into_response()
        }
    }
}

/// Rebuilds the upstream response unchanged: same status, same body bytes,
/// `content-type` copied when present, no other headers.
fn relay(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() =
        StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if let Some(content_type) = upstream.content_type {
        if let Ok(value) = HeaderValue::from_str(&content_type) {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
    }
    response
}
