//! Webhook route
//!
//! One route: `POST /`. Every inbound call runs the validation pipeline
//! (token, event header, body decode) before dispatch; rejections answer
//! with a bare status code and an empty body, never with error details.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use perch_core::{BotResponse, Error, EventKind, Payload};
use tracing::{debug, warn};

use crate::server::AppState;

/// Header carrying the verification token
pub const TOKEN_HEADER: &str = "X-TRAQ-BOT-TOKEN";

/// Header naming the delivered event
pub const EVENT_HEADER: &str = "X-TRAQ-BOT-EVENT";

/// Receive one event delivery from the platform.
pub async fn receive_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match validate(&state, &headers, &body) {
        Ok((kind, payload)) => {
            debug!(event = %kind, bytes = body.len(), "event accepted");
            into_http(state.engine.handle_event(kind, &payload))
        }
        Err(e) => {
            warn!("rejected delivery: {e}");
            status_only(e.http_status())
        }
    }
}

/// Validation pipeline applied to every delivery. Order matters: token
/// first, then event header, then body. Faults here never reach dispatch.
fn validate(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(EventKind, Payload), Error> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::MissingHeader(TOKEN_HEADER))?;

    if let Some(expected) = &state.auth.verification_token {
        if token != expected {
            return Err(Error::Unauthorized);
        }
    }

    let event = headers
        .get(EVENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::MissingHeader(EVENT_HEADER))?;
    let kind: EventKind = event.parse()?;

    let payload = if body.is_empty() {
        Payload::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))?
    };

    Ok((kind, payload))
}

/// Convert a dispatch response descriptor to the wire response. Each value
/// in a header's list goes out as its own header line; text bodies are
/// sent verbatim, JSON bodies serialized.
pub fn into_http(resp: BotResponse) -> Response {
    let status =
        StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, values) in &resp.headers {
        for value in values {
            builder = builder.header(name.as_str(), value.as_str());
        }
    }

    builder
        .body(Body::from(resp.body.to_bytes()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn status_only(status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    status.into_response()
}
