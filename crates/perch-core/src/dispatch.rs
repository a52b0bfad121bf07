//! Event dispatch engine
//!
//! Converts one inbound (event kind, payload) pair into a [`BotResponse`]
//! by running the registered handlers in order. Per request the outcome is
//! binary: `204` when every handler completes, `500` on the first fault,
//! with `PING` (`204`) and no-handlers (`501`) short-circuits in front.

use std::collections::HashMap;

use tracing::{debug, error};

use crate::event::{EventKind, Payload};
use crate::handler::Registry;

/// Response body: sent verbatim when text, serialized when JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Text(String),
    Json(serde_json::Value),
}

impl ResponseBody {
    /// Serialize the body to the bytes that go on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            ResponseBody::Text(s) => s.clone().into_bytes(),
            // Value serialization cannot fail
            ResponseBody::Json(v) => serde_json::to_vec(v).unwrap_or_default(),
        }
    }
}

/// Protocol-level response descriptor produced by dispatch.
///
/// Header names map to ordered value lists; every value is emitted as its
/// own header line on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct BotResponse {
    pub status: u16,
    pub headers: HashMap<String, Vec<String>>,
    pub body: ResponseBody,
}

impl BotResponse {
    /// Response with the given status, no headers, and an empty body.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: ResponseBody::Text(String::new()),
        }
    }
}

/// Dispatch engine: owns the handler registry and the per-request
/// response state machine.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    registry: Registry,
}

impl DispatchEngine {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handle one event.
    ///
    /// `PING` answers `204` without consulting the registry; it is the
    /// platform's liveness probe during bot setup. A recognized event with
    /// no handlers answers `501` ("valid event, no capability"). Otherwise
    /// handlers run sequentially in registration order; the first fault
    /// aborts the rest and answers `500`, a clean sweep answers `204`.
    /// Fault details are logged here and never reach the wire.
    pub fn handle_event(&self, kind: EventKind, payload: &Payload) -> BotResponse {
        if kind == EventKind::Ping {
            return BotResponse::empty(204);
        }

        let handlers = self.registry.handlers_for(kind);
        if handlers.is_empty() {
            debug!(event = %kind, "no handlers registered");
            return BotResponse::empty(501);
        }

        for (i, handler) in handlers.iter().enumerate() {
            if let Err(e) = handler.invoke(payload) {
                error!(
                    event = %kind,
                    handler = i,
                    total = handlers.len(),
                    "handler failed: {e}"
                );
                return BotResponse::empty(500);
            }
        }

        debug!(event = %kind, count = handlers.len(), "all handlers completed");
        BotResponse::empty(204)
    }
}
