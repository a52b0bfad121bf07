//! Handler callbacks and the registration table
//!
//! A [`Handler`] is a tagged callback: either it takes no arguments or it
//! takes the event payload. The tag is fixed at registration time by the
//! constructor used, so dispatch never has to inspect a signature.
//! Handlers report failure through an explicit `Result`.

use std::fmt;

use crate::error::Result;
use crate::event::{EventKind, Payload};

type NoArgFn = Box<dyn Fn() -> Result<()> + Send + Sync>;
type WithPayloadFn = Box<dyn Fn(&Payload) -> Result<()> + Send + Sync>;

/// Application callback registered for an event kind.
pub enum Handler {
    /// Callback that ignores the payload
    NoArg(NoArgFn),
    /// Callback that receives the event payload
    WithPayload(WithPayloadFn),
}

impl Handler {
    /// Wrap a zero-argument callback.
    pub fn no_arg<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        Handler::NoArg(Box::new(f))
    }

    /// Wrap a callback that receives the event payload.
    pub fn with_payload<F>(f: F) -> Self
    where
        F: Fn(&Payload) -> Result<()> + Send + Sync + 'static,
    {
        Handler::WithPayload(Box::new(f))
    }

    /// Invoke the callback with its declared calling convention.
    pub fn invoke(&self, payload: &Payload) -> Result<()> {
        match self {
            Handler::NoArg(f) => f(),
            Handler::WithPayload(f) => f(payload),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::NoArg(_) => f.write_str("Handler::NoArg"),
            Handler::WithPayload(_) => f.write_str("Handler::WithPayload"),
        }
    }
}

/// Handler registration table: one ordered slot list per event kind.
///
/// The table is total over [`EventKind`], so lookup cannot fail. It is
/// written during bot assembly only; once the server owns it the table is
/// read-only (enforced by ownership, not locking).
#[derive(Debug, Default)]
pub struct Registry {
    slots: [Vec<Handler>; EventKind::COUNT],
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for `kind`. Registration order is invocation
    /// order; registering the same callback twice runs it twice.
    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.slots[kind.index()].push(handler);
    }

    /// Handlers registered for `kind`, in registration order.
    pub fn handlers_for(&self, kind: EventKind) -> &[Handler] {
        &self.slots[kind.index()]
    }

    /// Total number of registered handlers across all kinds.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}
