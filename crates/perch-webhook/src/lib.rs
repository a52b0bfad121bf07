//! Webhook transport for Perch bots
//!
//! Receives platform event deliveries over HTTP, runs the validation
//! pipeline (token, event header, JSON body), and hands valid events to
//! the dispatch engine in `perch-core`. The [`Bot`] facade is the
//! application-facing surface: register handlers, then `run`.

pub mod bot;
pub mod routes;
pub mod server;

pub use bot::Bot;
pub use server::{create_router, AppState, WebhookServer};
