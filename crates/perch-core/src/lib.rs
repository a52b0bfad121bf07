//! Perch Core Library
//!
//! Core types for the Perch bot framework: event kinds, the handler
//! registry, the dispatch engine, and configuration. This crate has no
//! knowledge of HTTP; the transport lives in `perch-webhook`.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod handler;

pub use config::BotConfig;
pub use dispatch::{BotResponse, DispatchEngine, ResponseBody};
pub use error::{Error, Result};
pub use event::{EventKind, Payload};
pub use handler::{Handler, Registry};

/// Perch version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the verification token
pub const TOKEN_ENV_VAR: &str = "BOT_VERIFICATION_TOKEN";

/// Default port the webhook server binds when none is configured
pub const DEFAULT_PORT: u16 = 8080;
