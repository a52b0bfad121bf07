//! Error types for Perch

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Request validation errors
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Verification token mismatch")]
    Unauthorized,

    #[error("Unknown event type: {0}")]
    UnknownEvent(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // Handler errors
    #[error("Handler failed: {0}")]
    Handler(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Construct a handler fault from any displayable reason.
    pub fn handler(reason: impl std::fmt::Display) -> Self {
        Error::Handler(reason.to_string())
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Error::MissingHeader("X-TRAQ-BOT-TOKEN") | Error::Unauthorized => 401,

            Error::MissingHeader(_) | Error::UnknownEvent(_) | Error::InvalidBody(_) => 400,

            Error::Handler(_) | Error::Config(_) | Error::Io(_) | Error::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_maps_to_401() {
        assert_eq!(Error::MissingHeader("X-TRAQ-BOT-TOKEN").http_status(), 401);
        assert_eq!(Error::Unauthorized.http_status(), 401);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        assert_eq!(Error::MissingHeader("X-TRAQ-BOT-EVENT").http_status(), 400);
        assert_eq!(Error::UnknownEvent("BOGUS".into()).http_status(), 400);
        assert_eq!(Error::InvalidBody("not-json".into()).http_status(), 400);
    }

    #[test]
    fn test_handler_fault_maps_to_500() {
        assert_eq!(Error::handler("boom").http_status(), 500);
    }
}
