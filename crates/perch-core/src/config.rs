//! Configuration for Perch

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_PORT, TOKEN_ENV_VAR};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BotConfig {
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("PERCH_BIND_ADDRESS") {
            config.server.bind_address = addr;
        }
        if let Ok(port) = std::env::var("PERCH_PORT") {
            if let Ok(p) = port.parse() {
                config.server.port = p;
            }
        }
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            config.auth.verification_token = Some(token);
        }
        if let Ok(level) = std::env::var("PERCH_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Verification of inbound platform calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret compared against `X-TRAQ-BOT-TOKEN`. When unset,
    /// requests are accepted on header presence alone.
    pub verification_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.auth.verification_token.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BotConfig = toml::from_str(
            r#"
            [auth]
            verification_token = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.verification_token.as_deref(), Some("secret"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_full_toml() {
        let config: BotConfig = toml::from_str(
            r#"
            [server]
            bind_address = "127.0.0.1"
            port = 9999

            [auth]
            verification_token = "tok"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.logging.level, "debug");
    }
}
