//! Bot facade
//!
//! The application-facing surface: construct, chain registration calls,
//! then `run`. `run` consumes the bot, so the handler table is frozen
//! before the first request is served.
//!
//! ```no_run
//! use perch_core::Handler;
//! use perch_webhook::Bot;
//!
//! # async fn demo() -> perch_core::Result<()> {
//! let bot = Bot::new(Some("token".to_string()))
//!     .on_message_created(Handler::with_payload(|payload| {
//!         println!("{payload}");
//!         Ok(())
//!     }));
//! bot.run(8080).await
//! # }
//! ```

use perch_core::{BotConfig, DispatchEngine, EventKind, Handler, Registry, Result};
use tracing::warn;

use crate::server::WebhookServer;

pub struct Bot {
    registry: Registry,
    config: BotConfig,
}

impl Bot {
    /// Create a bot with an explicit verification token, or `None` to
    /// fall back to the `BOT_VERIFICATION_TOKEN` environment variable.
    pub fn new(verification_token: Option<String>) -> Self {
        let mut config = BotConfig::from_env();
        if verification_token.is_some() {
            config.auth.verification_token = verification_token;
        }
        Self::with_config(config)
    }

    /// Create a bot from a full configuration.
    pub fn with_config(config: BotConfig) -> Self {
        if config.auth.verification_token.is_none() {
            warn!(
                "no verification token configured; accepting any {}",
                crate::routes::TOKEN_HEADER
            );
        }
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Register a handler for any event kind.
    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.registry.register(kind, handler);
        self
    }

    /// Register for `PING`. Note that `PING` is answered before dispatch,
    /// so these handlers never run; the registration exists for parity
    /// with the platform's event list.
    pub fn on_ping(self, handler: Handler) -> Self {
        self.on(EventKind::Ping, handler)
    }

    /// Register for `JOINED`
    pub fn on_joined(self, handler: Handler) -> Self {
        self.on(EventKind::Joined, handler)
    }

    /// Register for `LEFT`
    pub fn on_left(self, handler: Handler) -> Self {
        self.on(EventKind::Left, handler)
    }

    /// Register for `MESSAGE_CREATED`
    pub fn on_message_created(self, handler: Handler) -> Self {
        self.on(EventKind::MessageCreated, handler)
    }

    /// Register for `MESSAGE_DELETED`
    pub fn on_message_deleted(self, handler: Handler) -> Self {
        self.on(EventKind::MessageDeleted, handler)
    }

    /// Register for `MESSAGE_UPDATED`
    pub fn on_message_updated(self, handler: Handler) -> Self {
        self.on(EventKind::MessageUpdated, handler)
    }

    /// Register for `DIRECT_MESSAGE_CREATED`
    pub fn on_direct_message_created(self, handler: Handler) -> Self {
        self.on(EventKind::DirectMessageCreated, handler)
    }

    /// Register for `DIRECT_MESSAGE_DELETED`
    pub fn on_direct_message_deleted(self, handler: Handler) -> Self {
        self.on(EventKind::DirectMessageDeleted, handler)
    }

    /// Register for `DIRECT_MESSAGE_UPDATED`
    pub fn on_direct_message_updated(self, handler: Handler) -> Self {
        self.on(EventKind::DirectMessageUpdated, handler)
    }

    /// Register for `BOT_MESSAGE_STAMPS_UPDATED`
    pub fn on_bot_message_stamps_updated(self, handler: Handler) -> Self {
        self.on(EventKind::BotMessageStampsUpdated, handler)
    }

    /// Register for `CHANNEL_CREATED`
    pub fn on_channel_created(self, handler: Handler) -> Self {
        self.on(EventKind::ChannelCreated, handler)
    }

    /// Register for `CHANNEL_TOPIC_CHANGED`
    pub fn on_channel_topic_changed(self, handler: Handler) -> Self {
        self.on(EventKind::ChannelTopicChanged, handler)
    }

    /// Register for `USER_CREATED`
    pub fn on_user_created(self, handler: Handler) -> Self {
        self.on(EventKind::UserCreated, handler)
    }

    /// Register for `STAMP_CREATED`
    pub fn on_stamp_created(self, handler: Handler) -> Self {
        self.on(EventKind::StampCreated, handler)
    }

    /// Register for `TAG_ADDED`
    pub fn on_tag_added(self, handler: Handler) -> Self {
        self.on(EventKind::TagAdded, handler)
    }

    /// Register for `TAG_REMOVED`
    pub fn on_tag_removed(self, handler: Handler) -> Self {
        self.on(EventKind::TagRemoved, handler)
    }

    /// Finish assembly: hand the registry to a server.
    pub fn into_server(self) -> WebhookServer {
        WebhookServer::new(self.config, DispatchEngine::new(self.registry))
    }

    /// Build the router without binding a socket. Used by tests and by
    /// hosts that embed the bot in a larger axum application.
    pub fn into_router(self) -> axum::Router {
        let state = crate::server::AppState {
            engine: std::sync::Arc::new(DispatchEngine::new(self.registry)),
            auth: std::sync::Arc::new(self.config.auth),
        };
        crate::server::create_router(state)
    }

    /// Serve on `port`, bound on all configured interfaces.
    pub async fn run(mut self, port: u16) -> Result<()> {
        self.config.server.port = port;
        self.into_server().run().await
    }

    /// Serve on the address and port from the configuration.
    pub async fn serve(self) -> Result<()> {
        self.into_server().run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_registration_accumulates() {
        let bot = Bot::with_config(BotConfig::default())
            .on_message_created(Handler::no_arg(|| Ok(())))
            .on_message_created(Handler::with_payload(|_| Ok(())))
            .on_tag_removed(Handler::no_arg(|| Ok(())));

        assert_eq!(bot.registry.handlers_for(EventKind::MessageCreated).len(), 2);
        assert_eq!(bot.registry.handlers_for(EventKind::TagRemoved).len(), 1);
        assert_eq!(bot.registry.len(), 3);
    }

    #[test]
    fn test_explicit_token_wins_over_env() {
        let bot = Bot::new(Some("explicit".to_string()));
        assert_eq!(
            bot.config.auth.verification_token.as_deref(),
            Some("explicit")
        );
    }
}
