//! Bot event types
//!
//! The platform delivers events named by the `X-TRAQ-BOT-EVENT` header.
//! The set is closed and known at compile time, so event names are a
//! proper enum: once a header has been parsed into an [`EventKind`], an
//! unknown event cannot exist anywhere downstream.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// JSON payload delivered with an event. No schema is enforced; an empty
/// request body is represented as an empty object.
pub type Payload = serde_json::Value;

/// The sixteen event kinds the platform can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Ping,
    Joined,
    Left,
    MessageCreated,
    MessageDeleted,
    MessageUpdated,
    DirectMessageCreated,
    DirectMessageDeleted,
    DirectMessageUpdated,
    BotMessageStampsUpdated,
    ChannelCreated,
    ChannelTopicChanged,
    UserCreated,
    StampCreated,
    TagAdded,
    TagRemoved,
}

impl EventKind {
    /// All event kinds, in wire-name order.
    pub const ALL: [EventKind; 16] = [
        EventKind::Ping,
        EventKind::Joined,
        EventKind::Left,
        EventKind::MessageCreated,
        EventKind::MessageDeleted,
        EventKind::MessageUpdated,
        EventKind::DirectMessageCreated,
        EventKind::DirectMessageDeleted,
        EventKind::DirectMessageUpdated,
        EventKind::BotMessageStampsUpdated,
        EventKind::ChannelCreated,
        EventKind::ChannelTopicChanged,
        EventKind::UserCreated,
        EventKind::StampCreated,
        EventKind::TagAdded,
        EventKind::TagRemoved,
    ];

    /// Number of event kinds (the registry is total over this set).
    pub const COUNT: usize = Self::ALL.len();

    /// Get the wire name for headers and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Ping => "PING",
            EventKind::Joined => "JOINED",
            EventKind::Left => "LEFT",
            EventKind::MessageCreated => "MESSAGE_CREATED",
            EventKind::MessageDeleted => "MESSAGE_DELETED",
            EventKind::MessageUpdated => "MESSAGE_UPDATED",
            EventKind::DirectMessageCreated => "DIRECT_MESSAGE_CREATED",
            EventKind::DirectMessageDeleted => "DIRECT_MESSAGE_DELETED",
            EventKind::DirectMessageUpdated => "DIRECT_MESSAGE_UPDATED",
            EventKind::BotMessageStampsUpdated => "BOT_MESSAGE_STAMPS_UPDATED",
            EventKind::ChannelCreated => "CHANNEL_CREATED",
            EventKind::ChannelTopicChanged => "CHANNEL_TOPIC_CHANGED",
            EventKind::UserCreated => "USER_CREATED",
            EventKind::StampCreated => "STAMP_CREATED",
            EventKind::TagAdded => "TAG_ADDED",
            EventKind::TagRemoved => "TAG_REMOVED",
        }
    }

    /// Dense index into registry slots.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownEvent(s.to_string()))
    }
}
