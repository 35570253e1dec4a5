//! The `Channel` trait and its message types.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::ChannelError;
use crate::session::SessionId;

/// One inbound user turn.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Channel name (e.g. "telegram", "cli").
    pub channel: String,
    /// Chat the message arrived in; keys the session.
    pub chat_id: SessionId,
    /// Sender's numeric id.
    pub user_id: i64,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub text: String,
}

impl IncomingMessage {
    pub fn new(channel: &str, chat_id: SessionId, user_id: i64, text: &str) -> Self {
        Self {
            channel: channel.to_string(),
            chat_id,
            user_id,
            username: None,
            display_name: None,
            text: text.to_string(),
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }
}

/// One outbound reply: text plus an optional one-column button keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingReply {
    pub text: String,
    pub keyboard: Option<Vec<String>>,
}

impl OutgoingReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Vec<String>) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Stream of inbound messages from a channel.
pub type MessageStream = Pin<Box<dyn Stream<Item = IncomingMessage> + Send>>;

/// A message transport.
#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;

    /// Begin listening; returns the stream of inbound messages.
    async fn start(&self) -> Result<MessageStream, ChannelError>;

    /// Send a reply back where `msg` came from.
    async fn respond(
        &self,
        msg: &IncomingMessage,
        reply: OutgoingReply,
    ) -> Result<(), ChannelError>;

    async fn health_check(&self) -> Result<(), ChannelError>;

    async fn shutdown(&self) -> Result<(), ChannelError>;
}
