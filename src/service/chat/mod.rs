pub mod discord;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::{
    chunk::{MESSAGE_LIMIT, chunk_message},
    types::{Embed, Void},
};

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for interacting with chat platforms
/// like Discord. Implementing this trait allows different chat services to be used
/// with the bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Get the bot user ID.
    ///
    /// Returns the unique identifier for the bot in the chat platform,
    /// which is used to detect when the bot is mentioned.
    fn bot_user_id(&self) -> u64;

    /// Start the chat client listener.
    ///
    /// This connects to the chat platform and begins processing
    /// incoming messages and events.
    async fn start(&self) -> Void;

    /// Send a plain text message to a channel.
    ///
    /// The text must already fit within the platform limit.
    async fn send_message(&self, channel_id: u64, text: &str) -> Void;

    /// Send a rich embed to a channel.
    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> Void;

    /// Show the typing indicator in a channel until the returned guard is dropped.
    fn start_typing(&self, channel_id: u64) -> TypingGuard;
}

// Structs.

/// Keeps a typing indicator alive; dropping it stops the indicator.
pub struct TypingGuard {
    _inner: Box<dyn Send>,
}

impl TypingGuard {
    pub fn new<T: Send + 'static>(inner: T) -> Self {
        Self { _inner: Box::new(inner) }
    }
}

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }

    /// Send text of any length, split into ordered chunks that fit the platform limit.
    pub async fn send_long_message(&self, channel_id: u64, text: &str) -> Void {
        for chunk in chunk_message(text, MESSAGE_LIMIT) {
            self.send_message(channel_id, chunk).await?;
        }

        Ok(())
    }
}
