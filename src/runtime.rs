//! Runtime services and shared state for the bot.

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    service::{chat::ChatClient, llm::LlmClient},
    session::Session,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the LLM and chat clients, and the
/// conversational session state. It is designed to be trivially cloneable,
/// allowing it to be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The chat client instance.
    pub chat: ChatClient,
    /// Rate limits, conversation windows, and the repeat relay.
    pub session: Session,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        let session = Session::new(&config);

        // Initialize the LLM client.
        let llm = LlmClient::gemini(&config);

        // Initialize the discord client.
        let chat = ChatClient::discord(&config, llm.clone(), session.clone()).await?;

        Ok(Self { config, llm, chat, session })
    }

    pub async fn start(&self) -> Void {
        self.chat.start().await
    }
}
