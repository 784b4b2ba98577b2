//! Gemini chat integration.
//!
//! Gemini exposes an OpenAI-compatible chat completions endpoint, so this
//! client is a thin wrapper around `async-openai` pointed at that endpoint.

use std::sync::Arc;

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest, CreateChatCompletionRequestArgs},
};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{Res, Turn, TurnRole},
};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the gemini implementation.

impl LlmClient {
    pub fn gemini(config: &Config) -> Self {
        let client = GeminiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// Gemini LLM client implementation.
#[derive(Clone)]
pub struct GeminiLlmClient {
    client: Client<OpenAIConfig>,
    config: Config,
}

impl GeminiLlmClient {
    /// Create a new Gemini LLM client.
    #[instrument(name = "GeminiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_key(config.gemini_api_key.clone()).with_api_base(config.gemini_api_base.clone());

        Self {
            client: Client::with_config(cfg),
            config: config.clone(),
        }
    }
}

/// Build the chat input: prior turns followed by the new prompt.
fn build_messages(history: &[Turn], prompt: &str) -> Res<Vec<ChatCompletionRequestMessage>> {
    let mut messages = Vec::with_capacity(history.len() + 1);

    for turn in history {
        let message: ChatCompletionRequestMessage = match turn.role {
            TurnRole::User => ChatCompletionRequestUserMessageArgs::default().content(turn.text.clone()).build()?.into(),
            TurnRole::Model => ChatCompletionRequestAssistantMessageArgs::default().content(turn.text.clone()).build()?.into(),
        };

        messages.push(message);
    }

    messages.push(ChatCompletionRequestUserMessageArgs::default().content(prompt.to_string()).build()?.into());

    Ok(messages)
}

/// Build the completion request; sampling knobs are only sent when configured.
fn build_request(config: &Config, messages: Vec<ChatCompletionRequestMessage>) -> Res<CreateChatCompletionRequest> {
    let mut args = CreateChatCompletionRequestArgs::default();
    args.model(&config.gemini_model).messages(messages);

    if let Some(temperature) = config.gemini_temperature {
        args.temperature(temperature);
    }

    if let Some(max_tokens) = config.gemini_max_tokens {
        args.max_completion_tokens(max_tokens);
    }

    Ok(args.build()?)
}

#[async_trait]
impl GenericLlmClient for GeminiLlmClient {
    #[instrument(name = "GeminiLlmClient::generate_reply", skip_all)]
    async fn generate_reply(&self, history: &[Turn], prompt: &str) -> Res<String> {
        let messages = build_messages(history, prompt)?;

        let request = build_request(&self.config, messages)?;

        let response = timeout(self.config.llm_timeout(), self.client.chat().create(request))
            .await
            .map_err(|_| anyhow::anyhow!("Gemini call timed out after {}s", self.config.llm_timeout_secs))??;

        debug!("Gemini returned {} choices", response.choices.len());

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Gemini returned an empty reply"))?;

        Ok(text)
    }
}
