//! OpenAI-compatible Chat Completions client implementing `GenerationClient`.
//!
//! Sends one Chat Completions request per generation, with the assembled
//! prompt as a single user message. Requires `OPENAI_API_KEY` (or explicit
//! config); vendors exposing OpenAI-compatible endpoints are reached via
//! `OPENAI_BASE_URL` / `OPENAI_API_BASE`.
//!
//! **Interaction**: Implements `GenerationClient`; the CLI builds one per
//! run. Depends on `async_openai`.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::GenerateError;
use crate::llm::GenerationClient;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

/// Model used when neither `--model` nor `PLUME_MODEL` is set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat Completions client over an OpenAI-compatible endpoint.
///
/// Uses `OPENAI_API_KEY` from the environment by default; or provide config
/// via [`ChatCompletion::with_config`].
pub struct ChatCompletion {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatCompletion {
    /// Build client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build client with custom config (e.g. explicit API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build client from the environment: `OPENAI_API_KEY` (unless an
    /// override is given) and `OPENAI_BASE_URL` / `OPENAI_API_BASE` for
    /// vendor-compatible endpoints.
    pub fn from_env(model: impl Into<String>, api_key: Option<String>) -> Self {
        let mut config = OpenAIConfig::new();
        if let Some(key) = api_key.or_else(|| std::env::var("OPENAI_API_KEY").ok()) {
            config = config.with_api_key(key);
        }
        if let Ok(base) = std::env::var("OPENAI_BASE_URL")
            .or_else(|_| std::env::var("OPENAI_API_BASE"))
        {
            config = config.with_api_base(base);
        }
        Self::with_config(config, model)
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[async_trait]
impl GenerationClient for ChatCompletion {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage::from(prompt),
        )]);
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        let request = args
            .build()
            .map_err(|e| GenerateError::Transient(format!("request build failed: {}", e)))?;

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            temperature = ?self.temperature,
            "chat completion create"
        );
        trace!(prompt = %prompt, "chat completion request body");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GenerateError::classify(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(GenerateError::EmptyResponse)?;
        let content = choice.message.content.unwrap_or_default();
        let text = content.trim();
        trace!(reply = %text, "chat completion response");
        if text.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
