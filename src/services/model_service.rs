//! Chat-completion client abstraction.
//!
//! Generation services depend on [`ModelService`] rather than the OpenAI
//! client directly, so tests can script replies without network access.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Free-text completion of a single user prompt.
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Completion constrained to a JSON object reply.
    async fn complete_json(&self, prompt: &str) -> AppResult<String>;
}

pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    completion_model: String,
    structured_model: String,
    temperature: f32,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config),
            completion_model: config.completion_model.clone(),
            structured_model: config.structured_model.clone(),
            temperature: config.model_temperature,
        }
    }

    async fn run(&self, model: &str, prompt: &str, json_mode: bool) -> AppResult<String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder
            .model(model)
            .temperature(self.temperature)
            .messages([message.into()]);
        if json_mode {
            builder.response_format(ResponseFormat::JsonObject);
        }
        let request = builder.build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(AppError::EmptyGeneration(
                "model returned an empty reply".to_string(),
            ));
        }

        Ok(content)
    }
}

#[async_trait]
impl ModelService for OpenAiModelService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.run(&self.completion_model, prompt, false).await
    }

    async fn complete_json(&self, prompt: &str) -> AppResult<String> {
        self.run(&self.structured_model, prompt, true).await
    }
}
