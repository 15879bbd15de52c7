use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    /// Model used for free-text generation (quiz, summary, tutorial).
    pub completion_model: String,
    /// Model used for JSON-mode generation (structured MCQs).
    pub structured_model: String,
    pub model_temperature: f32,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "sk-local-dev".to_string()),
            ),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            structured_model: env::var("STRUCTURED_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            model_temperature: env::var("MODEL_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set. Called at
    /// startup when APP_ENV=production; panics if required secrets are
    /// using default values.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret() == "sk-local-dev" {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            completion_model: "gpt-4o-mini".to_string(),
            structured_model: "gpt-4o-mini".to_string(),
            model_temperature: 0.0,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
