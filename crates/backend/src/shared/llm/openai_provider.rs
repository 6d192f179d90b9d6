use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use crate::shared::config::LlmConfig;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI (or compatible endpoint) provider
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String, temperature: f64, max_tokens: i32) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::with_client_config(config, model, temperature, max_tokens)
    }

    /// Custom endpoint for OpenAI-compatible APIs
    pub fn new_with_endpoint(
        api_endpoint: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: i32,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);
        Self::with_client_config(config, model, temperature, max_tokens)
    }

    /// Provider for the `[llm]` section, `None` when no API key is configured.
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        if config.api_key.trim().is_empty() {
            return None;
        }
        let provider = match &config.api_base {
            Some(base) if !base.trim().is_empty() => Self::new_with_endpoint(
                base.clone(),
                config.api_key.clone(),
                config.model.clone(),
                config.temperature,
                config.max_tokens,
            ),
            _ => Self::new(
                config.api_key.clone(),
                config.model.clone(),
                config.temperature,
                config.max_tokens,
            ),
        };
        Some(provider)
    }

    fn with_client_config(config: OpenAIConfig, model: String, temperature: f64, max_tokens: i32) -> Self {
        Self {
            client: Client::with_config(config),
            model,
            temperature: temperature as f32,
            max_tokens: max_tokens.max(1) as u32,
        }
    }

    fn convert_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        messages
            .into_iter()
            .map(|msg| {
                let converted: ChatCompletionRequestMessage = match msg.role {
                    ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                    ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                };
                Ok(converted)
            })
            .collect()
    }

    /// gpt-5 and the o-series reject custom temperature and token limits.
    fn supports_advanced_params(model_id: &str) -> bool {
        !(model_id.starts_with("gpt-5") || model_id.starts_with("o1-") || model_id.starts_with("o3-"))
    }
}

/// Maps client errors onto `LlmError` by their message text.
fn classify_error(message: String) -> LlmError {
    let lower = message.to_lowercase();
    if lower.contains("401") || lower.contains("authentication") {
        LlmError::AuthError(message)
    } else if lower.contains("429") || lower.contains("rate limit") {
        LlmError::RateLimitExceeded
    } else if lower.contains("error sending request") || lower.contains("connection") {
        LlmError::NetworkError(message)
    } else {
        LlmError::ApiError(message)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let openai_messages = self.convert_messages(messages)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(openai_messages);

        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| classify_error(e.to_string()))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.clone().unwrap_or_default(),
            tokens_used: response.usage.as_ref().map(|u| u.total_tokens as i32),
            model: response.model.clone(),
            finish_reason: choice.finish_reason.as_ref().map(|r| format!("{:?}", r)),
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_provider_without_key() {
        let config = LlmConfig::default();
        assert!(OpenAiProvider::from_config(&config).is_none());
    }

    #[test]
    fn test_provider_from_key() {
        let config = LlmConfig {
            api_key: "sk-test".to_string(),
            ..LlmConfig::default()
        };
        let provider = OpenAiProvider::from_config(&config).unwrap();
        assert_eq!(provider.provider_name(), "OpenAI");
        assert_eq!(provider.model, "gpt-4o-mini");
    }

    #[test]
    fn test_restricted_models() {
        assert!(OpenAiProvider::supports_advanced_params("gpt-4o-mini"));
        assert!(!OpenAiProvider::supports_advanced_params("gpt-5-mini"));
        assert!(!OpenAiProvider::supports_advanced_params("o3-mini"));
    }

    #[test]
    fn test_classify_error() {
        assert!(matches!(classify_error("status 401".into()), LlmError::AuthError(_)));
        assert!(matches!(classify_error("429 Too Many".into()), LlmError::RateLimitExceeded));
        assert!(matches!(
            classify_error("error sending request for url".into()),
            LlmError::NetworkError(_)
        ));
        assert!(matches!(classify_error("model not found".into()), LlmError::ApiError(_)));
    }
}
