use std::sync::Arc;

use contracts::shared::generation::{
    description_or_placeholder, event_description_prompt, gift_list_prompt, parse_gift_list,
    GiftSuggestion, DESCRIPTION_ERROR_TEXT,
};

use crate::shared::llm::{ChatMessage, LlmError, LlmProvider};

/// System instruction sent with the gift list prompt.
const JSON_ONLY_INSTRUCTION: &str = "Reply with a single JSON array and no other text.";

/// Event description and gift list generation on top of an optional provider.
///
/// Both operations always produce a value: provider failures and a missing
/// provider degrade to `DESCRIPTION_ERROR_TEXT` / an empty list.
#[derive(Clone)]
pub struct GenerationService {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl GenerationService {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(LlmError::NotConfigured)?;
        let response = provider.chat_completion(messages).await?;
        tracing::debug!(
            "{} answered with model {} ({:?} tokens, finish {:?})",
            provider.provider_name(),
            response.model,
            response.tokens_used,
            response.finish_reason
        );
        Ok(response.content)
    }

    pub async fn event_description(&self, event_name: &str, keywords: &[String]) -> String {
        let prompt = event_description_prompt(event_name, keywords);
        match self.complete(vec![ChatMessage::user(prompt)]).await {
            Ok(text) => description_or_placeholder(&text),
            Err(e) => {
                tracing::error!("Event description generation failed: {}", e);
                DESCRIPTION_ERROR_TEXT.to_string()
            }
        }
    }

    pub async fn gift_list(&self, event_type: &str) -> Vec<GiftSuggestion> {
        let messages = vec![
            ChatMessage::system(JSON_ONLY_INSTRUCTION),
            ChatMessage::user(gift_list_prompt(event_type)),
        ];
        match self.complete(messages).await {
            Ok(raw) => parse_gift_list(&raw),
            Err(e) => {
                tracing::error!("Gift list generation failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::llm::LlmResponse;
    use async_trait::async_trait;
    use contracts::shared::generation::DESCRIPTION_EMPTY_TEXT;
    use std::sync::Mutex;

    /// Replays a fixed answer and records the prompts it was sent.
    pub(crate) struct FakeProvider {
        answer: Result<String, String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        pub(crate) fn answering(text: &str) -> Self {
            Self {
                answer: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                answer: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.extend(messages.into_iter().map(|m| m.content));
            match &self.answer {
                Ok(text) => Ok(LlmResponse {
                    content: text.clone(),
                    tokens_used: Some(42),
                    model: "fake".to_string(),
                    finish_reason: None,
                }),
                Err(message) => Err(LlmError::ApiError(message.clone())),
            }
        }

        fn provider_name(&self) -> &str {
            "Fake"
        }
    }

    fn service_with(provider: FakeProvider) -> (GenerationService, Arc<FakeProvider>) {
        let provider = Arc::new(provider);
        let service = GenerationService::new(Some(provider.clone() as Arc<dyn LlmProvider>));
        (service, provider)
    }

    #[tokio::test]
    async fn test_event_description_uses_name_and_keywords() {
        let (service, provider) = service_with(FakeProvider::answering("  Uma noite incrível.  "));
        let keywords = vec!["rock".to_string(), "cerveja".to_string()];
        let text = service.event_description("Rock Legends", &keywords).await;
        assert_eq!(text, "Uma noite incrível.");

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"Rock Legends\""));
        assert!(prompts[0].contains("rock, cerveja"));
    }

    #[tokio::test]
    async fn test_event_description_blank_answer() {
        let (service, _) = service_with(FakeProvider::answering("   "));
        assert_eq!(service.event_description("Show", &[]).await, DESCRIPTION_EMPTY_TEXT);
    }

    #[tokio::test]
    async fn test_event_description_failure_falls_back() {
        let (service, _) = service_with(FakeProvider::failing("boom"));
        assert_eq!(service.event_description("Show", &[]).await, DESCRIPTION_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_disabled_service_falls_back() {
        let service = GenerationService::new(None);
        assert!(!service.is_enabled());
        assert_eq!(service.event_description("Show", &[]).await, DESCRIPTION_ERROR_TEXT);
        assert!(service.gift_list("Casamento").await.is_empty());
    }

    #[tokio::test]
    async fn test_gift_list_parsed() {
        let (service, provider) = service_with(FakeProvider::answering(
            "```json\n[{\"item\":\"Jogo de taças\",\"priceEstimate\":\"R$ 120,00\"}]\n```",
        ));
        let gifts = service.gift_list("Casamento").await;
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].item, "Jogo de taças");
        assert_eq!(gifts[0].price_estimate, "R$ 120,00");
        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts[0], JSON_ONLY_INSTRUCTION);
        assert!(prompts[1].contains("\"Casamento\""));
    }

    #[tokio::test]
    async fn test_gift_list_malformed_or_failed() {
        let (service, _) = service_with(FakeProvider::answering("not json"));
        assert!(service.gift_list("Casamento").await.is_empty());

        let (service, _) = service_with(FakeProvider::failing("timeout"));
        assert!(service.gift_list("Casamento").await.is_empty());
    }
}
