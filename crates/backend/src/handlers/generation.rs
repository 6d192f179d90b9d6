use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use contracts::shared::generation::{
    EventDescriptionRequest, EventDescriptionResponse, GiftListRequest, GiftSuggestion,
    DESCRIPTION_ERROR_TEXT,
};

use crate::generation::GenerationService;

/// POST /api/generation/event-description
pub async fn event_description(
    State(service): State<GenerationService>,
    body: Result<Json<EventDescriptionRequest>, JsonRejection>,
) -> Json<EventDescriptionResponse> {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("Rejected event description request: {}", rejection.body_text());
            return Json(EventDescriptionResponse {
                text: DESCRIPTION_ERROR_TEXT.to_string(),
            });
        }
    };
    tracing::info!(
        "Generating description for '{}' ({} keywords)",
        request.event_name,
        request.keywords.len()
    );
    let text = service
        .event_description(&request.event_name, &request.keywords)
        .await;
    Json(EventDescriptionResponse { text })
}

/// POST /api/generation/gift-list
pub async fn gift_list(
    State(service): State<GenerationService>,
    body: Result<Json<GiftListRequest>, JsonRejection>,
) -> Json<Vec<GiftSuggestion>> {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!("Rejected gift list request: {}", rejection.body_text());
            return Json(Vec::new());
        }
    };
    tracing::info!("Suggesting gifts for '{}'", request.event_type);
    Json(service.gift_list(&request.event_type).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::service::tests::FakeProvider;
    use crate::shared::llm::LlmProvider;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use std::sync::Arc;

    async fn json_body<T>(raw: &'static str) -> Result<Json<T>, JsonRejection>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .unwrap();
        Json::<T>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_event_description_handler() {
        let provider: Arc<dyn LlmProvider> = Arc::new(FakeProvider::answering("Venha dançar!"));
        let request = EventDescriptionRequest {
            event_name: "Sexta-Feira Country".to_string(),
            keywords: vec!["country".to_string()],
        };
        let Json(response) =
            event_description(State(GenerationService::new(Some(provider))), Ok(Json(request))).await;
        assert_eq!(response.text, "Venha dançar!");
    }

    #[tokio::test]
    async fn test_handlers_without_provider() {
        let request = EventDescriptionRequest {
            event_name: "Show".to_string(),
            keywords: Vec::new(),
        };
        let Json(response) =
            event_description(State(GenerationService::new(None)), Ok(Json(request))).await;
        assert_eq!(response.text, DESCRIPTION_ERROR_TEXT);

        let request = GiftListRequest {
            event_type: "Aniversário".to_string(),
        };
        let Json(gifts) = gift_list(State(GenerationService::new(None)), Ok(Json(request))).await;
        assert!(gifts.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_gets_fallback() {
        let provider: Arc<dyn LlmProvider> = Arc::new(FakeProvider::answering("[]"));
        let service = GenerationService::new(Some(provider));

        let body = json_body::<EventDescriptionRequest>("{not json").await;
        assert!(body.is_err());
        let Json(response) = event_description(State(service.clone()), body).await;
        assert_eq!(response.text, DESCRIPTION_ERROR_TEXT);

        let body = json_body::<GiftListRequest>(r#"{"tipo":"Casamento"}"#).await;
        assert!(body.is_err());
        let Json(gifts) = gift_list(State(service), body).await;
        assert!(gifts.is_empty());
    }

    #[test]
    fn test_request_wire_format() {
        let request: EventDescriptionRequest =
            serde_json::from_str(r#"{"eventName":"Rock","keywords":["a","b"]}"#).unwrap();
        assert_eq!(request.event_name, "Rock");
        assert_eq!(request.keywords.len(), 2);

        let request: GiftListRequest = serde_json::from_str(r#"{"eventType":"Casamento"}"#).unwrap();
        assert_eq!(request.event_type, "Casamento");
    }
}
