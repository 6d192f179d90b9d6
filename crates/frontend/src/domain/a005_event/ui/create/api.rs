//! Client for the generation backend.
//!
//! Both calls are enrichments: failures are logged and mapped to the fixed
//! fallbacks, never surfaced to the form.

use contracts::shared::generation::{
    description_or_placeholder, split_keywords, EventDescriptionRequest,
    EventDescriptionResponse, GiftListRequest, GiftSuggestion, DESCRIPTION_ERROR_TEXT,
    EVENT_DESCRIPTION_PATH, GIFT_LIST_PATH,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

async fn post_event_description(
    request: &EventDescriptionRequest,
) -> Result<EventDescriptionResponse, String> {
    let response = Request::post(&api_url(EVENT_DESCRIPTION_PATH))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

async fn post_gift_list(request: &GiftListRequest) -> Result<Vec<GiftSuggestion>, String> {
    let response = Request::post(&api_url(GIFT_LIST_PATH))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Description for a new event. `raw_keywords` is the comma separated form input.
pub async fn generate_event_description(event_name: &str, raw_keywords: &str) -> String {
    let request = EventDescriptionRequest {
        event_name: event_name.trim().to_string(),
        keywords: split_keywords(raw_keywords),
    };
    match post_event_description(&request).await {
        Ok(response) => description_or_placeholder(&response.text),
        Err(e) => {
            log::error!("Event description generation failed: {}", e);
            DESCRIPTION_ERROR_TEXT.to_string()
        }
    }
}

pub async fn suggest_gift_list(event_type: &str) -> Vec<GiftSuggestion> {
    let request = GiftListRequest {
        event_type: event_type.trim().to_string(),
    };
    match post_gift_list(&request).await {
        Ok(items) => items,
        Err(e) => {
            log::error!("Gift list suggestion failed: {}", e);
            Vec::new()
        }
    }
}
