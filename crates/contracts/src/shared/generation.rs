//! DTOs and helpers for the optional text-generation service.
//!
//! Both operations are enrichments: callers always get a usable value back,
//! a fixed fallback text or an empty suggestion list, never an error.

use serde::{Deserialize, Serialize};

/// Returned when the generation call fails.
pub const DESCRIPTION_ERROR_TEXT: &str = "Error generating content.";
/// Returned when the model answers with no text.
pub const DESCRIPTION_EMPTY_TEXT: &str = "No description generated.";

pub const EVENT_DESCRIPTION_PATH: &str = "/api/generation/event-description";
pub const GIFT_LIST_PATH: &str = "/api/generation/gift-list";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptionRequest {
    pub event_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescriptionResponse {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftListRequest {
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftSuggestion {
    #[serde(default)]
    pub item: String,
    /// Estimated price, BRL formatted by the model.
    #[serde(default)]
    pub price_estimate: String,
}

pub fn event_description_prompt(event_name: &str, keywords: &[String]) -> String {
    format!(
        "Create a catchy and exciting description for an event named \"{}\". \n\
         Use the following keywords: {}. \n\
         The tone should be inviting and professional. Limit to 100 words.",
        event_name,
        keywords.join(", ")
    )
}

pub fn gift_list_prompt(event_type: &str) -> String {
    format!(
        "Suggest a list of 5 popular gift items for a \"{}\". Return a JSON list \
         of objects with the string fields \"item\" and \"priceEstimate\" \
         (estimated price in BRL format). Answer with the JSON only.",
        event_type
    )
}

/// Model text, or the placeholder when it is blank.
pub fn description_or_placeholder(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        DESCRIPTION_EMPTY_TEXT.to_string()
    } else {
        text.to_string()
    }
}

/// Splits the comma separated keyword input of the event form.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parses the model's JSON answer. Malformed input yields an empty list.
pub fn parse_gift_list(raw: &str) -> Vec<GiftSuggestion> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<GiftSuggestion>>(body) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("gift list answer is not a JSON list: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gift_list() {
        let raw = r#"[{"item":"Caneca","priceEstimate":"R$ 40,00"},{"item":"Livro"}]"#;
        let items = parse_gift_list(raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, "Caneca");
        assert_eq!(items[0].price_estimate, "R$ 40,00");
        assert_eq!(items[1].price_estimate, "");
    }

    #[test]
    fn test_parse_gift_list_with_code_fence() {
        let raw = "```json\n[{\"item\":\"Vinho\",\"priceEstimate\":\"R$ 90,00\"}]\n```";
        let items = parse_gift_list(raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item, "Vinho");
    }

    #[test]
    fn test_parse_gift_list_malformed_is_empty() {
        assert!(parse_gift_list("").is_empty());
        assert!(parse_gift_list("not json").is_empty());
        assert!(parse_gift_list(r#"{"item":"x"}"#).is_empty());
        assert!(parse_gift_list("```\n```").is_empty());
    }

    #[test]
    fn test_description_placeholder() {
        assert_eq!(description_or_placeholder("  "), DESCRIPTION_EMPTY_TEXT);
        assert_eq!(description_or_placeholder(" Venha! "), "Venha!");
    }

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("rock, show ,, ao vivo "), vec!["rock", "show", "ao vivo"]);
        assert!(split_keywords(" , ").is_empty());
    }

    #[test]
    fn test_prompts_mention_inputs() {
        let p = event_description_prompt("Rock Legends", &["rock".into(), "banda".into()]);
        assert!(p.contains("\"Rock Legends\""));
        assert!(p.contains("rock, banda"));
        assert!(gift_list_prompt("Casamento").contains("\"Casamento\""));
    }

    #[test]
    fn test_request_wire_names() {
        let json = serde_json::to_string(&GiftListRequest { event_type: "Chá".into() }).unwrap();
        assert_eq!(json, r#"{"eventType":"Chá"}"#);
        let req: EventDescriptionRequest = serde_json::from_str(r#"{"eventName":"X"}"#).unwrap();
        assert!(req.keywords.is_empty());
    }
}
