use axum::{
    routing::{get, post},
    Router,
};
use contracts::shared::generation::{EVENT_DESCRIPTION_PATH, GIFT_LIST_PATH};

use crate::generation::GenerationService;
use crate::handlers;

/// All application routes
pub fn configure_routes(service: GenerationService) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            EVENT_DESCRIPTION_PATH,
            post(handlers::generation::event_description),
        )
        .route(GIFT_LIST_PATH, post(handlers::generation::gift_list))
        .with_state(service)
}
