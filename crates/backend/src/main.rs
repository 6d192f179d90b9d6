pub mod generation;
pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;

use crate::generation::GenerationService;
use crate::shared::llm::openai_provider::OpenAiProvider;
use crate::shared::llm::LlmProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;

    let provider = OpenAiProvider::from_config(&config.llm).map(|p| Arc::new(p) as Arc<dyn LlmProvider>);
    let service = GenerationService::new(provider);
    if service.is_enabled() {
        tracing::info!("Generation enabled with model {}", config.llm.model);
    } else {
        tracing::warn!("No LLM API key configured, generation endpoints answer with fallbacks");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(service)
        .layer(middleware::from_fn(shared::request_log::request_logger))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", port);
            } else {
                tracing::error!("Failed to bind to port {}: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
