use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::format_count;

/// Prints one colored line per request: time, duration, body size, status,
/// method and path. Cyan for 200, yellow otherwise.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to report its real size.
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", uri.path(), e);
            println!(
                "{}",
                log_line("33", start.elapsed().as_millis(), "error", parts.status.as_u16(), method.as_str(), uri.path())
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let color_code = if status == 200 { "36" } else { "33" };
    println!(
        "{}",
        log_line(
            color_code,
            start.elapsed().as_millis(),
            &format_count(bytes.len()),
            status,
            method.as_str(),
            uri.path()
        )
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn log_line(color_code: &str, millis: u128, size: &str, status: u16, method: &str, path: &str) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status,
        method,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_columns() {
        let line = log_line("36", 12, "1.024", 200, "POST", "/api/generation/gift-list");
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("|    12ms |"));
        assert!(line.contains("|        1.024 |"));
        assert!(line.ends_with("200   POST /api/generation/gift-list"));
    }
}
