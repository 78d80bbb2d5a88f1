//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if is_warning(status) {
        warn!(
            %method,
            %path,
            status = status.as_u16(),
            %duration_ms,
            "Request failed"
        );
    } else {
        info!(
            %method,
            %path,
            status = status.as_u16(),
            %duration_ms,
            "Request completed"
        );
    }

    response
}

/// Server errors and client errors other than 404
fn is_warning(status: StatusCode) -> bool {
    status.is_server_error() || (status.is_client_error() && status != StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_statuses() {
        assert!(is_warning(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_warning(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(is_warning(StatusCode::UNAUTHORIZED));
        assert!(!is_warning(StatusCode::NOT_FOUND));
        assert!(!is_warning(StatusCode::CREATED));
    }
}
