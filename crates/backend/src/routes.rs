use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use contracts::ping::PING_PATH;
use contracts::surveys::SURVEYS_PATH;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;

/// Router over the full route surface.
///
/// `surveys` is the list served by `GET /surveys`; there is no storage
/// behind it. Every response carries permissive CORS headers.
pub fn configure_routes(surveys: Vec<String>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(handlers::root))
        .route(PING_PATH, get(handlers::ping))
        .route(SURVEYS_PATH, get(handlers::list_surveys))
        .with_state(Arc::new(surveys))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

/// Logs method, path, status and elapsed time for every request.
async fn request_logger(req: Request, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        configure_routes(vec![
            "Customer Satisfaction".to_string(),
            "Website Feedback".to_string(),
        ])
    }

    async fn send_get(path: &str) -> axum::response::Response {
        test_app()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_returns_200() {
        let response = send_get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_root_returns_cors_headers() {
        let response = send_get("/").await;
        let allow_origin = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());
        assert_eq!(allow_origin, Some("*"));
    }

    #[tokio::test]
    async fn test_ping_returns_200_with_json_content_type() {
        let response = send_get("/ping").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("application/json"));
    }

    #[tokio::test]
    async fn test_ping_returns_pong() {
        let response = send_get("/ping").await;
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"message":"pong"}"#);
    }

    #[tokio::test]
    async fn test_surveys_returns_configured_names_in_order() {
        let response = send_get("/surveys").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let names: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(names, ["Customer Satisfaction", "Website Feedback"]);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let response = send_get("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
