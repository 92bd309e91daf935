//! HTTP route table.
//!
//! The demo endpoints are nested under `/demo` and marked uncacheable; the
//! health probe sits at the root. Anything else falls through to axum's
//! default 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod demo;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_DEMO;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    let demo_routes = Router::new()
        .route("/data", get(demo::get_data))
        .route("/message", get(demo::get_message))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DEMO),
        ));

    // Health check - no caching header needed, probes never go through a cache
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .nest("/demo", demo_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::{DEMO_DATA_MESSAGE, DEMO_MESSAGE, REQUEST_ID_HEADER};

    /// Shared buffer the fmt subscriber writes formatted events into.
    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, http::HeaderMap, String) {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_demo_data() {
        let (status, headers, body) = send(Method::GET, "/demo/data").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, DEMO_DATA_MESSAGE);
        assert!(headers[http::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    #[tokio::test]
    async fn test_demo_message() {
        let (status, _, body) = send(Method::GET, "/demo/message").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, DEMO_MESSAGE);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let (_, _, first) = send(Method::GET, "/demo/data").await;
        for _ in 0..5 {
            let (status, _, body) = send(Method::GET, "/demo/data").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, first);
        }
    }

    #[tokio::test]
    async fn test_demo_responses_are_not_cacheable() {
        let (_, headers, _) = send(Method::GET, "/demo/message").await;
        assert_eq!(headers[CACHE_CONTROL], CACHE_CONTROL_DEMO);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, headers, body) = send(Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
        assert!(headers.get(CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn test_every_response_has_request_id() {
        for uri in ["/demo/data", "/demo/message", "/health", "/nope"] {
            let (_, headers, _) = send(Method::GET, uri).await;
            assert!(headers.contains_key(REQUEST_ID_HEADER), "missing on {uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_paths_are_not_found() {
        for uri in ["/", "/demo", "/demo/", "/demo/other", "/data", "/message"] {
            let (status, _, body) = send(Method::GET, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn test_non_get_is_method_not_allowed() {
        let (status, _, _) = send(Method::POST, "/demo/data").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _, _) = send(Method::DELETE, "/demo/message").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_demo_handlers_log_receipt_inside_request_span() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        // Current-thread runtime: the whole request runs on this thread
        let _guard = tracing::subscriber::set_default(subscriber);

        for uri in ["/demo/data", "/demo/message"] {
            let (_, headers, _) = send(Method::GET, uri).await;
            let request_id = headers[REQUEST_ID_HEADER].to_str().unwrap();
            let expected = format!("Request received for {uri}");

            let received: Vec<String> = logs
                .lines()
                .into_iter()
                .filter(|line| line.ends_with(&expected))
                .filter(|line| line.contains(&format!("request_id={request_id}")))
                .collect();
            assert_eq!(received.len(), 1, "{uri}: {:?}", logs.lines());
            assert!(received[0].contains(" INFO "));
        }
    }
}
