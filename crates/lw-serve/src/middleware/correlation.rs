use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use ulid::Ulid;

const HEADER_NAME: &str = "x-correlation-id";

/// Echoes the caller's correlation id, or mints one, on every response. The
/// id rides on the request's tracing span so failure logs carry it.
pub async fn correlation_middleware(request: Request<Body>, next: Next) -> Response {
    let header = HeaderName::from_static(HEADER_NAME);
    let id = request
        .headers()
        .get(&header)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.to_string())
        .unwrap_or_else(|| format!("req_{}", Ulid::new()));

    let span = tracing::info_span!("request", correlation_id = %id);
    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(header, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Router, middleware};
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route_layer(middleware::from_fn(correlation_middleware))
    }

    #[tokio::test]
    async fn echoes_the_caller_supplied_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(HEADER_NAME, "caller-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[HEADER_NAME], "caller-42");
    }

    #[tokio::test]
    async fn mints_an_id_when_none_is_supplied() {
        let response = test_app()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let id = response.headers()[HEADER_NAME].to_str().unwrap();
        assert!(id.starts_with("req_"));
    }
}
