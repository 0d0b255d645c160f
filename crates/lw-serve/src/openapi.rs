use utoipa::OpenApi;

use crate::routes::error::ErrorBody;
use crate::routes::logs::{Created, LogPage};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use lw_core::types::{LogQuery, LogRecord, NewLog, Timestamp};

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::logs::ingest_log, crate::routes::logs::query_logs),
    components(schemas(
        LogRecord,
        Timestamp,
        NewLog,
        LogQuery,
        Created,
        LogPage,
        ErrorBody
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn ensure_initialized() {
    let _ = ApiDoc::openapi();
}

pub fn router() -> Router {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> impl IntoResponse {
    let html = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Logwell API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({ url: '/openapi.json', dom_id: '#swagger-ui' });
    </script>
  </body>
</html>
"#;
    (axum::http::StatusCode::OK, axum::response::Html(html))
}
