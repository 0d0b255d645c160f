use crate::AppState;
use crate::routes::error::{ErrorBody, map_error};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use lw_core::LogError;
use lw_core::types::{LogQuery, LogRecord, NewLog};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Created {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogPage {
    pub count: usize,
    pub logs: Vec<LogRecord>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/logs", post(ingest_log).get(query_logs))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/logs",
    request_body = NewLog,
    responses(
        (status = 201, body = Created),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub(crate) async fn ingest_log(State(state): State<AppState>, body: String) -> Response {
    // The body is decoded by hand so a malformed payload surfaces as a 500
    // with the parser's message, matching the store-failure path.
    let input: NewLog = match serde_json::from_str(&body) {
        Ok(input) => input,
        Err(err) => return map_error(&LogError::store(err)).into_response(),
    };
    let well = match state.database().await {
        Ok(well) => well,
        Err(err) => return map_error(&err).into_response(),
    };
    match well.lock().await.ingest(input) {
        Ok(id) => (StatusCode::CREATED, Json(Created { inserted_id: id })).into_response(),
        Err(err) => map_error(&err).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/logs",
    params(LogQuery),
    responses(
        (status = 200, body = LogPage),
        (status = 500, body = ErrorBody)
    )
)]
pub(crate) async fn query_logs(
    State(state): State<AppState>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match query {
        Ok(query) => query,
        Err(err) => return map_error(&LogError::store(err)).into_response(),
    };
    let well = match state.database().await {
        Ok(well) => well,
        Err(err) => return map_error(&err).into_response(),
    };
    match well.lock().await.query(params) {
        Ok(logs) => Json(LogPage {
            count: logs.len(),
            logs,
        })
        .into_response(),
        Err(err) => map_error(&err).into_response(),
    }
}
