use axum::Json;
use axum::http::StatusCode;
use lw_core::LogError;
use serde::Serialize;
use utoipa::ToSchema;

/// Wire shape of every failure: `{"error": "<message>"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

pub fn map_error(err: &LogError) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!(error = %err, "request failed");
    let (status, message) = match err {
        LogError::InvalidInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
        LogError::Store { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
    };
    (status, Json(ErrorBody { error: message }))
}
