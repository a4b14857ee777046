use aula_records::RecordError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Clients key off the per-kind message, e.g. "Estudiante no encontrado".
            ApiError::Record(RecordError::NotFound { kind, .. }) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": kind.not_found_message() }),
            ),
            ApiError::Record(e) => (e.status_code(), serde_json::json!({ "error": e.to_string() })),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": msg }),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}
