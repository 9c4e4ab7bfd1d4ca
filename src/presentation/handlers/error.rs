use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub r#type: String,
}

pub(super) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    kind: &str,
) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: ErrorBody {
                message: message.into(),
                r#type: kind.to_string(),
            },
        }),
    )
        .into_response()
}
