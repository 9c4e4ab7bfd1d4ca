use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::services::PortalError;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Deserialize)]
pub struct AccessRequest {
    pub code: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn portal_access_handler(
    State(state): State<AppState>,
    Json(request): Json<AccessRequest>,
) -> Response {
    match state.portal_service.access(&request.code).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(PortalError::InvalidCode(e)) => {
            tracing::debug!(error = %e, "Malformed access code");
            error_response(StatusCode::BAD_REQUEST, e.to_string(), "invalid_request_error")
        }
        Err(PortalError::AccessDenied) => error_response(
            StatusCode::UNAUTHORIZED,
            "Código incorrecto",
            "authentication_error",
        ),
        Err(e) => {
            tracing::error!(error = %e, "Grade lookup failed");
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string(), "server_error")
        }
    }
}
