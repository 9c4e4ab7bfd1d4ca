use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::CourseError;
use crate::presentation::state::AppState;

use super::error::error_response;

pub async fn courses_handler(State(state): State<AppState>) -> Response {
    match state.course_service.list().await {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list courses");
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string(), "server_error")
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn course_handler(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Response {
    match state.course_service.get(&course_id).await {
        Ok(course) => (StatusCode::OK, Json(course)).into_response(),
        Err(e @ CourseError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, e.to_string(), "not_found_error")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load course");
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string(), "server_error")
        }
    }
}
