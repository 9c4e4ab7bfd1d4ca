use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    conversation_events_handler, course_handler, courses_handler, dashboard_handler,
    end_session_handler, get_session_handler, health_handler, navigation_handler,
    portal_access_handler, send_message_handler, start_session_handler,
};
use crate::presentation::state::AppState;

/// Health path kept for clients of the original edge function.
pub const LEGACY_HEALTH_PATH: &str = "/make-server-c0e686a6/health";

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(LEGACY_HEALTH_PATH, get(health_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route("/api/v1/navigation/{tab}", get(navigation_handler))
        .route("/api/v1/portal/access", post(portal_access_handler))
        .route("/api/v1/courses", get(courses_handler))
        .route("/api/v1/courses/{course_id}", get(course_handler))
        .route("/api/v1/simulator/sessions", post(start_session_handler))
        .route(
            "/api/v1/simulator/sessions/{session_id}",
            get(get_session_handler).delete(end_session_handler),
        )
        .route(
            "/api/v1/simulator/sessions/{session_id}/messages",
            post(send_message_handler),
        )
        .route(
            "/api/v1/simulator/sessions/{session_id}/events",
            get(conversation_events_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
