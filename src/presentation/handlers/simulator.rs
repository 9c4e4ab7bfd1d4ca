use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::application::services::{
    ControllerStatus, ConversationController, ConversationSnapshot, SendOutcome,
};
use crate::domain::{MessageId, PATIENT_NAME, SessionId};
use crate::infrastructure::observability::sanitize_message;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub patient: &'static str,
    pub status: ControllerStatus,
    pub conversation: ConversationSnapshot,
}

impl SessionResponse {
    fn new(session_id: SessionId, controller: &ConversationController) -> Self {
        let conversation = controller.snapshot();
        Self {
            session_id,
            patient: PATIENT_NAME,
            status: if conversation.awaiting_reply {
                ControllerStatus::AwaitingReply
            } else {
                ControllerStatus::Idle
            },
            conversation,
        }
    }
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub outcome: &'static str,
    pub message_id: Option<MessageId>,
    pub conversation: ConversationSnapshot,
}

pub async fn start_session_handler(State(state): State<AppState>) -> Response {
    let (session_id, controller) = state.simulator_sessions.start();
    (
        StatusCode::CREATED,
        Json(SessionResponse::new(session_id, &controller)),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    match find_session(&state, &session_id) {
        Some((id, controller)) => {
            (StatusCode::OK, Json(SessionResponse::new(id, &controller))).into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// Empty text and sends during a pending reply are not errors: they answer
/// 200 with the ignored outcome and the unchanged conversation.
#[tracing::instrument(skip(state, request))]
pub async fn send_message_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Response {
    let Some((_, controller)) = find_session(&state, &session_id) else {
        return session_not_found(&session_id);
    };

    tracing::debug!(text = %sanitize_message(&request.text), "Simulator message received");

    let outcome = controller.send_message(&request.text);
    let message_id = match outcome {
        SendOutcome::Accepted(id) => Some(id),
        SendOutcome::IgnoredEmpty | SendOutcome::IgnoredAwaitingReply => None,
    };
    let status = if outcome.is_accepted() {
        StatusCode::ACCEPTED
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(SendMessageResponse {
            outcome: outcome.as_str(),
            message_id,
            conversation: controller.snapshot(),
        }),
    )
        .into_response()
}

/// Streams a `conversation` event with the full snapshot after every change.
/// The stream ends when the session is ended.
#[tracing::instrument(skip(state))]
pub async fn conversation_events_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Some((_, controller)) = find_session(&state, &session_id) else {
        return session_not_found(&session_id);
    };

    let receiver = controller.subscribe();
    drop(controller);

    Sse::new(snapshot_stream(receiver))
        .keep_alive(KeepAlive::default())
        .into_response()
}

fn snapshot_stream(
    receiver: watch::Receiver<ConversationSnapshot>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold((receiver, true), |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            return None;
        }
        let snapshot = receiver.borrow_and_update().clone();
        let event = Event::default()
            .event("conversation")
            .id(snapshot.revision.to_string())
            .json_data(&snapshot)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to encode conversation snapshot");
                Event::default().event("error")
            });
        Some((Ok(event), (receiver, false)))
    })
}

#[tracing::instrument(skip(state))]
pub async fn end_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let ended = session_id
        .parse::<SessionId>()
        .map(|id| state.simulator_sessions.end(&id))
        .unwrap_or(false);

    if ended {
        StatusCode::NO_CONTENT.into_response()
    } else {
        session_not_found(&session_id)
    }
}

fn find_session(
    state: &AppState,
    raw_id: &str,
) -> Option<(SessionId, Arc<ConversationController>)> {
    let id: SessionId = raw_id.parse().ok()?;
    state
        .simulator_sessions
        .get(&id)
        .map(|controller| (id, controller))
}

fn session_not_found(raw_id: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("session not found: {}", raw_id),
        "not_found_error",
    )
}
