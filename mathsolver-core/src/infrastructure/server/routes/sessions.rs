use super::super::dto::{
    AskRequest, AskResponse, ErrorResponse, SessionResponse, WarningResponse,
};
use super::super::error::ApiError;
use super::super::state::ServerState;
use crate::application::assistant::SubmitOutcome;
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;
use tracing::{info, warn};

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "sessions",
    responses(
        (status = 200, description = "New session seeded with the greeting", body = SessionResponse)
    )
)]
pub async fn create_session_handler(
    State(state): State<Arc<ServerState>>,
) -> Json<SessionResponse> {
    let (session_id, store) = state.sessions().create().await;
    let messages = store.lock().await.all().to_vec();
    info!(session_id = %session_id, "Session started");
    Json(SessionResponse {
        session_id,
        messages,
    })
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/messages",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Full transcript in order", body = SessionResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse)
    )
)]
pub async fn transcript_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let store = state
        .sessions()
        .get(&id)
        .await
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    let messages = store.lock().await.all().to_vec();
    Ok(Json(SessionResponse {
        session_id: id,
        messages,
    }))
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/messages",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    request_body = AskRequest,
    responses(
        (status = 200, description = "Question answered", body = AskResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
        (status = 422, description = "Empty question", body = WarningResponse)
    )
)]
pub async fn ask_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let store = state
        .sessions()
        .get(&id)
        .await
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    info!(session_id = %id, "Received question");

    // Held for the whole run so a session answers one question at a time.
    let mut session = store.lock().await;
    match state.assistant().submit(&mut session, &payload.question).await {
        SubmitOutcome::EmptyQuestion => {
            warn!(session_id = %id, "Rejecting empty question");
            Err(ApiError::EmptyQuestion)
        }
        SubmitOutcome::Answered { answer, steps } => Ok(Json(AskResponse {
            answer,
            tool_steps: steps,
            messages: session.all().to_vec(),
        })),
    }
}
