//! Session HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions      - Create a session
//! - GET    /api/v1/sessions      - Session history (ids in creation order)
//! - GET    /api/v1/sessions/{id} - Get a single session
//! - DELETE /api/v1/sessions/{id} - Delete a session

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use parley_types::chat::Session;
use parley_types::history::History;

use super::parse_uuid;
use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Body of `POST /api/v1/sessions`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub vector_store_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// POST /api/v1/sessions - Create an empty session.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<Json<ApiResponse<Session>>, AppError> {
    let timer = RequestTimer::start();

    let session = state.chat_service.create_session(body.vector_store_id).await;
    let self_link = format!("/api/v1/sessions/{}", session.id());

    Ok(Json(
        ApiResponse::success(session, timer).with_link("self", &self_link),
    ))
}

/// GET /api/v1/sessions - The session history.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<History>>, AppError> {
    let timer = RequestTimer::start();
    let history = state.chat_service.history().await;
    Ok(Json(ApiResponse::success(history, timer)))
}

/// GET /api/v1/sessions/{id} - Get a session with its messages.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<Session>>, AppError> {
    let timer = RequestTimer::start();
    let sid = parse_uuid(&session_id)?;

    let session = state
        .chat_service
        .get_session(&sid)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {sid} not found")))?;

    Ok(Json(
        ApiResponse::success(session, timer)
            .with_link("ask", &format!("/api/v1/sessions/{sid}/ask")),
    ))
}

/// DELETE /api/v1/sessions/{id} - Delete a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let timer = RequestTimer::start();
    let sid = parse_uuid(&session_id)?;

    if !state.chat_service.delete_session(&sid).await {
        return Err(AppError::NotFound(format!("Session {sid} not found")));
    }

    Ok(Json(ApiResponse::success(DeletedResponse { deleted: true }, timer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::handlers::test_support::test_state;

    #[tokio::test]
    async fn test_create_get_list_delete() {
        let state = test_state();

        let created = create_session(
            State(state.clone()),
            Json(CreateSessionRequest {
                vector_store_id: Some("vs_1".to_string()),
            }),
        )
        .await
        .unwrap();
        let session = created.0.data.unwrap();
        let id = session.id().to_string();
        assert_eq!(session.vector_store_id(), Some("vs_1"));

        let fetched = get_session(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched.0.data.unwrap().id(), session.id());

        let history = list_sessions(State(state.clone())).await.unwrap();
        assert_eq!(history.0.data.unwrap().session_ids(), &[session.id()]);

        delete_session(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert!(matches!(
            get_session(State(state.clone()), Path(id.clone())).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_session(State(state), Path(id)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_validation_error() {
        let state = test_state();
        let result = get_session(State(state), Path("not-a-uuid".to_string())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
