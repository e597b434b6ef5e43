//! Message HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions/{id}/ask                    - Ask the bot and record the exchange
//! - GET    /api/v1/sessions/{id}/messages/{message_id}  - Get one message
//! - PUT    /api/v1/sessions/{id}/messages/{message_id}  - Replace a message's content
//! - DELETE /api/v1/sessions/{id}/messages/{message_id}  - Delete a message

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use parley_core::chat::service::{Exchange, SendMessage};
use parley_types::chat::{Message, MessageRole};

use super::parse_uuid;
use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Body of `POST /api/v1/sessions/{id}/ask`.
#[derive(Debug, Deserialize)]
pub struct AskBody {
    pub content: String,
    /// Role value ("system", "user", "assistant"); defaults to "user".
    #[serde(default)]
    pub role: Option<String>,
    /// Name of a registered agent.
    #[serde(default)]
    pub agent: Option<String>,
}

/// Body of `PUT /api/v1/sessions/{id}/messages/{message_id}`.
#[derive(Debug, Deserialize)]
pub struct EditBody {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct MessageDeleted {
    pub deleted: bool,
}

/// POST /api/v1/sessions/{id}/ask - Ask the bot.
pub async fn ask(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<AskBody>,
) -> Result<Json<ApiResponse<Exchange>>, AppError> {
    let timer = RequestTimer::start();
    let sid = parse_uuid(&session_id)?;

    let role = match body.role.as_deref() {
        Some(name) => {
            MessageRole::get_by_name(name).map_err(|e| AppError::Validation(e.to_string()))?
        }
        None => MessageRole::User,
    };

    let mut request = SendMessage::user(body.content).with_role(role);
    if let Some(agent) = body.agent {
        request = request.with_agent(agent);
    }

    let exchange = state.chat_service.send_message(&sid, request).await?;

    Ok(Json(
        ApiResponse::success(exchange, timer)
            .with_link("session", &format!("/api/v1/sessions/{sid}")),
    ))
}

/// GET /api/v1/sessions/{id}/messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    Path((session_id, message_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    let timer = RequestTimer::start();
    let sid = parse_uuid(&session_id)?;
    let mid = parse_uuid(&message_id)?;

    let message = state
        .chat_service
        .get_message(&sid, mid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Message {mid} not found")))?;

    Ok(Json(ApiResponse::success(message, timer)))
}

/// PUT /api/v1/sessions/{id}/messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    Path((session_id, message_id)): Path<(String, String)>,
    Json(body): Json<EditBody>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    let timer = RequestTimer::start();
    let sid = parse_uuid(&session_id)?;
    let mid = parse_uuid(&message_id)?;

    if !state
        .chat_service
        .edit_message(&sid, mid, body.content)
        .await?
    {
        return Err(AppError::NotFound(format!("Message {mid} not found")));
    }

    let message = state
        .chat_service
        .get_message(&sid, mid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Message {mid} not found")))?;

    Ok(Json(ApiResponse::success(message, timer)))
}

/// DELETE /api/v1/sessions/{id}/messages/{message_id}
///
/// Deleting an absent message still succeeds.
pub async fn delete_message(
    State(state): State<AppState>,
    Path((session_id, message_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MessageDeleted>>, AppError> {
    let timer = RequestTimer::start();
    let sid = parse_uuid(&session_id)?;
    let mid = parse_uuid(&message_id)?;

    let deleted = state.chat_service.delete_message(&sid, mid).await?;

    Ok(Json(ApiResponse::success(MessageDeleted { deleted }, timer)))
}
