//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parley_core::bot::BotError;
use parley_core::chat::service::ChatError;
use parley_types::llm::LlmError;

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat service errors.
    Chat(ChatError),
    /// Malformed request input (bad UUID, unknown role).
    Validation(String),
    NotFound(String),
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl AppError {
    /// Status, machine-readable code, and message for this error.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Chat(ChatError::SessionNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "SESSION_NOT_FOUND",
                format!("Session {id} not found"),
            ),
            AppError::Chat(ChatError::AgentNotFound(name)) => (
                StatusCode::NOT_FOUND,
                "AGENT_NOT_FOUND",
                format!("Agent '{name}' not found"),
            ),
            AppError::Chat(ChatError::Validation(e))
            | AppError::Chat(ChatError::Bot(BotError::Validation(e))) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Chat(ChatError::Bot(BotError::Provider(e))) => {
                let code = match e {
                    LlmError::AuthenticationFailed => "PROVIDER_AUTH_FAILED",
                    LlmError::RateLimited { .. } => "PROVIDER_RATE_LIMITED",
                    _ => "PROVIDER_ERROR",
                };
                (StatusCode::BAD_GATEWAY, code, e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, %message, "Request failed");
        } else {
            tracing::debug!(code, %message, "Request rejected");
        }

        (status, Json(ApiResponse::error(code, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use parley_types::error::ValidationError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(ChatError::SessionNotFound(Uuid::now_v7()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ChatError::AgentNotFound("ghost".to_string()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::NotFound("message".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(ChatError::Validation(ValidationError::EmptyContent).into()),
            StatusCode::BAD_REQUEST
        );
        let template = ChatError::Bot(BotError::Validation(ValidationError::MissingPlaceholder(
            "audience".to_string(),
        )));
        assert_eq!(status_of(template.into()), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_errors_map_to_502() {
        let auth = AppError::from(ChatError::Bot(BotError::Provider(
            LlmError::AuthenticationFailed,
        )));
        let (status, code, _) = auth.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "PROVIDER_AUTH_FAILED");

        let rate = AppError::from(ChatError::Bot(BotError::Provider(LlmError::RateLimited {
            retry_after_ms: None,
        })));
        assert_eq!(rate.parts().1, "PROVIDER_RATE_LIMITED");

        let other = AppError::from(ChatError::Bot(BotError::Provider(LlmError::EmptyResponse)));
        assert_eq!(status_of(other), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(
            status_of(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
