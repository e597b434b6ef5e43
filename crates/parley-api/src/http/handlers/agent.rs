//! Agent HTTP handlers.
//!
//! Endpoints:
//! - GET /api/v1/agents - List registered agents, ordered by name

use axum::Json;
use axum::extract::State;

use parley_types::agent::Agent;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/agents
pub async fn list_agents(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Agent>>>, AppError> {
    let timer = RequestTimer::start();
    let agents = state.chat_service.agents();
    Ok(Json(ApiResponse::success(agents, timer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::handlers::test_support::test_state;

    #[tokio::test]
    async fn test_list_agents_from_config() {
        let resp = list_agents(State(test_state())).await.unwrap();
        let agents = resp.0.data.unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].name, "pirate");
        assert_eq!(agents[0].prompt_template, "Arr, {content}");
    }
}
