//! HTTP request handlers for the REST API.

pub mod agent;
pub mod health;
pub mod message;
pub mod session;

use uuid::Uuid;

use crate::http::error::AppError;

/// Parse a UUID from a path parameter, returning a 400 error on invalid format.
fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Validation(format!("Invalid UUID: {s}")))
}

#[cfg(test)]
pub(crate) mod test_support {
    use parley_core::bot::box_bot::BoxBot;
    use parley_core::bot::{AskRequest, Bot, BotError};
    use parley_types::chat::Message;
    use parley_types::config::{AgentDefinition, ParleyConfig};
    use parley_types::llm::LlmError;

    use crate::state::AppState;

    /// Echoes the outgoing content; fails on "fail".
    pub struct EchoBot;

    impl Bot for EchoBot {
        fn name(&self) -> &str {
            "echo"
        }

        async fn ask(&self, request: AskRequest<'_>) -> Result<Message, BotError> {
            if request.message.content() == "fail" {
                return Err(LlmError::Provider {
                    message: "upstream closed".to_string(),
                }
                .into());
            }
            let prefix = request.agent.map(|a| a.name.as_str()).unwrap_or("echo");
            Ok(Message::assistant(format!("{prefix}: {}", request.message.content())))
        }
    }

    pub fn test_state() -> AppState {
        let mut config = ParleyConfig::default();
        config.agents.push(AgentDefinition {
            name: "pirate".to_string(),
            prompt_template: "Arr, {content}".to_string(),
        });
        AppState::with_bot(BoxBot::new(EchoBot), config).unwrap()
    }
}
