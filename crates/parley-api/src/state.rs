//! Application state wiring the chat service together.
//!
//! AppState holds the concrete service instance used by the REST API.
//! `ChatService` is generic over the bot; AppState pins it to a boxed
//! provider-backed bot.

use std::sync::Arc;

use parley_core::bot::box_bot::BoxBot;
use parley_core::bot::llm_bot::LlmBot;
use parley_core::chat::service::ChatService;
use parley_infra::config::resolve_api_key;
use parley_infra::llm::create_provider;
use parley_types::agent::Agent;
use parley_types::config::{AgentDefinition, ParleyConfig};
use parley_types::error::ValidationError;

/// Concrete chat service pinned to the boxed bot.
pub type ConcreteChatService = ChatService<BoxBot>;

/// Placeholders the bot supplies when rendering an agent template.
pub const TEMPLATE_KEYS: [&str; 3] = ["content", "self_name", "target_name"];

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<ParleyConfig>,
}

impl AppState {
    /// Wire the provider, bot, and chat service from config.
    pub fn init(config: ParleyConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(&config.provider)?;
        let provider = create_provider(&config.provider, api_key);

        let bot = LlmBot::new(provider)
            .with_model(config.provider.model.clone())
            .with_target_name(config.provider.target_name.clone());

        Self::with_bot(BoxBot::new(bot), config)
    }

    /// Build state around an existing bot, registering configured agents.
    pub fn with_bot(bot: BoxBot, config: ParleyConfig) -> anyhow::Result<Self> {
        let agents = build_agents(&config.agents)?;
        tracing::info!(agent_count = agents.len(), "Agents registered");

        let chat_service = ChatService::new(bot).with_agents(agents);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        })
    }
}

/// Turn agent definitions into agents, rejecting templates that would
/// fail at ask time.
pub fn build_agents(definitions: &[AgentDefinition]) -> Result<Vec<Agent>, ValidationError> {
    definitions
        .iter()
        .map(|def| {
            let agent = Agent::new(def.name.clone(), def.prompt_template.clone());
            if let Some(unknown) = agent
                .placeholders()?
                .into_iter()
                .find(|key| !TEMPLATE_KEYS.contains(&key.as_str()))
            {
                return Err(ValidationError::MissingPlaceholder(unknown));
            }
            Ok(agent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str, template: &str) -> AgentDefinition {
        AgentDefinition {
            name: name.to_string(),
            prompt_template: template.to_string(),
        }
    }

    #[test]
    fn test_build_agents_accepts_known_placeholders() {
        let agents = build_agents(&[
            definition("pirate", "As {self_name}, ask {target_name}: {content}"),
            definition("plain", "no placeholders at all"),
        ])
        .unwrap();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name, "pirate");
    }

    #[test]
    fn test_build_agents_rejects_unknown_placeholder() {
        let err = build_agents(&[definition("odd", "{content} for {audience}")]).unwrap_err();
        assert_eq!(err, ValidationError::MissingPlaceholder("audience".to_string()));
    }

    #[test]
    fn test_build_agents_rejects_malformed_template() {
        let err = build_agents(&[definition("broken", "{content")]).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedTemplate(_)));
    }
}
