//! Provider-backed bot.
//!
//! `LlmBot` bridges the [`Bot`] capability to a chat-completion provider:
//! it optionally rewrites the outgoing message through the agent's prompt
//! template, sends the session transcript plus that message, and wraps
//! the top completion in an assistant message.

use tracing::{Instrument, debug, info_span};

use parley_types::agent::Agent;
use parley_types::chat::{Message, Session};
use parley_types::config::{DEFAULT_MODEL, DEFAULT_TARGET_NAME};
use parley_types::error::ValidationError;
use parley_types::llm::{self, CompletionRequest};

use crate::llm::box_provider::BoxLlmProvider;
use crate::llm::provider::LlmProvider;

use super::{AskRequest, Bot, BotError};

/// Bot that delegates to an LLM provider with a fixed model.
pub struct LlmBot {
    provider: BoxLlmProvider,
    model: String,
    target_name: String,
}

impl LlmBot {
    /// Create a bot using `gpt-4o-mini` and the default assistant name.
    pub fn new(provider: BoxLlmProvider) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_string(),
            target_name: DEFAULT_TARGET_NAME.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Name substituted for `{target_name}` in agent templates.
    pub fn with_target_name(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = target_name.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The message actually sent to the provider.
    ///
    /// With an agent, the content is the rendered template and the role is
    /// the original message's role.
    fn outgoing_message(
        &self,
        message: &Message,
        agent: Option<&Agent>,
    ) -> Result<llm::Message, ValidationError> {
        let Some(agent) = agent else {
            return Ok(message.into());
        };

        let content = agent.generate_prompt(&[
            ("content", message.content()),
            ("self_name", agent.name.as_str()),
            ("target_name", self.target_name.as_str()),
        ])?;

        Ok(llm::Message {
            role: message.role(),
            content,
        })
    }

    /// Session transcript in order, followed by the outgoing message.
    fn build_request(&self, session: &Session, outgoing: llm::Message) -> CompletionRequest {
        let mut messages: Vec<llm::Message> = Vec::with_capacity(session.len() + 1);
        messages.extend(session.messages().iter().map(llm::Message::from));
        messages.push(outgoing);

        CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }
}

impl Bot for LlmBot {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn ask(&self, request: AskRequest<'_>) -> Result<Message, BotError> {
        request.message.validate()?;

        if let Some(store) = request.vector_store {
            debug!(vector_store = %store.id(), "Vector store supplied; retrieval is not used");
        }

        let outgoing = self.outgoing_message(request.message, request.agent)?;
        let completion_request = self.build_request(request.session, outgoing);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %completion_request.model,
            session_id = %request.session.id(),
            message_count = completion_request.messages.len(),
            agent = request.agent.map(|a| a.name.as_str()),
        );

        let response = self
            .provider
            .complete(&completion_request)
            .instrument(span)
            .await?;

        debug!(
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Completion received"
        );

        Ok(Message::assistant(response.content))
    }
}
