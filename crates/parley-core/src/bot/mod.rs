//! The bot capability.
//!
//! A bot answers one incoming message in the context of a session and
//! returns exactly one assistant message. It never mutates its inputs;
//! recording the exchange in the session is the caller's job.

pub mod box_bot;
pub mod llm_bot;

use parley_types::agent::Agent;
use parley_types::chat::{Message, Session};
use parley_types::error::ValidationError;
use parley_types::llm::LlmError;

use crate::memory::vector_store::VectorStore;

/// Errors a bot can report to its caller.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Everything a bot needs to answer one message.
///
/// The agent persona and vector store are optional; set them with
/// [`AskRequest::with_agent`] and [`AskRequest::with_vector_store`].
#[derive(Debug, Clone, Copy)]
pub struct AskRequest<'a> {
    pub message: &'a Message,
    pub session: &'a Session,
    pub agent: Option<&'a Agent>,
    pub vector_store: Option<&'a VectorStore>,
}

impl<'a> AskRequest<'a> {
    pub fn new(message: &'a Message, session: &'a Session) -> Self {
        Self {
            message,
            session,
            agent: None,
            vector_store: None,
        }
    }

    pub fn with_agent(mut self, agent: Option<&'a Agent>) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_vector_store(mut self, vector_store: Option<&'a VectorStore>) -> Self {
        self.vector_store = vector_store;
        self
    }
}

/// Capability every bot variant implements.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition). Wrap a bot
/// in [`box_bot::BoxBot`] for runtime selection.
pub trait Bot: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce the assistant's reply to `request.message`.
    fn ask(
        &self,
        request: AskRequest<'_>,
    ) -> impl std::future::Future<Output = Result<Message, BotError>> + Send;
}
