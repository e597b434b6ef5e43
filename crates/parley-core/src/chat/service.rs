//! Chat service orchestrating session lifecycle and the ask flow.
//!
//! ChatService coordinates the session store, the history index, the
//! agent registry and a [`Bot`]: it creates and deletes sessions, edits
//! their messages, and records each successful exchange.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use parley_types::agent::Agent;
use parley_types::chat::{Message, MessageRole, Session};
use parley_types::error::ValidationError;
use parley_types::history::History;

use crate::bot::{AskRequest, Bot, BotError};
use crate::memory::vector_store::VectorStore;

use super::store::{SessionHandle, SessionStore};

/// Errors from chat service operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("session {0} not found")]
    SessionNotFound(Uuid),

    #[error("agent '{0}' not found")]
    AgentNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Bot(#[from] BotError),
}

/// An incoming chat message, before it becomes part of a session.
#[derive(Debug, Clone)]
pub struct SendMessage {
    pub content: String,
    pub role: MessageRole,
    /// Name of a registered agent to rewrite the message through.
    pub agent: Option<String>,
}

impl SendMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: MessageRole::User,
            agent: None,
        }
    }

    pub fn with_role(mut self, role: MessageRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

/// The two messages recorded by a successful ask.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub request: Message,
    pub response: Message,
}

/// Orchestrates in-memory sessions around a bot.
///
/// Generic over `Bot` so tests can run the flow without a provider; the
/// application pins it to `BoxBot`.
pub struct ChatService<B: Bot> {
    bot: B,
    sessions: SessionStore,
    history: RwLock<History>,
    agents: DashMap<String, Agent>,
    vector_stores: DashMap<String, Arc<VectorStore>>,
}

impl<B: Bot> ChatService<B> {
    pub fn new(bot: B) -> Self {
        Self {
            bot,
            sessions: SessionStore::new(),
            history: RwLock::new(History::new()),
            agents: DashMap::new(),
            vector_stores: DashMap::new(),
        }
    }

    /// Seed the agent registry.
    pub fn with_agents(self, agents: impl IntoIterator<Item = Agent>) -> Self {
        for agent in agents {
            self.register_agent(agent);
        }
        self
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    // --- Agents and vector stores ---

    /// Register (or replace) an agent under its name.
    pub fn register_agent(&self, agent: Agent) -> Option<Agent> {
        self.agents.insert(agent.name.clone(), agent)
    }

    pub fn agent(&self, name: &str) -> Option<Agent> {
        self.agents.get(name).map(|entry| entry.value().clone())
    }

    /// All registered agents, ordered by name.
    pub fn agents(&self) -> Vec<Agent> {
        let mut agents: Vec<Agent> = self.agents.iter().map(|e| e.value().clone()).collect();
        agents.sort_by(|a, b| a.name.cmp(&b.name));
        agents
    }

    /// Make a vector store available to sessions linked to `vector_store_id`.
    pub fn register_vector_store(&self, vector_store_id: impl Into<String>, store: VectorStore) {
        self.vector_stores.insert(vector_store_id.into(), Arc::new(store));
    }

    // --- Session lifecycle ---

    /// Create an empty session and index it in the history.
    pub async fn create_session(&self, vector_store_id: Option<String>) -> Session {
        let session = match vector_store_id {
            Some(id) => Session::with_vector_store(id),
            None => Session::new(),
        };
        let snapshot = session.clone();

        self.sessions.insert(session);
        self.history.write().await.add_session(snapshot.id());
        info!(session_id = %snapshot.id(), "Session created");

        snapshot
    }

    /// Snapshot of a session.
    pub async fn get_session(&self, session_id: &Uuid) -> Option<Session> {
        let handle = self.sessions.get(session_id)?;
        let session = handle.lock().await;
        Some(session.clone())
    }

    /// Session ids in creation order.
    pub async fn list_sessions(&self) -> Vec<Uuid> {
        self.history.read().await.session_ids().to_vec()
    }

    pub async fn history(&self) -> History {
        self.history.read().await.clone()
    }

    /// Drop a session and its history entry. Returns false if it did not exist.
    pub async fn delete_session(&self, session_id: &Uuid) -> bool {
        let removed = self.sessions.remove(session_id);
        self.history.write().await.remove_session(*session_id);
        if removed {
            info!(session_id = %session_id, "Session deleted");
        }
        removed
    }

    // --- Ask flow ---

    /// Ask the bot and record the exchange.
    ///
    /// The incoming message and the reply are appended only when the bot
    /// succeeds; on any error the session is left as it was. The session
    /// lock is held for the whole call so concurrent asks on one session
    /// are applied one at a time.
    pub async fn send_message(
        &self,
        session_id: &Uuid,
        request: SendMessage,
    ) -> Result<Exchange, ChatError> {
        let message = Message::new(request.role, request.content);
        message.validate()?;

        let agent = match request.agent.as_deref() {
            Some(name) => Some(
                self.agent(name)
                    .ok_or_else(|| ChatError::AgentNotFound(name.to_string()))?,
            ),
            None => None,
        };

        let handle = self.session_handle(session_id)?;
        let mut session = handle.lock().await;

        let vector_store = session
            .vector_store_id()
            .and_then(|id| self.vector_stores.get(id).map(|e| Arc::clone(e.value())));

        let ask = AskRequest::new(&message, &session)
            .with_agent(agent.as_ref())
            .with_vector_store(vector_store.as_deref());

        let response = match self.bot.ask(ask).await {
            Ok(response) => response,
            Err(e) => {
                warn!(session_id = %session_id, bot = self.bot.name(), error = %e, "Ask failed");
                return Err(e.into());
            }
        };

        session.add_message(message.clone());
        session.add_message(response.clone());
        info!(
            session_id = %session_id,
            message_count = session.len(),
            "Exchange recorded"
        );

        Ok(Exchange {
            request: message,
            response,
        })
    }

    // --- Message operations ---

    /// Append a message without asking the bot.
    pub async fn add_message(&self, session_id: &Uuid, message: Message) -> Result<bool, ChatError> {
        let handle = self.session_handle(session_id)?;
        let added = handle.lock().await.add_message(message);
        Ok(added)
    }

    pub async fn get_message(
        &self,
        session_id: &Uuid,
        message_id: Uuid,
    ) -> Result<Option<Message>, ChatError> {
        let handle = self.session_handle(session_id)?;
        let session = handle.lock().await;
        Ok(session.get_message(message_id).cloned())
    }

    /// Returns false if the message does not exist.
    pub async fn edit_message(
        &self,
        session_id: &Uuid,
        message_id: Uuid,
        new_content: String,
    ) -> Result<bool, ChatError> {
        let handle = self.session_handle(session_id)?;
        let edited = handle
            .lock()
            .await
            .edit_message_content(message_id, new_content);
        Ok(edited)
    }

    /// Idempotent: deleting an absent message still succeeds.
    pub async fn delete_message(&self, session_id: &Uuid, message_id: Uuid) -> Result<bool, ChatError> {
        let handle = self.session_handle(session_id)?;
        let deleted = handle.lock().await.delete_message(message_id);
        Ok(deleted)
    }

    fn session_handle(&self, session_id: &Uuid) -> Result<SessionHandle, ChatError> {
        self.sessions
            .get(session_id)
            .ok_or(ChatError::SessionNotFound(*session_id))
    }
}
