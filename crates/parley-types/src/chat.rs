//! Chat message and session types for Parley.
//!
//! A `Session` is the conversation transcript: an ordered list of
//! `Message`s it owns exclusively. Both carry an id and a creation time
//! that are fixed at construction.
//!
//! Serialized shapes are consumed by the existing provider integration and
//! must keep their field names:
//! - message: `{id, time_created, role, content}`
//! - session: `{id, time_created, message_list, vector_store_id}`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::llm;

// Re-export MessageRole from llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

/// A single message within a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    time_created: DateTime<Utc>,
    role: MessageRole,
    content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            time_created: Utc::now(),
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn time_created(&self) -> DateTime<Utc> {
        self.time_created
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the message text. Identity, role and timestamp are untouched.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// A message must carry some non-whitespace text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }
}

impl From<&Message> for llm::Message {
    fn from(message: &Message) -> Self {
        llm::Message {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// A conversation: messages in arrival order plus an optional vector store.
///
/// Message ids are unique within a session and no mutation reorders the
/// remaining messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    time_created: DateTime<Utc>,
    #[serde(default)]
    message_list: Vec<Message>,
    #[serde(default)]
    vector_store_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            time_created: Utc::now(),
            message_list: Vec::new(),
            vector_store_id: None,
        }
    }

    /// Create a session linked to an external vector store.
    pub fn with_vector_store(vector_store_id: impl Into<String>) -> Self {
        Self {
            vector_store_id: Some(vector_store_id.into()),
            ..Self::new()
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn time_created(&self) -> DateTime<Utc> {
        self.time_created
    }

    pub fn vector_store_id(&self) -> Option<&str> {
        self.vector_store_id.as_deref()
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.message_list
    }

    pub fn len(&self) -> usize {
        self.message_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.message_list.is_empty()
    }

    /// Append a message to the end of the transcript.
    ///
    /// Returns false (and leaves the session unchanged) if a message with
    /// the same id is already present.
    pub fn add_message(&mut self, message: Message) -> bool {
        if self.get_message(message.id).is_some() {
            return false;
        }
        self.message_list.push(message);
        true
    }

    /// Remove the message with `message_id`.
    ///
    /// Idempotent: an absent id leaves the list unchanged and still
    /// returns true.
    pub fn delete_message(&mut self, message_id: Uuid) -> bool {
        self.message_list.retain(|message| message.id != message_id);
        true
    }

    /// Replace the content of the message with `message_id`.
    ///
    /// Returns false without mutating anything if no such message exists.
    pub fn edit_message_content(&mut self, message_id: Uuid, new_content: impl Into<String>) -> bool {
        match self.message_list.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.set_content(new_content);
                true
            }
            None => false,
        }
    }

    pub fn get_message(&self, message_id: Uuid) -> Option<&Message> {
        self.message_list.iter().find(|m| m.id == message_id)
    }

    /// Drop every message but keep the session's identity.
    pub fn clear(&mut self) {
        self.message_list.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(session: &Session) -> Vec<Uuid> {
        session.messages().iter().map(Message::id).collect()
    }

    fn session_with(contents: &[&str]) -> Session {
        let mut session = Session::new();
        for content in contents {
            assert!(session.add_message(Message::user(*content)));
        }
        session
    }

    #[test]
    fn test_add_message_preserves_insertion_order() {
        let session = session_with(&["one", "two", "three", "four"]);
        let contents: Vec<&str> = session.messages().iter().map(Message::content).collect();
        assert_eq!(contents, vec!["one", "two", "three", "four"]);

        let mut unique = ids(&session);
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_add_message_rejects_duplicate_id() {
        let mut session = Session::new();
        let message = Message::user("hello");
        assert!(session.add_message(message.clone()));
        assert!(!session.add_message(message));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_delete_message_removes_only_target() {
        let mut session = session_with(&["a", "b", "c"]);
        let before = ids(&session);

        assert!(session.delete_message(before[1]));
        assert_eq!(ids(&session), vec![before[0], before[2]]);
    }

    #[test]
    fn test_delete_message_absent_id_is_noop() {
        let mut session = session_with(&["a", "b"]);
        let before = ids(&session);

        assert!(session.delete_message(Uuid::now_v7()));
        assert_eq!(ids(&session), before);
    }

    #[test]
    fn test_edit_message_content_hit() {
        let mut session = session_with(&["a", "b", "c"]);
        let target = session.messages()[1].id();

        assert!(session.edit_message_content(target, "edited"));
        let contents: Vec<&str> = session.messages().iter().map(Message::content).collect();
        assert_eq!(contents, vec!["a", "edited", "c"]);
        assert_eq!(session.messages()[1].id(), target);
    }

    #[test]
    fn test_edit_message_content_miss() {
        let mut session = session_with(&["a"]);
        let before = session.clone();

        assert!(!session.edit_message_content(Uuid::now_v7(), "edited"));
        assert_eq!(session, before);
    }

    #[test]
    fn test_get_message() {
        let session = session_with(&["a", "b"]);
        let target = session.messages()[0].id();

        assert_eq!(session.get_message(target).unwrap().content(), "a");
        assert!(session.get_message(Uuid::now_v7()).is_none());
    }

    #[test]
    fn test_message_validate() {
        assert!(Message::user("hi").validate().is_ok());
        assert_eq!(
            Message::user("   ").validate(),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_message_serialized_shape() {
        let message = Message::assistant("hello");
        let json = serde_json::to_value(&message).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["content", "id", "role", "time_created"]);
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["id"], message.id().to_string());
    }

    #[test]
    fn test_session_serialized_shape() {
        let mut session = Session::new();
        session.add_message(Message::user("Hi"));
        let json = serde_json::to_value(&session).unwrap();

        assert_eq!(json["message_list"].as_array().unwrap().len(), 1);
        assert_eq!(json["message_list"][0]["content"], "Hi");
        assert!(json["vector_store_id"].is_null());
        assert!(json.get("time_created").is_some());

        let linked = Session::with_vector_store("vs_123");
        let json = serde_json::to_value(&linked).unwrap();
        assert_eq!(json["vector_store_id"], "vs_123");
    }

    #[test]
    fn test_session_deserialize_keeps_identity() {
        let mut session = Session::new();
        session.add_message(Message::system("be brief"));
        let json = serde_json::to_string(&session).unwrap();

        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id(), session.id());
        assert_eq!(parsed.messages()[0].role(), MessageRole::System);
    }

    #[test]
    fn test_llm_message_from_chat_message() {
        let message = Message::user("Hi");
        let wire: llm::Message = (&message).into();
        assert_eq!(wire.role, MessageRole::User);
        assert_eq!(wire.content, "Hi");
    }
}
