//! Conversation history index.
//!
//! `History` records which sessions exist, in creation order. It does not
//! own session content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    id: Uuid,
    time_created: DateTime<Utc>,
    /// Serialized under the key the existing integration emits.
    #[serde(rename = "creatsessions", alias = "session_id_list", default)]
    session_id_list: Vec<Uuid>,
}

impl History {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            time_created: Utc::now(),
            session_id_list: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn time_created(&self) -> DateTime<Utc> {
        self.time_created
    }

    pub fn session_ids(&self) -> &[Uuid] {
        &self.session_id_list
    }

    pub fn len(&self) -> usize {
        self.session_id_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session_id_list.is_empty()
    }

    pub fn contains(&self, session_id: Uuid) -> bool {
        self.session_id_list.contains(&session_id)
    }

    /// Index a session. Returns false if it was already indexed.
    pub fn add_session(&mut self, session_id: Uuid) -> bool {
        if self.contains(session_id) {
            return false;
        }
        self.session_id_list.push(session_id);
        true
    }

    /// Drop a session from the index. Returns false if it was not indexed.
    pub fn remove_session(&mut self, session_id: Uuid) -> bool {
        let before = self.session_id_list.len();
        self.session_id_list.retain(|id| *id != session_id);
        self.session_id_list.len() != before
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_sessions() {
        let mut history = History::new();
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());

        assert!(history.add_session(a));
        assert!(history.add_session(b));
        assert!(!history.add_session(a));
        assert_eq!(history.session_ids(), &[a, b]);

        assert!(history.remove_session(a));
        assert!(!history.remove_session(a));
        assert_eq!(history.session_ids(), &[b]);
    }

    #[test]
    fn test_history_serialized_key() {
        let mut history = History::new();
        let id = Uuid::now_v7();
        history.add_session(id);

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["creatsessions"][0], id.to_string());
        assert!(json.get("session_id_list").is_none());
    }

    #[test]
    fn test_history_accepts_field_name_alias() {
        let id = Uuid::now_v7();
        let raw = serde_json::json!({
            "id": Uuid::now_v7(),
            "time_created": Utc::now(),
            "session_id_list": [id],
        });
        let history: History = serde_json::from_value(raw).unwrap();
        assert!(history.contains(id));
    }
}
