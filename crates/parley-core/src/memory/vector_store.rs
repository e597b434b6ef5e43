//! Handle to an external vector store.
//!
//! A `VectorStore` pairs the store's API key with the embedding service
//! used to index it. Parley only carries the handle; retrieval is not
//! performed by the bots.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use uuid::Uuid;

use super::box_embedder::BoxEmbedder;

pub struct VectorStore {
    id: Uuid,
    time_created: DateTime<Utc>,
    api_key: SecretString,
    embedding_manager: Arc<BoxEmbedder>,
}

impl VectorStore {
    pub fn new(api_key: SecretString, embedding_manager: Arc<BoxEmbedder>) -> Self {
        Self {
            id: Uuid::now_v7(),
            time_created: Utc::now(),
            api_key,
            embedding_manager,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn time_created(&self) -> DateTime<Utc> {
        self.time_created
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn embedding_manager(&self) -> &Arc<BoxEmbedder> {
        &self.embedding_manager
    }
}

// Manual Debug keeps the embedder opaque; SecretString already redacts the key.
impl fmt::Debug for VectorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorStore")
            .field("id", &self.id)
            .field("time_created", &self.time_created)
            .field("api_key", &self.api_key)
            .field("embedding_model", &self.embedding_manager.model_name())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::memory::embedder::Embedder;
    use parley_types::error::EmbeddingError;
    use secrecy::ExposeSecret;

    /// Fixed-dimension embedder that maps each text to its length.
    pub(crate) struct LengthEmbedder;

    impl Embedder for LengthEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts.iter().map(|t| vec![t.len() as f32, 0.0]).collect())
        }

        fn model_name(&self) -> &str {
            "length-v1"
        }

        fn dimension(&self) -> usize {
            2
        }
    }

    pub(crate) fn test_store() -> VectorStore {
        VectorStore::new(
            SecretString::from("vs-key"),
            Arc::new(BoxEmbedder::new(LengthEmbedder)),
        )
    }

    #[test]
    fn test_vector_store_holds_references() {
        let store = test_store();
        assert_eq!(store.api_key().expose_secret(), "vs-key");
        assert_eq!(store.embedding_manager().model_name(), "length-v1");
        assert_eq!(store.embedding_manager().dimension(), 2);
    }

    #[test]
    fn test_vector_store_debug_redacts_key() {
        let rendered = format!("{:?}", test_store());
        assert!(!rendered.contains("vs-key"));
        assert!(rendered.contains("length-v1"));
    }

    #[tokio::test]
    async fn test_box_embedder_delegates() {
        let store = test_store();
        let vectors = store
            .embedding_manager()
            .embed(&["abc".to_string(), "hello".to_string()])
            .await
            .unwrap();
        assert_eq!(vectors, vec![vec![3.0, 0.0], vec![5.0, 0.0]]);
    }
}
