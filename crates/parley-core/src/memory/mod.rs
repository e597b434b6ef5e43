//! Vector-store handles for Parley.
//!
//! The embedding service is an external collaborator. This module defines
//! the `Embedder` port it must satisfy and the `VectorStore` handle a
//! session can be linked to.

pub mod box_embedder;
pub mod embedder;
pub mod vector_store;
