//! In-memory chat sessions for Parley.
//!
//! `SessionStore` holds live sessions behind per-session locks and
//! `ChatService` runs the ask-and-record flow on top of a [`crate::bot::Bot`].

pub mod service;
pub mod store;
