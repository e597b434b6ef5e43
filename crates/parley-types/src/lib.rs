//! Shared domain types for Parley.
//!
//! This crate contains the conversation data model (Message, Session,
//! Agent, History), the LLM request/response shapes, configuration types,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod agent;
pub mod chat;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
