//! Business logic and port definitions for Parley.
//!
//! This crate defines the `Bot` capability, the `LlmProvider` port that the
//! infrastructure layer implements, the provider-backed bot, and the
//! in-memory chat service. It depends only on `parley-types` -- never on
//! `parley-infra` or any network crate.

pub mod bot;
pub mod chat;
pub mod llm;
pub mod memory;
