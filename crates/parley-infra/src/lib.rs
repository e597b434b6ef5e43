//! Infrastructure layer for Parley.
//!
//! Contains the OpenAI-compatible implementation of the `LlmProvider` port
//! defined in `parley-core`, plus config file loading and API key resolution.

pub mod config;
pub mod llm;
