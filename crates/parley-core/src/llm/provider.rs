//! LlmProvider trait definition.
//!
//! This is the core abstraction that all LLM providers implement.

use parley_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends (OpenAI and compatible APIs).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parley-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the top-ranked completion.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
