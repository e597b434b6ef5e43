//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](parley_core::llm::provider::LlmProvider)
//! used by Parley and the factory ([`create_provider`]) that builds it from
//! the `[provider]` config section.

pub mod openai_compat;

use secrecy::SecretString;
use tracing::info;

use parley_core::llm::box_provider::BoxLlmProvider;
use parley_types::config::ProviderSettings;

use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] from provider settings and a resolved API key.
pub fn create_provider(settings: &ProviderSettings, api_key: SecretString) -> BoxLlmProvider {
    info!(
        provider = %settings.name,
        base_url = %settings.base_url,
        model = %settings.model,
        "Creating LLM provider"
    );
    let config = openai_compat::config::from_settings(settings, api_key);
    BoxLlmProvider::new(OpenAiCompatibleProvider::new(config))
}
