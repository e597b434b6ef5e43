//! Connection settings for an OpenAI-compatible provider.

use secrecy::SecretString;

use parley_types::config::{DEFAULT_MODEL, ProviderSettings};

/// OpenAI public endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves its model empty.
    pub model: String,
}

/// OpenAI defaults: public endpoint, `gpt-4o-mini`.
pub fn openai_defaults(api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: DEFAULT_MODEL.into(),
    }
}

/// Build a config from the `[provider]` section.
pub fn from_settings(settings: &ProviderSettings, api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: settings.name.clone(),
        base_url: settings.base_url.trim_end_matches('/').to_string(),
        api_key,
        model: settings.model.clone(),
    }
}
