//! Configuration types for Parley.
//!
//! `ParleyConfig` represents the `config.toml` that controls the HTTP
//! server, the LLM provider, logging, and the registered agents.

use serde::{Deserialize, Serialize};

/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Name the provider adapter gives the assistant in agent prompts.
pub const DEFAULT_TARGET_NAME: &str = "Open AI Assistant";

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Agent personas available to chat requests by name.
    #[serde(default)]
    pub agents: Vec<AgentDefinition>,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enables verbose request logging.
    #[serde(default)]
    pub debug: bool,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

/// Settings for the OpenAI-compatible provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Human-readable provider name (appears in logs and spans).
    #[serde(default = "default_provider_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Inline API key. When absent the key is read from the environment.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is absent.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_target_name")]
    pub target_name: String,
}

fn default_provider_name() -> String {
    "openai".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_target_name() -> String {
    DEFAULT_TARGET_NAME.to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            target_name: default_target_name(),
        }
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// Export spans through OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            otel: false,
        }
    }
}

/// An agent persona declared in config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    pub prompt_template: String,
}
