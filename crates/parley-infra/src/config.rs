//! Configuration loader for Parley.
//!
//! Reads `config.toml` and deserializes it into [`ParleyConfig`]. Serving
//! falls back to defaults when the file is missing or malformed;
//! `check-config` uses the strict [`read_config`] instead.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use parley_types::config::{ParleyConfig, ProviderSettings};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no API key: set provider.api_key or the {0} environment variable")]
    MissingApiKey(String),
}

/// Read and parse a config file, reporting every failure.
pub async fn read_config(path: &Path) -> Result<ParleyConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str::<ParleyConfig>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`ParleyConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> ParleyConfig {
    match read_config(path).await {
        Ok(config) => config,
        Err(ConfigError::NotFound(_)) => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            ParleyConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            ParleyConfig::default()
        }
    }
}

/// Resolve the provider API key.
///
/// Priority:
/// 1. `provider.api_key` from the config file
/// 2. The environment variable named by `provider.api_key_env`
///
/// Blank values count as absent.
pub fn resolve_api_key(settings: &ProviderSettings) -> Result<SecretString, ConfigError> {
    resolve_api_key_with(settings, |name| std::env::var(name).ok())
}

fn resolve_api_key_with(
    settings: &ProviderSettings,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    let inline = settings
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty());
    if let Some(key) = inline {
        return Ok(SecretString::from(key));
    }

    match lookup_env(&settings.api_key_env).filter(|key| !key.trim().is_empty()) {
        Some(key) => {
            tracing::debug!(env = %settings.api_key_env, "API key resolved from environment");
            Ok(SecretString::from(key))
        }
        None => Err(ConfigError::MissingApiKey(settings.api_key_env.clone())),
    }
}
