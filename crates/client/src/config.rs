//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PIZZA_SERVICE_URL` - Base URL of the pizza service (e.g., `https://pizza-service.example.com`)
//!
//! ## Optional
//! - `PIZZA_FACTORY_URL` - Base URL of the pizza factory (default: `https://pizza-factory.cs329.click`)
//! - `PIZZA_TOKEN_FILE` - Where the session token is persisted
//!   (default: `$HOME/.jwt-pizza/token.json`, or `.jwt-pizza-token.json` without `HOME`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default pizza factory base URL.
pub const DEFAULT_FACTORY_URL: &str = "https://pizza-factory.cs329.click";

/// Why the environment could not be turned into a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the two services live and where the token is kept.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Pizza service base URL; relative request paths are appended to it.
    pub service_url: Url,
    /// Pizza factory base URL (order verification, factory docs).
    pub factory_url: Url,
    /// Token file for [`crate::FileTokenStore`].
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Configuration for explicit service URLs with the default token path.
    #[must_use]
    pub fn new(service_url: Url, factory_url: Url) -> Self {
        Self {
            service_url,
            factory_url,
            token_path: default_token_path(),
        }
    }

    /// Read the configuration from the environment, after merging in a
    /// `.env` file when one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PIZZA_SERVICE_URL` is missing or any URL is
    /// not an absolute `http`/`https` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let service_url = parse_base_url(
            "PIZZA_SERVICE_URL",
            &get_required_env("PIZZA_SERVICE_URL")?,
        )?;
        let factory_url = parse_base_url(
            "PIZZA_FACTORY_URL",
            &get_env_or_default("PIZZA_FACTORY_URL", DEFAULT_FACTORY_URL),
        )?;
        let token_path =
            get_optional_env("PIZZA_TOKEN_FILE").map_or_else(default_token_path, PathBuf::from);

        Ok(Self {
            service_url,
            factory_url,
            token_path,
        })
    }
}

/// A variable that must be set.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// A variable that may be unset; empty counts as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// A variable with a fallback.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse a service base URL, accepting only `http` and `https`.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

fn default_token_path() -> PathBuf {
    get_optional_env("HOME").map_or_else(
        || PathBuf::from(".jwt-pizza-token.json"),
        |home| PathBuf::from(home).join(".jwt-pizza").join("token.json"),
    )
}
