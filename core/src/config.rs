/// Run parameters and cloud-service configuration
use std::env;
use std::path::PathBuf;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SOURCE_LOCALE: &str = "en";
pub const DEFAULT_TARGET_LOCALE: &str = "ro";

const API_KEY_VAR: &str = "TRANSLATE_API_KEY";
const ENDPOINT_VAR: &str = "TRANSLATE_API_ENDPOINT";
const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("invalid service endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Parameters of a single translation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
}

fn default_source_locale() -> String {
    DEFAULT_SOURCE_LOCALE.to_string()
}

fn default_target_locale() -> String {
    DEFAULT_TARGET_LOCALE.to_string()
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            source_locale: default_source_locale(),
            target_locale: default_target_locale(),
        }
    }
}

/// Credentials for the cloud translation service, read from the process
/// environment exactly once at startup.
#[derive(Debug, Clone)]
pub struct ServiceCredentials {
    pub api_key: String,
    pub endpoint: Url,
}

impl ServiceCredentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnv(API_KEY_VAR))?;

        let raw_endpoint =
            env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&raw_endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            url: raw_endpoint.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { api_key, endpoint })
    }

    /// Credentials pointed at an explicit endpoint, bypassing the
    /// environment. Used for self-hosted deployments and tests.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: Url) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint,
        }
    }
}
