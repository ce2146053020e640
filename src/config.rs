use std::sync::Arc;

use thiserror::Error;

use crate::llm::gemini::DEFAULT_GEMINI_BASE_URL;
use crate::llm::{GeminiClient, LlmError, OllamaClient, SharedLlmClient};

/// Application-level constants
pub const APP_NAME: &str = "srs-pipeline";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 300;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "srs_pipeline=debug"
    } else {
        "srs_pipeline=info"
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("API key is required. Set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("Model is required. Set the {0} environment variable")]
    MissingModel(&'static str),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Unknown LLM provider '{0}' (expected gemini or ollama)")]
    UnknownProvider(String),

    #[error("Failed to build LLM client: {0}")]
    Client(#[from] LlmError),
}

/// Which text-generation backend to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmProvider {
    Gemini { base_url: String, api_key: String },
    Ollama { host: String },
}

/// Service configuration resolved from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match get("SRS_LLM_TIMEOUT_SECS") {
            None => DEFAULT_LLM_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "SRS_LLM_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        let provider_name = get("SRS_LLM_PROVIDER")
            .map(|p| p.trim().to_lowercase())
            .unwrap_or_else(|| "gemini".to_string());

        match provider_name.as_str() {
            "gemini" => {
                let api_key = get("GOOGLE_GEMINI_API_KEY")
                    .ok_or(ConfigError::MissingApiKey("GOOGLE_GEMINI_API_KEY"))?;
                let base_url = get("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
                let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
                Ok(Self {
                    provider: LlmProvider::Gemini { base_url, api_key },
                    model,
                    timeout_secs,
                })
            }
            "ollama" => {
                let host = get("OLLAMA_HOST").unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string());
                let model = get("OLLAMA_MODEL").ok_or(ConfigError::MissingModel("OLLAMA_MODEL"))?;
                Ok(Self {
                    provider: LlmProvider::Ollama { host },
                    model,
                    timeout_secs,
                })
            }
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }

    /// Build the shared client for the configured backend.
    pub fn build_client(&self) -> Result<SharedLlmClient, ConfigError> {
        let client: SharedLlmClient = match &self.provider {
            LlmProvider::Gemini { base_url, api_key } => {
                Arc::new(GeminiClient::new(base_url, api_key, self.timeout_secs)?)
            }
            LlmProvider::Ollama { host } => Arc::new(OllamaClient::new(host, self.timeout_secs)?),
        };
        Ok(client)
    }

    pub fn provider_name(&self) -> &'static str {
        match self.provider {
            LlmProvider::Gemini { .. } => "gemini",
            LlmProvider::Ollama { .. } => "ollama",
        }
    }
}
