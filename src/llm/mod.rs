//! Text-generation service seam.
//!
//! The pipeline only needs `prompt -> text`. Every backend sits behind
//! [`LlmClient`] so the generator and validator can be driven by the mock
//! clients in tests.

pub mod gemini;
pub mod mock;
pub mod ollama;

pub use gemini::GeminiClient;
pub use mock::{FailingLlmClient, MockLlmClient, ScriptedLlmClient};
pub use ollama::OllamaClient;

use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    #[error("Cannot reach text-generation service at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Text-generation service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Text-generation service returned no text")]
    EmptyResponse,
}

/// Blocking text-generation client.
pub trait LlmClient {
    /// Send one prompt to `model` and return the generated text.
    fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;

    /// Short backend name for logs and health output.
    fn provider(&self) -> &'static str;
}

/// Client handle shared by every pipeline built in the process.
pub type SharedLlmClient = Arc<dyn LlmClient + Send + Sync>;

/// Map a transport failure to an [`LlmError`].
pub(crate) fn map_send_error(e: reqwest::Error, base_url: &str, timeout_secs: u64) -> LlmError {
    if e.is_connect() {
        LlmError::Connection(base_url.to_string())
    } else if e.is_timeout() {
        LlmError::Timeout(timeout_secs)
    } else {
        LlmError::HttpClient(e.to_string())
    }
}

/// Build the blocking HTTP client used by the real backends.
pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::blocking::Client, LlmError> {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| LlmError::HttpClient(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_includes_status_and_body() {
        let err = LlmError::Api {
            status: 429,
            body: "quota exceeded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota exceeded"));
    }

    #[test]
    fn timeout_message_names_duration() {
        assert_eq!(LlmError::Timeout(30).to_string(), "Request timed out after 30s");
    }

    #[test]
    fn shared_client_accepts_mock() {
        let client: SharedLlmClient = Arc::new(MockLlmClient::new("ok"));
        assert_eq!(client.generate("m", "p").unwrap(), "ok");
    }
}
