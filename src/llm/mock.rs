//! In-process clients for tests and offline runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{LlmClient, LlmError};

/// Mock LLM client for testing: returns a configurable response.
pub struct MockLlmClient {
    response: String,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl LlmClient for MockLlmClient {
    fn generate(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.response.clone())
    }

    fn provider(&self) -> &'static str {
        "mock"
    }
}

/// Client that always fails with the configured error.
pub struct FailingLlmClient {
    error: LlmError,
}

impl FailingLlmClient {
    pub fn new(error: LlmError) -> Self {
        Self { error }
    }
}

impl LlmClient for FailingLlmClient {
    fn generate(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
        Err(self.error.clone())
    }

    fn provider(&self) -> &'static str {
        "mock"
    }
}

/// Replays queued replies in order and records every prompt it receives.
///
/// An exhausted queue answers with `LlmError::EmptyResponse`.
#[derive(Default)]
pub struct ScriptedLlmClient {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.push(Ok(text.to_string()));
        self
    }

    pub fn fail(self, error: LlmError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, reply: Result<String, LlmError>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl LlmClient for ScriptedLlmClient {
    fn generate(&self, _model: &str, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or(Err(LlmError::EmptyResponse))
    }

    fn provider(&self) -> &'static str {
        "mock"
    }
}
