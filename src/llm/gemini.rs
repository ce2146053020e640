//! Google Gemini `generateContent` client.

use serde::{Deserialize, Serialize};

use super::{build_http_client, map_send_error, LlmClient, LlmError};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Blocking client for the Gemini REST API.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: build_http_client(timeout_secs)?,
            timeout_secs,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate.
fn response_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text)
}

impl LlmClient for GeminiClient {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| map_send_error(e, &self.base_url, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

        response_text(parsed)
    }

    fn provider(&self) -> &'static str {
        "gemini"
    }
}
