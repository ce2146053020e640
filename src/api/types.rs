//! Shared state and input checks for the HTTP layer.

use std::sync::Arc;

use crate::api::error::ApiError;
use crate::llm::SharedLlmClient;
use crate::pipeline::SrsPipeline;
use crate::templates::{TemplateCatalog, TemplateId};

/// Minimum characters in a user requirement.
pub const MIN_REQUIREMENT_CHARS: usize = 10;
/// Minimum characters in a document submitted for validation.
pub const MIN_DOCUMENT_CHARS: usize = 100;
/// Upper bound on `max_retries` accepted from clients.
pub const MAX_RETRIES_LIMIT: i64 = 5;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
///
/// Cheap to clone. Every request builds its own [`SrsPipeline`] from it.
#[derive(Clone)]
pub struct ApiContext {
    pub llm: SharedLlmClient,
    pub model: String,
    pub catalog: Arc<TemplateCatalog>,
}

impl ApiContext {
    pub fn new(llm: SharedLlmClient, model: &str) -> Self {
        Self {
            llm,
            model: model.to_string(),
            catalog: Arc::new(TemplateCatalog::standard()),
        }
    }

    pub fn pipeline(&self) -> SrsPipeline {
        SrsPipeline::new(self.llm.clone(), &self.model, self.catalog.clone())
    }
}

// ═══════════════════════════════════════════════════════════
// Input checks
// ═══════════════════════════════════════════════════════════

pub fn check_min_chars(field: &str, value: &str, min: usize) -> Result<(), ApiError> {
    if value.chars().count() < min {
        return Err(ApiError::BadRequest(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Parse an optional template name; unknown names are rejected.
pub fn parse_template_name(name: Option<&str>) -> Result<Option<TemplateId>, ApiError> {
    name.map(|n| {
        n.parse::<TemplateId>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    })
    .transpose()
}

pub fn check_max_retries(max_retries: i64) -> Result<u32, ApiError> {
    if !(0..=MAX_RETRIES_LIMIT).contains(&max_retries) {
        return Err(ApiError::BadRequest(format!(
            "max_retries must be between 0 and {MAX_RETRIES_LIMIT}"
        )));
    }
    u32::try_from(max_retries).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Run blocking pipeline work off the async executor.
pub async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await?)
}
