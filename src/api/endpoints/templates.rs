//! Template endpoints:
//! - `GET /api/v1/templates`: list templates
//! - `GET /api/v1/templates/:name`: template detail
//! - `POST /api/v1/templates/suggest`: suggest a template for a requirement

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{check_min_chars, ApiContext, MIN_REQUIREMENT_CHARS};
use crate::pipeline::{suggest_template, TemplateSuggestion};
use crate::templates::{TemplateDetail, TemplateSummary};

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateSummary>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct SuggestTemplateRequest {
    pub user_requirement: String,
}

pub async fn list(State(ctx): State<ApiContext>) -> Json<TemplateListResponse> {
    let templates = ctx.catalog.list();
    Json(TemplateListResponse {
        count: templates.len(),
        templates,
    })
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<TemplateDetail>, ApiError> {
    ctx.catalog.detail(&name).map(Json).ok_or_else(|| {
        ApiError::NotFound(format!(
            "Template '{name}' not found. Available templates: agile, ieee, minimal, startup"
        ))
    })
}

pub async fn suggest(
    State(ctx): State<ApiContext>,
    payload: Result<Json<SuggestTemplateRequest>, JsonRejection>,
) -> Result<Json<TemplateSuggestion>, ApiError> {
    let Json(req) = payload?;
    check_min_chars("user_requirement", &req.user_requirement, MIN_REQUIREMENT_CHARS)?;
    Ok(Json(suggest_template(&ctx.catalog, &req.user_requirement)))
}
