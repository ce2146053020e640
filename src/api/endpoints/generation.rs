//! Generation endpoints:
//! - `POST /api/v1/generate`: full pipeline with optional validation and auto-fix
//! - `POST /api/v1/generate/quick`: generation only
//!
//! Model calls block, so the pipeline runs on the blocking pool.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{
    check_max_retries, check_min_chars, parse_template_name, run_blocking, ApiContext,
    MIN_REQUIREMENT_CHARS,
};
use crate::pipeline::orchestrator::DEFAULT_MAX_RETRIES;
use crate::pipeline::{PipelineResult, RunOptions};

fn default_true() -> bool {
    true
}

fn default_max_retries() -> i64 {
    i64::from(DEFAULT_MAX_RETRIES)
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub user_requirement: String,
    pub template_name: Option<String>,
    pub custom_instructions: Option<String>,
    #[serde(default = "default_true")]
    pub validate: bool,
    #[serde(default)]
    pub auto_fix: bool,
    #[serde(default = "default_max_retries")]
    pub max_retries: i64,
}

#[derive(Deserialize)]
pub struct QuickGenerateRequest {
    pub user_requirement: String,
    pub template_name: Option<String>,
}

pub async fn generate(
    State(ctx): State<ApiContext>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<PipelineResult>, ApiError> {
    let Json(req) = payload?;
    check_min_chars("user_requirement", &req.user_requirement, MIN_REQUIREMENT_CHARS)?;
    let template = parse_template_name(req.template_name.as_deref())?;
    let max_retries = check_max_retries(req.max_retries)?;

    let options = RunOptions {
        template: template.map(|t| t.to_string()),
        custom_instructions: req.custom_instructions,
        validate: req.validate,
        auto_fix: req.auto_fix,
        max_retries,
    };

    let pipeline = ctx.pipeline();
    let requirement = req.user_requirement;
    let result = run_blocking(move || pipeline.run(&requirement, &options)).await?;
    pipeline_response(result)
}

pub async fn quick(
    State(ctx): State<ApiContext>,
    payload: Result<Json<QuickGenerateRequest>, JsonRejection>,
) -> Result<Json<PipelineResult>, ApiError> {
    let Json(req) = payload?;
    check_min_chars("user_requirement", &req.user_requirement, MIN_REQUIREMENT_CHARS)?;
    let template = parse_template_name(req.template_name.as_deref())?;

    let pipeline = ctx.pipeline();
    let requirement = req.user_requirement;
    let result = run_blocking(move || {
        pipeline.quick_generate(&requirement, template.map(|t| t.as_str()))
    })
    .await?;
    pipeline_response(result)
}

fn pipeline_response(result: PipelineResult) -> Result<Json<PipelineResult>, ApiError> {
    if !result.succeeded {
        return Err(ApiError::GenerationFailed(
            result.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(Json(result))
}
