//! `POST /api/v1/validate`: grade an existing SRS document.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{
    check_min_chars, parse_template_name, run_blocking, ApiContext, MIN_DOCUMENT_CHARS,
    MIN_REQUIREMENT_CHARS,
};
use crate::pipeline::ValidationResult;

#[derive(Deserialize)]
pub struct ValidateRequest {
    pub srs_document: String,
    pub user_requirement: String,
    pub template_name: String,
}

pub async fn validate(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Json(req) = payload?;
    check_min_chars("srs_document", &req.srs_document, MIN_DOCUMENT_CHARS)?;
    check_min_chars("user_requirement", &req.user_requirement, MIN_REQUIREMENT_CHARS)?;
    let template = parse_template_name(Some(req.template_name.as_str()))?
        .ok_or_else(|| ApiError::BadRequest("template_name is required".into()))?;

    let pipeline = ctx.pipeline();
    let result = run_blocking(move || {
        pipeline.validator().validate(
            &req.srs_document,
            &req.user_requirement,
            template.as_str(),
            None,
        )
    })
    .await?;

    if !result.succeeded {
        return Err(ApiError::ValidationFailed(
            result.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    Ok(Json(result))
}
