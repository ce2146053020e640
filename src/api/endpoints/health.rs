//! Health check and API index.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::types::ApiContext;
use crate::config::{APP_NAME, APP_VERSION};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub provider: &'static str,
    pub model: String,
}

/// `GET /api/v1/health`: liveness check. Makes no model calls.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: APP_NAME,
        version: APP_VERSION,
        provider: ctx.llm.provider(),
        model: ctx.model.clone(),
    })
}

/// `GET /api`: endpoint index.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to SRS Generation Pipeline API",
        "version": APP_VERSION,
        "endpoints": {
            "health": "/api/v1/health",
            "templates": "/api/v1/templates",
            "template_detail": "/api/v1/templates/:name",
            "suggest_template": "/api/v1/templates/suggest",
            "generate": "/api/v1/generate",
            "quick_generate": "/api/v1/generate/quick",
            "validate": "/api/v1/validate",
        }
    }))
}
