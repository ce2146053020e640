//! HTTP router.
//!
//! Returns a composable `Router`: versioned routes nested under `/api/v1`,
//! the endpoint index at `/api`, and permissive CORS on everything.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let v1 = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/templates", get(endpoints::templates::list))
        .route("/templates/suggest", post(endpoints::templates::suggest))
        .route("/templates/:name", get(endpoints::templates::detail))
        .route("/generate", post(endpoints::generation::generate))
        .route("/generate/quick", post(endpoints::generation::quick))
        .route("/validate", post(endpoints::validation::validate))
        .with_state(ctx);

    Router::new()
        .route("/api", get(endpoints::health::index))
        .nest("/api/v1", v1)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::llm::{FailingLlmClient, LlmError, MockLlmClient, ScriptedLlmClient, SharedLlmClient};

    const VALID_REPLY: &str = r#"{"is_valid": true, "score": 88, "overall_assessment": "Ready", "issues": [], "suggestions": []}"#;

    fn router_with(llm: SharedLlmClient) -> Router {
        api_router(ApiContext::new(llm, "test-model"))
    }

    fn mock_router() -> Router {
        router_with(Arc::new(MockLlmClient::new(VALID_REPLY)))
    }

    fn failing_router() -> Router {
        router_with(Arc::new(FailingLlmClient::new(LlmError::Api {
            status: 503,
            body: "overloaded".into(),
        })))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn long_document() -> String {
        "# SRS\n\n## Introduction\nThis document specifies a todo application. ".repeat(3)
    }

    // ── Health & index ───────────────────────────────────────

    #[tokio::test]
    async fn health_reports_service() {
        let (status, json) = send(mock_router(), get_request("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "srs-pipeline");
        assert_eq!(json["provider"], "mock");
        assert_eq!(json["model"], "test-model");
    }

    #[tokio::test]
    async fn api_index_lists_endpoints() {
        let (status, json) = send(mock_router(), get_request("/api")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["endpoints"]["generate"], "/api/v1/generate");
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = mock_router()
            .oneshot(get_request("/api/v1/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/api/v1/health")
            .header("Origin", "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = mock_router().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    // ── Templates ────────────────────────────────────────────

    #[tokio::test]
    async fn templates_are_listed_in_order() {
        let (status, json) = send(mock_router(), get_request("/api/v1/templates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 4);
        assert_eq!(json["templates"][0]["name"], "agile");
        assert_eq!(json["templates"][3]["name"], "startup");
    }

    #[tokio::test]
    async fn template_detail_is_case_insensitive() {
        let (status, json) = send(mock_router(), get_request("/api/v1/templates/IEEE")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "ieee");
        assert!(!json["validation_criteria"].as_array().unwrap().is_empty());
        assert!(json["sections"][0]["description"].is_string());
    }

    #[tokio::test]
    async fn unknown_template_detail_returns_404() {
        let (status, json) = send(mock_router(), get_request("/api/v1/templates/kanban")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["error"]["message"].as_str().unwrap().contains("kanban"));
    }

    #[tokio::test]
    async fn suggest_picks_template() {
        let (status, json) = send(
            mock_router(),
            post_json(
                "/api/v1/templates/suggest",
                serde_json::json!({"user_requirement": "Build a scrum-based todo app with sprints"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggested_template"], "agile");
        assert_eq!(json["template_info"]["name"], "agile");
        assert_eq!(json["all_templates"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn suggest_rejects_short_requirement() {
        let (status, json) = send(
            mock_router(),
            post_json("/api/v1/templates/suggest", serde_json::json!({"user_requirement": "app"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    // ── Generation ───────────────────────────────────────────

    #[tokio::test]
    async fn generate_runs_pipeline() {
        let (status, json) = send(
            mock_router(),
            post_json(
                "/api/v1/generate",
                serde_json::json!({"user_requirement": "A formal payroll system for HR", "auto_fix": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["template_used"], "ieee");
        assert_eq!(json["iterations"], 1);
        assert_eq!(json["final_score"], 88.0);
        assert_eq!(json["validation_result"]["is_valid"], true);
        assert_eq!(json["auto_fix"]["stop_reason"], "already_valid");
        assert_eq!(json["user_requirement"], "A formal payroll system for HR");
    }

    #[tokio::test]
    async fn generate_with_pinned_template() {
        let client = Arc::new(ScriptedLlmClient::new().reply("# Minimal SRS"));
        let (status, json) = send(
            router_with(client.clone()),
            post_json(
                "/api/v1/generate",
                serde_json::json!({
                    "user_requirement": "A formal payroll system for HR",
                    "template_name": "minimal",
                    "validate": false
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["template_used"], "minimal");
        assert_eq!(json["srs_document"], "# Minimal SRS");
        assert!(json["validation_result"].is_null());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn generate_failure_returns_502() {
        let (status, json) = send(
            failing_router(),
            post_json(
                "/api/v1/generate",
                serde_json::json!({"user_requirement": "A formal payroll system for HR"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "GENERATION_FAILED");
        assert!(json["error"]["message"].as_str().unwrap().contains("overloaded"));
    }

    #[tokio::test]
    async fn generate_rejects_out_of_range_retries() {
        let (status, _) = send(
            mock_router(),
            post_json(
                "/api/v1/generate",
                serde_json::json!({"user_requirement": "A formal payroll system", "max_retries": 6}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_rejects_short_requirement() {
        let (status, _) = send(
            mock_router(),
            post_json("/api/v1/generate", serde_json::json!({"user_requirement": "todo"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_rejects_unknown_template() {
        let (status, json) = send(
            mock_router(),
            post_json(
                "/api/v1/generate",
                serde_json::json!({"user_requirement": "A formal payroll system", "template_name": "kanban"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"]["message"].as_str().unwrap().contains("kanban"));
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/generate")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, json) = send(mock_router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn missing_field_is_unprocessable() {
        let (status, json) = send(
            mock_router(),
            post_json("/api/v1/generate", serde_json::json!({"template_name": "agile"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["code"], "UNPROCESSABLE");
    }

    #[tokio::test]
    async fn quick_generate_skips_validation() {
        let (status, json) = send(
            mock_router(),
            post_json(
                "/api/v1/generate/quick",
                serde_json::json!({"user_requirement": "An MVP for a recipe app"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["template_used"], "minimal");
        assert!(json["validation_result"].is_null());
        assert_eq!(json["final_score"], 0.0);
    }

    // ── Validation ───────────────────────────────────────────

    #[tokio::test]
    async fn validate_grades_document() {
        let (status, json) = send(
            mock_router(),
            post_json(
                "/api/v1/validate",
                serde_json::json!({
                    "srs_document": long_document(),
                    "user_requirement": "A todo application",
                    "template_name": "agile"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["score"], 88.0);
        assert_eq!(json["metadata"]["template_validated"], "agile");
    }

    #[tokio::test]
    async fn validate_rejects_short_document() {
        let (status, _) = send(
            mock_router(),
            post_json(
                "/api/v1/validate",
                serde_json::json!({
                    "srs_document": "# SRS",
                    "user_requirement": "A todo application",
                    "template_name": "agile"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validate_service_failure_returns_502() {
        let (status, json) = send(
            failing_router(),
            post_json(
                "/api/v1/validate",
                serde_json::json!({
                    "srs_document": long_document(),
                    "user_requirement": "A todo application",
                    "template_name": "agile"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
    }
}
