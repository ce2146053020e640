use std::sync::Arc;

use crate::llm::SharedLlmClient;
use crate::templates::TemplateCatalog;

use super::parser::{interpret_validation_reply, parse_quick_validation_reply};
use super::prompt::{
    build_quick_validation_prompt, build_validation_prompt, DEFAULT_VALIDATION_CRITERIA,
};
use super::types::{QuickValidation, ValidationMetadata, ValidationResult};

/// Grades an SRS document against its requirement and a criteria checklist.
///
/// Exactly one model call per `validate`; no retries.
pub struct SrsValidator {
    llm: SharedLlmClient,
    model: String,
    catalog: Arc<TemplateCatalog>,
}

impl SrsValidator {
    pub fn new(llm: SharedLlmClient, model: &str, catalog: Arc<TemplateCatalog>) -> Self {
        Self {
            llm,
            model: model.to_string(),
            catalog,
        }
    }

    /// Criteria for a validation call: the caller's list when non-empty,
    /// else the template's checklist, else the default checklist.
    pub fn resolve_criteria(&self, template_name: &str, criteria: Option<&[String]>) -> Vec<String> {
        match criteria {
            Some(list) if !list.is_empty() => list.to_vec(),
            _ => self
                .catalog
                .get(template_name)
                .map(|t| t.criteria())
                .unwrap_or_else(|| {
                    DEFAULT_VALIDATION_CRITERIA
                        .iter()
                        .map(|c| c.to_string())
                        .collect()
                }),
        }
    }

    pub fn validate(
        &self,
        document: &str,
        requirement: &str,
        template_name: &str,
        criteria: Option<&[String]>,
    ) -> ValidationResult {
        let criteria = self.resolve_criteria(template_name, criteria);
        let prompt = build_validation_prompt(document, requirement, template_name, &criteria);

        tracing::debug!(
            template = template_name,
            model = %self.model,
            criteria_count = criteria.len(),
            document_len = document.len(),
            "Validating SRS document"
        );

        let reply = match self.llm.generate(&self.model, &prompt) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(template = template_name, error = %e, "SRS validation call failed");
                return ValidationResult::service_failure(e.to_string());
            }
        };

        let mut result = interpret_validation_reply(&reply);
        result.metadata = Some(ValidationMetadata {
            model: self.model.clone(),
            template_validated: template_name.to_string(),
            criteria_count: criteria.len(),
        });

        tracing::debug!(
            template = template_name,
            is_valid = result.is_valid,
            score = result.score,
            issues = result.issues.len(),
            actionable = result.actionable_issue_count(),
            "SRS document validated"
        );

        result
    }

    /// Cheap adequacy check over the head of the document.
    pub fn quick_validate(&self, document: &str, requirement: &str) -> QuickValidation {
        let prompt = build_quick_validation_prompt(document, requirement);

        let reply = match self.llm.generate(&self.model, &prompt) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Quick validation call failed");
                return QuickValidation {
                    is_adequate: false,
                    confidence: 0.0,
                    brief_assessment: format!("Validation failed: {e}"),
                    key_issues: vec!["Validation error".to_string()],
                };
            }
        };

        parse_quick_validation_reply(&reply).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Quick validation reply not interpretable");
            QuickValidation {
                is_adequate: false,
                confidence: 0.0,
                brief_assessment: "Failed to parse validation response".to_string(),
                key_issues: Vec::new(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{FailingLlmClient, LlmError, MockLlmClient, ScriptedLlmClient};
    use crate::pipeline::types::Severity;

    const VALID_REPLY: &str = "```json\n{\"is_valid\": true, \"score\": 91, \"overall_assessment\": \"Good\", \"issues\": [], \"suggestions\": []}\n```";

    fn validator_with(llm: SharedLlmClient) -> SrsValidator {
        SrsValidator::new(llm, "grader", Arc::new(TemplateCatalog::standard()))
    }

    #[test]
    fn decoded_reply_gets_metadata() {
        let validator = validator_with(Arc::new(MockLlmClient::new(VALID_REPLY)));
        let result = validator.validate("# SRS", "Todo app", "agile", None);

        assert!(result.succeeded);
        assert!(result.is_valid);
        assert_eq!(result.score, 91.0);
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.model, "grader");
        assert_eq!(metadata.template_validated, "agile");
        assert_eq!(metadata.criteria_count, 8);
    }

    #[test]
    fn parse_failure_is_soft() {
        let validator = validator_with(Arc::new(MockLlmClient::new("Looks great to me!")));
        let result = validator.validate("# SRS", "Todo app", "agile", None);

        assert!(result.succeeded);
        assert!(!result.is_valid);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Critical);
        assert_eq!(result.issues[0].category, "parsing");
        assert_eq!(result.raw_response.as_deref(), Some("Looks great to me!"));
        assert!(result.metadata.is_some());
    }

    #[test]
    fn service_failure_is_hard() {
        let validator = validator_with(Arc::new(FailingLlmClient::new(LlmError::Api {
            status: 429,
            body: "quota".into(),
        })));
        let result = validator.validate("# SRS", "Todo app", "agile", None);

        assert!(!result.succeeded);
        assert!(!result.is_valid);
        assert_eq!(result.score, 0.0);
        assert!(result.error.unwrap().contains("429"));
    }

    #[test]
    fn caller_criteria_override_template() {
        let client = Arc::new(ScriptedLlmClient::new().reply(VALID_REPLY));
        let validator = validator_with(client.clone());
        let criteria = vec!["Mentions GDPR".to_string()];
        let result = validator.validate("# SRS", "Todo app", "agile", Some(criteria.as_slice()));

        assert_eq!(result.metadata.unwrap().criteria_count, 1);
        assert!(client.prompts()[0].contains("- Mentions GDPR"));
    }

    #[test]
    fn empty_criteria_fall_back_to_template() {
        let validator = validator_with(Arc::new(MockLlmClient::new("{}")));
        let none: Vec<String> = Vec::new();
        let expected = TemplateCatalog::standard().get("ieee").unwrap().criteria();
        assert_eq!(validator.resolve_criteria("ieee", Some(none.as_slice())), expected);
    }

    #[test]
    fn unknown_template_uses_default_checklist() {
        let validator = validator_with(Arc::new(MockLlmClient::new("{}")));
        let criteria = validator.resolve_criteria("waterfall", None);
        assert_eq!(criteria.len(), DEFAULT_VALIDATION_CRITERIA.len());
        assert_eq!(criteria[0], DEFAULT_VALIDATION_CRITERIA[0]);
    }

    #[test]
    fn quick_validate_parses_reply() {
        let validator = validator_with(Arc::new(MockLlmClient::new(
            r#"{"is_adequate": true, "confidence": 80, "brief_assessment": "Fine", "key_issues": ["No NFRs"]}"#,
        )));
        let quick = validator.quick_validate("# SRS", "Todo app");
        assert!(quick.is_adequate);
        assert_eq!(quick.key_issues, vec!["No NFRs"]);
    }

    #[test]
    fn quick_validate_service_failure() {
        let validator = validator_with(Arc::new(FailingLlmClient::new(LlmError::EmptyResponse)));
        let quick = validator.quick_validate("# SRS", "Todo app");
        assert!(!quick.is_adequate);
        assert_eq!(quick.confidence, 0.0);
        assert!(quick.brief_assessment.starts_with("Validation failed: "));
        assert_eq!(quick.key_issues, vec!["Validation error"]);
    }

    #[test]
    fn quick_validate_unparseable_reply() {
        let validator = validator_with(Arc::new(MockLlmClient::new("adequate")));
        let quick = validator.quick_validate("# SRS", "Todo app");
        assert!(!quick.is_adequate);
        assert_eq!(quick.brief_assessment, "Failed to parse validation response");
        assert!(quick.key_issues.is_empty());
    }
}
