use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::templates::{TemplateDetail, TemplateId, TemplateSummary};

// ═══════════════════════════════════════════════════════════
// Critique vocabulary
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    /// Case-insensitive; anything unrecognised is treated as minor.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "major" => Self::Major,
            _ => Self::Minor,
        }
    }

    /// Critical and major issues drive auto-fix.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Critical | Self::Major)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Case-insensitive; anything unrecognised is treated as low.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionQuality {
    Excellent,
    Good,
    Fair,
    Poor,
    Missing,
}

impl SectionQuality {
    /// Case-insensitive; unknown ratings become `Missing` for absent
    /// sections and `Fair` otherwise.
    pub fn parse_lenient(raw: &str, present: bool) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            "fair" => Self::Fair,
            "poor" => Self::Poor,
            "missing" => Self::Missing,
            _ if !present => Self::Missing,
            _ => Self::Fair,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub description: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub section_name: String,
    pub present: bool,
    pub quality: SectionQuality,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequirementCoverage {
    #[serde(rename = "covered_requirements")]
    pub covered: Vec<String>,
    #[serde(rename = "missing_requirements")]
    pub missing: Vec<String>,
    /// Always within [0, 100].
    pub coverage_percentage: f64,
}

/// Pass/fail verdict on one checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub criterion: String,
    pub passed: bool,
    pub notes: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetadata {
    pub model: String,
    pub template_validated: String,
    pub criteria_count: usize,
}

/// Structured critique of one SRS document.
///
/// `succeeded` reports whether the grading call completed. A reply that
/// could not be interpreted still counts as completed, with
/// `is_valid = false`, `score = 0`, and the reply kept in `raw_response`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(rename = "success")]
    pub succeeded: bool,
    pub is_valid: bool,
    pub score: f64,
    pub overall_assessment: Option<String>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub section_analysis: Vec<SectionAnalysis>,
    pub requirement_coverage: Option<RequirementCoverage>,
    #[serde(default)]
    pub criteria_checklist: Vec<CriterionCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ValidationMetadata>,
    pub error: Option<String>,
}

impl ValidationResult {
    /// The grading call itself failed; nothing was assessed.
    pub fn service_failure(error: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            is_valid: false,
            score: 0.0,
            overall_assessment: None,
            issues: Vec::new(),
            suggestions: Vec::new(),
            section_analysis: Vec::new(),
            requirement_coverage: None,
            criteria_checklist: Vec::new(),
            raw_response: None,
            metadata: None,
            error: Some(error.into()),
        }
    }

    pub fn actionable_issue_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity.is_actionable())
            .count()
    }
}

/// Short adequacy check over the head of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickValidation {
    pub is_adequate: bool,
    pub confidence: f64,
    pub brief_assessment: String,
    #[serde(default)]
    pub key_issues: Vec<String>,
}

// ═══════════════════════════════════════════════════════════
// Generation
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub model: String,
    /// Character counts.
    pub requirement_length: usize,
    pub output_length: usize,
}

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(rename = "success")]
    pub succeeded: bool,
    #[serde(rename = "srs_document")]
    pub document: Option<String>,
    pub template_used: TemplateId,
    pub template_description: Option<String>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub validation_criteria: Vec<String>,
    pub metadata: Option<GenerationMetadata>,
    pub error: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// Pipeline
// ═══════════════════════════════════════════════════════════

/// Why the auto-fix loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoFixStopReason {
    /// The first validation already passed; the loop never ran.
    AlreadyValid,
    /// No critical/major issue and no high-priority suggestion to act on.
    NothingToFix,
    /// A regenerated document passed validation.
    Passed,
    /// Every allowed retry was used without passing.
    RetriesExhausted,
    /// A regeneration call failed; the previous document was kept.
    RegenerationFailed,
    /// A validation call failed at the service level; nothing was assessed.
    ValidationFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoFixOutcome {
    pub stop_reason: AutoFixStopReason,
    /// Regeneration calls attempted, successful or not.
    pub attempts: u32,
    pub last_error: Option<String>,
}

/// Final result of one pipeline run.
///
/// `succeeded` means the run completed with a document. Quality is reported
/// by `final_score` and `validation_result.is_valid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub run_id: Uuid,
    #[serde(rename = "success")]
    pub succeeded: bool,
    #[serde(rename = "user_requirement")]
    pub requirement: String,
    pub template_used: Option<TemplateId>,
    pub template_description: Option<String>,
    pub sections: Option<Vec<String>>,
    #[serde(rename = "srs_document")]
    pub document: Option<String>,
    pub validation_result: Option<ValidationResult>,
    /// Successful generation calls: 1 after the first, +1 per regeneration.
    pub iterations: u32,
    pub final_score: f64,
    pub auto_fix: Option<AutoFixOutcome>,
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl PipelineResult {
    pub fn new(run_id: Uuid, requirement: &str) -> Self {
        Self {
            run_id,
            succeeded: false,
            requirement: requirement.to_string(),
            template_used: None,
            template_description: None,
            sections: None,
            document: None,
            validation_result: None,
            iterations: 0,
            final_score: 0.0,
            auto_fix: None,
            error: None,
            generated_at: Utc::now(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation_result
            .as_ref()
            .map(|v| v.is_valid)
            .unwrap_or(false)
    }
}

/// Suggested template for a requirement, with the full listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSuggestion {
    pub suggested_template: TemplateId,
    pub template_info: Option<TemplateDetail>,
    pub all_templates: Vec<TemplateSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parse_is_lenient() {
        assert_eq!(Severity::parse_lenient("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse_lenient(" major "), Severity::Major);
        assert_eq!(Severity::parse_lenient("blocker"), Severity::Minor);
        assert!(Severity::Major.is_actionable());
        assert!(!Severity::Minor.is_actionable());
    }

    #[test]
    fn priority_parse_is_lenient() {
        assert_eq!(Priority::parse_lenient("High"), Priority::High);
        assert_eq!(Priority::parse_lenient("medium"), Priority::Medium);
        assert_eq!(Priority::parse_lenient("urgent"), Priority::Low);
    }

    #[test]
    fn unknown_quality_depends_on_presence() {
        assert_eq!(SectionQuality::parse_lenient("meh", false), SectionQuality::Missing);
        assert_eq!(SectionQuality::parse_lenient("meh", true), SectionQuality::Fair);
        assert_eq!(SectionQuality::parse_lenient("Excellent", true), SectionQuality::Excellent);
    }

    #[test]
    fn service_failure_is_invalid_with_zero_score() {
        let result = ValidationResult::service_failure("quota");
        assert!(!result.succeeded);
        assert!(!result.is_valid);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.error.as_deref(), Some("quota"));
    }

    #[test]
    fn validation_result_serializes_success_flag() {
        let json = serde_json::to_value(ValidationResult::service_failure("x")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("raw_response").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn coverage_uses_wire_field_names() {
        let coverage = RequirementCoverage {
            covered: vec!["login".into()],
            missing: vec![],
            coverage_percentage: 50.0,
        };
        let json = serde_json::to_value(&coverage).unwrap();
        assert_eq!(json["covered_requirements"][0], "login");
        assert!(json["missing_requirements"].as_array().unwrap().is_empty());
    }

    #[test]
    fn new_pipeline_result_starts_empty() {
        let result = PipelineResult::new(Uuid::new_v4(), "req");
        assert!(!result.succeeded);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.final_score, 0.0);
        assert!(!result.is_valid());
    }

    #[test]
    fn stop_reason_serializes_snake_case() {
        let json = serde_json::to_string(&AutoFixStopReason::RegenerationFailed).unwrap();
        assert_eq!(json, "\"regeneration_failed\"");
        let json = serde_json::to_string(&AutoFixStopReason::ValidationFailed).unwrap();
        assert_eq!(json, "\"validation_failed\"");
    }
}
