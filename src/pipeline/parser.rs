//! Interpretation of the grader's reply.
//!
//! The model is asked for a single JSON object, optionally inside a fenced
//! code block. Everything here is best-effort: a reply that is not a JSON
//! object becomes the fixed parse-failure result, and list items that do not
//! fit the expected shape are skipped rather than failing the whole reply.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{
    CriterionCheck, Issue, Priority, QuickValidation, RequirementCoverage, SectionAnalysis,
    SectionQuality, Severity, Suggestion, ValidationResult,
};

/// First fenced block, with or without a `json` tag.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*\n?(.*?)\n?```").unwrap());

pub const PARSE_FAILURE_ASSESSMENT: &str = "Failed to parse validation response";
pub const PARSE_FAILURE_DESCRIPTION: &str = "Could not parse validation response";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReplyParseError {
    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Return the content of the first fenced block, or the whole reply.
pub fn extract_payload(reply: &str) -> &str {
    match FENCED_BLOCK.captures(reply).and_then(|c| c.get(1)) {
        Some(block) => block.as_str().trim(),
        None => reply.trim(),
    }
}

/// Decode a reply into a JSON object.
fn decode_object(reply: &str) -> Result<Map<String, Value>, ReplyParseError> {
    let value: Value = serde_json::from_str(extract_payload(reply))
        .map_err(|e| ReplyParseError::Json(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(ReplyParseError::NotAnObject("array")),
        Value::String(_) => Err(ReplyParseError::NotAnObject("string")),
        Value::Number(_) => Err(ReplyParseError::NotAnObject("number")),
        Value::Bool(_) => Err(ReplyParseError::NotAnObject("boolean")),
        Value::Null => Err(ReplyParseError::NotAnObject("null")),
    }
}

/// Interpret a grading reply.
///
/// Never fails: undecodable replies yield [`parse_failure_result`]. The
/// returned result has `succeeded = true` and no metadata.
pub fn interpret_validation_reply(reply: &str) -> ValidationResult {
    match parse_validation_reply(reply) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, reply_len = reply.len(), "Validation reply not interpretable");
            parse_failure_result(reply)
        }
    }
}

/// Strictly decode a grading reply; fields inside the object are lenient.
pub fn parse_validation_reply(reply: &str) -> Result<ValidationResult, ReplyParseError> {
    let obj = decode_object(reply)?;

    let section_analysis = array_field(&obj, "section_analysis")
        .iter()
        .filter_map(parse_section)
        .collect();

    Ok(ValidationResult {
        succeeded: true,
        is_valid: bool_field(obj.get("is_valid")),
        score: percentage_field(obj.get("score")),
        overall_assessment: obj
            .get("overall_assessment")
            .and_then(Value::as_str)
            .map(str::to_string),
        issues: parse_array_lenient::<RawIssue>(array_field(&obj, "issues"))
            .into_iter()
            .map(RawIssue::into_issue)
            .collect(),
        suggestions: parse_array_lenient::<RawSuggestion>(array_field(&obj, "suggestions"))
            .into_iter()
            .map(RawSuggestion::into_suggestion)
            .collect(),
        section_analysis,
        requirement_coverage: obj.get("requirement_coverage").and_then(parse_coverage),
        criteria_checklist: parse_array_lenient::<RawCriterion>(array_field(
            &obj,
            "criteria_checklist",
        ))
        .into_iter()
        .map(RawCriterion::into_check)
        .collect(),
        raw_response: None,
        metadata: None,
        error: None,
    })
}

/// The fixed result for a reply that could not be decoded.
pub fn parse_failure_result(reply: &str) -> ValidationResult {
    ValidationResult {
        succeeded: true,
        is_valid: false,
        score: 0.0,
        overall_assessment: Some(PARSE_FAILURE_ASSESSMENT.to_string()),
        issues: vec![Issue {
            severity: Severity::Critical,
            category: "parsing".to_string(),
            description: PARSE_FAILURE_DESCRIPTION.to_string(),
            location: None,
        }],
        suggestions: Vec::new(),
        section_analysis: Vec::new(),
        requirement_coverage: None,
        criteria_checklist: Vec::new(),
        raw_response: Some(reply.to_string()),
        metadata: None,
        error: None,
    }
}

/// Decode a quick-validation reply.
pub fn parse_quick_validation_reply(reply: &str) -> Result<QuickValidation, ReplyParseError> {
    let obj = decode_object(reply)?;
    Ok(QuickValidation {
        is_adequate: bool_field(obj.get("is_adequate")),
        confidence: percentage_field(obj.get("confidence")),
        brief_assessment: obj
            .get("brief_assessment")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        key_issues: string_list(obj.get("key_issues")),
    })
}

// ═══════════════════════════════════════════════════════════
// Field helpers
// ═══════════════════════════════════════════════════════════

fn bool_field(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Numbers or numeric strings, clamped to [0, 100]. Anything else is 0.
fn percentage_field(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(v) if v.is_finite() => v.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an array leniently: skip items that fail to deserialize.
fn parse_array_lenient<T: for<'de> Deserialize<'de>>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}

#[derive(Deserialize)]
struct RawIssue {
    #[serde(default)]
    severity: String,
    #[serde(default)]
    category: String,
    description: String,
    location: Option<String>,
}

impl RawIssue {
    fn into_issue(self) -> Issue {
        Issue {
            severity: Severity::parse_lenient(&self.severity),
            category: self.category,
            description: self.description,
            location: self.location,
        }
    }
}

#[derive(Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    category: String,
    suggestion: String,
    #[serde(default)]
    priority: String,
}

impl RawSuggestion {
    fn into_suggestion(self) -> Suggestion {
        Suggestion {
            category: self.category,
            suggestion: self.suggestion,
            priority: Priority::parse_lenient(&self.priority),
        }
    }
}

#[derive(Deserialize)]
struct RawCriterion {
    criterion: String,
    #[serde(default)]
    passed: bool,
    notes: Option<String>,
}

impl RawCriterion {
    fn into_check(self) -> CriterionCheck {
        CriterionCheck {
            criterion: self.criterion,
            passed: self.passed,
            notes: self.notes,
        }
    }
}

fn parse_section(value: &Value) -> Option<SectionAnalysis> {
    let obj = value.as_object()?;
    let section_name = obj.get("section_name")?.as_str()?.to_string();
    let present = bool_field(obj.get("present"));
    let quality = obj
        .get("quality")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(SectionAnalysis {
        section_name,
        present,
        quality: SectionQuality::parse_lenient(quality, present),
        notes: obj.get("notes").and_then(Value::as_str).map(str::to_string),
    })
}

fn parse_coverage(value: &Value) -> Option<RequirementCoverage> {
    let obj = value.as_object()?;
    Some(RequirementCoverage {
        covered: string_list(obj.get("covered_requirements")),
        missing: string_list(obj.get("missing_requirements")),
        coverage_percentage: percentage_field(obj.get("coverage_percentage")),
    })
}
