use std::sync::Arc;

use uuid::Uuid;

use crate::llm::SharedLlmClient;
use crate::templates::{select_template, TemplateCatalog, TemplateId, TemplateSummary};

use super::generator::SrsGenerator;
use super::prompt::FIX_CONTEXT_PREFIX;
use super::types::{
    AutoFixOutcome, AutoFixStopReason, Issue, PipelineResult, Priority, Suggestion,
    TemplateSuggestion, ValidationResult,
};
use super::validator::SrsValidator;

/// Suggestions considered when building fix instructions (head of the list).
const MAX_FIX_SUGGESTIONS: usize = 3;

pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Per-run options for [`SrsPipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Template name; unknown or absent means auto-select.
    pub template: Option<String>,
    pub custom_instructions: Option<String>,
    pub validate: bool,
    pub auto_fix: bool,
    /// Upper bound on regenerate+validate rounds. 0 disables the loop.
    pub max_retries: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            template: None,
            custom_instructions: None,
            validate: true,
            auto_fix: false,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RunOptions {
    pub fn with_template(mut self, template: &str) -> Self {
        self.template = Some(template.to_string());
        self
    }

    pub fn with_auto_fix(mut self, max_retries: u32) -> Self {
        self.auto_fix = true;
        self.max_retries = max_retries;
        self
    }

    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }
}

/// Drives generation, validation and the auto-fix loop:
/// generate → validate → (fix instructions → regenerate → validate)*
///
/// Holds no per-run state; every `run` builds its own [`PipelineResult`].
pub struct SrsPipeline {
    generator: SrsGenerator,
    validator: SrsValidator,
    catalog: Arc<TemplateCatalog>,
}

impl SrsPipeline {
    pub fn new(llm: SharedLlmClient, model: &str, catalog: Arc<TemplateCatalog>) -> Self {
        Self {
            generator: SrsGenerator::new(llm.clone(), model, catalog.clone()),
            validator: SrsValidator::new(llm, model, catalog.clone()),
            catalog,
        }
    }

    pub fn generator(&self) -> &SrsGenerator {
        &self.generator
    }

    pub fn validator(&self) -> &SrsValidator {
        &self.validator
    }

    pub fn run(&self, requirement: &str, options: &RunOptions) -> PipelineResult {
        let run_id = Uuid::new_v4();
        let _span = tracing::info_span!(
            "srs_pipeline_run",
            %run_id,
            template = options.template.as_deref().unwrap_or("auto"),
            validate = options.validate,
            auto_fix = options.auto_fix,
            max_retries = options.max_retries,
        )
        .entered();

        let mut result = PipelineResult::new(run_id, requirement);

        // Step 1: first generation; failure is the only fatal path
        let generation = self.generator.generate(
            requirement,
            options.template.as_deref(),
            options.custom_instructions.as_deref(),
        );
        if !generation.succeeded {
            tracing::warn!(template = %generation.template_used, "Initial generation failed");
            result.template_used = Some(generation.template_used);
            result.error = Some(
                generation
                    .error
                    .unwrap_or_else(|| "Generation failed".to_string()),
            );
            return result;
        }

        let template = generation.template_used;
        result.template_used = Some(template);
        result.template_description = generation.template_description;
        result.sections = Some(generation.sections);
        result.document = generation.document;
        result.iterations = 1;

        // Step 2: validation
        if !options.validate {
            result.succeeded = true;
            tracing::info!(template = %template, "Pipeline finished without validation");
            return result;
        }

        let document = result.document.as_deref().unwrap_or_default();
        let validation = self.validator.validate(
            document,
            requirement,
            template.as_str(),
            Some(generation.validation_criteria.as_slice()),
        );
        result.final_score = validation.score;

        // Step 3: auto-fix loop
        if options.auto_fix {
            if validation.is_valid {
                result.auto_fix = Some(AutoFixOutcome {
                    stop_reason: AutoFixStopReason::AlreadyValid,
                    attempts: 0,
                    last_error: None,
                });
                result.validation_result = Some(validation);
            } else {
                let outcome = self.auto_fix(
                    &mut result,
                    requirement,
                    template,
                    validation,
                    options.max_retries,
                );
                result.auto_fix = Some(outcome);
            }
        } else {
            result.validation_result = Some(validation);
        }

        result.succeeded = true;
        tracing::info!(
            template = %template,
            iterations = result.iterations,
            final_score = result.final_score,
            is_valid = result.is_valid(),
            stop_reason = ?result.auto_fix.as_ref().map(|o| o.stop_reason),
            "Pipeline finished"
        );
        result
    }

    /// Regenerate with fix instructions until the document passes, nothing
    /// actionable remains, a model call fails, or `max_retries` rounds ran.
    fn auto_fix(
        &self,
        result: &mut PipelineResult,
        requirement: &str,
        template: TemplateId,
        mut validation: ValidationResult,
        max_retries: u32,
    ) -> AutoFixOutcome {
        let mut outcome = AutoFixOutcome {
            stop_reason: AutoFixStopReason::RetriesExhausted,
            attempts: 0,
            last_error: None,
        };

        if !validation.succeeded {
            tracing::warn!(
                error = validation.error.as_deref().unwrap_or("unknown"),
                "Validation failed, skipping auto-fix"
            );
            outcome.stop_reason = AutoFixStopReason::ValidationFailed;
            outcome.last_error = validation.error.clone();
            result.validation_result = Some(validation);
            return outcome;
        }

        for attempt in 1..=max_retries {
            let fix_instructions = build_fix_instructions(&validation.issues, &validation.suggestions);
            if fix_instructions.is_empty() {
                tracing::debug!(attempt, "No actionable findings, stopping auto-fix");
                outcome.stop_reason = AutoFixStopReason::NothingToFix;
                break;
            }

            outcome.attempts = attempt;
            tracing::info!(
                attempt,
                max_retries,
                actionable = validation.actionable_issue_count(),
                score = validation.score,
                "Regenerating SRS with fix instructions"
            );

            let extra = format!("{FIX_CONTEXT_PREFIX}\n{fix_instructions}");
            let regeneration = self
                .generator
                .generate(requirement, Some(template.as_str()), Some(&extra));
            if !regeneration.succeeded {
                tracing::warn!(
                    attempt,
                    error = regeneration.error.as_deref().unwrap_or("unknown"),
                    "Regeneration failed, keeping previous document"
                );
                outcome.stop_reason = AutoFixStopReason::RegenerationFailed;
                outcome.last_error = regeneration.error;
                break;
            }

            result.document = regeneration.document;
            result.iterations += 1;

            let document = result.document.as_deref().unwrap_or_default();
            validation = self
                .validator
                .validate(document, requirement, template.as_str(), None);
            result.final_score = validation.score;

            if !validation.succeeded {
                tracing::warn!(
                    attempt,
                    error = validation.error.as_deref().unwrap_or("unknown"),
                    "Re-validation failed, stopping auto-fix"
                );
                outcome.stop_reason = AutoFixStopReason::ValidationFailed;
                outcome.last_error = validation.error.clone();
                break;
            }

            if validation.is_valid {
                outcome.stop_reason = AutoFixStopReason::Passed;
                break;
            }
        }

        result.validation_result = Some(validation);
        outcome
    }

    /// `run` without validation.
    pub fn quick_generate(&self, requirement: &str, template: Option<&str>) -> PipelineResult {
        let options = RunOptions {
            template: template.map(str::to_string),
            ..RunOptions::default()
        }
        .without_validation();
        self.run(requirement, &options)
    }

    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.catalog.list()
    }

    pub fn suggest_template(&self, requirement: &str) -> TemplateSuggestion {
        suggest_template(&self.catalog, requirement)
    }
}

/// Selector pick plus full catalog listing. Makes no model calls.
pub fn suggest_template(catalog: &TemplateCatalog, requirement: &str) -> TemplateSuggestion {
    let suggested = select_template(requirement);
    TemplateSuggestion {
        suggested_template: suggested,
        template_info: catalog.get_by_id(suggested).map(|t| t.detail()),
        all_templates: catalog.list(),
    }
}

/// Fix instructions from a critique: one `- FIX:` line per critical or major
/// issue, then one `- IMPROVE:` line per high-priority suggestion among the
/// first three. Empty when nothing is actionable.
pub fn build_fix_instructions(issues: &[Issue], suggestions: &[Suggestion]) -> String {
    let fixes = issues
        .iter()
        .filter(|i| i.severity.is_actionable())
        .map(|i| format!("- FIX: {}", i.description));

    let improvements = suggestions
        .iter()
        .take(MAX_FIX_SUGGESTIONS)
        .filter(|s| s.priority == Priority::High)
        .map(|s| format!("- IMPROVE: {}", s.suggestion));

    fixes.chain(improvements).collect::<Vec<_>>().join("\n")
}
