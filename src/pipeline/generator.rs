use std::str::FromStr;
use std::sync::Arc;

use crate::llm::SharedLlmClient;
use crate::templates::{
    select_template, Template, TemplateCatalog, TemplateDetail, TemplateId, TemplateSummary,
};

use super::prompt::build_generation_prompt;
use super::types::{GenerationMetadata, GenerationResult};

/// Turns a requirement into a candidate SRS document with one model call.
///
/// Never retries; the auto-fix loop in the pipeline owns retries.
pub struct SrsGenerator {
    llm: SharedLlmClient,
    model: String,
    catalog: Arc<TemplateCatalog>,
}

impl SrsGenerator {
    pub fn new(llm: SharedLlmClient, model: &str, catalog: Arc<TemplateCatalog>) -> Self {
        Self {
            llm,
            model: model.to_string(),
            catalog,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolve the template for a request.
    ///
    /// A requested name is matched case-insensitively. A missing or unknown
    /// name falls back to the selector's pick, then to agile.
    pub fn resolve_template(&self, requested: Option<&str>, requirement: &str) -> Option<&Template> {
        let pinned = requested
            .and_then(|name| TemplateId::from_str(name).ok())
            .and_then(|id| self.catalog.get_by_id(id));
        if let Some(template) = pinned {
            return Some(template);
        }

        if let Some(name) = requested {
            tracing::debug!(requested = name, "Unknown template requested, auto-selecting");
        }

        self.catalog
            .get_by_id(select_template(requirement))
            .or_else(|| self.catalog.get_by_id(TemplateId::Agile))
    }

    /// Generate one document. Service failures come back as
    /// `succeeded = false` with the stringified cause.
    pub fn generate(
        &self,
        requirement: &str,
        template_name: Option<&str>,
        extra_instructions: Option<&str>,
    ) -> GenerationResult {
        let Some(template) = self.resolve_template(template_name, requirement) else {
            let fallback = select_template(requirement);
            tracing::warn!(template = %fallback, "Template catalog has no usable template");
            return GenerationResult {
                succeeded: false,
                document: None,
                template_used: fallback,
                template_description: None,
                sections: Vec::new(),
                validation_criteria: Vec::new(),
                metadata: None,
                error: Some(format!("Template '{fallback}' not found")),
            };
        };

        let prompt = build_generation_prompt(template, requirement, extra_instructions);

        tracing::debug!(
            template = %template.id,
            model = %self.model,
            prompt_len = prompt.len(),
            has_extra_instructions = extra_instructions.is_some(),
            "Generating SRS document"
        );

        match self.llm.generate(&self.model, &prompt) {
            Ok(document) => {
                tracing::debug!(
                    template = %template.id,
                    output_len = document.len(),
                    "SRS document generated"
                );
                GenerationResult {
                    succeeded: true,
                    template_used: template.id,
                    template_description: Some(template.description.to_string()),
                    sections: template.section_names(),
                    validation_criteria: template.criteria(),
                    metadata: Some(GenerationMetadata {
                        model: self.model.clone(),
                        requirement_length: requirement.chars().count(),
                        output_length: document.chars().count(),
                    }),
                    document: Some(document),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(template = %template.id, error = %e, "SRS generation failed");
                GenerationResult {
                    succeeded: false,
                    document: None,
                    template_used: template.id,
                    template_description: None,
                    sections: Vec::new(),
                    validation_criteria: Vec::new(),
                    metadata: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.catalog.list()
    }

    pub fn template_info(&self, name: &str) -> Option<TemplateDetail> {
        self.catalog.detail(name)
    }
}
