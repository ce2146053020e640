//! SRS template catalog.
//!
//! A template is pure data: a prompt skeleton with a single
//! `{user_requirement}` substitution point, an ordered section list, and the
//! checklist the validator grades against. The catalog is built once at
//! startup and shared read-only (`Arc<TemplateCatalog>`).

mod agile;
mod ieee;
mod minimal;
mod startup;
pub mod selector;

pub use selector::select_template;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Substitution point inside every prompt skeleton.
pub const REQUIREMENT_PLACEHOLDER: &str = "{user_requirement}";

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Identifier of one of the fixed SRS document styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Agile,
    Ieee,
    Minimal,
    Startup,
}

impl TemplateId {
    /// All template ids, in catalog order.
    pub fn all() -> &'static [TemplateId] {
        &[Self::Agile, Self::Ieee, Self::Minimal, Self::Startup]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agile => "agile",
            Self::Ieee => "ieee",
            Self::Minimal => "minimal",
            Self::Startup => "startup",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Template '{0}' not found. Available templates: agile, ieee, minimal, startup")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agile" => Ok(Self::Agile),
            "ieee" => Ok(Self::Ieee),
            "minimal" => Ok(Self::Minimal),
            "startup" => Ok(Self::Startup),
            _ => Err(UnknownTemplate(s.to_string())),
        }
    }
}

/// A named section with a one-line description of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One SRS document style.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: TemplateId,
    pub description: &'static str,
    pub sections: &'static [&'static str],
    pub section_details: &'static [SectionInfo],
    pub prompt_skeleton: &'static str,
    pub validation_criteria: &'static [&'static str],
}

impl Template {
    /// Substitute the requirement into the prompt skeleton.
    pub fn render_prompt(&self, requirement: &str) -> String {
        self.prompt_skeleton
            .replace(REQUIREMENT_PLACEHOLDER, requirement)
    }

    pub fn criteria(&self) -> Vec<String> {
        self.validation_criteria
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.to_string()).collect()
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            name: self.id,
            description: self.description.to_string(),
            sections: self.section_names(),
        }
    }

    pub fn detail(&self) -> TemplateDetail {
        TemplateDetail {
            name: self.id,
            description: self.description.to_string(),
            sections: self.section_details.to_vec(),
            validation_criteria: self.criteria(),
        }
    }
}

/// Listing entry for a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateSummary {
    pub name: TemplateId,
    pub description: String,
    pub sections: Vec<String>,
}

/// Full template metadata, including the validation checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDetail {
    pub name: TemplateId,
    pub description: String,
    pub sections: Vec<SectionInfo>,
    pub validation_criteria: Vec<String>,
}

// ═══════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════

/// Read-only lookup table from template id to template.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// The four built-in templates: agile, ieee, minimal, startup.
    pub fn standard() -> Self {
        Self::from_templates(vec![
            agile::template(),
            ieee::template(),
            minimal::template(),
            startup::template(),
        ])
    }

    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        let id = name.parse::<TemplateId>().ok()?;
        self.get_by_id(id)
    }

    pub fn get_by_id(&self, id: TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn list(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(Template::summary).collect()
    }

    pub fn detail(&self, name: &str) -> Option<TemplateDetail> {
        self.get(name).map(Template::detail)
    }

    pub fn names(&self) -> Vec<TemplateId> {
        self.templates.iter().map(|t| t.id).collect()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_four_templates_in_order() {
        let catalog = TemplateCatalog::standard();
        assert_eq!(
            catalog.names(),
            vec![
                TemplateId::Agile,
                TemplateId::Ieee,
                TemplateId::Minimal,
                TemplateId::Startup
            ]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = TemplateCatalog::standard();
        assert_eq!(catalog.get("IEEE").unwrap().id, TemplateId::Ieee);
        assert_eq!(catalog.get(" Startup ").unwrap().id, TemplateId::Startup);
        assert!(catalog.get("waterfall").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn every_skeleton_has_exactly_one_placeholder() {
        for template in TemplateCatalog::standard().templates {
            assert_eq!(
                template.prompt_skeleton.matches(REQUIREMENT_PLACEHOLDER).count(),
                1,
                "{} skeleton",
                template.id
            );
        }
    }

    #[test]
    fn section_details_match_section_count() {
        for template in TemplateCatalog::standard().templates {
            assert_eq!(template.sections.len(), template.section_details.len());
            assert!(!template.validation_criteria.is_empty());
        }
    }

    #[test]
    fn render_prompt_substitutes_requirement() {
        let catalog = TemplateCatalog::standard();
        let prompt = catalog
            .get("minimal")
            .unwrap()
            .render_prompt("A recipe sharing app");
        assert!(prompt.contains("A recipe sharing app"));
        assert!(!prompt.contains(REQUIREMENT_PLACEHOLDER));
    }

    #[test]
    fn template_id_round_trips_through_display() {
        for id in TemplateId::all() {
            assert_eq!(id.to_string().parse::<TemplateId>().unwrap(), *id);
        }
    }

    #[test]
    fn unknown_template_error_lists_available() {
        let err = "kanban".parse::<TemplateId>().unwrap_err();
        assert!(err.to_string().contains("kanban"));
        assert!(err.to_string().contains("agile, ieee, minimal, startup"));
    }

    #[test]
    fn template_id_serializes_lowercase() {
        let json = serde_json::to_string(&TemplateId::Ieee).unwrap();
        assert_eq!(json, "\"ieee\"");
    }

    #[test]
    fn detail_includes_criteria() {
        let detail = TemplateCatalog::standard().detail("agile").unwrap();
        assert_eq!(detail.sections.len(), 10);
        assert_eq!(detail.validation_criteria.len(), 8);
    }
}
