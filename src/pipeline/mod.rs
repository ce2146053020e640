pub mod generator;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod types;
pub mod validator;

pub use generator::SrsGenerator;
pub use orchestrator::{build_fix_instructions, suggest_template, RunOptions, SrsPipeline};
pub use types::{
    AutoFixOutcome, AutoFixStopReason, GenerationResult, Issue, PipelineResult, Priority,
    QuickValidation, Severity, Suggestion, TemplateSuggestion, ValidationResult,
};
pub use validator::SrsValidator;
