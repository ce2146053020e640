use crate::templates::Template;

/// Checklist used when the named template is unknown.
pub const DEFAULT_VALIDATION_CRITERIA: &[&str] = &[
    "Document must have clear introduction and purpose",
    "Functional requirements must be present and numbered",
    "Non-functional requirements must be specified",
    "Document must be relevant to user requirements",
    "Document must be well-structured and readable",
    "All major sections must be present",
];

/// Lead-in for auto-fix instructions passed back to the generator.
pub const FIX_CONTEXT_PREFIX: &str = "Previous version had these issues that need to be fixed:";

/// Characters of the document shown to the quick validator.
pub const QUICK_VALIDATION_EXCERPT_CHARS: usize = 2000;

/// Build the generation prompt: the template skeleton with the requirement
/// substituted, plus an optional trailing instructions block.
pub fn build_generation_prompt(
    template: &Template,
    requirement: &str,
    extra_instructions: Option<&str>,
) -> String {
    let mut prompt = template.render_prompt(requirement);
    if let Some(extra) = extra_instructions.filter(|e| !e.trim().is_empty()) {
        prompt.push_str("\n\n**Additional Instructions:**\n");
        prompt.push_str(extra);
    }
    prompt
}

/// Build the grading prompt for a full validation.
pub fn build_validation_prompt(
    document: &str,
    requirement: &str,
    template_name: &str,
    criteria: &[String],
) -> String {
    let criteria_text = criteria
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an expert SRS (Software Requirements Specification) document reviewer and validator.

Your task is to validate the following SRS document against the original user requirement and the template criteria.

## Original User Requirement:
{requirement}

## Template Used: {template_name}

## Validation Criteria:
{criteria_text}

## SRS Document to Validate:
{document}

---

Please analyze the SRS document and provide a detailed validation report in the following JSON format:

```json
{{
    "is_valid": true/false,
    "score": 0-100,
    "overall_assessment": "Brief overall assessment",
    "issues": [
        {{
            "severity": "critical/major/minor",
            "category": "category name",
            "description": "Issue description",
            "location": "Where in the document"
        }}
    ],
    "suggestions": [
        {{
            "category": "category name",
            "suggestion": "Improvement suggestion",
            "priority": "high/medium/low"
        }}
    ],
    "section_analysis": [
        {{
            "section_name": "Section name",
            "present": true/false,
            "quality": "excellent/good/fair/poor/missing",
            "notes": "Analysis notes"
        }}
    ],
    "requirement_coverage": {{
        "covered_requirements": ["list of covered requirements from user input"],
        "missing_requirements": ["list of requirements not adequately covered"],
        "coverage_percentage": 0-100
    }},
    "criteria_checklist": [
        {{
            "criterion": "The validation criterion",
            "passed": true/false,
            "notes": "Notes on this criterion"
        }}
    ]
}}
```

Be thorough but fair in your assessment. Focus on:
1. Does the SRS accurately reflect the user's requirements?
2. Are all required sections present and complete?
3. Is the document well-structured and professional?
4. Are functional requirements properly numbered and traceable?
5. Are non-functional requirements specific and measurable?
6. Is the document suitable for actual software development?

Provide only the JSON response, no additional text."#
    )
}

/// Build the prompt for a quick adequacy check over the document head.
pub fn build_quick_validation_prompt(document: &str, requirement: &str) -> String {
    let excerpt: String = document
        .chars()
        .take(QUICK_VALIDATION_EXCERPT_CHARS)
        .collect();

    format!(
        r#"You are an SRS document validator. Quickly assess if this SRS document adequately addresses the user requirement.

User Requirement: {requirement}

SRS Document (first {QUICK_VALIDATION_EXCERPT_CHARS} chars): {excerpt}

Respond with JSON:
{{
    "is_adequate": true/false,
    "confidence": 0-100,
    "brief_assessment": "One sentence assessment",
    "key_issues": ["issue1", "issue2"] (max 3 issues, empty if none)
}}

Only respond with JSON, no other text."#
    )
}
