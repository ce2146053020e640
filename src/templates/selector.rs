use super::TemplateId;

/// Pick a template from keywords in the requirement text.
///
/// First match wins, checked in order: ieee, startup, minimal, agile.
/// Requirements with no recognised keyword default to agile.
pub fn select_template(requirement: &str) -> TemplateId {
    let lower = requirement.to_lowercase();

    if has_formal_pattern(&lower) {
        return TemplateId::Ieee;
    }

    if has_startup_pattern(&lower) {
        return TemplateId::Startup;
    }

    if has_minimal_pattern(&lower) {
        return TemplateId::Minimal;
    }

    if has_agile_pattern(&lower) {
        return TemplateId::Agile;
    }

    TemplateId::Agile
}

fn has_formal_pattern(text: &str) -> bool {
    contains_any(text, &["ieee", "formal", "academic"])
}

fn has_startup_pattern(text: &str) -> bool {
    contains_any(text, &["startup", "investor", "pitch"])
}

fn has_minimal_pattern(text: &str) -> bool {
    contains_any(text, &["minimal", "quick", "mvp", "simple"])
}

fn has_agile_pattern(text: &str) -> bool {
    contains_any(text, &["agile", "scrum", "sprint", "user story"])
}

fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrum_requirement_selects_agile() {
        assert_eq!(
            select_template("Build a scrum-based todo app with sprints"),
            TemplateId::Agile
        );
    }

    #[test]
    fn formal_requirement_selects_ieee() {
        assert_eq!(
            select_template("Formal academic IEEE documentation needed for a payroll system"),
            TemplateId::Ieee
        );
    }

    #[test]
    fn ieee_beats_agile() {
        assert_eq!(
            select_template("An agile team needs an IEEE compliant spec"),
            TemplateId::Ieee
        );
    }

    #[test]
    fn startup_beats_minimal() {
        assert_eq!(
            select_template("A simple MVP for our investor pitch"),
            TemplateId::Startup
        );
    }

    #[test]
    fn minimal_keywords() {
        for req in ["a quick tool", "an MVP", "something SIMPLE", "minimal crm"] {
            assert_eq!(select_template(req), TemplateId::Minimal, "{req}");
        }
    }

    #[test]
    fn user_story_phrase_selects_agile() {
        assert_eq!(
            select_template("Write it as a User Story backlog"),
            TemplateId::Agile
        );
    }

    #[test]
    fn no_keywords_defaults_to_agile() {
        assert_eq!(select_template("An e-commerce site for crafts"), TemplateId::Agile);
        assert_eq!(select_template(""), TemplateId::Agile);
    }

    #[test]
    fn substring_matching_is_not_word_bounded() {
        // "simpler" contains "simple"
        assert_eq!(select_template("make it simpler"), TemplateId::Minimal);
    }

    #[test]
    fn selection_is_deterministic() {
        let req = "Startup pitch for a formal banking product";
        let first = select_template(req);
        for _ in 0..10 {
            assert_eq!(select_template(req), first);
        }
        assert_eq!(first, TemplateId::Ieee);
    }
}
