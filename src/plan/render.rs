//! Template rendering.
//!
//! Templates are plain text with `{{UPPER_SNAKE_CASE}}` placeholder tokens.
//! Rendering is a single left-to-right pass: substituted values are never
//! rescanned, and tokens without a value are kept verbatim.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").unwrap());

/// Render `template`, replacing every `{{NAME}}` whose `NAME` is a key in
/// `values`.
pub fn render(template: &str, values: &HashMap<String, String>) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names found in a template, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in TOKEN.captures_iter(template) {
        let name = caps[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

macro_rules! define_placeholders {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A placeholder recognized by the technical plan template.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Placeholder {
            $($variant),+
        }

        impl Placeholder {
            /// Every recognized placeholder.
            pub const ALL: &'static [Placeholder] = &[$(Placeholder::$variant),+];

            /// Token name without braces, e.g. `TASK_NAME`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Placeholder::$variant => $name),+
                }
            }
        }
    };
}

define_placeholders! {
    TaskName => "TASK_NAME",
    TaskType => "TASK_TYPE",
    Complexity => "COMPLEXITY",
    Timestamp => "TIMESTAMP",
    ProblemDescription => "PROBLEM_DESCRIPTION",
    Motivation => "MOTIVATION",
    SuccessCriteria => "SUCCESS_CRITERIA",
    ArchitectureOverview => "ARCHITECTURE_OVERVIEW",
    DesignDecisions => "DESIGN_DECISIONS",
    Alternatives => "ALTERNATIVES",
    Step1 => "STEP_1",
    Step2 => "STEP_2",
    Step3 => "STEP_3",
    Step4 => "STEP_4",
    Step5 => "STEP_5",
    AdditionalSteps => "ADDITIONAL_STEPS",
    FilesToCreate => "FILES_TO_CREATE",
    FilesToModify => "FILES_TO_MODIFY",
    FilesToDelete => "FILES_TO_DELETE",
    NewDependencies => "NEW_DEPENDENCIES",
    VersionRequirements => "VERSION_REQUIREMENTS",
    InstallCommands => "INSTALL_COMMANDS",
    NewEndpoints => "NEW_ENDPOINTS",
    ModifiedEndpoints => "MODIFIED_ENDPOINTS",
    ApiFormats => "API_FORMATS",
    SchemaChanges => "SCHEMA_CHANGES",
    MigrationStrategy => "MIGRATION_STRATEGY",
    DataIntegrity => "DATA_INTEGRITY",
    UnitTests => "UNIT_TESTS",
    IntegrationTests => "INTEGRATION_TESTS",
    ManualTesting => "MANUAL_TESTING",
    EdgeCases => "EDGE_CASES",
    Blockers => "BLOCKERS",
    TechnicalRisks => "TECHNICAL_RISKS",
    Mitigation => "MITIGATION",
    TimeEstimate => "TIME_ESTIMATE",
    EffortBreakdown => "EFFORT_BREAKDOWN",
    CriticalPath => "CRITICAL_PATH",
    RollbackSteps => "ROLLBACK_STEPS",
    DbRollback => "DB_ROLLBACK",
    Monitoring => "MONITORING",
    AdditionalNotes => "ADDITIONAL_NOTES",
}

impl Placeholder {
    /// The numbered step slots, in order.
    pub const STEPS: [Placeholder; 5] =
        [Self::Step1, Self::Step2, Self::Step3, Self::Step4, Self::Step5];

    /// Look up a placeholder by token name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let out = render("# {{TASK_NAME}}\n\n{{TASK_NAME}} plan", &values(&[("TASK_NAME", "x")]));
        assert_eq!(out, "# x\n\nx plan");
    }

    #[test]
    fn test_unknown_tokens_kept_verbatim() {
        let template = "{{TASK_NAME}} {{UNKNOWN}} {{ALSO_UNKNOWN}}";
        let out = render(template, &values(&[("TASK_NAME", "x")]));
        assert_eq!(out, "x {{UNKNOWN}} {{ALSO_UNKNOWN}}");
    }

    #[test]
    fn test_no_nested_substitution() {
        let out = render(
            "{{A}} / {{B}}",
            &values(&[("A", "{{B}}"), ("B", "value")]),
        );
        assert_eq!(out, "{{B}} / value");
    }

    #[test]
    fn test_non_token_braces_untouched() {
        let template = "{{ lower }} {{lower}} {single} {{}} {{TASK_NAME";
        let out = render(template, &values(&[("lower", "no"), ("TASK_NAME", "no")]));
        assert_eq!(out, template);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(render("a{{X}}b", &values(&[("X", "")])), "ab");
    }

    #[test]
    fn test_placeholders_in_order() {
        let names = placeholders("{{B}} {{A}} {{B}} {{c}}");
        assert_eq!(names, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_placeholder_names() {
        assert_eq!(Placeholder::ALL.len(), 42);
        assert_eq!(Placeholder::TaskName.name(), "TASK_NAME");
        assert_eq!(Placeholder::DbRollback.to_string(), "{{DB_ROLLBACK}}");
        assert_eq!(Placeholder::from_name("STEP_3"), Some(Placeholder::Step3));
        assert_eq!(Placeholder::from_name("NOPE"), None);
    }
}
