//! Plan section generators.
//!
//! Each generator is independent and reads only what it needs from the
//! record or its derived tags. Sections that never vary are constants.

use std::collections::BTreeSet;

use super::resolver::{ChangeType, DependencyNeed};
use crate::session::{Complexity, Metadata};

pub const SUCCESS_CRITERIA: &str = "- Feature functions as specified\n- All tests pass\n- Code reviewed and approved\n- Documentation updated\n- No performance degradation";

pub const DESIGN_DECISIONS: &str =
    "Key design decisions will be documented as they are made during implementation.";

pub const ALTERNATIVES: &str = "To be documented during implementation";

pub const FILES_TO_DELETE: &str = "None specified";

pub const INSTALL_COMMANDS: &str = "# To be added when specific packages are identified\nnpm install <package-name>\n# or\npip install <package-name>";

pub const API_FORMATS: &str = "To be defined during implementation";

pub const DATA_INTEGRITY: &str = "Ensure referential integrity and data validation";

pub const MANUAL_TESTING: &str = "1. Test happy path scenarios\n2. Test error conditions\n3. Test edge cases\n4. Verify UI/UX meets requirements\n5. Cross-browser/device testing if applicable";

pub const EDGE_CASES: &str = "- Empty/null inputs\n- Maximum/minimum values\n- Concurrent operations\n- Network failures\n- Invalid data formats";

pub const MITIGATION: &str = "- Thorough testing at each stage\n- Code review by experienced team members\n- Incremental rollout if possible\n- Monitor key metrics after deployment";

pub const EFFORT_BREAKDOWN: &str = "- Design & Planning: 10%\n- Implementation: 50%\n- Testing: 25%\n- Documentation & Review: 15%";

pub const CRITICAL_PATH: &str = "Critical path items will be identified during implementation";

pub const ROLLBACK_STEPS: &str = "1. Revert code changes via git\n2. Redeploy previous version\n3. Verify functionality restored\n4. Investigate and fix issues before retry";

pub const MONITORING: &str = "Add appropriate logging and monitoring for the new functionality";

const NO_DATABASE_CHANGES: &str = "N/A - No database changes";

/// One bullet per detected change type, always in Frontend, Backend,
/// Database order whatever order the answers were given in.
pub fn architecture_overview(changes: &BTreeSet<ChangeType>) -> String {
    let parts: Vec<&str> = changes
        .iter()
        .filter_map(|change| match change {
            ChangeType::Ui => Some("- Frontend: React/TypeScript components"),
            ChangeType::Backend => Some("- Backend: API endpoints with proper error handling"),
            ChangeType::Database => Some("- Database: Schema changes with migration strategy"),
            ChangeType::Other => None,
        })
        .collect();

    if parts.is_empty() {
        "To be defined during implementation".to_string()
    } else {
        parts.join("\n")
    }
}

/// New or modified API endpoints.
pub fn endpoints(changes: &BTreeSet<ChangeType>) -> String {
    if changes.contains(&ChangeType::Backend) {
        "API endpoints will be defined during implementation".to_string()
    } else {
        "N/A - No API changes".to_string()
    }
}

pub fn schema_changes(changes: &BTreeSet<ChangeType>) -> String {
    if changes.contains(&ChangeType::Database) {
        "Database schema changes will be defined during implementation".to_string()
    } else {
        NO_DATABASE_CHANGES.to_string()
    }
}

pub fn migration_strategy(changes: &BTreeSet<ChangeType>) -> String {
    if changes.contains(&ChangeType::Database) {
        "1. Create migration script\n2. Test on development database\n3. Run on staging\n4. Backup production before migration\n5. Run on production with rollback plan ready".to_string()
    } else {
        NO_DATABASE_CHANGES.to_string()
    }
}

pub fn db_rollback(changes: &BTreeSet<ChangeType>) -> String {
    if changes.contains(&ChangeType::Database) {
        "1. Have rollback migration ready\n2. Test rollback on staging first\n3. Backup data before rollback\n4. Execute rollback migration\n5. Verify data integrity".to_string()
    } else {
        NO_DATABASE_CHANGES.to_string()
    }
}

pub fn new_dependencies(needs: &BTreeSet<DependencyNeed>) -> String {
    if needs.contains(&DependencyNeed::NewPackages) {
        "New packages to be identified during implementation".to_string()
    } else {
        "No new dependencies required".to_string()
    }
}

/// One bullet per blocking dependency.
pub fn blockers(needs: &BTreeSet<DependencyNeed>) -> String {
    let mut blockers = Vec::new();

    if needs.contains(&DependencyNeed::OtherFeatures) {
        blockers.push("- Dependent features must be completed first");
    }
    if needs.contains(&DependencyNeed::ExternalService) {
        blockers.push("- External service integration and approval needed");
    }
    if blockers.is_empty() {
        blockers.push("- No major blockers identified");
    }

    blockers.join("\n")
}

pub fn technical_risks(complexity: &Complexity) -> String {
    if complexity.is_high() {
        "- Complexity may lead to longer development time\n- Integration challenges with existing systems\n- Potential performance impact".to_string()
    } else {
        "- Minimal technical risk for this change".to_string()
    }
}

pub fn time_estimate(complexity: &Complexity) -> String {
    match complexity {
        Complexity::Simple => "1-2 hours",
        Complexity::Medium => "4-8 hours (0.5-1 day)",
        Complexity::Complex => "1-3 days",
        Complexity::VeryComplex => "1-2 weeks",
        Complexity::Unknown(_) => "To be estimated",
    }
    .to_string()
}

/// Pinned versions from the detected tech stack.
pub fn version_requirements(metadata: &Metadata) -> String {
    match metadata.tech_stack.as_deref() {
        Some(stack) if !stack.is_empty() => {
            stack.iter().map(|tech| format!("- {tech}")).collect::<Vec<_>>().join("\n")
        }
        _ => "Use versions specified in package.json / requirements.txt".to_string(),
    }
}

pub fn additional_notes(metadata: &Metadata) -> String {
    let mut notes = Vec::new();

    if let Some(stack) = &metadata.tech_stack {
        notes.push(format!("**Tech Stack**: {}", stack.join(", ")));
    }
    if let Some(patterns) = &metadata.detected_patterns {
        notes.push(format!("**Detected Patterns**: {}", patterns.join(", ")));
    }

    if notes.is_empty() {
        "No additional notes".to_string()
    } else {
        notes.join("\n\n")
    }
}

/// "Files to create ..." / "Files to modify ..." boilerplate.
pub fn file_changes(action: &str) -> String {
    format!(
        "Files to {action} will be identified during implementation based on the specific requirements."
    )
}

pub fn test_strategy(kind: &str) -> String {
    format!("Write comprehensive {kind} tests for all new functionality")
}

/// Capitalize the first letter of each alphabetic run and lowercase the rest,
/// so `very_complex` becomes `Very_Complex`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(changes: &[ChangeType]) -> BTreeSet<ChangeType> {
        changes.iter().copied().collect()
    }

    #[test]
    fn test_architecture_overview_ui_only() {
        assert_eq!(
            architecture_overview(&tags(&[ChangeType::Ui])),
            "- Frontend: React/TypeScript components"
        );
    }

    #[test]
    fn test_architecture_overview_multiple() {
        let overview = architecture_overview(&tags(&[ChangeType::Database, ChangeType::Backend]));
        assert_eq!(
            overview,
            "- Backend: API endpoints with proper error handling\n- Database: Schema changes with migration strategy"
        );
    }

    #[test]
    fn test_architecture_overview_empty() {
        assert_eq!(architecture_overview(&tags(&[])), "To be defined during implementation");
        assert_eq!(
            architecture_overview(&tags(&[ChangeType::Other])),
            "To be defined during implementation"
        );
    }

    #[test]
    fn test_backend_sections() {
        assert_eq!(
            endpoints(&tags(&[ChangeType::Backend])),
            "API endpoints will be defined during implementation"
        );
        assert_eq!(endpoints(&tags(&[ChangeType::Ui])), "N/A - No API changes");
    }

    #[test]
    fn test_database_sections() {
        let db = tags(&[ChangeType::Database]);
        assert!(schema_changes(&db).starts_with("Database schema changes"));
        assert!(migration_strategy(&db).starts_with("1. Create migration script"));
        assert_eq!(migration_strategy(&db).lines().count(), 5);
        assert!(db_rollback(&db).ends_with("5. Verify data integrity"));

        let none = tags(&[ChangeType::Ui]);
        assert_eq!(schema_changes(&none), "N/A - No database changes");
        assert_eq!(migration_strategy(&none), "N/A - No database changes");
        assert_eq!(db_rollback(&none), "N/A - No database changes");
    }

    #[test]
    fn test_dependencies_and_blockers() {
        let needs: BTreeSet<_> =
            [DependencyNeed::NewPackages, DependencyNeed::ExternalService].into_iter().collect();
        assert_eq!(new_dependencies(&needs), "New packages to be identified during implementation");
        assert_eq!(blockers(&needs), "- External service integration and approval needed");

        let needs: BTreeSet<_> =
            [DependencyNeed::OtherFeatures, DependencyNeed::ExternalService].into_iter().collect();
        assert_eq!(
            blockers(&needs),
            "- Dependent features must be completed first\n- External service integration and approval needed"
        );

        let empty = BTreeSet::new();
        assert_eq!(new_dependencies(&empty), "No new dependencies required");
        assert_eq!(blockers(&empty), "- No major blockers identified");
    }

    #[test]
    fn test_technical_risks() {
        assert_eq!(technical_risks(&Complexity::VeryComplex).lines().count(), 3);
        assert_eq!(technical_risks(&Complexity::Complex).lines().count(), 3);
        assert_eq!(technical_risks(&Complexity::Simple), "- Minimal technical risk for this change");
    }

    #[test]
    fn test_time_estimate_table() {
        assert_eq!(time_estimate(&Complexity::Simple), "1-2 hours");
        assert_eq!(time_estimate(&Complexity::Medium), "4-8 hours (0.5-1 day)");
        assert_eq!(time_estimate(&Complexity::Complex), "1-3 days");
        assert_eq!(time_estimate(&Complexity::VeryComplex), "1-2 weeks");
        assert_eq!(time_estimate(&Complexity::from("unknown")), "To be estimated");
    }

    #[test]
    fn test_additional_notes() {
        let mut metadata = Metadata::default();
        assert_eq!(additional_notes(&metadata), "No additional notes");

        metadata.tech_stack = Some(vec!["Rust".to_string(), "React".to_string()]);
        assert_eq!(additional_notes(&metadata), "**Tech Stack**: Rust, React");

        metadata.detected_patterns = Some(vec!["monorepo".to_string()]);
        assert_eq!(
            additional_notes(&metadata),
            "**Tech Stack**: Rust, React\n\n**Detected Patterns**: monorepo"
        );
    }

    #[test]
    fn test_version_requirements() {
        let mut metadata = Metadata::default();
        assert_eq!(
            version_requirements(&metadata),
            "Use versions specified in package.json / requirements.txt"
        );
        metadata.tech_stack = Some(vec!["Python".to_string(), "JavaScript".to_string()]);
        assert_eq!(version_requirements(&metadata), "- Python\n- JavaScript");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("feature"), "Feature");
        assert_eq!(title_case("very_complex"), "Very_Complex");
        assert_eq!(title_case("BUGFIX"), "Bugfix");
        assert_eq!(title_case(""), "");
    }
}
