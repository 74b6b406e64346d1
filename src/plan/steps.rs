//! Implementation step planning.
//!
//! Produces the ordered checklist of steps for a task. The order is fixed:
//! the renderer places the first five steps in numbered slots and lists the
//! rest under "additional steps".

use std::collections::BTreeSet;

use super::resolver::{change_types, ChangeType};
use crate::session::{Complexity, QuestionnaireRecord};

/// Number of steps rendered into individual `STEP_N` slots.
pub const NUMBERED_SLOTS: usize = 5;

/// Fallback text for each numbered slot when fewer steps exist.
pub const SLOT_FALLBACKS: [&str; NUMBERED_SLOTS] =
    ["Define requirements", "Design solution", "Implement", "Test", "Deploy"];

/// Plan the implementation steps for a record.
pub fn plan_steps(record: &QuestionnaireRecord) -> Vec<String> {
    plan_steps_for(&change_types(record), &record.complexity())
}

/// Plan steps from already-derived change types and complexity.
pub fn plan_steps_for(changes: &BTreeSet<ChangeType>, complexity: &Complexity) -> Vec<String> {
    let mut steps: Vec<&str> = vec!["Review requirements and design approach"];

    if changes.contains(&ChangeType::Ui) {
        steps.extend([
            "Design UI components and user flows",
            "Implement frontend components",
            "Add styling and responsive design",
        ]);
    }

    if changes.contains(&ChangeType::Backend) {
        steps.extend([
            "Design API endpoints and data contracts",
            "Implement backend logic",
            "Add error handling and validation",
        ]);
    }

    if changes.contains(&ChangeType::Database) {
        steps.extend([
            "Design database schema changes",
            "Create migration scripts",
            "Test migration on development environment",
        ]);
    }

    steps.extend(["Write unit tests", "Write integration tests", "Manual testing and QA"]);

    if complexity.is_high() {
        steps.extend(["Performance testing and optimization", "Security review"]);
    }

    steps.extend([
        "Update documentation",
        "Code review and address feedback",
        "Deploy to staging environment",
        "Final testing in staging",
        "Deploy to production",
    ]);

    steps.into_iter().map(str::to_string).collect()
}

/// Text for numbered slot `index` (0-based), falling back when absent.
///
/// `None` past the numbered slots; those steps belong to [`additional_steps`].
pub fn slot(steps: &[String], index: usize) -> Option<&str> {
    let fallback = SLOT_FALLBACKS.get(index)?;
    Some(steps.get(index).map_or(*fallback, String::as_str))
}

/// Checkbox lines for every step past the numbered slots, numbered from 6.
///
/// Empty when there are no more than five steps.
pub fn additional_steps(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .skip(NUMBERED_SLOTS)
        .map(|(i, step)| format!("- [ ] **Step {}**: {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(changes: &[ChangeType], complexity: Complexity) -> Vec<String> {
        plan_steps_for(&changes.iter().copied().collect(), &complexity)
    }

    #[test]
    fn test_minimal_plan() {
        let steps = plan(&[], Complexity::Medium);
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[0], "Review requirements and design approach");
        assert_eq!(steps[1], "Write unit tests");
        assert_eq!(steps.last().unwrap(), "Deploy to production");
    }

    #[test]
    fn test_high_complexity_adds_two_steps() {
        let medium = plan(&[ChangeType::Other], Complexity::Medium);
        let complex = plan(&[ChangeType::Other], Complexity::Complex);
        let very = plan(&[ChangeType::Other], Complexity::VeryComplex);

        assert_eq!(complex.len(), medium.len() + 2);
        assert_eq!(very.len(), medium.len() + 2);
        assert!(very.contains(&"Security review".to_string()));
        assert!(!medium.contains(&"Security review".to_string()));
    }

    #[test]
    fn test_change_type_steps_in_fixed_order() {
        let steps = plan(&[ChangeType::Database, ChangeType::Ui], Complexity::Simple);

        let ui = steps.iter().position(|s| s == "Implement frontend components").unwrap();
        let db = steps.iter().position(|s| s == "Create migration scripts").unwrap();
        assert!(ui < db);
        assert_eq!(steps.len(), 15);
        assert_eq!(steps.first().unwrap(), "Review requirements and design approach");
        assert_eq!(steps.last().unwrap(), "Deploy to production");
    }

    #[test]
    fn test_all_change_types() {
        let steps = plan(
            &[ChangeType::Ui, ChangeType::Backend, ChangeType::Database],
            Complexity::VeryComplex,
        );
        assert_eq!(steps.len(), 20);
        assert_eq!(steps[4], "Design API endpoints and data contracts");
    }

    #[test]
    fn test_slot_fallbacks() {
        let steps = vec!["Only step".to_string()];
        assert_eq!(slot(&steps, 0), Some("Only step"));
        assert_eq!(slot(&steps, 1), Some("Design solution"));
        assert_eq!(slot(&steps, 4), Some("Deploy"));
        assert_eq!(slot(&[], 0), Some("Define requirements"));
    }

    #[test]
    fn test_slot_past_numbered_slots() {
        let steps: Vec<String> = (1..=7).map(|i| format!("s{i}")).collect();
        assert_eq!(slot(&steps, 4), Some("s5"));
        assert_eq!(slot(&steps, NUMBERED_SLOTS), None);
        assert_eq!(slot(&[], 99), None);
    }

    #[test]
    fn test_additional_steps_numbering() {
        let steps: Vec<String> = (1..=7).map(|i| format!("s{i}")).collect();
        assert_eq!(
            additional_steps(&steps),
            "- [ ] **Step 6**: s6\n- [ ] **Step 7**: s7"
        );
        assert_eq!(additional_steps(&steps[..5]), "");
    }
}
