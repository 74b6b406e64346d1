//! Plan generation.
//!
//! Builds the placeholder values for a record and renders them into a
//! technical plan template.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::render::{render, Placeholder};
use super::resolver::{change_types, dependency_needs, resolve_in, GOAL_QUESTION};
use super::sections;
use super::steps::{additional_steps, plan_steps, slot};
use crate::core::{Clock, PlannerError, PlannerResult, SystemClock};
use crate::session::{load_record, QuestionnaireRecord};

/// The bundled technical plan template.
pub const TECHNICAL_PLAN_TEMPLATE: &str = include_str!("../../templates/TECHNICAL_PLAN.md");

/// Renders implementation plans from requirements records.
pub struct PlanGenerator {
    clock: Box<dyn Clock>,
}

impl PlanGenerator {
    /// Create a generator that stamps undated records with wall-clock time.
    pub fn new() -> Self {
        Self { clock: Box::new(SystemClock) }
    }

    /// Use a specific clock for the default timestamp.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Compute the value of every recognized placeholder for `record`.
    pub fn values(&self, record: &QuestionnaireRecord) -> HashMap<String, String> {
        let task_name = record.task_name();
        let complexity = record.complexity();
        let timestamp = record.timestamp.clone().unwrap_or_else(|| self.clock.now_iso());
        let goal = resolve_in(record, GOAL_QUESTION);
        let changes = change_types(record);
        let needs = dependency_needs(record);
        let steps = plan_steps(record);

        tracing::debug!(
            task = task_name,
            complexity = %complexity,
            changes = ?changes,
            steps = steps.len(),
            "Derived plan inputs"
        );

        let mut values: HashMap<String, String> = [
            (Placeholder::TaskName, task_name.to_string()),
            (Placeholder::TaskType, sections::title_case(record.task_type())),
            (Placeholder::Complexity, sections::title_case(complexity.as_str())),
            (Placeholder::Timestamp, timestamp),
            (Placeholder::ProblemDescription, format!("Implement {task_name} to address: {goal}")),
            (Placeholder::Motivation, format!("Primary goal: {goal}")),
            (Placeholder::SuccessCriteria, sections::SUCCESS_CRITERIA.to_string()),
            (Placeholder::ArchitectureOverview, sections::architecture_overview(&changes)),
            (Placeholder::DesignDecisions, sections::DESIGN_DECISIONS.to_string()),
            (Placeholder::Alternatives, sections::ALTERNATIVES.to_string()),
            (Placeholder::AdditionalSteps, additional_steps(&steps)),
            (Placeholder::FilesToCreate, sections::file_changes("create")),
            (Placeholder::FilesToModify, sections::file_changes("modify")),
            (Placeholder::FilesToDelete, sections::FILES_TO_DELETE.to_string()),
            (Placeholder::NewDependencies, sections::new_dependencies(&needs)),
            (Placeholder::VersionRequirements, sections::version_requirements(&record.metadata)),
            (Placeholder::InstallCommands, sections::INSTALL_COMMANDS.to_string()),
            (Placeholder::NewEndpoints, sections::endpoints(&changes)),
            (Placeholder::ModifiedEndpoints, sections::endpoints(&changes)),
            (Placeholder::ApiFormats, sections::API_FORMATS.to_string()),
            (Placeholder::SchemaChanges, sections::schema_changes(&changes)),
            (Placeholder::MigrationStrategy, sections::migration_strategy(&changes)),
            (Placeholder::DataIntegrity, sections::DATA_INTEGRITY.to_string()),
            (Placeholder::UnitTests, sections::test_strategy("unit")),
            (Placeholder::IntegrationTests, sections::test_strategy("integration")),
            (Placeholder::ManualTesting, sections::MANUAL_TESTING.to_string()),
            (Placeholder::EdgeCases, sections::EDGE_CASES.to_string()),
            (Placeholder::Blockers, sections::blockers(&needs)),
            (Placeholder::TechnicalRisks, sections::technical_risks(&complexity)),
            (Placeholder::Mitigation, sections::MITIGATION.to_string()),
            (Placeholder::TimeEstimate, sections::time_estimate(&complexity)),
            (Placeholder::EffortBreakdown, sections::EFFORT_BREAKDOWN.to_string()),
            (Placeholder::CriticalPath, sections::CRITICAL_PATH.to_string()),
            (Placeholder::RollbackSteps, sections::ROLLBACK_STEPS.to_string()),
            (Placeholder::DbRollback, sections::db_rollback(&changes)),
            (Placeholder::Monitoring, sections::MONITORING.to_string()),
            (Placeholder::AdditionalNotes, sections::additional_notes(&record.metadata)),
        ]
        .into_iter()
        .map(|(placeholder, value)| (placeholder.name().to_string(), value))
        .collect();

        for (i, placeholder) in Placeholder::STEPS.iter().enumerate() {
            let text = slot(&steps, i).unwrap_or_default();
            values.insert(placeholder.name().to_string(), text.to_string());
        }

        values
    }

    /// Fill `template` with values derived from `record`.
    pub fn fill(&self, template: &str, record: &QuestionnaireRecord) -> String {
        render(template, &self.values(record))
    }

    /// Generate a plan file from a requirements file.
    ///
    /// Uses the bundled template when `template_path` is `None`. Parent
    /// directories of `output_path` are created as needed. Returns the path
    /// written.
    pub fn generate(
        &self,
        record_path: &Path,
        output_path: &Path,
        template_path: Option<&Path>,
    ) -> PlannerResult<PathBuf> {
        let record = load_record(record_path)?;
        let template = match template_path {
            Some(path) => load_template(path)?,
            None => TECHNICAL_PLAN_TEMPLATE.to_string(),
        };

        let plan = self.fill(&template, &record);

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, plan)?;

        tracing::info!(output = ?output_path, task = record.task_name(), "Generated plan");
        Ok(output_path.to_path_buf())
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a template file.
pub fn load_template(path: &Path) -> PlannerResult<String> {
    if !path.exists() {
        return Err(PlannerError::TemplateNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
