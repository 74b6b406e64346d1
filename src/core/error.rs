//! Error types for loading records and rendering plans.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors that can occur while reading, writing, or rendering.
///
/// Answers that cannot be resolved are not errors; they degrade to their raw
/// value. Only missing or unreadable resources are fatal.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Requirements record file not found.
    #[error("Requirements file not found: {0}")]
    RecordNotFound(PathBuf),

    /// Template file not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Record could not be parsed as YAML.
    #[error("Malformed requirements record: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
