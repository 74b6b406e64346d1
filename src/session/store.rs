//! YAML persistence for requirements records.

use std::path::{Path, PathBuf};

use super::QuestionnaireRecord;
use crate::core::{Clock, PlannerError, PlannerResult, SystemClock};

/// File name used for saved records.
pub const REQUIREMENTS_FILE: &str = "requirements.yaml";

/// Reads and writes [`QuestionnaireRecord`]s.
pub struct SessionStore {
    clock: Box<dyn Clock>,
}

impl SessionStore {
    /// Create a store that stamps records with wall-clock time.
    pub fn new() -> Self {
        Self { clock: Box::new(SystemClock) }
    }

    /// Use a specific clock for timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Save a record to `<dir>/requirements.yaml`, creating `dir` if needed.
    ///
    /// A timestamp is added when the record has none. Returns the saved path.
    pub fn save(&self, record: &QuestionnaireRecord, dir: &Path) -> PlannerResult<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let mut record = record.clone();
        if record.timestamp.is_none() {
            record.timestamp = Some(self.clock.now_iso());
        }

        let path = dir.join(REQUIREMENTS_FILE);
        let content = serde_yaml::to_string(&record)?;
        std::fs::write(&path, content)?;

        tracing::info!(path = ?path, task = record.task_name(), "Saved requirements");
        Ok(path)
    }

    /// Load a record from a YAML file.
    pub fn load(&self, path: &Path) -> PlannerResult<QuestionnaireRecord> {
        load_record(path)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a record from a YAML file.
pub fn load_record(path: &Path) -> PlannerResult<QuestionnaireRecord> {
    if !path.exists() {
        return Err(PlannerError::RecordNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let record = parse_record_str(&content)?;
    tracing::debug!(
        path = ?path,
        questions = record.questions.len(),
        responses = record.responses.len(),
        "Loaded requirements"
    );
    Ok(record)
}

/// Parse a record from a YAML string.
///
/// An empty document yields an empty record.
pub fn parse_record_str(content: &str) -> PlannerResult<QuestionnaireRecord> {
    if content.trim().is_empty() {
        return Ok(QuestionnaireRecord::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::session::{Complexity, Question, QuestionOption, Response};
    use tempfile::TempDir;

    fn sample_record() -> QuestionnaireRecord {
        let mut record = QuestionnaireRecord {
            task_name: Some("example-feature".to_string()),
            task_type: Some("feature".to_string()),
            complexity: Some(Complexity::Medium),
            questions: vec![Question {
                id: "q1".to_string(),
                text: "What is the primary goal?".to_string(),
                allow_multiple: false,
                options: vec![
                    QuestionOption {
                        id: "improve_ux".to_string(),
                        text: "Improve user experience".to_string(),
                    },
                    QuestionOption { id: "fix_bug".to_string(), text: "Fix a bug".to_string() },
                ],
            }],
            ..Default::default()
        };
        record.responses.insert("q1".to_string(), Response::Single("improve_ux".to_string()));
        record.metadata.tech_stack = Some(vec!["Python".to_string(), "JavaScript".to_string()]);
        record
            .metadata
            .extra
            .insert("repository".to_string(), serde_yaml::Value::String("example-repo".to_string()));
        record
    }

    #[test]
    fn test_save_adds_timestamp() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new().with_clock(FixedClock::new("2025-01-15T10:30:00Z"));

        let path = store.save(&sample_record(), dir.path()).unwrap();
        assert_eq!(path, dir.path().join(REQUIREMENTS_FILE));

        let loaded = store.load(&path).unwrap();
        assert_eq!(loaded.timestamp.as_deref(), Some("2025-01-15T10:30:00Z"));
    }

    #[test]
    fn test_save_keeps_existing_timestamp() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new().with_clock(FixedClock::new("2030-01-01T00:00:00Z"));

        let mut record = sample_record();
        record.timestamp = Some("2025-01-15T10:30:00Z".to_string());

        let path = store.save(&record, dir.path()).unwrap();
        let loaded = store.load(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new().with_clock(FixedClock::new("2025-01-15T10:30:00Z"));
        let record = sample_record();

        let path = store.save(&record, dir.path()).unwrap();
        let mut loaded = store.load(&path).unwrap();

        assert!(loaded.timestamp.is_some());
        loaded.timestamp = None;
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_creates_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("implementation-plans").join("example-feature");

        let path = SessionStore::new().save(&sample_record(), &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_record(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(PlannerError::RecordNotFound(_))));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let result = parse_record_str("questions: [unclosed");
        assert!(matches!(result, Err(PlannerError::Yaml(_))));
    }

    #[test]
    fn test_parse_empty_document() {
        let record = parse_record_str("").unwrap();
        assert_eq!(record, QuestionnaireRecord::default());
    }
}
