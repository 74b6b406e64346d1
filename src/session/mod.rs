//! Q&A session records.
//!
//! A session record captures the questions asked while scoping a task, the
//! answers given, and detected project context. Records are stored as YAML
//! and read back to generate plans.

mod schema;
mod store;
mod summary;

pub use schema::{Complexity, Metadata, Question, QuestionOption, QuestionnaireRecord, Response};
pub use store::{load_record, parse_record_str, SessionStore, REQUIREMENTS_FILE};
pub use summary::format_response_summary;
