//! Human-readable summary of a Q&A session.

use super::{QuestionnaireRecord, Response};
use crate::plan::{resolve_in, ResolvedAnswer};

/// Summarize the record's answers as markdown.
///
/// Answered questions are listed in question order; responses to questions
/// that are not defined in the record are skipped.
pub fn format_response_summary(record: &QuestionnaireRecord) -> String {
    let mut lines = vec![
        format!("# Q&A Summary: {}", record.task_name.as_deref().unwrap_or("Unknown")),
        format!("Type: {}", record.task_type.as_deref().unwrap_or("Unknown")),
        format!(
            "Complexity: {}",
            record.complexity.as_ref().map_or("Unknown", |c| c.as_str())
        ),
        format!("Timestamp: {}", record.timestamp.as_deref().unwrap_or("Unknown")),
        String::new(),
        "## Responses:".to_string(),
    ];

    for question in &record.questions {
        if !record.responses.contains_key(&question.id) {
            continue;
        }

        lines.push(format!("\n**{}**", question.text));
        match (resolve_in(record, &question.id), &record.responses[&question.id]) {
            (ResolvedAnswer::Multiple(labels), Response::Multiple(_)) => {
                lines.extend(labels.iter().map(|label| format!("  - {label}")));
            }
            (answer, _) => lines.push(format!("  → {answer}")),
        }
    }

    lines.join("\n")
}
