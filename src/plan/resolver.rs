//! Answer resolution.
//!
//! Maps stored option ids back to the text the user saw, and tags the
//! answers that drive plan generation with closed sets of categories.
//! Resolution never fails: anything it cannot look up passes through raw.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::session::{Question, QuestionnaireRecord, Response};

/// Question id for the primary goal.
pub const GOAL_QUESTION: &str = "q1";

/// Question id for the kinds of change involved.
pub const CHANGE_TYPE_QUESTION: &str = "q2";

/// Question id for dependency needs.
pub const DEPENDENCY_QUESTION: &str = "q4";

/// A response translated into display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAnswer {
    /// The question was not answered.
    NotSpecified,
    Single(String),
    Multiple(Vec<String>),
}

impl ResolvedAnswer {
    /// Text shown for unanswered questions.
    pub const NOT_SPECIFIED: &'static str = "Not specified";

    /// The resolved labels; empty when not answered.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::NotSpecified => Vec::new(),
            Self::Single(s) => vec![s.as_str()],
            Self::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for ResolvedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSpecified => f.write_str(Self::NOT_SPECIFIED),
            Self::Single(s) => f.write_str(s),
            Self::Multiple(v) => f.write_str(&v.join(", ")),
        }
    }
}

/// Resolve the answer to `question_id` into display text.
///
/// Unknown questions return the raw stored ids; unknown option ids fall back
/// to the id itself. An empty selection counts as not answered.
pub fn resolve(
    questions: &[Question],
    responses: &BTreeMap<String, Response>,
    question_id: &str,
) -> ResolvedAnswer {
    let answer = match responses.get(question_id) {
        None => return ResolvedAnswer::NotSpecified,
        Some(Response::Multiple(ids)) if ids.is_empty() => return ResolvedAnswer::NotSpecified,
        Some(answer) => answer,
    };

    let question = questions.iter().find(|q| q.id == question_id);
    let lookup = |id: &String| -> String {
        question.and_then(|q| q.option_text(id)).map_or_else(|| id.clone(), str::to_string)
    };

    match answer {
        Response::Single(id) => ResolvedAnswer::Single(lookup(id)),
        Response::Multiple(ids) => ResolvedAnswer::Multiple(ids.iter().map(lookup).collect()),
    }
}

/// Resolve an answer from a record.
pub fn resolve_in(record: &QuestionnaireRecord, question_id: &str) -> ResolvedAnswer {
    resolve(&record.questions, &record.responses, question_id)
}

/// Kind of system change a task involves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Ui,
    Backend,
    Database,
    Other,
}

impl ChangeType {
    /// Tag a change-type label.
    ///
    /// Matching is on whole words, case-insensitive, so "UI/Frontend component"
    /// is `Ui` but "Build pipeline" is not. A label may carry several tags.
    pub fn classify(label: &str) -> BTreeSet<Self> {
        let mut tags = BTreeSet::new();
        for word in words(label) {
            match word.as_str() {
                "ui" | "frontend" => {
                    tags.insert(Self::Ui);
                }
                "backend" | "api" => {
                    tags.insert(Self::Backend);
                }
                "database" | "schema" | "db" => {
                    tags.insert(Self::Database);
                }
                _ => {}
            }
        }
        if tags.is_empty() {
            tags.insert(Self::Other);
        }
        tags
    }
}

/// What a task needs from outside its own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DependencyNeed {
    NewPackages,
    OtherFeatures,
    ExternalService,
    Other,
}

impl DependencyNeed {
    /// Tag a dependency label. Underscores read as spaces, so raw option ids
    /// like `new_packages` still match.
    ///
    /// A negated label ("No new packages needed", "Does not depend on other
    /// features") expresses no need and is tagged `Other`.
    pub fn classify(label: &str) -> BTreeSet<Self> {
        let mut tags = BTreeSet::new();
        if words(label).any(|w| NEGATIONS.contains(&w.as_str())) {
            tags.insert(Self::Other);
            return tags;
        }

        let text = label.to_lowercase().replace('_', " ");
        if text.contains("new package") || text.contains("new librar") {
            tags.insert(Self::NewPackages);
        }
        if text.contains("other feature") {
            tags.insert(Self::OtherFeatures);
        }
        if text.contains("external service") {
            tags.insert(Self::ExternalService);
        }
        if tags.is_empty() {
            tags.insert(Self::Other);
        }
        tags
    }
}

/// Change types selected in the record, tagged once.
pub fn change_types(record: &QuestionnaireRecord) -> BTreeSet<ChangeType> {
    resolve_in(record, CHANGE_TYPE_QUESTION)
        .labels()
        .into_iter()
        .flat_map(ChangeType::classify)
        .collect()
}

/// Dependency needs selected in the record.
pub fn dependency_needs(record: &QuestionnaireRecord) -> BTreeSet<DependencyNeed> {
    resolve_in(record, DEPENDENCY_QUESTION)
        .labels()
        .into_iter()
        .flat_map(DependencyNeed::classify)
        .collect()
}

/// Words that turn a dependency label into a statement of no need.
const NEGATIONS: &[&str] = &["no", "not", "none", "without", "doesn", "don", "never"];

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).map(str::to_lowercase)
}
