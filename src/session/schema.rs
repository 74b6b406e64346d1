//! Requirements record schema.
//!
//! Defines the YAML structure written at the end of a Q&A session.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// A completed Q&A session for one task.
///
/// Every top-level field is optional on disk. Accessors supply the defaults
/// used for rendering, so a sparse record still renders a complete plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireRecord {
    /// Task name, usually a slug like `dark-mode-toggle`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,

    /// Task type (`feature`, `bugfix`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,

    /// When the session was recorded (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Estimated complexity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,

    /// Questions asked, in order
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Answers keyed by question id
    #[serde(default, deserialize_with = "responses_map")]
    pub responses: BTreeMap<String, Response>,

    /// Detected project context
    #[serde(default)]
    pub metadata: Metadata,
}

/// A question asked during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question id (`q1`, `q2`, ...)
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,

    /// Question text
    pub text: String,

    /// Whether several options may be chosen
    #[serde(default)]
    pub allow_multiple: bool,

    /// Available options
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Option id, unique within its question
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,

    /// Display text
    pub text: String,
}

/// A stored answer: one option id, or several for multi-select questions.
///
/// Any YAML value is accepted. Numbers and booleans read as their text
/// (`q1: 1` is option id `"1"`) and `null` is an empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Single(String),
    Multiple(Vec<String>),
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Sequence(items) => Self::Multiple(items.into_iter().map(scalar_text).collect()),
            Value::Null => Self::Multiple(Vec::new()),
            other => Self::Single(scalar_text(other)),
        })
    }
}

/// Text form of a YAML value as used for ids and answers.
fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => {
            serde_yaml::to_string(&other).map(|s| s.trim_end().to_string()).unwrap_or_default()
        }
    }
}

/// Question and option ids may be written as numbers or booleans.
fn scalar_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        value @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => Ok(scalar_text(value)),
        other => Err(de::Error::custom(format!("expected a scalar id, found {other:?}"))),
    }
}

/// Response map whose keys may be non-string scalars; `null` is empty.
fn responses_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Response>, D::Error>
where
    D: Deserializer<'de>,
{
    let mapping = Option::<serde_yaml::Mapping>::deserialize(deserializer)?.unwrap_or_default();
    mapping
        .into_iter()
        .map(|(key, value)| {
            let answer = Response::deserialize(value).map_err(<D::Error as de::Error>::custom)?;
            Ok((scalar_text(key), answer))
        })
        .collect()
}

/// Project context captured alongside the answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Languages and frameworks in use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,

    /// Patterns detected in the codebase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_patterns: Option<Vec<String>>,

    /// Any other keys, preserved as-is across save/load
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Task complexity level.
///
/// Ordered `Simple < Medium < Complex < VeryComplex`. Levels outside that set
/// are kept verbatim in `Unknown` so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
    VeryComplex,
    Unknown(String),
}

impl Complexity {
    /// The on-disk name of this level.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
            Self::VeryComplex => "very_complex",
            Self::Unknown(s) => s,
        }
    }

    /// Position in the ordering, `None` for unknown levels.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Simple => Some(0),
            Self::Medium => Some(1),
            Self::Complex => Some(2),
            Self::VeryComplex => Some(3),
            Self::Unknown(_) => None,
        }
    }

    /// `complex` or `very_complex`.
    pub fn is_high(&self) -> bool {
        matches!(self, Self::Complex | Self::VeryComplex)
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::Medium
    }
}

impl From<String> for Complexity {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "simple" => Self::Simple,
            "medium" => Self::Medium,
            "complex" => Self::Complex,
            "very_complex" => Self::VeryComplex,
            _ => Self::Unknown(s),
        }
    }
}

impl From<&str> for Complexity {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Complexity> for String {
    fn from(c: Complexity) -> Self {
        c.as_str().to_string()
    }
}

impl PartialOrd for Complexity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ if self == other => Some(std::cmp::Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QuestionnaireRecord {
    /// Task name, `"Unknown Task"` when absent.
    pub fn task_name(&self) -> &str {
        self.task_name.as_deref().unwrap_or("Unknown Task")
    }

    /// Task type, `"feature"` when absent.
    pub fn task_type(&self) -> &str {
        self.task_type.as_deref().unwrap_or("feature")
    }

    /// Complexity, `medium` when absent.
    pub fn complexity(&self) -> Complexity {
        self.complexity.clone().unwrap_or_default()
    }
}

impl Question {
    /// Display text for an option id, if the option exists.
    pub fn option_text(&self, option_id: &str) -> Option<&str> {
        self.options.iter().find(|o| o.id == option_id).map(|o| o.text.as_str())
    }
}
