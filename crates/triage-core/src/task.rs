//! Task record type, default filling, and priority tiers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback importance for records that omit it.
pub const DEFAULT_IMPORTANCE: i64 = 5;
/// Fallback effort estimate, in hours, for records that omit it.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

/// A single unit of work flowing through one engine invocation.
///
/// Decoding is deliberately lenient: the required fields are `Option` so a
/// whole batch can be checked and every violation reported together instead
/// of failing on the first malformed element. Input fields the engine does
/// not recognize land in `extra` and ride through to the output untouched.
///
/// Records never outlive an invocation. The engine works on owned copies
/// and hands back new records; caller-supplied data is never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`). Read by the scorer, never
    /// mutated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Unbounded; negative values are accepted and lower the score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    /// Opaque task identifiers, carried through without interpretation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// Computed priority signal; ignored on input, always set on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// Unrecognized input fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskRecord {
    /// Create a record with the two required fields set.
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            due_date: Some(due_date.into()),
            ..Self::default()
        }
    }

    /// Set importance
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Set the effort estimate in hours
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Set dependency identifiers
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = Some(dependencies);
        self
    }

    /// Names of required fields this record is missing, in declaration
    /// order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.due_date.is_none() {
            missing.push("due_date");
        }
        missing
    }

    /// Fill absent optional fields with their fixed fallback values.
    ///
    /// Idempotent: applying it twice yields the same record.
    pub fn with_defaults(mut self) -> Self {
        self.importance.get_or_insert(DEFAULT_IMPORTANCE);
        self.estimated_hours.get_or_insert(DEFAULT_ESTIMATED_HOURS);
        self.dependencies.get_or_insert_with(Vec::new);
        self
    }
}

/// Badge tier derived from a score, for human-readable rendering only;
/// never serialized into the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// Tier boundaries: 80 and above is high, 50 and above is medium.
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}
