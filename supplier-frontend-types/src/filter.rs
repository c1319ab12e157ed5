use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Statistic;

/// A test applied to one field of a statistic.
///
/// In JSON a list is a membership test and anything else an equality test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Criterion {
    /// The field must equal one of these values.
    AnyOf(Vec<Value>),

    /// The field must equal this value.
    Equals(Value),
}

impl Criterion {
    /// Check a field value against this criterion. A missing field never matches.
    pub fn matches(&self, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Self::AnyOf(accepted) => accepted.contains(value),
            Self::Equals(expected) => expected == value,
        }
    }
}

impl From<Value> for Criterion {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => Self::AnyOf(values),
            other => Self::Equals(other),
        }
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Self::Equals(Value::from(value))
    }
}

impl From<Vec<&str>> for Criterion {
    fn from(values: Vec<&str>) -> Self {
        Self::AnyOf(values.into_iter().map(Value::from).collect())
    }
}

/// A conjunction of criteria keyed by statistic field name.
///
/// An empty filter matches every statistic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter {
    criteria: BTreeMap<String, Criterion>,
}

impl Filter {
    /// Create a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion on a field.
    pub fn with(mut self, field: impl Into<String>, criterion: impl Into<Criterion>) -> Self {
        self.criteria.insert(field.into(), criterion.into());
        self
    }

    /// Check if the filter has no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Check a statistic against every criterion.
    pub fn matches(&self, statistic: &Statistic) -> bool {
        self.criteria
            .iter()
            .all(|(field, criterion)| criterion.matches(statistic.get(field)))
    }
}

/// Output labels and the filter whose matching counts are summed under each.
pub type Groupings = BTreeMap<String, Filter>;
