use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One point-in-time export of application statistics from the data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,

    /// Statistic records per category, e.g. `"interested_suppliers"`, `"services"`.
    #[serde(default)]
    pub data: BTreeMap<String, Vec<Statistic>>,
}

impl Snapshot {
    /// Get the statistics for a category.
    pub fn category(&self, name: &str) -> Option<&[Statistic]> {
        self.data.get(name).map(Vec::as_slice)
    }
}

/// A single statistic record: arbitrary fields plus a `count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statistic {
    fields: Map<String, Value>,
}

impl Statistic {
    /// Get a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The record's `count`, or zero when it is missing or not an integer.
    pub fn count(&self) -> i64 {
        self.get("count").and_then(Value::as_i64).unwrap_or(0)
    }
}

/// Summed counts for one snapshot, one entry per output label.
///
/// Serializes as `{label: count, ..., "created_at": timestamp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub counts: BTreeMap<String, i64>,

    pub created_at: DateTime<Utc>,
}

impl Summary {
    /// Get the count for a label.
    pub fn get(&self, label: &str) -> Option<i64> {
        self.counts.get(label).copied()
    }
}
