use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{AnswerValue, QuestionId};

/// A form submission with one entry per rendered widget, e.g. `yesno-0`, `evidence-1`.
///
/// Keys are kept ordered so that payloads and re-flattened submissions are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatSubmission {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl FlatSubmission {
    /// Create a new empty submission.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Add an answer for a given widget.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.insert(id, value);
        self
    }

    /// Add a string answer.
    pub fn with_string(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, AnswerValue::String(value.into()))
    }

    /// Add a boolean answer.
    pub fn with_bool(self, id: impl Into<QuestionId>, value: bool) -> Self {
        self.with_answer(id, AnswerValue::Bool(value))
    }

    /// Add an empty answer.
    pub fn with_null(self, id: impl Into<QuestionId>) -> Self {
        self.with_answer(id, AnswerValue::Null)
    }

    /// Insert an answer, replacing any previous one for the same widget.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for a widget.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check if an answer exists for a widget.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for a widget.
    pub fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Get an iterator over all widget-answer pairs, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another submission into this one.
    pub fn extend(&mut self, other: FlatSubmission) {
        self.values.extend(other.values);
    }

    /// Convert into a JSON object.
    pub fn into_json(self) -> Map<String, Value> {
        self.values
            .into_iter()
            .map(|(id, value)| (id.to_string(), value.into()))
            .collect()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for FlatSubmission {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FlatSubmission {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::btree_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatSubmission {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = std::collections::btree_map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Answers for dynamic groups, keyed by group id.
///
/// Each group maps to one slot per source item. A slot is `None` when the
/// supplier submitted nothing for that item, otherwise it holds that item's
/// answers under their indexed widget ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedSubmission {
    groups: BTreeMap<QuestionId, Vec<Option<FlatSubmission>>>,
}

impl NestedSubmission {
    /// Create a new empty nested submission.
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Insert the slots for a group.
    pub fn insert(&mut self, group: impl Into<QuestionId>, slots: Vec<Option<FlatSubmission>>) {
        self.groups.insert(group.into(), slots);
    }

    /// Get the slots for a group.
    pub fn get(&self, group: &QuestionId) -> Option<&[Option<FlatSubmission>]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Get an iterator over all groups and their slots.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &[Option<FlatSubmission>])> {
        self.groups.iter().map(|(id, slots)| (id, slots.as_slice()))
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Collapse every answered slot back into one flat submission.
    pub fn flatten(&self) -> FlatSubmission {
        self.groups
            .values()
            .flatten()
            .flatten()
            .flat_map(|slot| slot.iter().map(|(id, value)| (id.clone(), value.clone())))
            .collect()
    }

    /// Convert into a JSON object, with `null` for unanswered slots.
    pub fn into_json(self) -> Map<String, Value> {
        self.groups
            .into_iter()
            .map(|(id, slots)| {
                let slots = slots
                    .into_iter()
                    .map(|slot| slot.map_or(Value::Null, |answers| Value::Object(answers.into_json())))
                    .collect();
                (id.to_string(), Value::Array(slots))
            })
            .collect()
    }
}

/// The result of unflattening a submission.
///
/// `nested` holds the dynamic groups; `remaining` holds every field that did
/// not belong to a dynamic group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnflattenedSubmission {
    pub nested: NestedSubmission,
    pub remaining: FlatSubmission,
}

impl UnflattenedSubmission {
    /// The JSON object sent to the data API: remaining fields plus one list per group.
    ///
    /// A group id that collides with a remaining field replaces that field.
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = self.remaining.clone().into_json();
        payload.extend(self.nested.clone().into_json());
        payload
    }
}
