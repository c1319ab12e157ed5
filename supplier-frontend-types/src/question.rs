use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{QuestionId, SourcePath};

/// The content type tag that marks a question group.
pub const MULTIQUESTION_TYPE: &str = "multiquestion";

/// A single question template from the content service.
///
/// Attributes this crate does not interpret (validation rules, options,
/// `question_advice`, ...) are kept in `extra` and copied verbatim wherever
/// the question is copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawQuestion", into = "RawQuestion")]
pub struct Question {
    /// The identifier of this question's form widget.
    id: QuestionId,

    /// The prompt text shown to the supplier.
    question: Option<String>,

    /// Optional hint shown under the prompt.
    hint: Option<String>,

    /// The question revealed when this one is answered a certain way.
    followup: Option<QuestionId>,

    /// The kind of question (plain widget or group).
    kind: QuestionKind,

    /// Every other attribute, untouched.
    extra: Map<String, Value>,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<QuestionId>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            question: None,
            hint: None,
            followup: None,
            kind,
            extra: Map::new(),
        }
    }

    /// Create a plain question with the given content type, e.g. `"boolean"`.
    pub fn ordinary(id: impl Into<QuestionId>, tag: impl Into<String>) -> Self {
        Self::new(id, QuestionKind::Ordinary(Some(tag.into())))
    }

    /// Create a question group.
    pub fn multiquestion(id: impl Into<QuestionId>, group: MultiQuestion) -> Self {
        Self::new(id, QuestionKind::Multiquestion(group))
    }

    /// Set the prompt text.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Set the hint text.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the followup question id.
    pub fn with_followup(mut self, followup: impl Into<QuestionId>) -> Self {
        self.followup = Some(followup.into());
        self
    }

    /// Set an uninterpreted attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Get the identifier.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Replace the identifier.
    pub fn set_id(&mut self, id: impl Into<QuestionId>) {
        self.id = id.into();
    }

    /// Get the prompt text.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Get the hint text.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Get the followup question id.
    pub fn followup(&self) -> Option<&QuestionId> {
        self.followup.as_ref()
    }

    /// Replace the followup question id.
    pub fn set_followup(&mut self, followup: impl Into<QuestionId>) {
        self.followup = Some(followup.into());
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get an uninterpreted attribute.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Get a text attribute by name.
    ///
    /// `question` and `hint` are the typed fields; any other name is looked
    /// up among the uninterpreted attributes and must hold a string.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "question" => self.question(),
            "hint" => self.hint(),
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }

    /// Replace a text attribute by name.
    pub fn set_text_field(&mut self, name: &str, text: String) {
        match name {
            "question" => self.question = Some(text),
            "hint" => self.hint = Some(text),
            other => {
                self.extra.insert(other.to_string(), Value::String(text));
            }
        }
    }

    /// Check if this is a group whose nested questions repeat per source item.
    pub fn is_dynamic(&self) -> bool {
        self.dynamic_field().is_some()
    }

    /// The source path driving expansion, if this is a dynamic group.
    pub fn dynamic_field(&self) -> Option<&SourcePath> {
        match &self.kind {
            QuestionKind::Multiquestion(group) => group.dynamic_field.as_ref(),
            QuestionKind::Ordinary(_) => None,
        }
    }

    /// The nested questions of a group, or an empty slice for plain questions.
    pub fn nested_questions(&self) -> &[Question] {
        match &self.kind {
            QuestionKind::Multiquestion(group) => group.questions(),
            QuestionKind::Ordinary(_) => &[],
        }
    }

    /// A copy of this group with its nested questions replaced.
    ///
    /// Plain questions are returned unchanged.
    pub fn with_nested_questions(&self, questions: Vec<Question>) -> Self {
        let mut copy = self.clone();
        if let QuestionKind::Multiquestion(group) = &mut copy.kind {
            group.questions = questions;
        }
        copy
    }
}

/// The kind of question.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// A single widget, carrying its content type tag (`"boolean"`, `"text"`, ...).
    Ordinary(Option<String>),

    /// A group of questions answered together.
    Multiquestion(MultiQuestion),
}

impl QuestionKind {
    /// Check if this is a group.
    pub fn is_multiquestion(&self) -> bool {
        matches!(self, Self::Multiquestion(_))
    }

    /// The content type tag.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Ordinary(tag) => tag.as_deref(),
            Self::Multiquestion(_) => Some(MULTIQUESTION_TYPE),
        }
    }
}

/// Configuration for a question group.
///
/// A group with a `dynamic_field` is expanded into one copy of its nested
/// questions per item of the list that field points to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiQuestion {
    /// The nested question templates, in display order.
    pub questions: Vec<Question>,

    /// Where the list driving expansion lives, e.g. `brief.essentialRequirements`.
    pub dynamic_field: Option<SourcePath>,
}

impl MultiQuestion {
    /// Create a static group.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            dynamic_field: None,
        }
    }

    /// Create a dynamic group driven by the list at `dynamic_field`.
    pub fn dynamic(questions: Vec<Question>, dynamic_field: impl Into<SourcePath>) -> Self {
        Self {
            questions,
            dynamic_field: Some(dynamic_field.into()),
        }
    }

    /// Get the nested questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// The wire shape of a question in content JSON.
#[derive(Serialize, Deserialize)]
struct RawQuestion {
    id: QuestionId,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    question: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    followup: Option<QuestionId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    dynamic_field: Option<SourcePath>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    questions: Vec<Question>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let kind = if raw.kind.as_deref() == Some(MULTIQUESTION_TYPE) {
            QuestionKind::Multiquestion(MultiQuestion {
                questions: raw.questions,
                dynamic_field: raw.dynamic_field,
            })
        } else {
            QuestionKind::Ordinary(raw.kind)
        };

        Self {
            id: raw.id,
            question: raw.question,
            hint: raw.hint,
            followup: raw.followup,
            kind,
            extra: raw.extra,
        }
    }
}

impl From<Question> for RawQuestion {
    fn from(question: Question) -> Self {
        let (kind, questions, dynamic_field) = match question.kind {
            QuestionKind::Ordinary(tag) => (tag, Vec::new(), None),
            QuestionKind::Multiquestion(group) => (
                Some(MULTIQUESTION_TYPE.to_string()),
                group.questions,
                group.dynamic_field,
            ),
        };

        Self {
            id: question.id,
            kind,
            question: question.question,
            hint: question.hint,
            followup: question.followup,
            dynamic_field,
            questions,
            extra: question.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn requirements_group() -> Value {
        json!({
            "id": "niceToHaveRequirementsMultiquestion",
            "type": "multiquestion",
            "question": "Nice-to-have skills and experience",
            "dynamic_field": "brief.niceToHaveRequirements",
            "questions": [
                {"id": "yesno", "type": "boolean", "question": "{{ essentialRequirement }}", "followup": "evidence"},
                {"id": "evidence", "type": "textbox_large", "hint": "For {{ lot }}", "max_length_in_words": 100}
            ]
        })
    }

    #[test]
    fn deserializes_dynamic_group() {
        let group: Question = serde_json::from_value(requirements_group()).unwrap();

        assert!(group.is_dynamic());
        assert!(group.kind().is_multiquestion());
        assert_eq!(
            group.dynamic_field().map(SourcePath::as_str),
            Some("brief.niceToHaveRequirements")
        );

        let nested = group.nested_questions();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].followup(), Some(&QuestionId::new("evidence")));
        assert_eq!(nested[1].hint(), Some("For {{ lot }}"));
        assert_eq!(nested[1].extra("max_length_in_words"), Some(&json!(100)));
    }

    #[test]
    fn static_group_is_not_dynamic() {
        let group: Question = serde_json::from_value(json!({
            "id": "contact",
            "type": "multiquestion",
            "questions": [{"id": "email", "type": "text"}]
        }))
        .unwrap();

        assert!(group.kind().is_multiquestion());
        assert!(!group.is_dynamic());
    }

    #[test]
    fn dynamic_field_on_plain_question_is_ignored() {
        let question: Question = serde_json::from_value(json!({
            "id": "email",
            "type": "text",
            "dynamic_field": "brief.items"
        }))
        .unwrap();

        assert!(!question.is_dynamic());
        assert_eq!(question.kind().tag(), Some("text"));
    }

    #[test]
    fn serializes_back_to_content_shape() {
        let group: Question = serde_json::from_value(requirements_group()).unwrap();
        assert_eq!(serde_json::to_value(&group).unwrap(), requirements_group());
    }

    #[test]
    fn text_fields_by_name() {
        let mut question = Question::ordinary("yesno", "boolean")
            .with_question("Can you?")
            .with_extra("question_advice", "Be honest");

        assert_eq!(question.text_field("question"), Some("Can you?"));
        assert_eq!(question.text_field("hint"), None);
        assert_eq!(question.text_field("question_advice"), Some("Be honest"));

        question.set_text_field("hint", "A hint".to_string());
        assert_eq!(question.hint(), Some("A hint"));
    }

    #[test]
    fn with_nested_questions_leaves_original_untouched() {
        let group = Question::multiquestion(
            "group",
            MultiQuestion::dynamic(vec![Question::ordinary("yesno", "boolean")], "brief.items"),
        );

        let copy = group.with_nested_questions(Vec::new());

        assert_eq!(group.nested_questions().len(), 1);
        assert!(copy.nested_questions().is_empty());
        assert!(copy.is_dynamic());
    }
}
