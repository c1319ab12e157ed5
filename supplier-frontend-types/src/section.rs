use serde::{Deserialize, Serialize};

use crate::Question;

/// A page of questions from a content manifest.
///
/// Sections are templates: the expander never changes one in place, it
/// builds a new section with the dynamic groups filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// The section slug, e.g. `"apply-for-opportunity"`.
    pub id: String,

    /// The section heading.
    pub name: String,

    /// Optional introductory text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// All questions on the page (may contain groups).
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Section {
    /// Create a new section with the given questions.
    pub fn new(id: impl Into<String>, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            questions,
        }
    }

    /// Set the heading.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over the dynamic groups on this page.
    pub fn dynamic_groups(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|question| question.is_dynamic())
    }

    /// Check if the section has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of top-level questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_manifest_section() {
        let section: Section = serde_json::from_value(json!({
            "id": "apply",
            "name": "Apply for opportunity",
            "questions": [
                {"id": "respondToEmailAddress", "type": "text"},
                {
                    "id": "essentialRequirements",
                    "type": "multiquestion",
                    "dynamic_field": "brief.essentialRequirements",
                    "questions": [{"id": "yesno", "type": "boolean"}]
                }
            ]
        }))
        .unwrap();

        assert_eq!(section.len(), 2);
        assert_eq!(section.description, None);
        let groups: Vec<_> = section.dynamic_groups().map(|q| q.id().as_str()).collect();
        assert_eq!(groups, vec!["essentialRequirements"]);
    }

    #[test]
    fn with_name() {
        let section = Section::new("apply", "Apply for opportunity", Vec::new()).with_name("Apply");
        assert_eq!(section.name, "Apply");
        assert!(section.is_empty());
    }
}
