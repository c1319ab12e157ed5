//! Runtime configuration for expansion and form validation.

use serde::{Deserialize, Serialize};

/// Options for expanding dynamic question groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionOptions {
    /// Template variable holding the lot slug.
    pub lot_variable: String,
    /// Template variable holding the current source item.
    pub item_variable: String,
    /// Text attributes rendered as templates on every expanded question.
    pub text_fields: Vec<String>,
    /// HTML-escape substituted values.
    pub autoescape: bool,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            lot_variable: "lot".to_string(),
            item_variable: "essentialRequirement".to_string(),
            text_fields: vec!["question".to_string(), "hint".to_string()],
            autoescape: true,
        }
    }
}

impl ExpansionOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template variable holding the lot slug.
    pub fn with_lot_variable(mut self, name: impl Into<String>) -> Self {
        self.lot_variable = name.into();
        self
    }

    /// Set the template variable holding the current source item.
    pub fn with_item_variable(mut self, name: impl Into<String>) -> Self {
        self.item_variable = name.into();
        self
    }

    /// Add a text attribute to render.
    pub fn with_text_field(mut self, name: impl Into<String>) -> Self {
        self.text_fields.push(name.into());
        self
    }

    /// Set whether substituted values are HTML-escaped.
    pub fn with_autoescape(mut self, autoescape: bool) -> Self {
        self.autoescape = autoescape;
        self
    }
}

/// Limits for clarification questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarificationLimits {
    /// Maximum length in characters.
    pub max_chars: usize,
    /// Maximum number of whitespace-separated words.
    pub max_words: usize,
}

impl Default for ClarificationLimits {
    fn default() -> Self {
        Self {
            max_chars: 5000,
            max_words: 100,
        }
    }
}

impl ClarificationLimits {
    /// Create new limits with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum length in characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Set the maximum number of words.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}

/// Limits for the agreement signer's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerLimits {
    /// Maximum length of the name and role, in characters.
    pub max_chars: usize,
}

impl Default for SignerLimits {
    fn default() -> Self {
        Self { max_chars: 255 }
    }
}

impl SignerLimits {
    /// Set the maximum field length in characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

/// All frontend options, loadable from one JSON document.
///
/// Missing sections and fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub expansion: ExpansionOptions,
    pub clarification: ClarificationLimits,
    pub signer: SignerLimits,
}

impl FrontendConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.expansion.item_variable, "essentialRequirement");
        assert_eq!(config.expansion.text_fields, vec!["question", "hint"]);
        assert!(config.expansion.autoescape);
        assert_eq!(config.clarification.max_chars, 5000);
        assert_eq!(config.clarification.max_words, 100);
        assert_eq!(config.signer.max_chars, 255);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config =
            FrontendConfig::from_json(r#"{"expansion": {"item_variable": "requirement"}, "signer": {}}"#)
                .unwrap();

        assert_eq!(config.expansion.item_variable, "requirement");
        assert_eq!(config.expansion.lot_variable, "lot");
        assert_eq!(config.signer, SignerLimits::default());
    }

    #[test]
    fn builders() {
        let options = ExpansionOptions::new()
            .with_item_variable("item")
            .with_text_field("question_advice");
        assert_eq!(options.item_variable, "item");
        assert_eq!(options.text_fields.len(), 3);
        assert!(!options.clone().with_autoescape(false).autoescape);

        let limits = ClarificationLimits::new().with_max_chars(10).with_max_words(2);
        assert_eq!(limits, ClarificationLimits { max_chars: 10, max_words: 2 });
    }
}
