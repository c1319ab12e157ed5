use serde::{Deserialize, Serialize};

/// A single submitted value for one form widget.
///
/// This is the value stored in a `FlatSubmission` for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// The widget was left empty.
    #[default]
    Null,

    /// A boolean value (from yes/no and checkbox questions).
    Bool(bool),

    /// A string value (from text, textarea and radio questions).
    String(String),
}

impl AnswerValue {
    /// Check if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::String(_) => "String",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<AnswerValue>> From<Option<T>> for AnswerValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<AnswerValue> for serde_json::Value {
    fn from(value: AnswerValue) -> Self {
        match value {
            AnswerValue::Null => Self::Null,
            AnswerValue::Bool(b) => Self::Bool(b),
            AnswerValue::String(s) => Self::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_untagged() {
        let values: Vec<AnswerValue> = serde_json::from_str(r#"[null, true, "Yes"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                AnswerValue::Null,
                AnswerValue::Bool(true),
                AnswerValue::String("Yes".into())
            ]
        );
    }

    #[test]
    fn from_option() {
        assert_eq!(AnswerValue::from(None::<&str>), AnswerValue::Null);
        assert_eq!(AnswerValue::from(Some(false)), AnswerValue::Bool(false));
    }
}
