//! Validation of clarification questions sent about a brief or framework.

use crate::ClarificationLimits;

/// Why a clarification question was rejected. `Display` gives the message shown to the supplier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClarificationError {
    #[error("Question cannot be empty")]
    Empty,

    #[error("Question cannot be longer than {max} characters")]
    TooLong { max: usize },

    #[error("Question must be no more than {max} words")]
    TooManyWords { max: usize },
}

/// Check a submitted clarification question and return it trimmed.
///
/// Checks run in order: blank, then length in characters, then word count.
pub fn validate_clarification_question(
    raw: &str,
    limits: &ClarificationLimits,
) -> Result<String, ClarificationError> {
    let question = raw.trim();

    if question.is_empty() {
        return Err(ClarificationError::Empty);
    }
    if question.chars().count() > limits.max_chars {
        return Err(ClarificationError::TooLong {
            max: limits.max_chars,
        });
    }
    if question.split_whitespace().count() > limits.max_words {
        return Err(ClarificationError::TooManyWords {
            max: limits.max_words,
        });
    }

    Ok(question.to_string())
}
