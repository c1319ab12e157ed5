use crate::{QuestionId, SourcePath};

/// Error type for expanding and unflattening question groups.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A dynamic group's source path does not point at a list.
    #[error("Cannot resolve '{path}': {reason}")]
    Resolution {
        path: SourcePath,
        reason: Unresolved,
    },

    /// A submitted answer's index is past the end of its group's source list.
    #[error("Answer '{key}' has index {index} but group '{group}' has {len} items")]
    IndexOutOfRange {
        group: QuestionId,
        key: QuestionId,
        index: usize,
        len: usize,
    },

    /// A text field failed to render as a template.
    #[error("Cannot render '{field}' of question '{question}': {source}")]
    Render {
        question: QuestionId,
        field: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ContentError {
    /// Create a resolution error.
    pub fn resolution(path: &SourcePath, reason: Unresolved) -> Self {
        Self::Resolution {
            path: path.clone(),
            reason,
        }
    }

    /// Create a render error from any error type.
    pub fn render(question: &QuestionId, field: &str, err: impl Into<anyhow::Error>) -> Self {
        Self::Render {
            question: question.clone(),
            field: field.to_string(),
            source: err.into(),
        }
    }

    /// Check if this error is a source path that did not resolve.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution { .. })
    }

    /// Check if this error is an answer index past the end of its source list.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Why a source path did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unresolved {
    #[error("path is empty")]
    EmptyPath,

    #[error("no record named '{0}'")]
    MissingRecord(String),

    #[error("no key '{0}'")]
    MissingKey(String),

    #[error("'{0}' is not an object")]
    NotAnObject(String),

    #[error("value is {0}, not a list")]
    NotAList(&'static str),
}
