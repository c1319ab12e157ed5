use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a question or of a rendered form widget, e.g. `"yesno"` or `"yesno-0"`.
///
/// Expanded instances of a dynamic question carry their item index as a
/// `-<index>` suffix on the template's identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The identifier of this question's instance for the item at `index`.
    pub fn indexed(&self, index: usize) -> Self {
        Self::new(format!("{}-{}", self.id, index))
    }

    /// Split an indexed identifier into its template identifier and index.
    ///
    /// Only a trailing `-` followed by ASCII digits counts as an index, so
    /// `"yes-no-3"` splits into `("yes-no", 3)` and `"yes-no"` does not split.
    /// The suffix must be written the way [`QuestionId::indexed`] writes it,
    /// so `"yesno-01"` does not split either. A suffix too large for `usize`
    /// saturates to `usize::MAX`.
    pub fn split_index(&self) -> Option<(&str, usize)> {
        let (base, suffix) = self.id.rsplit_once('-')?;
        if base.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if suffix.len() > 1 && suffix.starts_with('0') {
            return None;
        }
        Some((base, suffix.parse().unwrap_or(usize::MAX)))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl PartialEq<str> for QuestionId {
    fn eq(&self, other: &str) -> bool {
        self.id == other
    }
}

impl PartialEq<&str> for QuestionId {
    fn eq(&self, other: &&str) -> bool {
        self.id == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed() {
        assert_eq!(QuestionId::new("evidence").indexed(2).as_str(), "evidence-2");
    }

    #[test]
    fn split_index() {
        let id = QuestionId::new("yesno-0");
        assert_eq!(id.split_index(), Some(("yesno", 0)));
    }

    #[test]
    fn split_index_keeps_inner_hyphens() {
        let id = QuestionId::new("yes-no-12");
        assert_eq!(id.split_index(), Some(("yes-no", 12)));
    }

    #[test]
    fn split_index_rejects_non_numeric_suffix() {
        assert_eq!(QuestionId::new("respondToEmailAddress").split_index(), None);
        assert_eq!(QuestionId::new("yes-no").split_index(), None);
        assert_eq!(QuestionId::new("yesno-+1").split_index(), None);
        assert_eq!(QuestionId::new("yesno-").split_index(), None);
        assert_eq!(QuestionId::new("-3").split_index(), None);
    }

    #[test]
    fn split_index_rejects_leading_zeros() {
        assert_eq!(QuestionId::new("yesno-01").split_index(), None);
        assert_eq!(QuestionId::new("yesno-00").split_index(), None);
        assert_eq!(QuestionId::new("yesno-0").split_index(), Some(("yesno", 0)));
    }

    #[test]
    fn split_index_saturates_huge_suffix() {
        let id = QuestionId::new("yesno-99999999999999999999999");
        assert_eq!(id.split_index(), Some(("yesno", usize::MAX)));
    }
}
