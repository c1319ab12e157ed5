use std::fmt;

use serde::{Deserialize, Serialize};

/// A dotted reference to a list on an application record, e.g. `"brief.essentialRequirements"`.
///
/// The first segment names a record registered in an `ExpansionContext`; the
/// remaining segments are object keys traversed inside that record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath {
    /// Dot-separated path string, e.g. "brief.essentialRequirements"
    path: String,
}

impl SourcePath {
    /// Create a new path from a dot-separated string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Get the segments of this path as an iterator.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.').filter(|s| !s.is_empty())
    }

    /// Get the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// The record name, i.e. the first segment.
    pub fn record(&self) -> Option<&str> {
        self.segments().next()
    }

    /// The key segments traversed inside the record.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.segments().skip(1)
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for SourcePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SourcePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_keys() {
        let path = SourcePath::new("brief.essentialRequirements");
        assert_eq!(path.record(), Some("brief"));
        assert_eq!(path.keys().collect::<Vec<_>>(), vec!["essentialRequirements"]);
    }

    #[test]
    fn nested_keys() {
        let path = SourcePath::new("application.lot.requirements");
        assert_eq!(path.len(), 3);
        assert_eq!(path.keys().collect::<Vec<_>>(), vec!["lot", "requirements"]);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let path = SourcePath::new("brief..items.");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["brief", "items"]);
    }

    #[test]
    fn empty_path() {
        let path = SourcePath::new("");
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.record(), None);
    }

    #[test]
    fn deserializes_from_plain_string() {
        let path: SourcePath = serde_json::from_str("\"brief.niceToHaveRequirements\"").unwrap();
        assert_eq!(path.as_str(), "brief.niceToHaveRequirements");
    }
}
