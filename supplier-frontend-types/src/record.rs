use std::collections::BTreeMap;

use serde_json::Value;

use crate::{ContentError, SourcePath, Unresolved};

/// Trait for anything that can hand out application records by name.
///
/// Source paths are resolved against a `RecordSource` by explicit traversal:
/// the first segment picks the record, every further segment is an object key.
pub trait RecordSource {
    /// Look up a named record, e.g. `"brief"`.
    fn record(&self, name: &str) -> Option<&Value>;

    /// Resolve a source path to the list it names.
    ///
    /// # Errors
    /// Returns `ContentError::Resolution` when the record or a key is missing,
    /// an intermediate value is not an object, or the final value is not a list.
    fn resolve_list(&self, path: &SourcePath) -> Result<&[Value], ContentError> {
        let name = path
            .record()
            .ok_or_else(|| ContentError::resolution(path, Unresolved::EmptyPath))?;
        let mut current = self
            .record(name)
            .ok_or_else(|| ContentError::resolution(path, Unresolved::MissingRecord(name.into())))?;

        let mut parent = name;
        for key in path.keys() {
            let object = current.as_object().ok_or_else(|| {
                ContentError::resolution(path, Unresolved::NotAnObject(parent.into()))
            })?;
            current = object
                .get(key)
                .ok_or_else(|| ContentError::resolution(path, Unresolved::MissingKey(key.into())))?;
            parent = key;
        }

        current
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| ContentError::resolution(path, Unresolved::NotAList(json_type(current))))
    }
}

/// The records and lot a page is being built for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionContext {
    lot_slug: String,
    records: BTreeMap<String, Value>,
}

impl ExpansionContext {
    /// Create a context for the given lot.
    pub fn new(lot_slug: impl Into<String>) -> Self {
        Self {
            lot_slug: lot_slug.into(),
            records: BTreeMap::new(),
        }
    }

    /// Register a record under a name, e.g. the brief under `"brief"`.
    pub fn with_record(mut self, name: impl Into<String>, record: Value) -> Self {
        self.records.insert(name.into(), record);
        self
    }

    /// Get the lot slug.
    pub fn lot_slug(&self) -> &str {
        &self.lot_slug
    }
}

impl RecordSource for ExpansionContext {
    fn record(&self, name: &str) -> Option<&Value> {
        self.records.get(name)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context() -> ExpansionContext {
        ExpansionContext::new("digital-specialists").with_record(
            "brief",
            json!({
                "title": "Build a thing",
                "essentialRequirements": ["PHP", "Python"],
                "lot": {"requirements": ["one"]}
            }),
        )
    }

    #[test]
    fn resolves_top_level_list() {
        let ctx = context();
        let items = ctx
            .resolve_list(&SourcePath::new("brief.essentialRequirements"))
            .unwrap();
        assert_eq!(items, &[json!("PHP"), json!("Python")]);
    }

    #[test]
    fn resolves_nested_list() {
        let ctx = context();
        let items = ctx.resolve_list(&SourcePath::new("brief.lot.requirements")).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn missing_record() {
        let err = context()
            .resolve_list(&SourcePath::new("application.items"))
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Resolution { reason: Unresolved::MissingRecord(ref name), .. } if name == "application"
        ));
    }

    #[test]
    fn missing_key() {
        let err = context()
            .resolve_list(&SourcePath::new("brief.niceToHaveRequirements"))
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Resolution { reason: Unresolved::MissingKey(_), .. }
        ));
    }

    #[test]
    fn traversing_through_a_string() {
        let err = context()
            .resolve_list(&SourcePath::new("brief.title.items"))
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Resolution { reason: Unresolved::NotAnObject(ref key), .. } if key == "title"
        ));
    }

    #[test]
    fn value_is_not_a_list() {
        let err = context().resolve_list(&SourcePath::new("brief.title")).unwrap_err();
        assert!(err.is_resolution());
        assert_eq!(
            err.to_string(),
            "Cannot resolve 'brief.title': value is a string, not a list"
        );
    }

    #[test]
    fn empty_path() {
        let err = context().resolve_list(&SourcePath::new("")).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Resolution { reason: Unresolved::EmptyPath, .. }
        ));
    }

    #[test]
    fn bare_record_name_resolves_the_record_itself() {
        let ctx = ExpansionContext::new("lot").with_record("items", json!([1, 2, 3]));
        assert_eq!(ctx.resolve_list(&SourcePath::new("items")).unwrap().len(), 3);
    }
}
