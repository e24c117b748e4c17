//! Loose field records as produced upstream (JSON or TOML documents)

use crate::error::DoorknockError;
use crate::site::error::SiteError;
use std::collections::BTreeMap;
use std::path::Path;

/// A single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    /// Any other shape, kept by name so a required field holding it can be
    /// reported as a type mismatch
    Other(&'static str),
}

impl FieldValue {
    /// Human-readable shape name, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "a string",
            FieldValue::List(_) => "a list of strings",
            FieldValue::Other(kind) => kind,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::List)
                .unwrap_or(FieldValue::Other("a list with non-string items")),
            Value::Null => FieldValue::Other("null"),
            Value::Bool(_) => FieldValue::Other("a boolean"),
            Value::Number(_) => FieldValue::Other("a number"),
            Value::Object(_) => FieldValue::Other("a table"),
        }
    }
}

impl From<toml::Value> for FieldValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::List)
                .unwrap_or(FieldValue::Other("a list with non-string items")),
            Value::Integer(_) | Value::Float(_) => FieldValue::Other("a number"),
            Value::Boolean(_) => FieldValue::Other("a boolean"),
            Value::Datetime(_) => FieldValue::Other("a datetime"),
            Value::Table(_) => FieldValue::Other("a table"),
        }
    }
}

/// Named fields, ordered by key.
///
/// Extra keys are allowed; only the keys a consumer asks for are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build from a JSON document whose root is an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SiteError> {
        match value {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(SiteError::TypeMismatch {
                field: "<root>".to_string(),
                expected: "a table",
                found: FieldValue::from(other).kind(),
            }),
        }
    }

    /// Build from a TOML document whose root is a table.
    pub fn from_toml(value: toml::Value) -> Result<Self, SiteError> {
        match value {
            toml::Value::Table(table) => Ok(table.into_iter().collect()),
            other => Err(SiteError::TypeMismatch {
                field: "<root>".to_string(),
                expected: "a table",
                found: FieldValue::from(other).kind(),
            }),
        }
    }

    /// Read a copy file: TOML when the extension is `.toml`, JSON otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let invalid = |reason: String| DoorknockError::CopyInvalid {
            path: path.to_path_buf(),
            reason,
        };

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let fields = if is_toml {
            let value: toml::Value =
                toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;
            Self::from_toml(value)?
        } else {
            let value: serde_json::Value =
                serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
            Self::from_json(value)?
        };
        Ok(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_classifies_values() {
        let fields = Fields::from_json(json!({
            "title": "Go Solar",
            "benefits": ["Low cost", "Fast install"],
            "mixed": ["ok", 3],
            "score": 4.5,
            "extra": {"nested": true},
            "nothing": null,
        }))
        .unwrap();

        assert_eq!(fields.get("title"), Some(&FieldValue::from("Go Solar")));
        assert_eq!(
            fields.get("benefits"),
            Some(&FieldValue::from(vec!["Low cost", "Fast install"]))
        );
        assert_eq!(fields.get("mixed").unwrap().kind(), "a list with non-string items");
        assert_eq!(fields.get("score").unwrap().kind(), "a number");
        assert_eq!(fields.get("extra").unwrap().kind(), "a table");
        assert_eq!(fields.get("nothing").unwrap().kind(), "null");
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        let err = Fields::from_json(json!(["title"])).unwrap_err();
        assert_eq!(
            err,
            SiteError::TypeMismatch {
                field: "<root>".to_string(),
                expected: "a table",
                found: "a list of strings",
            }
        );
    }

    #[test]
    fn test_from_toml_document() {
        let value: toml::Value = toml::from_str(
            r#"
title = "Go Solar"
tagline = "Save today"
benefits = []
reps = 3
"#,
        )
        .unwrap();
        let fields = Fields::from_toml(value).unwrap();

        assert_eq!(fields.get("benefits"), Some(&FieldValue::List(vec![])));
        assert_eq!(fields.get("reps").unwrap().kind(), "a number");
        assert_eq!(
            fields.keys().collect::<Vec<_>>(),
            vec!["benefits", "reps", "tagline", "title"]
        );
    }

    #[test]
    fn test_from_file_by_extension() {
        let temp = doorknock_testkit::temp_dir_in_workspace();

        let json_path = temp.path().join("copy.json");
        std::fs::write(&json_path, r#"{"title": "Go Solar"}"#).unwrap();
        let toml_path = temp.path().join("copy.TOML");
        std::fs::write(&toml_path, "title = \"Go Solar\"\n").unwrap();

        let from_json = Fields::from_file(&json_path).unwrap();
        let from_toml = Fields::from_file(&toml_path).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_from_file_reports_parse_errors() {
        let temp = doorknock_testkit::temp_dir_in_workspace();
        let path = temp.path().join("copy.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Fields::from_file(&path).unwrap_err();
        assert!(matches!(err, DoorknockError::CopyInvalid { .. }));
        assert!(err.to_string().starts_with("COPY_INVALID:"));
    }

    #[test]
    fn test_builder_and_collect_agree() {
        let built = Fields::new()
            .with("title", "A")
            .with("benefits", vec!["x"]);
        let collected: Fields = vec![
            ("title", FieldValue::from("A")),
            ("benefits", FieldValue::from(vec!["x"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(built, collected);
    }
}
