//! Validated marketing copy

use crate::site::error::SiteError;
use crate::site::fields::{FieldValue, Fields};
use serde::{Deserialize, Serialize};
use toml::Value;

/// Keys the landing page needs, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "tagline", "description", "benefits"];

/// The parts of the marketing package that end up on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingCopy {
    /// Short campaign headline
    pub title: String,
    /// One-sentence hook
    pub tagline: String,
    /// Paragraph about the offer
    pub description: String,
    /// Key advantages, shown in order
    pub benefits: Vec<String>,
}

impl MarketingCopy {
    pub fn new<B, S>(
        title: impl Into<String>,
        tagline: impl Into<String>,
        description: impl Into<String>,
        benefits: B,
    ) -> Self
    where
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            description: description.into(),
            benefits: benefits.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate a loose field record.
    ///
    /// Presence of every required key is checked before any shape, so a
    /// record that is both incomplete and malformed reports the missing key.
    pub fn from_fields(fields: &Fields) -> Result<Self, SiteError> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|k| !fields.contains_key(k)) {
            return Err(SiteError::missing(missing));
        }

        Ok(Self {
            title: text_field(fields, "title")?,
            tagline: text_field(fields, "tagline")?,
            description: text_field(fields, "description")?,
            benefits: list_field(fields, "benefits")?,
        })
    }

    /// TOML table used as the `marketing_copy` template context entry.
    pub(crate) fn to_value(&self) -> Value {
        let mut table = toml::map::Map::new();
        table.insert("title".to_string(), Value::String(self.title.clone()));
        table.insert("tagline".to_string(), Value::String(self.tagline.clone()));
        table.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        table.insert(
            "benefits".to_string(),
            Value::Array(self.benefits.iter().cloned().map(Value::String).collect()),
        );
        Value::Table(table)
    }
}

fn field<'a>(fields: &'a Fields, name: &str) -> Result<&'a FieldValue, SiteError> {
    fields.get(name).ok_or_else(|| SiteError::missing(name))
}

fn text_field(fields: &Fields, name: &str) -> Result<String, SiteError> {
    match field(fields, name)? {
        FieldValue::Text(text) => Ok(text.clone()),
        other => Err(SiteError::TypeMismatch {
            field: name.to_string(),
            expected: "a string",
            found: other.kind(),
        }),
    }
}

fn list_field(fields: &Fields, name: &str) -> Result<Vec<String>, SiteError> {
    match field(fields, name)? {
        FieldValue::List(items) => Ok(items.clone()),
        other => Err(SiteError::TypeMismatch {
            field: name.to_string(),
            expected: "a list of strings",
            found: other.kind(),
        }),
    }
}
