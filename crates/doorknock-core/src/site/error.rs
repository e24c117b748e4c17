//! Renderer errors

use crate::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A required field is absent
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// A field is present but has the wrong shape
    #[error("field '{field}' must be {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("page template failed: {0}")]
    Template(#[from] TemplateError),
}

impl SiteError {
    pub(crate) fn missing(field: &str) -> Self {
        SiteError::MissingField {
            field: field.to_string(),
        }
    }
}
