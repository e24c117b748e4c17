//! Template error types

use std::time::Duration;
use thiserror::Error;

/// Template rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Key not found in data context
    #[error("Undefined key '{key}' at line {line}")]
    UndefinedKey { key: String, line: usize },

    /// Malformed template syntax
    #[error("Malformed syntax at line {line}: {message}")]
    MalformedSyntax { message: String, line: usize },

    /// Array used outside of an `each` block
    #[error(
        "Array '{key}' used outside of {{{{each}}}} context. Use {{{{each {key} |item|}}}} ... {{{{/each}}}}"
    )]
    ArrayInNonEachContext { key: String },

    /// Table used directly in a placeholder
    #[error("Table '{key}' cannot be used directly in placeholder. Use nested keys like {key}.field")]
    TableInPlaceholder { key: String },

    /// Rendering exceeded the wall-clock limit
    #[error(
        "Template rendering timed out after {:.2}s (max: {:.2}s). Check for unclosed {{{{...}}}} or {{{{each}}}} blocks.",
        .elapsed.as_secs_f64(),
        .max_duration.as_secs_f64()
    )]
    Timeout {
        max_duration: Duration,
        elapsed: Duration,
    },
}
