use crate::crew::{AgentRole, TaskKind};
use crate::site::SiteError;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoorknockError {
    // Site errors
    #[error("SITE_MISSING_FIELD: required field '{0}' is missing")]
    SiteMissingField(String),

    #[error("SITE_TYPE_MISMATCH: field '{field}' must be {expected}, found {found}")]
    SiteTypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("SITE_TEMPLATE_ERROR: {0}")]
    SiteTemplate(TemplateError),

    // Copy file errors
    #[error("COPY_INVALID: failed to parse '{path}': {reason}")]
    CopyInvalid { path: PathBuf, reason: String },

    // Crew errors
    #[error("CREW_INVALID_REQUEST: {field} must not be blank")]
    CrewInvalidRequest { field: &'static str },

    #[error("CREW_UNASSIGNED_TASK: task '{task}' needs a '{role}' agent that is not in the crew")]
    CrewUnassignedTask { task: TaskKind, role: AgentRole },

    #[error("CREW_DUPLICATE_AGENT: role '{0}' appears more than once")]
    CrewDuplicateAgent(AgentRole),

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    TemplateFailed(TemplateError),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Output errors
    #[error("OUTPUT_INVALID_NAME: client name '{0}' gives an empty directory name")]
    OutputInvalidName(String),

    #[error("OUTPUT_WRITE_ERROR: failed to write '{path}': {reason}")]
    OutputWriteError { path: PathBuf, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<SiteError> for DoorknockError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::MissingField { field } => DoorknockError::SiteMissingField(field),
            SiteError::TypeMismatch {
                field,
                expected,
                found,
            } => DoorknockError::SiteTypeMismatch {
                field,
                expected,
                found,
            },
            SiteError::Template(e) => DoorknockError::SiteTemplate(e),
        }
    }
}

impl From<TemplateError> for DoorknockError {
    fn from(err: TemplateError) -> Self {
        DoorknockError::TemplateFailed(err)
    }
}

impl From<serde_json::Error> for DoorknockError {
    fn from(err: serde_json::Error) -> Self {
        DoorknockError::Generic(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DoorknockError>;
