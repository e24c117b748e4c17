//! Rendering the landing page

use crate::site::copy::MarketingCopy;
use crate::site::error::SiteError;
use crate::site::fields::Fields;
use crate::site::page::PAGE_TEMPLATE;
use crate::template::{Escape, TemplateContext, TemplateEngine};
use chrono::Datelike;
use toml::Value;

/// Everything the page needs, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInput {
    pub subject_name: String,
    pub copy: MarketingCopy,
    /// Footer year; the current year when `None`
    pub year: Option<i32>,
}

impl RenderInput {
    pub fn new(subject_name: impl Into<String>, copy: MarketingCopy) -> Self {
        Self {
            subject_name: subject_name.into(),
            copy,
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Validate a loose field record into a render input.
    pub fn from_fields(
        subject_name: &str,
        fields: &Fields,
        year: Option<i32>,
    ) -> Result<Self, SiteError> {
        if subject_name.trim().is_empty() {
            return Err(SiteError::missing("subject_name"));
        }
        Ok(Self {
            subject_name: subject_name.to_string(),
            copy: MarketingCopy::from_fields(fields)?,
            year,
        })
    }
}

/// Renders landing pages with a fixed escaping policy.
#[derive(Debug, Clone, Copy)]
pub struct SiteRenderer {
    engine: TemplateEngine,
}

impl Default for SiteRenderer {
    /// HTML-escapes every substituted value
    fn default() -> Self {
        Self::new(Escape::Html)
    }
}

impl SiteRenderer {
    pub fn new(escape: Escape) -> Self {
        Self {
            engine: TemplateEngine::with_escape(escape),
        }
    }

    pub fn escape(&self) -> Escape {
        self.engine.escape()
    }

    /// Validate `fields` and render the page for `subject_name`.
    pub fn render(
        &self,
        subject_name: &str,
        fields: &Fields,
        year: Option<i32>,
    ) -> Result<String, SiteError> {
        let input = RenderInput::from_fields(subject_name, fields, year)?;
        self.render_copy(&input)
    }

    /// Render an already validated input.
    pub fn render_copy(&self, input: &RenderInput) -> Result<String, SiteError> {
        if input.subject_name.trim().is_empty() {
            return Err(SiteError::missing("subject_name"));
        }

        let year = input.year.unwrap_or_else(current_year);
        log::debug!(
            "rendering landing page for '{}' ({} benefits, year {})",
            input.subject_name,
            input.copy.benefits.len(),
            year
        );

        let context = page_context(&input.subject_name, &input.copy, year);
        Ok(self.engine.render(PAGE_TEMPLATE, &context)?)
    }
}

/// Render with the default (HTML-escaping) renderer.
pub fn render(subject_name: &str, fields: &Fields, year: Option<i32>) -> Result<String, SiteError> {
    SiteRenderer::default().render(subject_name, fields, year)
}

/// Calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn page_context(subject_name: &str, copy: &MarketingCopy, year: i32) -> TemplateContext {
    let mut table = toml::map::Map::new();
    table.insert(
        "client_name".to_string(),
        Value::String(subject_name.to_string()),
    );
    table.insert("marketing_copy".to_string(), copy.to_value());
    table.insert("year".to_string(), Value::Integer(i64::from(year)));
    TemplateContext::from_table(table)
}
