//! Template engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::template::error::TemplateError;
use crate::template::escape::Escape;
use std::time::{Duration, Instant};
use toml::Value;

use blocks::find_each_end;
use helpers::{bind_loop_var, parse_each_args, resolve_array, resolve_key, stringify_value};
use tokenize::{Token, TokenKind, TokenStream};

/// Maximum duration for template rendering (malformed input protection)
const RENDER_TIMEOUT: Duration = Duration::from_secs(10);

fn check_timeout(start: Instant) -> Result<(), TemplateError> {
    let elapsed = start.elapsed();
    if elapsed >= RENDER_TIMEOUT {
        return Err(TemplateError::Timeout {
            max_duration: RENDER_TIMEOUT,
            elapsed,
        });
    }
    Ok(())
}

/// Template context holding TOML data for rendering
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from TOML value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Create a context from a table of top-level keys
    pub fn from_table(table: toml::map::Map<String, Value>) -> Self {
        Self::new(Value::Table(table))
    }

    /// Get the underlying TOML value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// Template engine for rendering templates with TOML data
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine {
    escape: Escape,
}

impl TemplateEngine {
    /// Engine that inserts values verbatim
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that passes every substituted value through `escape`
    pub fn with_escape(escape: Escape) -> Self {
        Self { escape }
    }

    pub fn escape(&self) -> Escape {
        self.escape
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.render_section(template, context.data(), 1, Instant::now())
    }

    /// Render one section (the whole template or a loop body).
    ///
    /// `first_line` is the line the section starts on in the outer template,
    /// so errors inside loop bodies point at the right place.
    fn render_section(
        &self,
        template: &str,
        data: &Value,
        first_line: usize,
        start: Instant,
    ) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(template.len());
        let mut tokens = TokenStream::new(template);
        let mut cursor = 0;

        while let Some(token) = tokens.next() {
            check_timeout(start)?;

            // Text up to the backslash run, then half of the backslashes
            let text_end = token.start - token.backslash_count;
            output.push_str(&template[cursor..text_end]);
            for _ in 0..token.backslash_count / 2 {
                output.push('\\');
            }

            let line = first_line + token.line - 1;
            cursor = if token.is_escaped() {
                output.push_str(&template[token.start..token.end()]);
                token.end()
            } else {
                self.process_token(template, &token, data, line, start, &mut output)?
            };
            tokens.seek(cursor);
        }

        if let Some(open) = tokens.unterminated() {
            let message = if open.backslash_count % 2 == 1 {
                "Unclosed escaped placeholder"
            } else {
                "Unclosed placeholder or each loop"
            };
            return Err(TemplateError::MalformedSyntax {
                message: message.to_string(),
                line: first_line + open.line - 1,
            });
        }

        output.push_str(&template[cursor..]);
        Ok(output)
    }

    /// Handle an unescaped tag. Returns the offset where scanning resumes.
    fn process_token(
        &self,
        template: &str,
        token: &Token,
        data: &Value,
        line: usize,
        start: Instant,
        output: &mut String,
    ) -> Result<usize, TemplateError> {
        match &token.kind {
            TokenKind::Placeholder { key } => {
                let value = resolve_key(data, key).ok_or_else(|| TemplateError::UndefinedKey {
                    key: key.clone(),
                    line,
                })?;
                let text = stringify_value(value, key)?;
                output.push_str(&self.escape.apply(&text));
                Ok(token.end())
            }
            TokenKind::BlockStart { keyword, args } if keyword == "each" => {
                self.process_each(template, token, args, data, line, start, output)
            }
            TokenKind::BlockStart { keyword, .. } => Err(TemplateError::MalformedSyntax {
                message: format!("Unknown block '{}'", keyword),
                line,
            }),
            TokenKind::BlockEnd { keyword } => Err(TemplateError::MalformedSyntax {
                message: format!(
                    "Unexpected {{{{/{}}}}} without matching {{{{{}}}}}",
                    keyword, keyword
                ),
                line,
            }),
        }
    }

    /// Render an `each` block once per array item and skip past `{{/each}}`.
    #[allow(clippy::too_many_arguments)]
    fn process_each(
        &self,
        template: &str,
        token: &Token,
        args: &str,
        data: &Value,
        line: usize,
        start: Instant,
        output: &mut String,
    ) -> Result<usize, TemplateError> {
        let (key, var) = parse_each_args(args, line)?;

        let body_start = token.end();
        let (body_len, end_len) =
            find_each_end(&template[body_start..]).ok_or_else(|| TemplateError::MalformedSyntax {
                message: format!("Unclosed each loop for key '{}'", key),
                line,
            })?;
        let body = &template[body_start..body_start + body_len];

        for item in resolve_array(data, key, line)? {
            let scope = bind_loop_var(data, var, item.clone());
            output.push_str(&self.render_section(body, &scope, line, start)?);
        }

        Ok(body_start + body_len + end_len)
    }
}

/// Convenience function to render a template without escaping
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
