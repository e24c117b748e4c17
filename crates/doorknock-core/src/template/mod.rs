//! Template module - pure text substitution
//!
//! Used for the landing page and for the task briefs handed to agents.
//!
//! ## Syntax
//!
//! - Placeholders: `{{key}}` or `{{ key }}`
//! - Nested access: `{{marketing_copy.title}}`
//! - List iteration: `{{each items |item|}} ... {{/each}}`
//! - Escapes: `\{{literal}}` is emitted as `{{literal}}`
//!
//! Substituted values go through the engine's [`Escape`] policy; the
//! template text never does.

pub mod engine;
pub mod error;
pub mod escape;

pub use engine::{render, TemplateContext, TemplateEngine};
pub use error::TemplateError;
pub use escape::Escape;
