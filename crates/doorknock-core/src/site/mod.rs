//! Landing page renderer
//!
//! Turns a record of marketing copy fields into a single-page Bootstrap
//! site for a client. The field record is validated into a
//! [`MarketingCopy`] before anything is rendered, so a page is either
//! complete or not produced at all.
//!
//! ## Escaping
//!
//! Every substituted value (client name, copy fields, each benefit) is
//! HTML-escaped by default. [`SiteRenderer::new`] with [`Escape::None`]
//! inserts values verbatim instead.
//!
//! [`Escape::None`]: crate::template::Escape::None

pub mod copy;
pub mod error;
pub mod fields;
mod page;
pub mod render;

pub use copy::{MarketingCopy, REQUIRED_FIELDS};
pub use error::SiteError;
pub use fields::{FieldValue, Fields};
pub use render::{current_year, render, RenderInput, SiteRenderer};
