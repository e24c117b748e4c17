//! Output escaping applied to substituted values

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How substituted values are written into the output.
///
/// Only values coming from the context are escaped; the template text
/// itself is emitted untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escape {
    /// Insert values verbatim
    #[default]
    None,
    /// Escape `&`, `<` and `>` so values render as HTML text
    Html,
}

impl Escape {
    pub fn apply(self, raw: &str) -> Cow<'_, str> {
        match self {
            Escape::None => Cow::Borrowed(raw),
            Escape::Html => html_escape::encode_text(raw),
        }
    }
}
