//! Block matching (finding the `{{/each}}` that closes an `{{each}}`)

use super::tokenize::{TokenKind, TokenStream};

/// Find the closing tag for `keyword` in `body`, skipping nested blocks of
/// the same keyword and escaped tags.
///
/// Returns `(offset, length)` of the closing tag within `body`.
pub(crate) fn find_block_end(body: &str, keyword: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;

    for token in TokenStream::new(body).filter(|t| !t.is_escaped()) {
        match &token.kind {
            TokenKind::BlockStart { keyword: k, .. } if k == keyword => depth += 1,
            TokenKind::BlockEnd { keyword: k } if k == keyword => {
                if depth == 0 {
                    return Some((token.start, token.length));
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    None
}

/// Find the `{{/each}}` matching an already-consumed `{{each ...}}`.
pub(crate) fn find_each_end(body: &str) -> Option<(usize, usize)> {
    find_block_end(body, "each")
}
