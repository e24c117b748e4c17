//! Single-pass tokenizer for `{{...}}` tags.
//!
//! The scanner is a small state machine that looks at each byte once and
//! never moves backwards. Backslashes are counted on the way in, so escape
//! detection needs no look-behind.

/// What a `{{...}}` tag means.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// `{{key}}` or `{{nested.key}}`
    Placeholder { key: String },

    /// `{{each items |var|}}`
    BlockStart { keyword: String, args: String },

    /// `{{/each}}`
    BlockEnd { keyword: String },
}

/// One tag located in the template.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Byte offset of the opening `{{`
    pub start: usize,
    /// Length in bytes, braces included
    pub length: usize,
    /// Consecutive backslashes directly before `{{`
    pub backslash_count: usize,
    /// Line of the closing `}}`, 1-based
    pub line: usize,
}

impl Token {
    /// Odd backslash count means the tag is literal text.
    pub fn is_escaped(&self) -> bool {
        self.backslash_count % 2 == 1
    }

    /// Byte offset just past the closing `}}`.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Scanner state.
///
/// ```text
/// Text ──{──> OpenBrace ──{──> Inside ──}──> CloseBrace ──}──> emit, Text
///               │ other                        │ other
///               └──> Text (reprocess)          └──> Inside (reprocess)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScanState {
    Text {
        backslashes: usize,
    },
    OpenBrace {
        at: usize,
        backslashes: usize,
    },
    Inside {
        start: usize,
        backslashes: usize,
    },
    CloseBrace {
        start: usize,
        close_at: usize,
        backslashes: usize,
    },
}

/// An opening `{{` that never saw its `}}` before the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unterminated {
    pub start: usize,
    pub backslash_count: usize,
    pub line: usize,
}

/// Iterator over the tags of a template.
pub(crate) struct TokenStream<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    line: usize,
    steps: usize,
}

/// Upper bound on state transitions per input byte.
const MAX_STEPS_PER_BYTE: usize = 3;

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Text { backslashes: 0 },
            line: 1,
            steps: 0,
        }
    }

    /// Current line, 1-based.
    #[cfg(test)]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Jump forward to `pos`, treating the skipped bytes as consumed text.
    ///
    /// Used after an `each` block, whose body is rendered separately.
    pub fn seek(&mut self, pos: usize) {
        let target = pos.min(self.bytes.len());
        if target > self.pos {
            self.line += self.bytes[self.pos..target]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.pos = target;
        }
        self.state = ScanState::Text { backslashes: 0 };
    }

    /// Report an opening `{{` left open at end of input.
    ///
    /// Only meaningful once the iterator has returned `None`.
    pub fn unterminated(&self) -> Option<Unterminated> {
        match self.state {
            ScanState::Inside { start, backslashes }
            | ScanState::CloseBrace {
                start, backslashes, ..
            } => Some(Unterminated {
                start,
                backslash_count: backslashes,
                line: self.line,
            }),
            _ => None,
        }
    }

    fn classify(content: &str) -> TokenKind {
        let trimmed = content.trim();

        if let Some(args) = trimmed.strip_prefix("each ") {
            TokenKind::BlockStart {
                keyword: "each".to_string(),
                args: args.trim().to_string(),
            }
        } else if let Some(keyword) = trimmed.strip_prefix('/') {
            TokenKind::BlockEnd {
                keyword: keyword.trim().to_string(),
            }
        } else {
            TokenKind::Placeholder {
                key: trimmed.to_string(),
            }
        }
    }

    /// Advance by one byte. Returns a token when a `}}` closes one.
    fn step(&mut self, byte: u8) -> Option<Token> {
        match self.state {
            ScanState::Text { backslashes } => {
                self.state = match byte {
                    b'\\' => ScanState::Text {
                        backslashes: backslashes + 1,
                    },
                    b'{' => ScanState::OpenBrace {
                        at: self.pos,
                        backslashes,
                    },
                    _ => ScanState::Text { backslashes: 0 },
                };
                self.consume(byte);
            }
            ScanState::OpenBrace { at, backslashes } => {
                if byte == b'{' {
                    self.state = ScanState::Inside {
                        start: at,
                        backslashes,
                    };
                    self.consume(byte);
                } else {
                    // lone `{`; the byte is looked at again as text
                    self.state = ScanState::Text { backslashes: 0 };
                }
            }
            ScanState::Inside { start, backslashes } => {
                if byte == b'}' {
                    self.state = ScanState::CloseBrace {
                        start,
                        close_at: self.pos,
                        backslashes,
                    };
                }
                self.consume(byte);
            }
            ScanState::CloseBrace {
                start,
                close_at,
                backslashes,
            } => {
                if byte != b'}' {
                    self.state = ScanState::Inside { start, backslashes };
                    return None;
                }

                let content = std::str::from_utf8(&self.bytes[start + 2..close_at]).unwrap_or("");
                let token = Token {
                    kind: Self::classify(content),
                    start,
                    length: self.pos + 1 - start,
                    backslash_count: backslashes,
                    line: self.line,
                };
                self.state = ScanState::Text { backslashes: 0 };
                self.consume(byte);
                return Some(token);
            }
        }
        None
    }

    fn consume(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let max_steps = self.bytes.len().saturating_mul(MAX_STEPS_PER_BYTE);

        while self.pos < self.bytes.len() && self.steps < max_steps {
            self.steps += 1;
            let byte = self.bytes[self.pos];
            if let Some(token) = self.step(byte) {
                return Some(token);
            }
        }
        None
    }
}
