//! Unit tests for TokenStream

use super::tokenize::{ScanState, TokenKind, TokenStream, Unterminated};

fn placeholder(key: &str) -> TokenKind {
    TokenKind::Placeholder {
        key: key.to_string(),
    }
}

#[test]
fn test_tokenstream_single_placeholder() {
    let mut stream = TokenStream::new("Hello {{name}} world");

    let token = stream.next().unwrap();
    assert_eq!(token.start, 6);
    assert_eq!(token.length, 8);
    assert_eq!(token.end(), 14);
    assert!(!token.is_escaped());
    assert_eq!(token.kind, placeholder("name"));

    assert!(stream.next().is_none());
    assert!(stream.unterminated().is_none());
}

#[test]
fn test_tokenstream_multiple_tokens() {
    let starts: Vec<_> = TokenStream::new("{{a}} {{b}} {{c}}")
        .map(|t| (t.start, t.kind))
        .collect();
    assert_eq!(
        starts,
        vec![
            (0, placeholder("a")),
            (6, placeholder("b")),
            (12, placeholder("c")),
        ]
    );
}

#[test]
fn test_tokenstream_escaped_tokens() {
    let tokens: Vec<_> = TokenStream::new(r#"\{{escaped}} \\{{real}}"#).collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].backslash_count, 1);
    assert!(tokens[0].is_escaped());
    assert_eq!(tokens[1].backslash_count, 2);
    assert!(!tokens[1].is_escaped());
}

#[test]
fn test_tokenstream_block_tokens() {
    let tokens: Vec<_> = TokenStream::new("{{ each items |item| }}{{item}}{{ /each }}")
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        tokens,
        vec![
            TokenKind::BlockStart {
                keyword: "each".to_string(),
                args: "items |item|".to_string(),
            },
            placeholder("item"),
            TokenKind::BlockEnd {
                keyword: "each".to_string(),
            },
        ]
    );
}

#[test]
fn test_tokenstream_empty_and_plain_input() {
    assert!(TokenStream::new("").next().is_none());
    assert!(TokenStream::new("no tags here { } }}").next().is_none());
}

#[test]
fn test_tokenstream_triple_braces() {
    // The first two braces open the tag; the third is part of its content
    let mut stream = TokenStream::new("{{{triple}}}");
    let token = stream.next().unwrap();
    assert_eq!(token.start, 0);
    assert_eq!(token.kind, placeholder("{triple"));
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_single_brace_inside_tag() {
    let mut stream = TokenStream::new("{{a}b}}");
    let token = stream.next().unwrap();
    assert_eq!(token.kind, placeholder("a}b"));
    assert_eq!(token.length, 7);
}

#[test]
fn test_tokenstream_line_numbers() {
    let lines: Vec<_> = TokenStream::new("Line 1\n{{one}}\nLine 3\n{{two}}")
        .map(|t| t.line)
        .collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn test_tokenstream_seek_skips_and_counts_lines() {
    let text = "{{a}}\n{{b}}\n{{c}}";
    let mut stream = TokenStream::new(text);

    assert_eq!(stream.next().unwrap().kind, placeholder("a"));
    stream.seek(text.find("{{c}}").unwrap());
    assert_eq!(stream.line(), 3);

    let token = stream.next().unwrap();
    assert_eq!(token.kind, placeholder("c"));
    assert_eq!(token.line, 3);
}

#[test]
fn test_tokenstream_reports_unterminated() {
    let mut stream = TokenStream::new("ok {{a}} then \\{{open");
    assert!(stream.next().is_some());
    assert!(stream.next().is_none());
    assert_eq!(
        stream.unterminated(),
        Some(Unterminated {
            start: 15,
            backslash_count: 1,
            line: 1,
        })
    );
}

#[test]
fn test_tokenstream_lone_open_brace_is_not_unterminated() {
    let mut stream = TokenStream::new("ends with {");
    assert!(stream.next().is_none());
    assert!(stream.unterminated().is_none());
}

#[test]
fn test_scan_states_compare_by_value() {
    assert_eq!(
        ScanState::Text { backslashes: 2 },
        ScanState::Text { backslashes: 2 }
    );
    assert_ne!(
        ScanState::Inside {
            start: 0,
            backslashes: 0
        },
        ScanState::CloseBrace {
            start: 0,
            close_at: 4,
            backslashes: 0
        }
    );
}
