//! Shared helpers for parser snapshot tests.
#![allow(dead_code, unused_imports)]

pub use alint_syntax::parser::parse;
pub use alint_syntax::syntax::views;
pub use alint_syntax::{Node, ParseError, Production, Symbol, TokenSource};

/// Loads `text` as `t.mac`.
pub fn load(text: &str) -> TokenSource {
    let mut source = TokenSource::new();
    source.load_str("t.mac", text);
    source
}

/// Parses `text`, panicking with the diagnostic on a syntax error.
pub fn parse_ok(text: &str) -> Node {
    let source = load(text);
    match parse(&source) {
        Ok(tree) => tree,
        Err(err) => panic!("{}: {err}", err.coordinate),
    }
}

/// Parses `text` and returns the syntax error.
pub fn parse_err(text: &str) -> ParseError {
    let source = load(text);
    match parse(&source) {
        Ok(tree) => panic!("expected a syntax error, got:\n{}", tree.show()),
        Err(err) => err,
    }
}

/// Helper to format a parse result for snapshot testing.
pub fn snapshot_parse(text: &str) -> String {
    let source = load(text);
    match parse(&source) {
        Ok(tree) => tree.show(),
        Err(err) => format!("{} error: {err}\n", err.coordinate),
    }
}

/// The top-level statements of a parsed file.
pub fn top_level(tree: &Node) -> Vec<&Node> {
    views::file_statements(tree)
        .map(|list| views::statements(list).collect())
        .unwrap_or_default()
}
