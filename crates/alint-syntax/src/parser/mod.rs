//! Parser for the alint macro scripting language.
//!
//! A hand-written recursive descent parser over the buffered lexemes of a
//! [`TokenSource`](crate::source::TokenSource).
//!
//! # Architecture
//!
//! 1. **Scanning**: the token source lexes the file and keeps whitespace
//!    aside (see `source` module)
//! 2. **Parsing**: grammar functions emit a flat stream of events (start a
//!    node for a production, add a lexeme, finish the node)
//! 3. **Tree Building**: the sink folds the events into an owned [`Node`]
//!    tree
//!
//! The first syntax error ends the parse. The expected-symbol set reported
//! with it is everything the parser tested for since the last consumed
//! lexeme.
//!
//! [`Node`]: crate::syntax::Node

#![allow(clippy::module_inception)]

pub mod event;
mod grammar;
mod input;
mod parser;
mod sink;

pub use parser::parse;
pub(crate) use parser::Parser;

use std::fmt;

use smol_str::SmolStr;

use crate::source::TokenSource;
use crate::syntax::{Coordinate, Symbol};

/// A syntax error: the lexeme found and the symbols that would have been
/// accepted in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Where the unexpected lexeme starts.
    pub coordinate: Coordinate,
    /// The symbol found.
    pub found: Symbol,
    /// The text found; empty at end of input.
    pub text: SmolStr,
    /// Acceptable symbols, sorted.
    pub expected: Vec<Symbol>,
}

impl ParseError {
    pub(crate) fn at_end(source: &TokenSource) -> Self {
        let coordinate = source.lexemes().last().map_or_else(
            || Coordinate::new(source.path().into(), 1, 1),
            |lexeme| lexeme.coordinate.clone(),
        );
        Self {
            coordinate,
            found: Symbol::Eoi,
            text: SmolStr::default(),
            expected: Vec::new(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected {}", self.found)?;
        if !self.text.is_empty() {
            write!(f, " ({})", self.text)?;
        }
        if let [expected] = self.expected.as_slice() {
            write!(f, " instead of a {expected}")?;
        }
        f.write_str(".")
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Production;

    fn parse_text(text: &str) -> Result<crate::syntax::Node, ParseError> {
        let mut source = TokenSource::new();
        source.load_str("test.mac", text);
        parse(&source)
    }

    #[test]
    fn test_parse_empty_macro_file() {
        let tree = parse_text("endmacro").unwrap();
        assert_eq!(tree.production(), Some(Production::Start));
        assert_eq!(
            tree.children()[0].production(),
            Some(Production::MacroFileEmpty)
        );
    }

    #[test]
    fn test_missing_endmacro() {
        let err = parse_text("x y").unwrap_err();
        assert_eq!(err.found, Symbol::Eoi);
        assert!(err.expected.contains(&Symbol::EndmacroKw));
        assert_eq!(err.to_string(), "unexpected eoi.");
    }

    #[test]
    fn test_single_expected_symbol() {
        let err = parse_text("FOR 1 = 0 TO 2 DO(\"a\") x ENDDO(\"a\") endmacro").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected fp_number (1) instead of a identifier."
        );
        assert_eq!((err.coordinate.line, err.coordinate.column), (1, 5));
    }

    #[test]
    fn test_for_with_step() {
        let tree = parse_text("FOR i=0 TO 10 STEP 2 DO(\"L\")\n  x\nENDDO(\"L\")\nendmacro").unwrap();
        let body = crate::syntax::views::file_statements(&tree).unwrap();
        let stmt = crate::syntax::views::statements(body).next().unwrap();
        assert_eq!(stmt.children()[0].production(), Some(Production::ForStmtStep));
    }

    #[test]
    fn test_parent_expression_forms() {
        for (text, production) in [
            ("(x = 1 + 2)", Production::ParentAssign),
            ("(f(a, b) = a * b)", Production::ParentFunctionDef),
            ("(s = \"text\")", Production::ParentAssignString),
        ] {
            let tree = parse_text(&format!("{text}\nendmacro")).unwrap();
            let body = crate::syntax::views::file_statements(&tree).unwrap();
            let stmt = crate::syntax::views::statements(body).next().unwrap();
            assert_eq!(stmt.children()[0].production(), Some(production), "{text}");
        }
    }
}
