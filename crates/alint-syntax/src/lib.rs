//! `alint-syntax` - Lexer, token source, grammar, and parse tree for the
//! alint macro scripting language.
//!
//! - **Lexer**: tokenizes source text with `logos`
//! - **Token Source**: buffers lexemes of one file together with the raw
//!   whitespace before each of them
//! - **Parser**: builds an owned parse tree whose interior nodes record the
//!   production that built them
//!
//! # Example
//!
//! ```
//! use alint_syntax::{parse, Production, TokenSource};
//!
//! let mut source = TokenSource::new();
//! source.load_str("demo.mac", "FOR i=0 TO 3 DO(\"L\")\n  x\nENDDO(\"L\")\nendmacro\n");
//! assert!(source.errors().is_empty());
//!
//! let tree = parse(&source).unwrap();
//! assert_eq!(tree.production(), Some(Production::Start));
//! assert_eq!(source.whitespace(tree.last_lexeme_id()), Some("\n"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod lexer;
pub mod parser;
pub mod source;
pub mod syntax;

pub use lexer::{lex, Lexer, Token, TokenKind};
pub use parser::{parse, ParseError};
pub use source::{LexError, Lexeme, SourceError, TokenSource};
pub use syntax::production::grammar_listing;
pub use syntax::{Coordinate, Interior, Leaf, LexemeId, Node, Production, Symbol};
