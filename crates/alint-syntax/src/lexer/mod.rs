//! Lexer for the alint macro scripting language.
//!
//! This module tokenizes source text into a stream of tokens with their byte
//! ranges. Whitespace is kept as trivia tokens; the token source splits it
//! out into the whitespace table.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

/// Lexer for macro script source code.
///
/// The lexer is an iterator over tokens. Unrecognized characters come out as
/// `TokenKind::Error`; adjacent error characters are merged into one token.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    pending: Option<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            pending: None,
        }
    }

    fn next_raw(&mut self) -> Option<Token> {
        let kind = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(span.end as u32),
        );
        Some(Token::new(kind.unwrap_or(TokenKind::Error), range))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.pending.take().or_else(|| self.next_raw())?;
        if token.kind != TokenKind::Error {
            return Some(token);
        }

        let mut range = token.range;
        while let Some(next) = self.next_raw() {
            if next.kind == TokenKind::Error && next.range.start() == range.end() {
                range = range.cover(next.range);
            } else {
                self.pending = Some(next);
                break;
            }
        }
        Some(Token::new(TokenKind::Error, range))
    }
}

/// Lex the entire source and return all tokens.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| {
            let text = &source[usize::from(token.range.start())..usize::from(token.range.end())];
            (token, text)
        })
        .collect()
}
