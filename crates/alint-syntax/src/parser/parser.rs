//! Main parser implementation.

use drop_bomb::DropBomb;
use tracing::debug;

use crate::parser::event::Event;
use crate::parser::input::Input;
use crate::parser::sink::Sink;
use crate::parser::ParseError;
use crate::source::TokenSource;
use crate::syntax::{Coordinate, Node, Production, Symbol};

/// Parses the lexemes of `source` into a tree rooted at `<start>`.
///
/// # Errors
///
/// Returns the first syntax error. Parsing stops there; no partial tree is
/// built.
pub fn parse(source: &TokenSource) -> Result<Node, ParseError> {
    let mut parser = Parser::new(source);
    parser.parse_start();
    if let Some(error) = parser.error {
        debug!(path = %source.path().display(), %error, "parse failed");
        return Err(error);
    }
    Sink::new(source, parser.events)
        .finish()
        .ok_or_else(|| ParseError::at_end(source))
}

/// The parser state.
pub(crate) struct Parser<'s> {
    input: Input<'s>,
    fallback: Coordinate,
    pub(crate) events: Vec<Event>,
    expected: Vec<Symbol>,
    error: Option<ParseError>,
}

pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn complete(mut self, parser: &mut Parser<'_>, production: Production) {
        self.bomb.defuse();
        parser.events[self.pos] = Event::Start { production };
        parser.events.push(Event::Finish);
    }
}

impl<'s> Parser<'s> {
    fn new(source: &'s TokenSource) -> Self {
        Self {
            input: Input::new(source.lexemes()),
            fallback: ParseError::at_end(source).coordinate,
            events: Vec::new(),
            expected: Vec::new(),
            error: None,
        }
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Returns `true` once a syntax error has been recorded. Every grammar
    /// loop checks this so that parsing winds down without consuming input.
    pub(crate) fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// Checks the current symbol, remembering `symbol` as acceptable here.
    /// Always `false` after an error, which ends every optional branch.
    pub(crate) fn at(&mut self, symbol: Symbol) -> bool {
        if self.failed() {
            return false;
        }
        self.expected.push(symbol);
        self.input.current_symbol() == symbol
    }

    /// Checks the current symbol against a set, remembering the whole set.
    pub(crate) fn at_any(&mut self, symbols: &[Symbol]) -> bool {
        if self.failed() {
            return false;
        }
        self.expected.extend_from_slice(symbols);
        symbols.contains(&self.input.current_symbol())
    }

    /// Looks `n` lexemes ahead without recording expectations.
    pub(crate) fn nth(&self, n: usize) -> Symbol {
        self.input.nth_symbol(n)
    }

    pub(crate) fn bump(&mut self) {
        if self.failed() {
            return;
        }
        if let Some(lexeme) = self.input.current() {
            self.events.push(Event::Token { id: lexeme.id });
            self.input.bump();
            self.expected.clear();
        }
    }

    /// Consumes `symbol` or records an error.
    pub(crate) fn expect(&mut self, symbol: Symbol) -> bool {
        if self.failed() {
            return false;
        }
        if self.at(symbol) {
            self.bump();
            true
        } else {
            self.error();
            false
        }
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    /// Records a syntax error at the current lexeme. Only the first error is
    /// kept.
    pub(crate) fn error(&mut self) {
        if self.failed() {
            return;
        }
        let mut expected = std::mem::take(&mut self.expected);
        expected.sort_unstable();
        expected.dedup();
        let error = match self.input.current() {
            Some(lexeme) => ParseError {
                coordinate: lexeme.coordinate.clone(),
                found: lexeme.symbol,
                text: lexeme.text.clone(),
                expected,
            },
            None => ParseError {
                coordinate: self.fallback.clone(),
                found: Symbol::Eoi,
                text: smol_str::SmolStr::default(),
                expected,
            },
        };
        self.error = Some(error);
    }
}
