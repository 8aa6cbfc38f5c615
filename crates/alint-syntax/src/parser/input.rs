//! Cursor over the lexeme table.

use crate::source::Lexeme;
use crate::syntax::Symbol;

/// Read position in the buffered lexemes. Past the end, the current symbol
/// reads as end of input.
pub(crate) struct Input<'s> {
    lexemes: &'s [Lexeme],
    pos: usize,
}

impl<'s> Input<'s> {
    pub(crate) fn new(lexemes: &'s [Lexeme]) -> Self {
        Self { lexemes, pos: 0 }
    }

    pub(crate) fn current(&self) -> Option<&'s Lexeme> {
        self.lexemes.get(self.pos)
    }

    pub(crate) fn current_symbol(&self) -> Symbol {
        self.current().map_or(Symbol::Eoi, |lexeme| lexeme.symbol)
    }

    pub(crate) fn nth_symbol(&self, n: usize) -> Symbol {
        self.lexemes
            .get(self.pos + n)
            .map_or(Symbol::Eoi, |lexeme| lexeme.symbol)
    }

    pub(crate) fn bump(&mut self) {
        if self.pos < self.lexemes.len() {
            self.pos += 1;
        }
    }
}
