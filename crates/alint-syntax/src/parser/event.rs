//! Parser events.
//!
//! The parser produces a flat stream of events that the sink later folds
//! into the owned parse tree.

use crate::syntax::{LexemeId, Production};

/// An event produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Start a node built by `production`.
    Start {
        /// The production of the node.
        production: Production,
    },
    /// Add a lexeme to the current node.
    Token {
        /// The lexeme consumed.
        id: LexemeId,
    },
    /// Finish the current node.
    Finish,
    /// Slot reserved by a marker that has not been completed yet.
    Placeholder,
}
