//! Grammar rules for the macro scripting language.
//!
//! - `statements.rs` - statement lists, control constructs, macro calls and
//!   definitions
//! - `expressions.rs` - arithmetic expressions, conditions and lists

mod expressions;
mod statements;

use crate::syntax::{Production, Symbol};

use super::Parser;

/// Symbols that can start a statement.
pub(crate) const STMT_FIRST: &[Symbol] = &[
    Symbol::Comment,
    Symbol::VisualComment,
    Symbol::ShellEscape,
    Symbol::At,
    Symbol::Identifier,
    Symbol::FpNumber,
    Symbol::LiteralString,
    Symbol::Mult,
    Symbol::InlineMacroName,
    Symbol::GlobalMacroName,
    Symbol::LocalMacroName,
    Symbol::DefmacroKw,
    Symbol::Lp,
    Symbol::IfKw,
    Symbol::IfDefKw,
    Symbol::ForKw,
];

/// Symbols that can start an expression.
pub(crate) const EXPR_FIRST: &[Symbol] = &[
    Symbol::Minus,
    Symbol::Plus,
    Symbol::FpNumber,
    Symbol::Identifier,
    Symbol::Lp,
];

impl Parser<'_> {
    /// `start -> macro_file eoi`
    pub(crate) fn parse_start(&mut self) {
        let m = self.start();
        self.parse_macro_file();
        self.expect(Symbol::Eoi);
        m.complete(self, Production::Start);
    }

    fn parse_macro_file(&mut self) {
        let m = self.start();
        if self.at(Symbol::EndmacroKw) {
            self.bump();
            m.complete(self, Production::MacroFileEmpty);
            return;
        }
        self.parse_stmt_list();
        self.expect(Symbol::EndmacroKw);
        m.complete(self, Production::MacroFile);
    }
}
