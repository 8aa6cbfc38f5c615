//! Grammar vocabulary and parse tree types.
//!
//! `Symbol` covers both terminals (produced by the lexer) and non-terminals
//! (produced by the parser). `Production` lists the grammar rules, and the
//! `tree` module holds the owned parse tree built from them.

pub mod production;
pub mod tree;
pub mod views;

use std::fmt;

pub use production::Production;
pub use tree::{Coordinate, Interior, Leaf, LexemeId, Node};

/// All grammar symbols of the macro scripting language.
///
/// The set is closed: every pass matches on it exhaustively or with an
/// explicit no-op arm.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    // =========================================================================
    // TERMINALS
    // =========================================================================
    IfKw,
    IfDefKw,
    ThenKw,
    ElseKw,
    EndifKw,
    ForKw,
    ToKw,
    StepKw,
    DoKw,
    EnddoKw,
    EndmacroKw,
    DefmacroKw,
    EnddefmacroKw,
    InlineMacroName,
    LocalMacroName,
    GlobalMacroName,
    Identifier,
    Comment,
    VisualComment,
    ShellEscape,
    FpNumber,
    Plus,
    Minus,
    Mult,
    Div,
    Equal,
    Comparison,
    Percent,
    At,
    Lp,
    Rp,
    Lb,
    Rb,
    LiteralString,
    Comma,
    Semicolon,
    Eoi,

    // =========================================================================
    // NON-TERMINALS
    // =========================================================================
    Start,
    MacroFile,
    Stmt,
    StmtList,
    Input,
    MacroCall,
    MacroName,
    MacroArgList,
    MacroArg,
    ParentExpression,
    Expression,
    Term,
    Factor,
    ExpressionList,
    ParameterList,
    FunctionCall,
    IfStmt,
    IfClause,
    Condition,
    ForStmt,
    MacroDef,
}

impl Symbol {
    /// Returns `true` for symbols produced by the lexer.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self < Self::Start
    }

    /// Returns `true` for symbols produced by the parser.
    #[must_use]
    pub fn is_nonterminal(self) -> bool {
        !self.is_terminal()
    }

    /// Returns `true` for control keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::IfKw
                | Self::IfDefKw
                | Self::ThenKw
                | Self::ElseKw
                | Self::EndifKw
                | Self::ForKw
                | Self::ToKw
                | Self::StepKw
                | Self::DoKw
                | Self::EnddoKw
                | Self::EndmacroKw
                | Self::DefmacroKw
                | Self::EnddefmacroKw
        )
    }

    /// Returns `true` for the line-oriented tokens that carry their own
    /// placement rules: comments, visual comments and shell escapes.
    #[must_use]
    pub fn is_comment_like(self) -> bool {
        matches!(self, Self::Comment | Self::VisualComment | Self::ShellEscape)
    }

    /// The name used in diagnostics and tree dumps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::IfKw => "if_kw",
            Self::IfDefKw => "if_def_kw",
            Self::ThenKw => "then_kw",
            Self::ElseKw => "else_kw",
            Self::EndifKw => "endif_kw",
            Self::ForKw => "for_kw",
            Self::ToKw => "to_kw",
            Self::StepKw => "step_kw",
            Self::DoKw => "do_kw",
            Self::EnddoKw => "enddo_kw",
            Self::EndmacroKw => "endmacro_kw",
            Self::DefmacroKw => "defmacro_kw",
            Self::EnddefmacroKw => "enddefmacro_kw",
            Self::InlineMacroName => "inline_macro_name",
            Self::LocalMacroName => "local_macro_name",
            Self::GlobalMacroName => "global_macro_name",
            Self::Identifier => "identifier",
            Self::Comment => "comment",
            Self::VisualComment => "visual_comment",
            Self::ShellEscape => "shell_escape",
            Self::FpNumber => "fp_number",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Mult => "mult",
            Self::Div => "div",
            Self::Equal => "equal",
            Self::Comparison => "comparison",
            Self::Percent => "percent",
            Self::At => "at",
            Self::Lp => "left-parent",
            Self::Rp => "right-parent",
            Self::Lb => "left-curly-bracket",
            Self::Rb => "right-curly-bracket",
            Self::LiteralString => "literal_string",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Eoi => "eoi",
            Self::Start => "<start>",
            Self::MacroFile => "<macro_file>",
            Self::Stmt => "<stmt>",
            Self::StmtList => "<stmt_list>",
            Self::Input => "<input>",
            Self::MacroCall => "<macro_call>",
            Self::MacroName => "<macro_name>",
            Self::MacroArgList => "<macro_arg_list>",
            Self::MacroArg => "<macro_arg>",
            Self::ParentExpression => "<parent_expression>",
            Self::Expression => "<expression>",
            Self::Term => "<term>",
            Self::Factor => "<factor>",
            Self::ExpressionList => "<expression_list>",
            Self::ParameterList => "<parameter_list>",
            Self::FunctionCall => "<function_call>",
            Self::IfStmt => "<if_stmt>",
            Self::IfClause => "<if_clause>",
            Self::Condition => "<condition>",
            Self::ForStmt => "<for_stmt>",
            Self::MacroDef => "<macro_def>",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_terminal_partition() {
        assert!(Symbol::Eoi.is_terminal());
        assert!(Symbol::Identifier.is_terminal());
        assert!(!Symbol::Start.is_terminal());
        assert!(Symbol::MacroDef.is_nonterminal());
    }

    #[test]
    fn test_token_kind_to_symbol() {
        assert_eq!(TokenKind::KwEndDo.symbol(), Some(Symbol::EnddoKw));
        assert_eq!(TokenKind::Number.symbol(), Some(Symbol::FpNumber));
        assert!(TokenKind::Comparison.symbol().is_some_and(Symbol::is_terminal));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Symbol::Lp.to_string(), "left-parent");
        assert_eq!(Symbol::ForStmt.to_string(), "<for_stmt>");
    }
}
