//! Grammar productions.
//!
//! Every interior node of the parse tree records the production that built
//! it. Identifiers are 1-based and follow declaration order, which is also
//! the order of the grammar listing.

use std::fmt;

use super::Symbol;

macro_rules! productions {
    ($($name:ident : $lhs:ident -> [$($rhs:ident),+];)+) => {
        /// A single grammar rule.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Production {
            $($name,)+
        }

        impl Production {
            /// Every production, in declaration order.
            pub const ALL: &'static [Production] = &[$(Production::$name,)+];

            /// The non-terminal this production derives.
            #[must_use]
            pub fn lhs(self) -> Symbol {
                match self {
                    $(Production::$name => Symbol::$lhs,)+
                }
            }

            /// The right-hand side, in child order.
            #[must_use]
            pub fn rhs(self) -> &'static [Symbol] {
                match self {
                    $(Production::$name => &[$(Symbol::$rhs),+],)+
                }
            }
        }
    };
}

productions! {
    Start: Start -> [MacroFile, Eoi];
    MacroFileEmpty: MacroFile -> [EndmacroKw];
    MacroFile: MacroFile -> [StmtList, EndmacroKw];
    StmtListOne: StmtList -> [Stmt];
    StmtListMore: StmtList -> [Stmt, StmtList];
    StmtComment: Stmt -> [Comment];
    StmtVisualComment: Stmt -> [VisualComment];
    StmtShellEscape: Stmt -> [ShellEscape];
    StmtInput: Stmt -> [Input];
    StmtIdentifier: Stmt -> [Identifier];
    StmtNumber: Stmt -> [FpNumber];
    StmtString: Stmt -> [LiteralString];
    StmtMult: Stmt -> [Mult];
    StmtMacroCall: Stmt -> [MacroCall];
    StmtMacroDef: Stmt -> [MacroDef];
    StmtParentExpression: Stmt -> [ParentExpression];
    StmtIf: Stmt -> [IfStmt];
    StmtFor: Stmt -> [ForStmt];
    InputIdentifier: Input -> [At, Identifier];
    InputString: Input -> [At, LiteralString];
    MacroDef: MacroDef -> [DefmacroKw, InlineMacroName, StmtList, EndmacroKw, EnddefmacroKw, InlineMacroName];
    MacroCallEmpty: MacroCall -> [MacroName, Lp, Rp];
    MacroCallArgs: MacroCall -> [MacroName, Lp, MacroArgList, Rp];
    MacroNameInline: MacroName -> [InlineMacroName];
    MacroNameGlobal: MacroName -> [GlobalMacroName];
    MacroNameLocal: MacroName -> [LocalMacroName];
    MacroArgListOne: MacroArgList -> [MacroArg];
    MacroArgListMore: MacroArgList -> [MacroArg, Semicolon, MacroArgList];
    MacroArgEqual: MacroArg -> [Equal, Identifier];
    MacroArgPercent: MacroArg -> [Percent, Identifier];
    MacroArgExpression: MacroArg -> [Expression];
    MacroArgString: MacroArg -> [LiteralString];
    ParentAssign: ParentExpression -> [Lp, Identifier, Equal, Expression, Rp];
    ParentFunctionDef: ParentExpression -> [Lp, Identifier, Lp, ParameterList, Rp, Equal, Expression, Rp];
    ParentAssignString: ParentExpression -> [Lp, Identifier, Equal, LiteralString, Rp];
    ExpressionTerm: Expression -> [Term];
    ExpressionPlus: Expression -> [Term, Plus, Expression];
    ExpressionMinus: Expression -> [Term, Minus, Expression];
    TermFactor: Term -> [Factor];
    TermMult: Term -> [Factor, Mult, Term];
    TermDiv: Term -> [Factor, Div, Term];
    FactorNeg: Factor -> [Minus, Factor];
    FactorPos: Factor -> [Plus, Factor];
    FactorNumber: Factor -> [FpNumber];
    FactorIdentifier: Factor -> [Identifier];
    FactorCall: Factor -> [FunctionCall];
    FactorParen: Factor -> [Lp, ExpressionList, Rp];
    FunctionCall: FunctionCall -> [Identifier, Lp, ExpressionList, Rp];
    ExpressionListOne: ExpressionList -> [Expression];
    ExpressionListMore: ExpressionList -> [Expression, Comma, ExpressionList];
    ParameterListOne: ParameterList -> [Identifier];
    ParameterListMore: ParameterList -> [Identifier, Comma, ParameterList];
    IfStmt: IfStmt -> [IfClause, ThenKw, StmtList, EndifKw];
    IfElseStmt: IfStmt -> [IfClause, ThenKw, StmtList, ElseKw, StmtList, EndifKw];
    IfClause: IfClause -> [IfKw, Lp, Condition, Rp];
    IfDefClause: IfClause -> [IfDefKw, Lp, Identifier, Rp];
    ConditionExpression: Condition -> [Expression];
    ConditionComparison: Condition -> [Expression, Comparison, Expression];
    ForStmt: ForStmt -> [ForKw, Identifier, Equal, Expression, ToKw, Expression, DoKw, StmtList, EnddoKw];
    ForStmtStep: ForStmt -> [ForKw, Identifier, Equal, Expression, ToKw, Expression, StepKw, Expression, DoKw, StmtList, EnddoKw];
}

impl Production {
    /// The 1-based identifier of this production.
    #[must_use]
    pub fn id(self) -> u16 {
        self as u16 + 1
    }

    /// Looks up a production by its identifier.
    #[must_use]
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.get(usize::from(id.checked_sub(1)?)).copied()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ->", self.id(), self.lhs())?;
        for symbol in self.rhs() {
            write!(f, " {symbol}")?;
        }
        Ok(())
    }
}

/// Renders the whole grammar, one production per line.
#[must_use]
pub fn grammar_listing() -> String {
    let mut out = String::new();
    for production in Production::ALL {
        out.push_str(&production.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_declaration_order() {
        for (index, production) in Production::ALL.iter().enumerate() {
            assert_eq!(usize::from(production.id()), index + 1);
            assert_eq!(Production::from_id(production.id()), Some(*production));
        }
        assert_eq!(Production::from_id(0), None);
    }

    #[test]
    fn test_lhs_is_nonterminal() {
        assert!(Production::ALL.iter().all(|p| p.lhs().is_nonterminal()));
        assert!(Production::ALL.iter().all(|p| !p.rhs().is_empty()));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Production::InputString.to_string(),
            "20: <input> -> at literal_string"
        );
        assert!(grammar_listing().starts_with("1: <start> -> <macro_file> eoi\n"));
    }
}
