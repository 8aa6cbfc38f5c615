//! Statement parsing.
//!
//! Supported statements:
//! - Comments, visual comments and shell escapes
//! - Bare identifiers, numbers, strings and `*`
//! - Input: `@file`, `@"file"`
//! - Macro calls: `name.mac(arg; =var; %var)`
//! - Macro definitions: `MACRO Mname.mac ... endmacro ENDMACRO Mname.mac`
//! - Parenthesized assignments: `(x = expr)`, `(f(a, b) = expr)`
//! - IF/IFDEFINED ... THEN ... [ELSE ...] ENDIF
//! - FOR ... TO ... [STEP ...] DO("guard") ... ENDDO("guard")

use crate::syntax::{Production, Symbol};

use super::super::Parser;
use super::STMT_FIRST;

impl Parser<'_> {
    /// Parse a non-empty statement list.
    ///
    /// The list is right-recursive in the grammar. It is parsed in a loop and
    /// the nested markers are completed innermost first.
    pub(crate) fn parse_stmt_list(&mut self) {
        let mut markers = Vec::new();
        loop {
            let m = self.start();
            self.parse_statement();
            if self.failed() || !self.at_any(STMT_FIRST) {
                markers.push((m, Production::StmtListOne));
                break;
            }
            markers.push((m, Production::StmtListMore));
        }
        while let Some((m, production)) = markers.pop() {
            m.complete(self, production);
        }
    }

    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) {
        let m = self.start();
        let production = match self.nth(0) {
            Symbol::Comment => Some(Production::StmtComment),
            Symbol::VisualComment => Some(Production::StmtVisualComment),
            Symbol::ShellEscape => Some(Production::StmtShellEscape),
            Symbol::Identifier => Some(Production::StmtIdentifier),
            Symbol::FpNumber => Some(Production::StmtNumber),
            Symbol::LiteralString => Some(Production::StmtString),
            Symbol::Mult => Some(Production::StmtMult),
            _ => None,
        };
        if let Some(production) = production {
            self.bump();
            m.complete(self, production);
            return;
        }

        let production = if self.at(Symbol::At) {
            self.parse_input();
            Production::StmtInput
        } else if self.at_any(&[
            Symbol::InlineMacroName,
            Symbol::GlobalMacroName,
            Symbol::LocalMacroName,
        ]) {
            self.parse_macro_call();
            Production::StmtMacroCall
        } else if self.at(Symbol::DefmacroKw) {
            self.parse_macro_def();
            Production::StmtMacroDef
        } else if self.at(Symbol::Lp) {
            self.parse_parent_expression();
            Production::StmtParentExpression
        } else if self.at_any(&[Symbol::IfKw, Symbol::IfDefKw]) {
            self.parse_if_stmt();
            Production::StmtIf
        } else if self.at(Symbol::ForKw) {
            self.parse_for_stmt();
            Production::StmtFor
        } else {
            self.at_any(STMT_FIRST);
            self.error();
            Production::StmtIdentifier
        };
        m.complete(self, production);
    }

    /// `input -> at identifier | at literal_string`
    fn parse_input(&mut self) {
        let m = self.start();
        self.bump(); // @
        let production = if self.at(Symbol::LiteralString) {
            self.bump();
            Production::InputString
        } else {
            self.expect(Symbol::Identifier);
            Production::InputIdentifier
        };
        m.complete(self, production);
    }

    /// `MACRO Mname.mac stmt_list endmacro ENDMACRO Mname.mac`
    fn parse_macro_def(&mut self) {
        let m = self.start();
        self.bump(); // MACRO
        self.expect(Symbol::InlineMacroName);
        if !self.failed() {
            self.parse_stmt_list();
        }
        self.expect(Symbol::EndmacroKw);
        self.expect(Symbol::EnddefmacroKw);
        self.expect(Symbol::InlineMacroName);
        m.complete(self, Production::MacroDef);
    }

    /// `macro_name lp [macro_arg_list] rp`
    fn parse_macro_call(&mut self) {
        let m = self.start();
        self.parse_macro_name();
        self.expect(Symbol::Lp);
        if self.at(Symbol::Rp) {
            self.bump();
            m.complete(self, Production::MacroCallEmpty);
            return;
        }
        if !self.failed() {
            self.parse_macro_arg_list();
        }
        self.expect(Symbol::Rp);
        m.complete(self, Production::MacroCallArgs);
    }

    fn parse_macro_name(&mut self) {
        let m = self.start();
        let production = match self.nth(0) {
            Symbol::GlobalMacroName => Production::MacroNameGlobal,
            Symbol::LocalMacroName => Production::MacroNameLocal,
            _ => Production::MacroNameInline,
        };
        self.bump();
        m.complete(self, production);
    }

    /// `macro_arg (; macro_arg)*`, nested to the right.
    fn parse_macro_arg_list(&mut self) {
        let m = self.start();
        self.parse_macro_arg();
        if self.at(Symbol::Semicolon) {
            self.bump();
            self.parse_macro_arg_list();
            m.complete(self, Production::MacroArgListMore);
        } else {
            m.complete(self, Production::MacroArgListOne);
        }
    }

    fn parse_macro_arg(&mut self) {
        let m = self.start();
        let production = if self.at(Symbol::Equal) {
            self.bump();
            self.expect(Symbol::Identifier);
            Production::MacroArgEqual
        } else if self.at(Symbol::Percent) {
            self.bump();
            self.expect(Symbol::Identifier);
            Production::MacroArgPercent
        } else if self.at(Symbol::LiteralString) {
            self.bump();
            Production::MacroArgString
        } else {
            self.parse_expression();
            Production::MacroArgExpression
        };
        m.complete(self, production);
    }

    /// `( name = expr )`, `( name = "text" )` or `( name(params) = expr )`
    fn parse_parent_expression(&mut self) {
        let m = self.start();
        self.bump(); // (
        self.expect(Symbol::Identifier);

        let production = if self.at(Symbol::Lp) {
            self.bump();
            self.parse_parameter_list();
            self.expect(Symbol::Rp);
            self.expect(Symbol::Equal);
            if !self.failed() {
                self.parse_expression();
            }
            Production::ParentFunctionDef
        } else {
            self.expect(Symbol::Equal);
            if self.at(Symbol::LiteralString) {
                self.bump();
                Production::ParentAssignString
            } else {
                if !self.failed() {
                    self.parse_expression();
                }
                Production::ParentAssign
            }
        };
        self.expect(Symbol::Rp);
        m.complete(self, production);
    }

    /// `if_clause THEN stmt_list [ELSE stmt_list] ENDIF`
    fn parse_if_stmt(&mut self) {
        let m = self.start();
        self.parse_if_clause();
        self.expect(Symbol::ThenKw);
        if !self.failed() {
            self.parse_stmt_list();
        }

        let production = if self.at(Symbol::ElseKw) {
            self.bump();
            if !self.failed() {
                self.parse_stmt_list();
            }
            Production::IfElseStmt
        } else {
            Production::IfStmt
        };
        self.expect(Symbol::EndifKw);
        m.complete(self, production);
    }

    fn parse_if_clause(&mut self) {
        let m = self.start();
        if self.at(Symbol::IfDefKw) {
            self.bump();
            self.expect(Symbol::Lp);
            self.expect(Symbol::Identifier);
            self.expect(Symbol::Rp);
            m.complete(self, Production::IfDefClause);
        } else {
            self.bump(); // IF
            self.expect(Symbol::Lp);
            if !self.failed() {
                self.parse_condition();
            }
            self.expect(Symbol::Rp);
            m.complete(self, Production::IfClause);
        }
    }

    /// `FOR var = init TO stop [STEP step] DO("guard") stmt_list ENDDO("guard")`
    fn parse_for_stmt(&mut self) {
        let m = self.start();
        self.bump(); // FOR
        self.expect(Symbol::Identifier);
        self.expect(Symbol::Equal);
        if !self.failed() {
            self.parse_expression();
        }
        self.expect(Symbol::ToKw);
        if !self.failed() {
            self.parse_expression();
        }

        let production = if self.at(Symbol::StepKw) {
            self.bump();
            if !self.failed() {
                self.parse_expression();
            }
            Production::ForStmtStep
        } else {
            Production::ForStmt
        };

        self.expect(Symbol::DoKw);
        if !self.failed() {
            self.parse_stmt_list();
        }
        self.expect(Symbol::EnddoKw);
        m.complete(self, production);
    }
}
