//! Expression parsing.
//!
//! Sums and products are right-recursive in the grammar and are built that
//! way here: `a - b - c` nests as `a - (b - c)`. The tree only records
//! structure; nothing evaluates it.

use crate::syntax::{Production, Symbol};

use super::super::Parser;
use super::EXPR_FIRST;

impl Parser<'_> {
    /// `term [(+|-) expression]`
    pub(crate) fn parse_expression(&mut self) {
        let m = self.start();
        self.parse_term();
        let production = if self.at(Symbol::Plus) {
            Production::ExpressionPlus
        } else if self.at(Symbol::Minus) {
            Production::ExpressionMinus
        } else {
            m.complete(self, Production::ExpressionTerm);
            return;
        };
        self.bump();
        self.parse_expression();
        m.complete(self, production);
    }

    fn parse_term(&mut self) {
        let m = self.start();
        self.parse_factor();
        let production = if self.at(Symbol::Mult) {
            Production::TermMult
        } else if self.at(Symbol::Div) {
            Production::TermDiv
        } else {
            m.complete(self, Production::TermFactor);
            return;
        };
        self.bump();
        self.parse_term();
        m.complete(self, production);
    }

    fn parse_factor(&mut self) {
        if self.failed() {
            return;
        }
        let m = self.start();
        let production = if self.at(Symbol::Minus) {
            self.bump();
            self.parse_factor();
            Production::FactorNeg
        } else if self.at(Symbol::Plus) {
            self.bump();
            self.parse_factor();
            Production::FactorPos
        } else if self.at(Symbol::FpNumber) {
            self.bump();
            Production::FactorNumber
        } else if self.at(Symbol::Identifier) {
            if self.nth(1) == Symbol::Lp {
                self.parse_function_call();
                Production::FactorCall
            } else {
                self.bump();
                Production::FactorIdentifier
            }
        } else if self.at(Symbol::Lp) {
            self.bump();
            self.parse_expression_list();
            self.expect(Symbol::Rp);
            Production::FactorParen
        } else {
            self.at_any(EXPR_FIRST);
            self.error();
            Production::FactorIdentifier
        };
        m.complete(self, production);
    }

    fn parse_function_call(&mut self) {
        let m = self.start();
        self.bump(); // name
        self.bump(); // (
        self.parse_expression_list();
        self.expect(Symbol::Rp);
        m.complete(self, Production::FunctionCall);
    }

    /// `expression (, expression)*`, nested to the right.
    pub(crate) fn parse_expression_list(&mut self) {
        let m = self.start();
        self.parse_expression();
        if self.at(Symbol::Comma) {
            self.bump();
            self.parse_expression_list();
            m.complete(self, Production::ExpressionListMore);
        } else {
            m.complete(self, Production::ExpressionListOne);
        }
    }

    /// `identifier (, identifier)*`, nested to the right.
    pub(crate) fn parse_parameter_list(&mut self) {
        let m = self.start();
        self.expect(Symbol::Identifier);
        if self.at(Symbol::Comma) {
            self.bump();
            self.parse_parameter_list();
            m.complete(self, Production::ParameterListMore);
        } else {
            m.complete(self, Production::ParameterListOne);
        }
    }

    /// `expression [comparison expression]`
    pub(crate) fn parse_condition(&mut self) {
        let m = self.start();
        self.parse_expression();
        if self.at(Symbol::Comparison) {
            self.bump();
            self.parse_expression();
            m.complete(self, Production::ConditionComparison);
        } else {
            m.complete(self, Production::ConditionExpression);
        }
    }
}
