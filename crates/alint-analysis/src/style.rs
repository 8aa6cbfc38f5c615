//! Layout conventions.
//!
//! - The statement after `THEN`, `ELSE`, `DO`, and the lexeme after `ENDDO`
//!   and `ENDIF`, start a new line. Comments and shell escapes are exempt.
//! - Loop bounds are written without inner whitespace: `i=0 TO n-1`.
//! - Comments and shell escapes start at column 1 of their own line.
//! - Parenthesized assignments hug their parentheses: `(x = 1)`.
//!
//! All checks read the whitespace table, never the tree text.

use alint_syntax::syntax::views::{ForLoop, IfStatement, MacroDefinition};
use alint_syntax::{Coordinate, Leaf, LexemeId, Node, Symbol, TokenSource};

use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode};

/// Runs every layout check on `tree`, whose lexemes come from `source`.
#[must_use]
pub fn check_style(tree: &Node, source: &TokenSource) -> Vec<Diagnostic> {
    let mut checker = StyleChecker {
        source,
        diagnostics: DiagnosticBuilder::new(),
    };
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        let next = checker.visit(node);
        stack.extend(next.into_iter().rev());
    }
    checker.diagnostics.finish()
}

struct StyleChecker<'s> {
    source: &'s TokenSource,
    diagnostics: DiagnosticBuilder,
}

impl<'s> StyleChecker<'s> {
    fn whitespace(&self, id: LexemeId) -> &'s str {
        self.source.whitespace(id).unwrap_or_default()
    }

    /// Checks `node` and returns the children to descend into.
    fn visit<'a>(&mut self, node: &'a Node) -> Vec<&'a Node> {
        match node {
            Node::Leaf(leaf) => {
                if leaf.symbol.is_comment_like() {
                    self.check_comment(leaf);
                }
                Vec::new()
            }
            Node::Interior(_) => match node.symbol() {
                Symbol::Start | Symbol::MacroFile | Symbol::Stmt | Symbol::StmtList => {
                    node.children().iter().collect()
                }
                Symbol::ForStmt => ForLoop::cast(node).map_or_else(Vec::new, |view| {
                    self.check_for(&view);
                    vec![view.body]
                }),
                Symbol::IfStmt => IfStatement::cast(node).map_or_else(Vec::new, |view| {
                    self.check_if(&view);
                    let mut bodies = vec![view.then_body];
                    bodies.extend(view.else_branch.map(|(_, body)| body));
                    bodies
                }),
                Symbol::MacroDef => {
                    MacroDefinition::cast(node).map_or_else(Vec::new, |view| vec![view.body])
                }
                Symbol::ParentExpression => {
                    self.check_parentheses(node);
                    Vec::new()
                }
                _ => Vec::new(),
            },
        }
    }

    /// Flags `keyword` when the lexeme after it stays on the same line.
    fn check_follows_on_new_line(&mut self, keyword: &Leaf, name: &str) {
        let next = keyword.id.next();
        let Some(lexeme) = self.source.lexeme(next) else {
            return;
        };
        if lexeme.symbol.is_comment_like() || self.whitespace(next).contains('\n') {
            return;
        }
        self.diagnostics.add(
            DiagnosticCode::KeywordBodyNotOnNewLine,
            &keyword.coordinate,
            format!("expression following the {name} keyword is not on a new line"),
        );
    }

    fn check_if(&mut self, view: &IfStatement<'_>) {
        self.check_follows_on_new_line(view.then_kw, "THEN");
        if let Some((else_kw, _)) = view.else_branch {
            self.check_follows_on_new_line(else_kw, "ELSE");
        }
        self.check_follows_on_new_line(view.endif_kw, "ENDIF");
    }

    fn check_for(&mut self, view: &ForLoop<'_>) {
        self.check_compact(
            view.variable.id,
            view.init.last_lexeme_id(),
            &view.variable.coordinate,
            "initialisation",
        );
        self.check_compact(
            view.stop.first_lexeme_id(),
            view.stop.last_lexeme_id(),
            view.stop.first_coordinate(),
            "stop condition",
        );
        if let Some((_, step)) = view.step {
            self.check_compact(
                step.first_lexeme_id(),
                step.last_lexeme_id(),
                step.first_coordinate(),
                "step condition",
            );
        }
        self.check_follows_on_new_line(view.do_kw, "DO");
        self.check_follows_on_new_line(view.enddo_kw, "ENDDO");
    }

    /// Flags a span whose lexemes after the first are preceded by whitespace.
    fn check_compact(
        &mut self,
        first: LexemeId,
        last: LexemeId,
        coordinate: &Coordinate,
        part: &str,
    ) {
        let mut id = first.next();
        while id <= last {
            if !self.whitespace(id).is_empty() {
                self.diagnostics.add(
                    DiagnosticCode::ForBoundSpacing,
                    coordinate,
                    format!("white spaces in the {part} of the for statement."),
                );
                return;
            }
            id = id.next();
        }
    }

    fn check_comment(&mut self, leaf: &Leaf) {
        if leaf.id == LexemeId::FIRST {
            return;
        }
        let what = if leaf.symbol == Symbol::ShellEscape {
            "shell escape"
        } else {
            "comment or visual comment"
        };
        let whitespace = self.whitespace(leaf.id);
        match whitespace.rfind('\n') {
            None => self.diagnostics.add(
                DiagnosticCode::CommentNotOnNewLine,
                &leaf.coordinate,
                format!("{what} is not on a new line."),
            ),
            Some(newline) if newline + 1 < whitespace.len() => self.diagnostics.add(
                DiagnosticCode::CommentIndented,
                &leaf.coordinate,
                format!("{what} is indented."),
            ),
            Some(_) => {}
        }
    }

    fn check_parentheses(&mut self, node: &Node) {
        let open = node.first_leaf();
        let close = node.last_leaf();
        if !self.whitespace(open.id.next()).is_empty() {
            self.diagnostics.add(
                DiagnosticCode::ParenthesisSpacing,
                &open.coordinate,
                "opening parenthese is followed by white space.",
            );
        }
        if !self.whitespace(close.id).is_empty() {
            self.diagnostics.add(
                DiagnosticCode::ParenthesisSpacing,
                &close.coordinate,
                "closing parenthese is preceded by white space.",
            );
        }
    }
}
