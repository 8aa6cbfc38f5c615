//! Guard consistency: `DO("x")` must be closed by `ENDDO("x")` and
//! `MACRO Mname.mac` by `ENDMACRO Mname.mac`.
//!
//! The checker keeps one slot per construct kind rather than a stack. Each
//! construct fills and compares its slot before its body is visited, so
//! nesting never observes a stale value.

use alint_syntax::syntax::views::{ForLoop, MacroDefinition};
use alint_syntax::{Leaf, Node, Symbol};
use smol_str::SmolStr;

use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode};

/// Checks every `FOR` loop and macro definition of `tree`.
#[must_use]
pub fn check_guards(tree: &Node) -> Vec<Diagnostic> {
    let mut checker = GuardChecker::default();
    let mut stack = vec![Visit::Node(tree)];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Leaf(leaf) | Visit::Node(Node::Leaf(leaf)) => checker.leaf(leaf),
            Visit::Node(node) => stack.extend(visit_order(node).into_iter().rev()),
        }
    }
    checker.diagnostics.finish()
}

/// Strips `prefix` and `suffix` from a keyword lexeme to get its guard.
fn guard_value<'a>(text: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let text = text.strip_prefix(prefix).unwrap_or(text);
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Guard of a `DO("...")` lexeme.
#[must_use]
pub fn do_guard(text: &str) -> &str {
    guard_value(text, "DO(\"", "\")")
}

/// Guard of an `ENDDO("...")` lexeme.
#[must_use]
pub fn enddo_guard(text: &str) -> &str {
    guard_value(text, "ENDDO(\"", "\")")
}

enum Visit<'a> {
    Node(&'a Node),
    Leaf(&'a Leaf),
}

/// Children worth visiting, in visit order. Expressions and calls hold no
/// guards and are skipped.
fn visit_order(node: &Node) -> Vec<Visit<'_>> {
    match node.symbol() {
        Symbol::Start | Symbol::MacroFile | Symbol::Stmt | Symbol::StmtList => {
            node.children().iter().map(Visit::Node).collect()
        }
        Symbol::ForStmt => ForLoop::cast(node).map_or_else(Vec::new, |view| {
            vec![
                Visit::Leaf(view.do_kw),
                Visit::Leaf(view.enddo_kw),
                Visit::Node(view.body),
            ]
        }),
        Symbol::MacroDef => MacroDefinition::cast(node).map_or_else(Vec::new, |view| {
            vec![
                Visit::Leaf(view.name),
                Visit::Leaf(view.closing_name),
                Visit::Node(view.body),
            ]
        }),
        Symbol::IfStmt => node
            .children()
            .iter()
            .filter(|child| child.symbol() == Symbol::StmtList)
            .map(Visit::Node)
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Default)]
struct GuardChecker {
    do_guard: SmolStr,
    macro_name: Option<SmolStr>,
    diagnostics: DiagnosticBuilder,
}

impl GuardChecker {
    fn leaf(&mut self, leaf: &Leaf) {
        match leaf.symbol {
            Symbol::DoKw => self.do_guard = SmolStr::new(do_guard(&leaf.text)),
            Symbol::EnddoKw => {
                let closing = enddo_guard(&leaf.text);
                if closing != self.do_guard {
                    self.diagnostics.add(
                        DiagnosticCode::DoGuardMismatch,
                        &leaf.coordinate,
                        format!(
                            "DO \"{}\" doesn't match ENDDO \"{closing}\" guard value",
                            self.do_guard
                        ),
                    );
                }
            }
            Symbol::InlineMacroName => match self.macro_name.take() {
                None => self.macro_name = Some(leaf.text.clone()),
                Some(opening) if opening != leaf.text => self.diagnostics.add(
                    DiagnosticCode::MacroGuardMismatch,
                    &leaf.coordinate,
                    format!(
                        "MACRO \"{opening}\" doesn't match ENDMACRO \"{}\" guard value.",
                        leaf.text
                    ),
                ),
                Some(_) => {}
            },
            _ => {}
        }
    }
}
