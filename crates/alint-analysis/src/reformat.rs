//! Canonical re-indentation.
//!
//! Indentation comes only from nesting: the statement lists of a macro
//! definition, an `IF` branch and a `FOR` body are indented two spaces past
//! their construct. Line structure is kept, so running the formatter on its
//! own output changes nothing.

use alint_syntax::{Leaf, LexemeId, Node, Symbol, TokenSource};

const INDENT_WIDTH: usize = 2;

/// Reprints `tree` with canonical indentation.
#[must_use]
pub fn reformat(tree: &Node, source: &TokenSource) -> String {
    let mut out = String::with_capacity(source.text().len());
    let line_ending = line_ending(source.text());
    let mut stack = vec![(tree, 0)];
    while let Some((node, indent)) = stack.pop() {
        match node {
            Node::Leaf(leaf) => {
                let whitespace = source.whitespace(leaf.id).unwrap_or_default();
                push_whitespace(&mut out, leaf, whitespace, indent, line_ending);
                out.push_str(&leaf.text);
            }
            Node::Interior(_) => {
                let nests = matches!(
                    node.symbol(),
                    Symbol::MacroDef | Symbol::IfStmt | Symbol::ForStmt
                );
                for child in node.children().iter().rev() {
                    let child_indent = if nests && child.symbol() == Symbol::StmtList {
                        indent + INDENT_WIDTH
                    } else {
                        indent
                    };
                    stack.push((child, child_indent));
                }
            }
        }
    }
    out
}

/// `\r\n` when the file uses it, `\n` otherwise.
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn push_whitespace(
    out: &mut String,
    leaf: &Leaf,
    whitespace: &str,
    indent: usize,
    file_ending: &str,
) {
    if leaf.symbol.is_comment_like() && leaf.id != LexemeId::FIRST {
        let newlines = whitespace.matches('\n').count().clamp(1, 2);
        let ending = if whitespace.contains('\n') {
            line_ending(whitespace)
        } else {
            file_ending
        };
        for _ in 0..newlines {
            out.push_str(ending);
        }
        out.extend(std::iter::repeat_n(' ', indent));
        return;
    }
    match whitespace.rfind('\n') {
        Some(newline) => {
            out.push_str(&whitespace[..=newline]);
            out.extend(std::iter::repeat_n(' ', indent));
        }
        None => out.push_str(whitespace),
    }
}
