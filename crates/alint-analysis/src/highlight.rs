//! HTML rendering of a parsed file.
//!
//! Whitespace is copied verbatim, so the fragment reproduces the source
//! layout inside a `<pre>` block.

use std::fmt::Write as _;

use alint_syntax::{Leaf, Node, Symbol, TokenSource};

use crate::config::MacroDirs;

/// The CSS class of a lexeme, or `None` for text that is not marked up.
fn class_of(symbol: Symbol) -> Option<&'static str> {
    match symbol {
        _ if symbol.is_keyword() => Some("keyword"),
        Symbol::InlineMacroName | Symbol::LocalMacroName => Some("macro"),
        Symbol::GlobalMacroName => Some("global-macro"),
        Symbol::Comment => Some("comment"),
        Symbol::VisualComment => Some("visual-comment"),
        Symbol::ShellEscape => Some("shell-escape"),
        Symbol::FpNumber => Some("number"),
        Symbol::LiteralString => Some("string"),
        _ => None,
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_leaf(out: &mut String, leaf: &Leaf, dirs: &MacroDirs) {
    let text = escape_html(&leaf.text);
    match class_of(leaf.symbol) {
        Some(class) if leaf.symbol == Symbol::GlobalMacroName => {
            let href = escape_html(&format!("{}{}", dirs.global, leaf.text));
            let _ = write!(
                out,
                "<a href=\"{href}\"><span class=\"{class}\">{text}</span></a>"
            );
        }
        Some(class) => {
            let _ = write!(out, "<span class=\"{class}\">{text}</span>");
        }
        None => out.push_str(&text),
    }
}

/// Renders `tree` as an HTML fragment.
#[must_use]
pub fn highlight(tree: &Node, source: &TokenSource, dirs: &MacroDirs) -> String {
    let mut out = String::with_capacity(source.text().len() * 2);
    for leaf in tree.leaves() {
        out.push_str(source.whitespace(leaf.id).unwrap_or_default());
        push_leaf(&mut out, leaf, dirs);
    }
    out
}

/// Renders `tree` as a standalone HTML page.
#[must_use]
pub fn highlight_document(tree: &Node, source: &TokenSource, dirs: &MacroDirs) -> String {
    let title = escape_html(&source.path().display().to_string());
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<pre class=\"alint\">{}</pre>\n</body>\n</html>\n",
        highlight(tree, source, dirs)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alint_syntax::parse;
    use expect_test::expect;

    fn render(text: &str) -> String {
        let mut source = TokenSource::new();
        source.load_str("t.mac", text);
        let tree = parse(&source).unwrap();
        highlight(&tree, &source, &MacroDirs::new("/repo/", "/proj/"))
    }

    #[test]
    fn test_highlight_statement_kinds() {
        expect![[r#"
<span class="comment"># a &lt;b&gt;</span>
<span class="visual-comment">##</span>
<a href="/repo/lib/x.mac"><span class="global-macro">lib/x.mac</span></a>(<span class="number">1</span>)
(s = <span class="string">&quot;q&quot;</span>)
<span class="keyword">endmacro</span>
"#]]
        .assert_eq(&render("# a <b>\n##\nlib/x.mac(1)\n(s = \"q\")\nendmacro\n"));
    }

    #[test]
    fn test_identifiers_and_operators_are_plain() {
        assert_eq!(
            render("(y = a+2)\nendmacro"),
            "(y = a+<span class=\"number\">2</span>)\n<span class=\"keyword\">endmacro</span>"
        );
    }
}
