//! Files referenced by a macro file.
//!
//! Global and local macro calls resolve to a path by prefixing the macro name
//! with the matching directory. Input statements (`@name`, `@"name"`) name a
//! file directly. Inline macros live in the calling file and resolve to
//! nothing.

use std::collections::BTreeSet;

use alint_syntax::syntax::views::{ForLoop, IfStatement, MacroDefinition};
use alint_syntax::{parse, Node, ParseError, Production, SourceError, Symbol, TokenSource};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::MacroDirs;

/// Paths referenced directly by `tree`, sorted and deduplicated.
#[must_use]
pub fn direct_dependencies(tree: &Node, dirs: &MacroDirs) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        match node {
            Node::Leaf(leaf) => match leaf.symbol {
                Symbol::GlobalMacroName => {
                    found.insert(format!("{}{}", dirs.global, leaf.text));
                }
                Symbol::LocalMacroName => {
                    found.insert(format!("{}{}", dirs.local, leaf.text));
                }
                _ => {}
            },
            Node::Interior(_) => match node.symbol() {
                Symbol::Start
                | Symbol::MacroFile
                | Symbol::Stmt
                | Symbol::StmtList
                | Symbol::MacroName => stack.extend(node.children()),
                Symbol::MacroCall => stack.extend(node.children().first()),
                Symbol::Input => found.extend(input_path(node)),
                Symbol::ForStmt => stack.extend(ForLoop::cast(node).map(|view| view.body)),
                Symbol::MacroDef => {
                    stack.extend(MacroDefinition::cast(node).map(|view| view.body));
                }
                Symbol::IfStmt => {
                    if let Some(view) = IfStatement::cast(node) {
                        stack.push(view.then_body);
                        stack.extend(view.else_branch.map(|(_, body)| body));
                    }
                }
                _ => {}
            },
        }
    }
    found
}

/// The file named by an input statement, quotes removed.
fn input_path(node: &Node) -> Option<String> {
    let name = match (node.production()?, node.children()) {
        (Production::InputIdentifier | Production::InputString, [_at, name]) => name.as_leaf()?,
        _ => return None,
    };
    let text = name.text.as_str();
    let text = match name.symbol {
        Symbol::LiteralString => text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(text),
        _ => text,
    };
    Some(text.to_string())
}

/// A file of the walk could not be analysed.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The file has a syntax error.
    #[error("{coord}: {0}", coord = .0.coordinate)]
    Parse(#[from] ParseError),
}

/// Reads `path` into `source` and parses it.
///
/// # Errors
///
/// Returns [`FileError`] if the file cannot be read or has a syntax error.
/// Lexical errors are left in `source`.
pub fn load_and_parse(source: &mut TokenSource, path: &str) -> Result<Node, FileError> {
    source.reset(path)?;
    Ok(parse(source)?)
}

/// Callbacks invoked for every file reached by [`walk_dependencies`].
///
/// `source` holds the file being reported; it is reset before the next file
/// is read, so anything needed later must be copied out.
pub trait WalkVisitor {
    /// `path` was parsed into `tree`.
    fn parsed(&mut self, path: &str, source: &TokenSource, tree: &Node);

    /// `path` could not be read or parsed.
    fn failed(&mut self, path: &str, source: &TokenSource, error: &FileError);
}

impl WalkVisitor for () {
    fn parsed(&mut self, _path: &str, _source: &TokenSource, _tree: &Node) {}

    fn failed(&mut self, _path: &str, _source: &TokenSource, _error: &FileError) {}
}

/// Outcome of a transitive walk.
#[derive(Debug, Default)]
pub struct DependencyWalk {
    /// Every path reached, the root included.
    pub visited: BTreeSet<String>,
    /// Paths that could not be analysed, in walk order.
    pub failures: Vec<(String, FileError)>,
}

/// Walks the dependency graph from `root`, reading each file once.
///
/// Every reached path is reported to `visitor`. A file that cannot be read or
/// parsed stays in the visited set, contributes no dependencies and does not
/// stop the walk.
pub fn walk_dependencies(
    root: &str,
    dirs: &MacroDirs,
    source: &mut TokenSource,
    visitor: &mut impl WalkVisitor,
) -> DependencyWalk {
    let mut seen = FxHashSet::default();
    let mut pending = vec![root.to_string()];
    seen.insert(root.to_string());
    let mut failures = Vec::new();

    while let Some(path) = pending.pop() {
        debug!(%path, "walking file");
        match load_and_parse(source, &path) {
            Ok(tree) => {
                visitor.parsed(&path, source, &tree);
                for dependency in direct_dependencies(&tree, dirs) {
                    if seen.insert(dependency.clone()) {
                        pending.push(dependency);
                    }
                }
            }
            Err(error) => {
                visitor.failed(&path, source, &error);
                failures.push((path, error));
            }
        }
    }

    info!(root, files = seen.len(), failures = failures.len(), "dependency walk finished");
    DependencyWalk {
        visited: seen.into_iter().collect(),
        failures,
    }
}

/// Paths reachable from `root`, the root included.
#[must_use]
pub fn transitive_dependencies(root: &str, dirs: &MacroDirs) -> BTreeSet<String> {
    let mut source = TokenSource::new();
    walk_dependencies(root, dirs, &mut source, &mut ()).visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependencies_of(text: &str) -> Vec<String> {
        let mut source = TokenSource::new();
        source.load_str("t.mac", text);
        let tree = parse(&source).unwrap();
        direct_dependencies(&tree, &MacroDirs::new("/g/", "/l/"))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_macro_names_are_prefixed() {
        assert_eq!(
            dependencies_of("lib/util.mac()\n_local/step.mac(1)\nendmacro\n"),
            vec!["/g/lib/util.mac", "/l/_local/step.mac"]
        );
    }

    #[test]
    fn test_inputs_are_unquoted() {
        assert_eq!(
            dependencies_of("@\"data/x.in\"\n@plain\nendmacro\n"),
            vec!["data/x.in", "plain"]
        );
    }

    #[test]
    fn test_inline_macros_are_ignored() {
        assert!(dependencies_of("Mlocal.mac()\nendmacro\n").is_empty());
    }

    #[test]
    fn test_expressions_are_not_searched() {
        assert!(dependencies_of("(x = f(1))\nendmacro\n").is_empty());
    }
}
