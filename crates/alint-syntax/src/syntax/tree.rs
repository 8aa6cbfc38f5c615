//! Owned parse tree.
//!
//! A tree is either a leaf (one lexeme) or an interior node built by one
//! production. Position accessors are derived by walking to the first or
//! last leaf; nothing positional is cached on interior nodes.

use std::fmt::{self, Write as _};
use std::path::Path;
use std::sync::Arc;

use smol_str::SmolStr;

use super::{Production, Symbol};

/// 1-based position of a lexeme within one file's scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LexemeId(u32);

impl LexemeId {
    /// The id of the first lexeme of a file.
    pub const FIRST: Self = Self(1);

    /// Creates an id from its 1-based value. Returns `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// The 1-based value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The 0-based index into the lexeme and whitespace tables.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The id of the following lexeme.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index + 1).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for LexemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A source position: file, 1-based line and 1-based column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// The file the position belongs to.
    pub file: Arc<Path>,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

impl Coordinate {
    /// Creates a coordinate.
    #[must_use]
    pub fn new(file: Arc<Path>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A parse tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A node built by a production.
    Interior(Interior),
    /// A single lexeme.
    Leaf(Leaf),
}

/// An interior node: the production that built it and one child per
/// right-hand-side symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interior {
    production: Production,
    children: Vec<Node>,
}

/// A leaf node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// The terminal symbol.
    pub symbol: Symbol,
    /// The literal lexeme text.
    pub text: SmolStr,
    /// The lexeme id.
    pub id: LexemeId,
    /// Where the lexeme starts.
    pub coordinate: Coordinate,
}

impl Interior {
    pub(crate) fn new(production: Production, children: Vec<Node>) -> Self {
        debug_assert_eq!(children.len(), production.rhs().len());
        Self {
            production,
            children,
        }
    }

    /// The production that built this node.
    #[must_use]
    pub fn production(&self) -> Production {
        self.production
    }

    /// The non-terminal of this node.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.production.lhs()
    }

    /// The children, in right-hand-side order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

// Statement lists are right-recursive, so a long file is a deep tree. Drop
// it with an explicit stack.
impl Drop for Interior {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(node) = stack.pop() {
            if let Node::Interior(mut inner) = node {
                stack.append(&mut inner.children);
            }
        }
    }
}

impl Node {
    /// The grammar symbol of this node.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        match self {
            Node::Interior(interior) => interior.symbol(),
            Node::Leaf(leaf) => leaf.symbol,
        }
    }

    /// The production for interior nodes.
    #[must_use]
    pub fn production(&self) -> Option<Production> {
        match self {
            Node::Interior(interior) => Some(interior.production),
            Node::Leaf(_) => None,
        }
    }

    /// The children of an interior node; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Interior(interior) => &interior.children,
            Node::Leaf(_) => &[],
        }
    }

    /// Returns the leaf, if this node is one.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Interior(_) => None,
        }
    }

    /// Returns the interior node, if this node is one.
    #[must_use]
    pub fn as_interior(&self) -> Option<&Interior> {
        match self {
            Node::Interior(interior) => Some(interior),
            Node::Leaf(_) => None,
        }
    }

    /// The leftmost leaf below this node.
    #[must_use]
    pub fn first_leaf(&self) -> &Leaf {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf,
                // No production derives the empty string.
                Node::Interior(interior) => node = &interior.children[0],
            }
        }
    }

    /// The rightmost leaf below this node.
    #[must_use]
    pub fn last_leaf(&self) -> &Leaf {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf,
                Node::Interior(interior) => node = &interior.children[interior.children.len() - 1],
            }
        }
    }

    /// Id of the first lexeme covered by this node.
    #[must_use]
    pub fn first_lexeme_id(&self) -> LexemeId {
        self.first_leaf().id
    }

    /// Id of the last lexeme covered by this node.
    #[must_use]
    pub fn last_lexeme_id(&self) -> LexemeId {
        self.last_leaf().id
    }

    /// Coordinate of the first lexeme covered by this node.
    #[must_use]
    pub fn first_coordinate(&self) -> &Coordinate {
        &self.first_leaf().coordinate
    }

    /// Coordinate of the last lexeme covered by this node.
    #[must_use]
    pub fn last_coordinate(&self) -> &Coordinate {
        &self.last_leaf().coordinate
    }

    /// Leaves in source order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Verbose dump: one node per line, two spaces of indentation per level.
    #[must_use]
    pub fn show(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            for _ in 0..depth {
                out.push_str("  ");
            }
            match node {
                Node::Leaf(leaf) => {
                    let _ = writeln!(
                        out,
                        "{} ({}, {}, {})",
                        leaf.symbol, leaf.text, leaf.id, leaf.coordinate
                    );
                }
                Node::Interior(interior) => {
                    let _ = writeln!(
                        out,
                        "{} [{}]",
                        interior.symbol(),
                        interior.production.id()
                    );
                    stack.extend(interior.children.iter().rev().map(|c| (c, depth + 1)));
                }
            }
        }
        out
    }
}

/// Iterator over the leaves of a subtree, left to right.
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(leaf) => return Some(leaf),
                Node::Interior(interior) => self.stack.extend(interior.children.iter().rev()),
            }
        }
        None
    }
}
