//! Typed read-only views over interior nodes.
//!
//! Each view is selected by production and hands out the children of one
//! grammar shape by name, so passes never index into child lists themselves.

use super::{Leaf, Node, Production};

fn leaf(node: &Node) -> Option<&Leaf> {
    node.as_leaf()
}

/// A `FOR ... TO ... [STEP ...] DO("...") ... ENDDO("...")` statement.
#[derive(Debug, Clone, Copy)]
pub struct ForLoop<'a> {
    /// `FOR`
    pub for_kw: &'a Leaf,
    /// The loop variable.
    pub variable: &'a Leaf,
    /// The `=` marker.
    pub equal: &'a Leaf,
    /// Initial value.
    pub init: &'a Node,
    /// `TO`
    pub to_kw: &'a Leaf,
    /// Stop value.
    pub stop: &'a Node,
    /// `STEP` and the step value, when present.
    pub step: Option<(&'a Leaf, &'a Node)>,
    /// `DO("guard")`
    pub do_kw: &'a Leaf,
    /// The loop body.
    pub body: &'a Node,
    /// `ENDDO("guard")`
    pub enddo_kw: &'a Leaf,
}

impl<'a> ForLoop<'a> {
    /// Views `node` as a for statement.
    #[must_use]
    pub fn cast(node: &'a Node) -> Option<Self> {
        match (node.production()?, node.children()) {
            (
                Production::ForStmt,
                [for_kw, variable, equal, init, to_kw, stop, do_kw, body, enddo_kw],
            ) => Some(Self {
                for_kw: leaf(for_kw)?,
                variable: leaf(variable)?,
                equal: leaf(equal)?,
                init,
                to_kw: leaf(to_kw)?,
                stop,
                step: None,
                do_kw: leaf(do_kw)?,
                body,
                enddo_kw: leaf(enddo_kw)?,
            }),
            (
                Production::ForStmtStep,
                [for_kw, variable, equal, init, to_kw, stop, step_kw, step, do_kw, body, enddo_kw],
            ) => Some(Self {
                for_kw: leaf(for_kw)?,
                variable: leaf(variable)?,
                equal: leaf(equal)?,
                init,
                to_kw: leaf(to_kw)?,
                stop,
                step: Some((leaf(step_kw)?, step)),
                do_kw: leaf(do_kw)?,
                body,
                enddo_kw: leaf(enddo_kw)?,
            }),
            _ => None,
        }
    }
}

/// An `IF`/`IFDEFINED` statement with an optional `ELSE` branch.
#[derive(Debug, Clone, Copy)]
pub struct IfStatement<'a> {
    /// The `<if_clause>` node.
    pub clause: &'a Node,
    /// `THEN`
    pub then_kw: &'a Leaf,
    /// Statements of the `THEN` branch.
    pub then_body: &'a Node,
    /// `ELSE` and its statements, when present.
    pub else_branch: Option<(&'a Leaf, &'a Node)>,
    /// `ENDIF`
    pub endif_kw: &'a Leaf,
}

impl<'a> IfStatement<'a> {
    /// Views `node` as an if statement.
    #[must_use]
    pub fn cast(node: &'a Node) -> Option<Self> {
        match (node.production()?, node.children()) {
            (Production::IfStmt, [clause, then_kw, then_body, endif_kw]) => Some(Self {
                clause,
                then_kw: leaf(then_kw)?,
                then_body,
                else_branch: None,
                endif_kw: leaf(endif_kw)?,
            }),
            (Production::IfElseStmt, [clause, then_kw, then_body, else_kw, else_body, endif_kw]) => {
                Some(Self {
                    clause,
                    then_kw: leaf(then_kw)?,
                    then_body,
                    else_branch: Some((leaf(else_kw)?, else_body)),
                    endif_kw: leaf(endif_kw)?,
                })
            }
            _ => None,
        }
    }
}

/// A `MACRO Mname.mac ... endmacro ENDMACRO Mname.mac` definition.
#[derive(Debug, Clone, Copy)]
pub struct MacroDefinition<'a> {
    /// `MACRO`
    pub macro_kw: &'a Leaf,
    /// The opening inline macro name.
    pub name: &'a Leaf,
    /// The macro body.
    pub body: &'a Node,
    /// Lower-case `endmacro` closing the body.
    pub endmacro_kw: &'a Leaf,
    /// `ENDMACRO`
    pub enddefmacro_kw: &'a Leaf,
    /// The closing inline macro name.
    pub closing_name: &'a Leaf,
}

impl<'a> MacroDefinition<'a> {
    /// Views `node` as a macro definition.
    #[must_use]
    pub fn cast(node: &'a Node) -> Option<Self> {
        match (node.production()?, node.children()) {
            (
                Production::MacroDef,
                [macro_kw, name, body, endmacro_kw, enddefmacro_kw, closing_name],
            ) => Some(Self {
                macro_kw: leaf(macro_kw)?,
                name: leaf(name)?,
                body,
                endmacro_kw: leaf(endmacro_kw)?,
                enddefmacro_kw: leaf(enddefmacro_kw)?,
                closing_name: leaf(closing_name)?,
            }),
            _ => None,
        }
    }
}

/// Iterator over the statements of a `<stmt_list>`, walking the right spine
/// without recursion.
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    list: Option<&'a Node>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list.take()?;
        match (list.production()?, list.children()) {
            (Production::StmtListOne, [stmt]) => Some(stmt),
            (Production::StmtListMore, [stmt, rest]) => {
                self.list = Some(rest);
                Some(stmt)
            }
            _ => None,
        }
    }
}

/// Statements of a `<stmt_list>` node. Any other node yields nothing.
#[must_use]
pub fn statements(list: &Node) -> Statements<'_> {
    Statements { list: Some(list) }
}

/// The top-level statement list of a `<start>` tree, if the file has one.
#[must_use]
pub fn file_statements(root: &Node) -> Option<&Node> {
    let macro_file = match (root.production()?, root.children()) {
        (Production::Start, [macro_file, _eoi]) => macro_file,
        _ => return None,
    };
    match (macro_file.production()?, macro_file.children()) {
        (Production::MacroFile, [list, _endmacro]) => Some(list),
        _ => None,
    }
}
