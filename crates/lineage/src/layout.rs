//! Depth-first layout assignment and role classification.
//!
//! A pre-order walk over the lineage tree assigns every reachable table a
//! [`LayoutEntry`] of `(depth, index)`: depth starts at 1 for the root and
//! grows by one per level, index is the table's 0-based position within its
//! parent's `deps` when the parent declares more than one dependency, and 1
//! otherwise. The geometry mapping (`index * horizontal_spacing`,
//! `depth * vertical_spacing`) happens when the chart is assembled.

use crate::{
    semantic::{Role, TableNode},
    structure::TreeNode,
};

/// Computed placement facts for one reachable table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LayoutEntry<'a> {
    table: &'a str,
    depth: usize,
    index: usize,
}

impl<'a> LayoutEntry<'a> {
    /// Returns the table identifier this entry belongs to.
    pub(crate) fn table(&self) -> &'a str {
        self.table
    }

    /// Returns the distance from the root, starting at 1.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the sibling slot under the table's parent.
    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

/// Walks the tree in pre-order and produces one entry per visited node.
///
/// Tables unreachable from the root get no entry. A table expanded under
/// several parents yields several entries; consumers keep the first.
pub(crate) fn assign_entries<'a>(
    root: &TreeNode<'a>,
    nodes: &'a [TableNode],
) -> Vec<LayoutEntry<'a>> {
    let mut entries = Vec::new();
    visit(root, nodes, 1, &mut entries);
    entries
}

fn visit<'a>(
    tree: &TreeNode<'a>,
    nodes: &'a [TableNode],
    depth: usize,
    entries: &mut Vec<LayoutEntry<'a>>,
) {
    // The sibling slot only disambiguates when the parent declares more than
    // one dependency; everything else (including the root) keeps slot 1.
    let mut index = 1;
    if let Some(parent) = nodes.iter().find(|node| node.depends_on(tree.table())) {
        if parent.deps().len() > 1 {
            if let Some(position) = parent.deps().iter().position(|dep| dep == tree.table()) {
                index = position;
            }
        }
    }

    entries.push(LayoutEntry {
        table: tree.table(),
        depth,
        index,
    });

    for child in tree.children() {
        visit(child, nodes, depth + 1, entries);
    }
}

/// Classifies a table's presentation role within the chart.
///
/// Terminal tables (no dependencies, chart larger than one table) are
/// `Output`. A non-terminal table is `Input` when the chart is a single
/// table, or when at least one *other* table does not list it among its
/// dependencies. Only a table that every other table depends on ends up
/// `Default`. The input rule is a compatibility contract with the renderer
/// this chart feeds, not a graph-theoretic root test.
pub(crate) fn classify(node: &TableNode, nodes: &[TableNode]) -> Role {
    if node.deps().is_empty() && nodes.len() > 1 {
        return Role::Output;
    }

    let is_input = nodes.len() == 1
        || nodes
            .iter()
            .filter(|other| other.table() != node.table())
            .any(|other| !other.depends_on(node.table()));
    if is_input { Role::Input } else { Role::Default }
}
