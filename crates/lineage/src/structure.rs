//! Lineage structure building.
//!
//! Turns the flat table list into a [`DependencyGraph`] (for validation and
//! root detection) and expands it into a [`TreeNode`] rooted at the unique
//! table nothing depends on. The tree borrows the input nodes and lives only
//! for the duration of a single layout computation.

mod graph;

pub(crate) use graph::DependencyGraph;

use crate::{error::LayoutError, semantic::TableNode};

/// A table node together with its resolved dependencies, in `deps` order.
///
/// A table referenced by several parents is expanded once per parent, so the
/// same underlying [`TableNode`] can appear in multiple subtrees.
#[derive(Debug)]
pub(crate) struct TreeNode<'a> {
    node: &'a TableNode,
    children: Vec<TreeNode<'a>>,
}

impl<'a> TreeNode<'a> {
    /// Returns the table identifier of this tree node.
    pub(crate) fn table(&self) -> &'a str {
        self.node.table()
    }

    /// Returns the child subtrees, one per dependency, in `deps` order.
    pub(crate) fn children(&self) -> &[TreeNode<'a>] {
        &self.children
    }

    /// Returns the number of tree nodes in this subtree, including itself.
    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Reconstructs the lineage tree implied by the dependency graph.
///
/// Returns `None` for an empty graph. Fails with
/// [`LayoutError::NoRootCandidate`] when no table is free of incoming
/// references, and with [`LayoutError::CircularDependency`] when expansion
/// re-enters a table already on the current path.
pub(crate) fn build_tree<'a>(
    graph: &DependencyGraph<'a>,
) -> Result<Option<TreeNode<'a>>, LayoutError> {
    if graph.is_empty() {
        return Ok(None);
    }

    let Some(root) = graph.first_root() else {
        return Err(LayoutError::NoRootCandidate);
    };

    let mut path = Vec::new();
    let tree = expand(graph, root, &mut path)?;
    Ok(Some(tree))
}

/// Recursively resolves a node's dependencies into subtrees.
///
/// `path` holds the tables currently being expanded; re-entering one means
/// the input has a cycle below the chosen root.
fn expand<'a>(
    graph: &DependencyGraph<'a>,
    node: &'a TableNode,
    path: &mut Vec<&'a str>,
) -> Result<TreeNode<'a>, LayoutError> {
    if path.contains(&node.table()) {
        return Err(LayoutError::CircularDependency {
            table: node.table().to_string(),
        });
    }
    path.push(node.table());

    let mut children = Vec::with_capacity(node.deps().len());
    for dep in node.deps() {
        let child = graph
            .node(dep)
            .ok_or_else(|| LayoutError::UnresolvedDependency {
                table: node.table().to_string(),
                dependency: dep.clone(),
            })?;
        children.push(expand(graph, child, path)?);
    }

    path.pop();
    Ok(TreeNode { node, children })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Engine;

    fn table(name: &str, deps: &[&str]) -> TableNode {
        TableNode::new(
            name,
            deps.iter().map(|dep| dep.to_string()).collect(),
            Engine::MergeTree,
        )
    }

    fn tree_for(nodes: &[TableNode]) -> Result<Option<TreeNode<'_>>, LayoutError> {
        let graph = DependencyGraph::from_nodes(nodes)?;
        build_tree(&graph)
    }

    #[test]
    fn test_empty_input_has_no_tree() {
        let tree = tree_for(&[]).unwrap();
        assert!(tree.is_none());
    }

    #[test]
    fn test_single_node_is_a_leaf_root() {
        let nodes = vec![table("events", &[])];
        let tree = tree_for(&nodes).unwrap().unwrap();

        assert_eq!(tree.table(), "events");
        assert!(tree.children().is_empty());
    }

    #[test]
    fn test_chain_expands_in_deps_order() {
        let nodes = vec![
            table("app", &["mid"]),
            table("mid", &["raw"]),
            table("raw", &[]),
        ];
        let tree = tree_for(&nodes).unwrap().unwrap();

        assert_eq!(tree.table(), "app");
        assert_eq!(tree.children().len(), 1);
        assert_eq!(tree.children()[0].table(), "mid");
        assert_eq!(tree.children()[0].children()[0].table(), "raw");
        assert_eq!(tree.count(), 3);
    }

    #[test]
    fn test_children_follow_deps_order() {
        let nodes = vec![
            table("root", &["left", "right"]),
            table("left", &[]),
            table("right", &[]),
        ];
        let tree = tree_for(&nodes).unwrap().unwrap();

        let children: Vec<&str> = tree.children().iter().map(TreeNode::table).collect();
        assert_eq!(children, vec!["left", "right"]);
    }

    #[test]
    fn test_shared_dependency_is_expanded_per_parent() {
        // Diamond: both branches are produced from the same raw table, so
        // the raw table shows up under each branch.
        let nodes = vec![
            table("top", &["left", "right"]),
            table("left", &["raw"]),
            table("right", &["raw"]),
            table("raw", &[]),
        ];
        let tree = tree_for(&nodes).unwrap().unwrap();

        assert_eq!(tree.count(), 5);
        assert_eq!(tree.children()[0].children()[0].table(), "raw");
        assert_eq!(tree.children()[1].children()[0].table(), "raw");
    }

    #[test]
    fn test_first_root_wins_when_ambiguous() {
        let nodes = vec![
            table("first_root", &["shared"]),
            table("second_root", &["shared"]),
            table("shared", &[]),
        ];
        let tree = tree_for(&nodes).unwrap().unwrap();

        assert_eq!(tree.table(), "first_root");
    }

    #[test]
    fn test_dangling_dependency_is_a_hard_error() {
        let nodes = vec![table("app", &["missing"])];
        let err = tree_for(&nodes).unwrap_err();

        assert_eq!(
            err,
            LayoutError::UnresolvedDependency {
                table: "app".into(),
                dependency: "missing".into(),
            }
        );
    }

    #[test]
    fn test_cycle_with_no_top_fails() {
        let nodes = vec![table("a", &["b"]), table("b", &["a"])];
        let err = tree_for(&nodes).unwrap_err();

        assert_eq!(err, LayoutError::NoRootCandidate);
    }

    #[test]
    fn test_cycle_below_the_root_fails() {
        let nodes = vec![table("top", &["a"]), table("a", &["b"]), table("b", &["a"])];
        let err = tree_for(&nodes).unwrap_err();

        assert_eq!(err, LayoutError::CircularDependency { table: "a".into() });
    }
}
