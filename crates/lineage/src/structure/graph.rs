//! Dependency graph over the flat table list.
//!
//! Wraps a petgraph [`DiGraph`] whose edges run from a table to each of its
//! dependencies. Building the graph validates every `deps` entry; root
//! candidates are the nodes with no incoming edge (nothing is produced from
//! them).

use std::collections::HashMap;

use log::warn;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};

use crate::{error::LayoutError, semantic::TableNode};

/// Directed dependency graph borrowing the input table list.
#[derive(Debug)]
pub(crate) struct DependencyGraph<'a> {
    graph: DiGraph<&'a TableNode, ()>,
    node_id_map: HashMap<&'a str, NodeIndex>,
}

impl<'a> DependencyGraph<'a> {
    /// Builds the graph from the flat table list.
    ///
    /// Nodes are inserted in input order, which `roots` relies on. Fails with
    /// [`LayoutError::UnresolvedDependency`] when a `deps` entry names a
    /// table missing from the list.
    pub(crate) fn from_nodes(nodes: &'a [TableNode]) -> Result<Self, LayoutError> {
        let mut graph = DiGraph::with_capacity(nodes.len(), nodes.len());
        let mut node_id_map = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let idx = graph.add_node(node);
            node_id_map.insert(node.table(), idx);
        }

        for node in nodes {
            let source = node_id_map[node.table()];
            for dep in node.deps() {
                let target = node_id_map.get(dep.as_str()).copied().ok_or_else(|| {
                    LayoutError::UnresolvedDependency {
                        table: node.table().to_string(),
                        dependency: dep.clone(),
                    }
                })?;
                graph.add_edge(source, target, ());
            }
        }

        Ok(Self { graph, node_id_map })
    }

    /// Checks whether the graph has no nodes at all.
    pub(crate) fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Looks up a table node by identifier.
    pub(crate) fn node(&self, table: &str) -> Option<&'a TableNode> {
        self.node_id_map
            .get(table)
            .and_then(|&idx| self.graph.node_weight(idx))
            .copied()
    }

    /// Returns an iterator over root candidates in input order.
    ///
    /// A root candidate is a table with no incoming edges, meaning no other
    /// table lists it among its dependencies.
    pub(crate) fn roots(&self) -> impl Iterator<Item = &'a TableNode> + '_ {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count()
                    == 0
            })
            .map(|idx| self.graph[idx])
    }

    /// Returns the first root candidate in input order, if any.
    ///
    /// Multiple candidates are a data quality concern upstream; the extra
    /// ones are reported at warn level and ignored.
    pub(crate) fn first_root(&self) -> Option<&'a TableNode> {
        let mut roots = self.roots();
        let first = roots.next()?;

        let extra_candidates = roots.count();
        if extra_candidates > 0 {
            warn!(
                root_table = first.table(),
                extra_candidates;
                "Multiple root candidates; using the first in input order",
            );
        }

        Some(first)
    }
}
