//! Lineage - a layout engine for business-table lineage charts.
//!
//! Given a flat list of [`TableNode`] records, each declaring which tables it
//! is produced from, the engine reconstructs the implied lineage tree,
//! assigns every reachable table a depth and sibling slot, classifies each
//! table's presentation role, and emits positioned node and edge descriptors
//! for an external graph renderer.

pub mod config;

mod chart;
mod error;
mod geometry;
mod layout;
mod semantic;
mod structure;

pub use chart::{Chart, EdgeDescriptor, NodeDescriptor};
pub use error::LayoutError;
pub use geometry::{Point, Size};
pub use semantic::{Engine, Role, TableNode};

use std::collections::HashMap;

use log::{debug, info, trace, warn};

use config::AppConfig;
use layout::LayoutEntry;
use structure::DependencyGraph;

/// Builder for computing lineage chart layouts.
///
/// The computation is a pure function of the input list and the
/// configuration: it performs no I/O and allocates fresh structures on each
/// call, so a builder can be reused freely.
///
/// # Examples
///
/// ```
/// use lineage::{ChartBuilder, Engine, TableNode, config::AppConfig};
///
/// let tables = vec![
///     TableNode::new("app_view", vec!["raw_events".into()], Engine::Distributed),
///     TableNode::new("raw_events", vec![], Engine::Kafka),
/// ];
///
/// let builder = ChartBuilder::new(AppConfig::default());
/// let chart = builder.build_chart(&tables).expect("valid lineage");
///
/// assert_eq!(chart.nodes().len(), 2);
/// assert_eq!(chart.edges().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Creates a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Computes the positioned chart for the given table list.
    ///
    /// An empty list produces an empty chart. Tables unreachable from the
    /// chosen root are absent from the output; callers can compare
    /// `chart.nodes().len()` against the input length to detect this.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the input is malformed: a dependency
    /// names a missing table, no root candidate exists, or expansion runs
    /// into a cycle.
    pub fn build_chart(&self, nodes: &[TableNode]) -> Result<Chart, LayoutError> {
        if nodes.is_empty() {
            debug!("No tables to lay out");
            return Ok(Chart::default());
        }

        info!(tables_count = nodes.len(); "Building lineage graph");
        let graph = DependencyGraph::from_nodes(nodes)?;

        let Some(tree) = structure::build_tree(&graph)? else {
            return Ok(Chart::default());
        };
        debug!(root_table = tree.table(); "Lineage tree built");

        let entries = layout::assign_entries(&tree, nodes);
        trace!(entries:?; "Layout entries");

        let chart = self.assemble(nodes, &entries);
        info!(
            nodes_count = chart.nodes().len(),
            edges_count = chart.edges().len();
            "Chart layout calculated",
        );

        Ok(chart)
    }

    /// Maps layout entries onto positioned descriptors, in input order.
    fn assemble(&self, nodes: &[TableNode], entries: &[LayoutEntry<'_>]) -> Chart {
        // A table expanded under several parents has several entries; the
        // first one (pre-order) wins.
        let mut entry_map: HashMap<&str, &LayoutEntry<'_>> =
            HashMap::with_capacity(entries.len());
        for entry in entries {
            entry_map.entry(entry.table()).or_insert(entry);
        }

        let layout_config = self.config.layout();
        let style = self.config.style();

        let mut node_descriptors = Vec::with_capacity(nodes.len());
        let mut edge_descriptors = Vec::new();

        for node in nodes {
            let Some(entry) = entry_map.get(node.table()) else {
                debug!(table = node.table(); "Table unreachable from root; skipping");
                continue;
            };

            let role = layout::classify(node, nodes);
            let position = Point::new(
                entry.index() as f32 * layout_config.horizontal_spacing(),
                entry.depth() as f32 * layout_config.vertical_spacing(),
            );
            let size = Size::new(style.node_width(), style.node_height());

            node_descriptors.push(NodeDescriptor::new(
                node.table(),
                role,
                position,
                size,
                style.background(node.engine()),
            ));

            for dep in node.deps() {
                edge_descriptors.push(EdgeDescriptor::new(node.table(), dep));
            }
        }

        if node_descriptors.len() < nodes.len() {
            warn!(
                laid_out = node_descriptors.len(),
                total = nodes.len();
                "Some tables were unreachable from the root and were skipped",
            );
        }

        Chart::new(node_descriptors, edge_descriptors)
    }
}
