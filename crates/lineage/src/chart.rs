//! Positioned chart descriptors handed to an external renderer.
//!
//! These types are the output contract of the layout engine: plain data with
//! serde support, no rendering behavior of their own.

use serde::Serialize;

use crate::{
    geometry::{Point, Size},
    semantic::Role,
};

/// A fully laid-out lineage chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    nodes: Vec<NodeDescriptor>,
    edges: Vec<EdgeDescriptor>,
}

impl Chart {
    pub(crate) fn new(nodes: Vec<NodeDescriptor>, edges: Vec<EdgeDescriptor>) -> Self {
        Self { nodes, edges }
    }

    /// Returns the positioned node descriptors, in input order.
    pub fn nodes(&self) -> &[NodeDescriptor] {
        &self.nodes
    }

    /// Returns the dependency edge descriptors.
    pub fn edges(&self) -> &[EdgeDescriptor] {
        &self.edges
    }

    /// Checks whether the chart contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A positioned node ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDescriptor {
    id: String,
    role: Role,
    position: Point,
    size: Size,
    background: String,
}

impl NodeDescriptor {
    pub(crate) fn new(
        id: impl Into<String>,
        role: Role,
        position: Point,
        size: Size,
        background: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            position,
            size,
            background: background.into(),
        }
    }

    /// Returns the table identifier this descriptor represents.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the presentation role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the node's position in chart coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the suggested node dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the background color hint derived from the table's engine.
    pub fn background(&self) -> &str {
        &self.background
    }
}

/// A dependency edge between two positioned nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDescriptor {
    id: String,
    source: String,
    target: String,
}

impl EdgeDescriptor {
    pub(crate) fn new(source: &str, target: &str) -> Self {
        Self {
            id: format!("{source}-{target}"),
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Returns the edge identifier (`"{source}-{target}"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the table on the depending side.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the table being depended on.
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_combines_endpoints() {
        let edge = EdgeDescriptor::new("app", "raw");

        assert_eq!(edge.id(), "app-raw");
        assert_eq!(edge.source(), "app");
        assert_eq!(edge.target(), "raw");
    }

    #[test]
    fn test_chart_serializes_to_renderer_document() {
        let node = NodeDescriptor::new(
            "app",
            Role::Input,
            Point::new(280.0, 200.0),
            Size::new(240.0, 100.0),
            "#fec89a",
        );
        let chart = Chart::new(vec![node], vec![EdgeDescriptor::new("app", "raw")]);

        let document = serde_json::to_value(&chart).unwrap();
        assert_eq!(document["nodes"][0]["id"], "app");
        assert_eq!(document["nodes"][0]["role"], "input");
        assert_eq!(document["nodes"][0]["position"]["x"], 280.0);
        assert_eq!(document["nodes"][0]["size"]["height"], 100.0);
        assert_eq!(document["nodes"][0]["background"], "#fec89a");
        assert_eq!(document["edges"][0]["id"], "app-raw");
    }
}
