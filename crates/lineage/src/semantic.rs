//! Semantic model for lineage charts.
//!
//! A lineage chart is described by a flat list of [`TableNode`] records. Each
//! record names a table, the tables it is produced from (`deps`), and the
//! storage [`Engine`] backing it. The engine tag only influences presentation
//! (the background color hint of the node descriptor); it carries no
//! structural meaning.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One stage of a data pipeline: a table and the tables it depends on.
///
/// `deps` is ordered; sibling order in the computed layout follows it.
/// `table` values are expected to be unique across a chart, and every `deps`
/// entry must name another table in the same list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableNode {
    table: String,
    #[serde(default)]
    deps: Vec<String>,
    #[serde(default)]
    engine: Engine,
}

impl TableNode {
    /// Creates a new table node.
    pub fn new(table: impl Into<String>, deps: Vec<String>, engine: Engine) -> Self {
        Self {
            table: table.into(),
            deps,
            engine,
        }
    }

    /// Returns the table identifier.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the ordered dependency identifiers.
    pub fn deps(&self) -> &[String] {
        &self.deps
    }

    /// Returns the storage engine tag.
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Checks whether this node lists `table` among its dependencies.
    pub(crate) fn depends_on(&self, table: &str) -> bool {
        self.deps.iter().any(|dep| dep == table)
    }
}

/// Storage engine category of a table.
///
/// Unrecognized tags deserialize to [`Engine::Other`] rather than failing;
/// the chart still lays out, the node just falls back to the default color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    Kafka,
    MergeTree,
    Distributed,
    #[default]
    Other,
}

impl Engine {
    /// Returns the canonical string form of this engine tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Engine::Kafka => "Kafka",
            Engine::MergeTree => "MergeTree",
            Engine::Distributed => "Distributed",
            Engine::Other => "Other",
        }
    }
}

impl From<&str> for Engine {
    fn from(value: &str) -> Self {
        match value {
            "Kafka" => Engine::Kafka,
            "MergeTree" => Engine::MergeTree,
            "Distributed" => Engine::Distributed,
            _ => Engine::Other,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Engine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Engine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Engine::from(tag.as_str()))
    }
}

/// Presentation role of a node in the chart.
///
/// The variant names match what the external renderer expects: `input` for
/// the top of the lineage, `output` for terminal tables, `default` for
/// everything in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Feeding table: at least one other table does not consume it. A
    /// single isolated table is also classified as input.
    Input,
    /// Terminal table: no dependencies of its own (and the chart has more
    /// than one table).
    Output,
    /// Table every other table in the chart depends on.
    Default,
}
