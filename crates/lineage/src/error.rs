//! Error types for lineage layout.
//!
//! All failures here are malformed-input conditions. Callers should skip
//! rendering (or show an empty state) rather than draw partial geometry.

use thiserror::Error;

/// Errors raised while reconstructing and laying out a lineage tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Every table is referenced by some other table's dependencies, so the
    /// lineage has no top. Typically a cycle in the input.
    #[error("no root candidate: every table is referenced by another table's dependencies")]
    NoRootCandidate,

    /// A `deps` entry names a table that does not exist in the input list.
    #[error("unresolved dependency reference: table `{table}` depends on unknown table `{dependency}`")]
    UnresolvedDependency { table: String, dependency: String },

    /// A dependency cycle was reached while expanding the tree below the
    /// chosen root.
    #[error("circular dependency detected while expanding table `{table}`")]
    CircularDependency { table: String },
}
