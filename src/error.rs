//! Errors reported by graph operations.

/// Errors returned by fallible [`Digraph`](crate::Digraph) operations.
///
/// Operations that merely find nothing to do (disconnecting an absent edge,
/// deleting an absent vertex) are not errors; they return `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A value could not be converted into a [`Vertex`](crate::Vertex).
    #[error("invalid vertex: {0}")]
    InvalidVertex(String),

    /// An operation that requires an acyclic graph was given a cyclic one.
    #[error("graph has cycles ({remaining_edges} edges left after peeling)")]
    Cycle { remaining_edges: usize },
}
