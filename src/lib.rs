//! Directed graphs over integer vertices.
//!
//! [`Digraph`] stores a set of `i64` vertices and, for each vertex, the set
//! of its successors.  On top of it the crate provides:
//!
//! - depth-first search with discovery/finish timestamps, DFS forests and
//!   reachability ([`search`])
//! - transpose, symmetric closure and naive transitive closure
//!   ([`transform`])
//! - topological orderings by DFS finish time and by Kahn peeling ([`topo`])
//! - transitive reduction and closure of DAGs ([`reduction`])
//! - weakly and strongly connected components ([`components`])
//! - comparison of graphs by the subgraph relation ([`relation`])
//!
//! # Features
//!
//! - `tracing` (default): spans and events through the `tracing` crate; see
//!   [`tracing_support`].
//! - `slow_tests`: enables long running tests on large generated graphs.
pub mod components;
pub mod digraph;
pub mod error;
pub mod prelude;
pub mod reduction;
pub mod relation;
pub mod search;
pub mod test_support;
pub mod topo;
pub mod tracing_support;
pub mod transform;

mod format;

pub use crate::digraph::{Digraph, Outgoing, Vertex, try_vertex};
pub use crate::error::GraphError;
pub use crate::format::DisplayDigraph;
pub use crate::reduction::ReductionAndClosure;
pub use crate::relation::Relation;
pub use crate::search::{DfsNode, forest_of_dfs};
pub use crate::topo::KahnSort;
