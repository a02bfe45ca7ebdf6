pub use crate::digraph::{Digraph, Vertex};
pub use crate::error::GraphError;
pub use crate::reduction::ReductionAndClosure;
pub use crate::relation::Relation;
pub use crate::search::{DfsNode, forest_of_dfs};
pub use crate::topo::KahnSort;
