//! Transitive reduction and closure of directed acyclic graphs.
//!
//! The *transitive closure* of a graph relates `u` to `v` whenever there is a
//! non-empty path from `u` to `v`.  The *transitive reduction* of a DAG is
//! the unique smallest subgraph with the same closure.  Both are computed in
//! a single pass over a topological order, visiting vertices from last to
//! first, so that the closure of every successor is complete by the time it
//! is consulted.
use std::collections::HashMap;

use crate::{
    digraph::{Digraph, Vertex},
    error::GraphError,
    topo::KahnSort,
    tracing_support::{debug, info_span, warn},
};

/// The transitive reduction and closure of a DAG.  Both graphs contain every
/// vertex of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionAndClosure {
    pub reduction: Digraph,
    pub closure: Digraph,
}

impl Digraph {
    /// Computes the transitive reduction and closure of this graph, which
    /// must be acyclic.
    ///
    /// Returns [`GraphError::Cycle`] if Kahn peeling cannot consume every
    /// edge.  A self-loop counts as a cycle.
    pub fn transitive_reduction_and_closure_of_dag(
        &self,
    ) -> Result<ReductionAndClosure, GraphError> {
        let _span = info_span!(
            "transitive_reduction_and_closure_of_dag",
            vertices = self.vertex_count(),
            edges = self.edge_count()
        )
        .entered();

        let KahnSort {
            sorted,
            remaining_transposed,
        } = self.kahn_topological_sort();
        if remaining_transposed.edge_count() > 0 {
            let remaining_edges = remaining_transposed.edge_count();
            warn!(remaining_edges, "cannot reduce a graph with cycles");
            return Err(GraphError::Cycle { remaining_edges });
        }

        let index: HashMap<Vertex, usize> = sorted
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();
        let mut reduction = Digraph::with_capacity(sorted.len());
        let mut closure = Digraph::with_capacity(sorted.len());
        let mut successors: Vec<Vertex> = Vec::new();

        for &vertex in sorted.iter().rev() {
            reduction.insert(vertex);
            // Self-pairs mark vertices whose closure is complete; stripped below.
            closure.connect(vertex, vertex);
            successors.clear();
            successors.extend(self.outgoing(vertex));
            successors.sort_unstable_by_key(|succ| index[succ]);
            for &succ in &successors {
                if closure.has_edge(vertex, succ) {
                    continue;
                }
                for &reached in &sorted[index[&succ]..] {
                    if closure.has_edge(succ, reached) {
                        closure.connect(vertex, reached);
                    }
                }
                reduction.connect(vertex, succ);
            }
        }
        for &vertex in &sorted {
            closure.disconnect(vertex, vertex);
        }

        debug!(
            reduction_edges = reduction.edge_count(),
            closure_edges = closure.edge_count(),
            "reduced DAG"
        );
        Ok(ReductionAndClosure { reduction, closure })
    }

    /// The transitive reduction half of
    /// [`Self::transitive_reduction_and_closure_of_dag`].
    pub fn transitive_reduction_of_dag(&self) -> Result<Digraph, GraphError> {
        Ok(self.transitive_reduction_and_closure_of_dag()?.reduction)
    }

    /// The transitive closure half of
    /// [`Self::transitive_reduction_and_closure_of_dag`].
    pub fn transitive_closure_of_dag(&self) -> Result<Digraph, GraphError> {
        Ok(self.transitive_reduction_and_closure_of_dag()?.closure)
    }
}
