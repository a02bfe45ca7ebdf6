//! Connected components, sources and sinks.
use std::collections::HashSet;

use crate::{
    digraph::{Digraph, Vertex},
    tracing_support::{debug, info_span},
};

impl Digraph {
    /// Partitions the vertices into maximal sets that are connected when
    /// edge directions are ignored.
    pub fn weakly_connected_components(&self) -> Vec<HashSet<Vertex>> {
        let _span = info_span!("weakly_connected_components", vertices = self.vertex_count())
            .entered();
        let symmetric = self.symmetric_closure();
        let mut components = Vec::new();
        let mut processed: HashSet<Vertex> = HashSet::with_capacity(self.vertex_count());
        for vertex in symmetric.vertices() {
            if processed.contains(&vertex) {
                continue;
            }
            let component = symmetric.closure_from([vertex]);
            processed.extend(component.iter().copied());
            components.push(component);
        }
        debug!(components = components.len(), "found weak components");
        components
    }

    /// Partitions the vertices into maximal sets of mutually reachable
    /// vertices, using Kosaraju's algorithm.
    pub fn strongly_connected_components(&self) -> Vec<HashSet<Vertex>> {
        let _span = info_span!(
            "strongly_connected_components",
            vertices = self.vertex_count(),
            edges = self.edge_count()
        )
        .entered();
        let mut order = self.topological_sort_by_finish();
        order.reverse();
        let forest = self.transpose().depth_first_search_forest_from(order);
        let components = forest.weakly_connected_components();
        debug!(components = components.len(), "found strong components");
        components
    }

    /// Vertices without incoming edges.
    pub fn source_vertices(&self) -> HashSet<Vertex> {
        let targets: HashSet<Vertex> = self.edges().map(|(_, to)| to).collect();
        self.vertices()
            .filter(|vertex| !targets.contains(vertex))
            .collect()
    }

    /// Vertices without outgoing edges.
    pub fn sink_vertices(&self) -> HashSet<Vertex> {
        self.vertices()
            .filter(|&vertex| self.count_outgoing(vertex) == 0)
            .collect()
    }
}
