//! Generators and checks shared by the unit and integration tests.
use std::collections::{HashMap, HashSet};

use quickcheck::{Arbitrary, Gen};

use crate::{
    digraph::{Digraph, Vertex},
    tracing_support::{info_span, init_tracing},
};

/// An arbitrary graph, possibly with cycles, self-loops and isolated
/// vertices.  Vertex ids are drawn from a small range so that edges collide.
#[derive(Debug, Clone)]
pub struct ArbDigraph {
    pub graph: Digraph,
}

/// An arbitrary acyclic graph.
#[derive(Debug, Clone)]
pub struct ArbDag {
    pub graph: Digraph,
}

fn arbitrary_vertex(g: &mut Gen) -> Vertex {
    Vertex::from(i8::arbitrary(g) % 24)
}

/// Shrinks by deleting one vertex at a time.  Deleting vertices cannot
/// create a cycle, so this also preserves acyclicity.
fn shrink_by_deleting_vertices(graph: Digraph) -> impl Iterator<Item = Digraph> {
    let vertices: Vec<Vertex> = graph.vertices().collect();
    vertices.into_iter().map(move |vertex| {
        let mut smaller = graph.clone();
        smaller.delete(vertex);
        smaller
    })
}

impl Arbitrary for ArbDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_self_loops = usize::arbitrary(g) % 3;

        let mut graph = Digraph::new();
        let vertices: Vec<Vertex> = (0..num_vertices).map(|_| arbitrary_vertex(g)).collect();
        for &vertex in &vertices {
            graph.insert(vertex);
        }
        if !vertices.is_empty() {
            for i in 0..num_edges {
                let from = vertices[usize::arbitrary(g) % vertices.len()];
                let to = vertices[usize::arbitrary(g) % vertices.len()];
                graph.connect(from, to);
                if i < num_self_loops {
                    graph.connect(from, from);
                }
            }
        }

        ArbDigraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(shrink_by_deleting_vertices(self.graph.clone()).map(|graph| ArbDigraph { graph }))
    }
}

impl Arbitrary for ArbDag {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 16;
        let num_edges = usize::arbitrary(g) % 40;

        // Edges only go forward in this list, which rules out cycles.
        let mut order: Vec<Vertex> = Vec::with_capacity(num_vertices);
        for _ in 0..num_vertices {
            let vertex = arbitrary_vertex(g);
            if !order.contains(&vertex) {
                order.push(vertex);
            }
        }

        let mut graph = Digraph::new();
        for &vertex in &order {
            graph.insert(vertex);
        }
        if order.len() >= 2 {
            for _ in 0..num_edges {
                let a = usize::arbitrary(g) % order.len();
                let b = usize::arbitrary(g) % order.len();
                if a != b {
                    graph.connect(order[a.min(b)], order[a.max(b)]);
                }
            }
        }

        ArbDag { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(shrink_by_deleting_vertices(self.graph.clone()).map(|graph| ArbDag { graph }))
    }
}

/// Checks the internal consistency of a graph, panicking on the first
/// violation.
pub fn check_digraph_consistency(graph: &Digraph) {
    init_tracing();
    let _span = info_span!("check_digraph_consistency").entered();
    if let Err(reason) = graph.check_invariants() {
        panic!("inconsistent graph {:?}: {}", graph, reason);
    }
    assert_eq!(graph.vertices().count(), graph.vertex_count());
    assert_eq!(graph.edges().count(), graph.edge_count());
    assert_eq!(graph.size(), graph.vertex_count() + graph.edge_count());
    assert_eq!(graph.is_empty(), graph.vertex_count() == 0);
    for vertex in graph.vertices() {
        assert_eq!(graph.outgoing(vertex).count(), graph.count_outgoing(vertex));
        for succ in graph.outgoing(vertex) {
            assert!(graph.has_edge(vertex, succ));
        }
    }
}

/// True if `parts` are disjoint, non-empty, and together cover exactly the
/// vertices of `graph`.
pub fn is_partition_of(parts: &[HashSet<Vertex>], graph: &Digraph) -> bool {
    let mut seen = HashSet::new();
    for part in parts {
        if part.is_empty() {
            return false;
        }
        for &vertex in part {
            if !graph.has_vertex(vertex) || !seen.insert(vertex) {
                return false;
            }
        }
    }
    seen.len() == graph.vertex_count()
}

/// Maps every vertex to the set of vertices reachable from it by a
/// non-empty path.
pub fn reachability(graph: &Digraph) -> HashMap<Vertex, HashSet<Vertex>> {
    graph
        .vertices()
        .map(|vertex| (vertex, graph.reachable_from([vertex])))
        .collect()
}
