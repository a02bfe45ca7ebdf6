//! Graphs derived from another graph by rewriting its edge set.  Each
//! transform keeps the vertex set of its input.
use crate::{
    digraph::{Digraph, Vertex},
    tracing_support::{debug, info_span},
};

impl Digraph {
    /// Returns a graph with every edge reversed.
    pub fn transpose(&self) -> Digraph {
        let mut transposed = Digraph::with_capacity(self.vertex_count());
        for from in self.vertices() {
            transposed.insert(from);
            for to in self.outgoing(from) {
                transposed.connect(to, from);
            }
        }
        transposed
    }

    /// Returns a graph containing both `(u, v)` and `(v, u)` for every edge
    /// `(u, v)` of this one.
    pub fn symmetric_closure(&self) -> Digraph {
        let mut symmetric = Digraph::with_capacity(self.vertex_count());
        for from in self.vertices() {
            symmetric.insert(from);
            for to in self.outgoing(from) {
                symmetric.connect(from, to);
                symmetric.connect(to, from);
            }
        }
        symmetric
    }

    /// Returns the transitive closure by adding two-step shortcuts until
    /// nothing changes.  Works on any graph, including cyclic ones, but is
    /// much slower than
    /// [`transitive_closure_of_dag`](Self::transitive_closure_of_dag).
    pub fn transitive_closure(&self) -> Digraph {
        let _span = info_span!(
            "transitive_closure",
            vertices = self.vertex_count(),
            edges = self.edge_count()
        )
        .entered();
        let mut closure = self.clone();
        let vertices: Vec<Vertex> = closure.vertices().collect();
        let mut rounds = 0;
        loop {
            rounds += 1;
            let old_size = closure.size();
            for &vertex in &vertices {
                let two_steps: Vec<Vertex> = closure
                    .outgoing(vertex)
                    .flat_map(|succ| closure.outgoing(succ))
                    .collect();
                closure.extend(two_steps.into_iter().map(|target| (vertex, target)));
            }
            if closure.size() == old_size {
                debug!(rounds, edges = closure.edge_count(), "closure reached fixpoint");
                return closure;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let mut graph = Digraph::from_iter([(1, 2), (2, 3), (3, 3)]);
        graph.insert(4);
        let transposed = graph.transpose();
        let mut expected = Digraph::from_iter([(2, 1), (3, 2), (3, 3)]);
        expected.insert(4);
        assert_eq!(transposed, expected);
        assert_eq!(transposed.edge_count(), 3);
        assert_eq!(transposed.transpose(), graph);
    }

    #[test]
    fn test_symmetric_closure() {
        let mut graph = Digraph::from_iter([(1, 2), (2, 1), (2, 3)]);
        graph.insert(7);
        let symmetric = graph.symmetric_closure();
        let mut expected = Digraph::from_iter([(1, 2), (2, 1), (2, 3), (3, 2)]);
        expected.insert(7);
        assert_eq!(symmetric, expected);
        assert_eq!(symmetric.edge_count(), 4);
    }

    #[test]
    fn test_transitive_closure_of_chain() {
        let graph = Digraph::from_iter([(1, 2), (2, 3), (3, 4)]);
        let closure = graph.transitive_closure();
        assert_eq!(
            closure,
            Digraph::from_iter([(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)])
        );
    }

    #[test]
    fn test_transitive_closure_of_cycle() {
        let graph = Digraph::from_iter([(1, 2), (2, 3), (3, 1)]);
        let closure = graph.transitive_closure();
        assert_eq!(closure.vertex_count(), 3);
        assert_eq!(closure.edge_count(), 9);
        assert!(closure.has_edge(2, 2));
    }

    #[test]
    fn test_transitive_closure_keeps_isolated_vertices() {
        let mut graph = Digraph::new();
        graph.insert(1);
        graph.insert(2);
        assert_eq!(graph.transitive_closure(), graph);
    }
}
