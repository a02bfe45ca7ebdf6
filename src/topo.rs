//! Topological orderings.
//!
//! Two independent strategies are provided:
//!
//! - DFS post-order ([`Digraph::topological_sort_by_finish`] and the rank
//!   map [`Digraph::topological_sort`]).  These accept any graph but only
//!   produce a topological order when the graph is acyclic.
//! - Kahn peeling ([`Digraph::kahn_topological_sort`] and
//!   [`Digraph::kahn_topological_sort_by`]), which stops when no vertex is
//!   free of unprocessed incoming edges and reports the edges left over.
//!   Leftover edges mean the graph has a cycle.
use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use crate::{
    digraph::{Digraph, Outgoing, Vertex},
    tracing_support::{debug, info_span},
};

/// The result of Kahn peeling.
#[derive(Clone, Debug)]
pub struct KahnSort {
    /// The vertices that could be peeled, in topological order.
    pub sorted: Vec<Vertex>,
    /// The transposed graph with all peeled edges removed.  Its remaining
    /// edges (reversed) are those on or downstream of a cycle.
    pub remaining_transposed: Digraph,
}

impl KahnSort {
    /// True if peeling stopped before consuming every edge.
    pub fn has_cycles(&self) -> bool {
        self.remaining_transposed.edge_count() > 0
    }
}

impl Digraph {
    /// Calls `on_finish` for each vertex reachable from `roots`, in
    /// depth-first finish order.
    fn visit_in_finish_order(
        &self,
        roots: impl IntoIterator<Item = Vertex>,
        mut on_finish: impl FnMut(Vertex),
    ) {
        let mut visited: HashSet<Vertex> = HashSet::with_capacity(self.vertex_count());
        let mut stack: Vec<(Vertex, Outgoing<'_>)> = Vec::new();
        for root in roots {
            if !visited.insert(root) {
                continue;
            }
            stack.push((root, self.outgoing(root)));
            while let Some((vertex, successors)) = stack.last_mut() {
                let vertex = *vertex;
                match successors.next() {
                    Some(succ) => {
                        if visited.insert(succ) {
                            stack.push((succ, self.outgoing(succ)));
                        }
                    }
                    None => {
                        on_finish(vertex);
                        stack.pop();
                    }
                }
            }
        }
    }

    /// Lists all vertices in depth-first finish order.  For an acyclic graph
    /// the reversed list is a topological order.
    pub fn topological_sort_by_finish(&self) -> Vec<Vertex> {
        self.topological_sort_by_finish_from(self.vertices())
    }

    /// Lists the vertices reachable from `roots` in depth-first finish
    /// order, searching from each root in turn.
    pub fn topological_sort_by_finish_from(
        &self,
        roots: impl IntoIterator<Item = Vertex>,
    ) -> Vec<Vertex> {
        let _span = info_span!("topological_sort_by_finish", vertices = self.vertex_count())
            .entered();
        let mut finished = Vec::with_capacity(self.vertex_count());
        self.visit_in_finish_order(roots, |vertex| finished.push(vertex));
        finished
    }

    /// Assigns each vertex a distinct rank in `0..vertex_count()`.  If the
    /// graph is acyclic, every edge `(a, b)` with `a != b` has
    /// `rank[a] < rank[b]`.
    pub fn topological_sort(&self) -> HashMap<Vertex, usize> {
        self.topological_sort_from(self.vertices())
    }

    /// Ranks the vertices reachable from `roots`.  Ranks are handed out from
    /// `vertex_count() - 1` downwards as vertices finish, so the vertex
    /// finished last gets the lowest rank.  Roots that are not vertices of
    /// the graph are ignored.
    pub fn topological_sort_from(
        &self,
        roots: impl IntoIterator<Item = Vertex>,
    ) -> HashMap<Vertex, usize> {
        let _span = info_span!("topological_sort", vertices = self.vertex_count()).entered();
        let count = self.vertex_count();
        let mut ranks = HashMap::with_capacity(count);
        let roots = roots.into_iter().filter(|&root| self.has_vertex(root));
        self.visit_in_finish_order(roots, |vertex| {
            let rank = count - ranks.len() - 1;
            ranks.insert(vertex, rank);
        });
        ranks
    }

    /// Returns the edges that point from a vertex to one with an equal or
    /// lower rank.  Empty if and only if `ranks` is a topological order of
    /// this graph (which then must be acyclic).  Edges with an unranked
    /// endpoint are skipped.
    pub fn back_edges_of_topological_sort(&self, ranks: &HashMap<Vertex, usize>) -> Digraph {
        let mut back_edges = Digraph::new();
        for (from, to) in self.edges() {
            if let (Some(rank_from), Some(rank_to)) = (ranks.get(&from), ranks.get(&to)) {
                if rank_from >= rank_to {
                    back_edges.connect(from, to);
                }
            }
        }
        back_edges
    }

    /// Kahn's algorithm with a last-in, first-out frontier.  The order among
    /// simultaneously free vertices follows hash iteration order.
    pub fn kahn_topological_sort(&self) -> KahnSort {
        self.kahn_peel(|_| {})
    }

    /// Kahn's algorithm with ties broken by `compare`: the smallest vertex of
    /// the initial frontier goes first, and whenever peeling a vertex frees
    /// several successors, they are taken next, smallest first, before any
    /// older frontier entry.
    pub fn kahn_topological_sort_by<F>(&self, mut compare: F) -> KahnSort
    where
        F: FnMut(&Vertex, &Vertex) -> Ordering,
    {
        self.kahn_peel(|batch| batch.sort_by(|a, b| compare(b, a)))
    }

    /// Peels vertices off the transposed graph.  `order_batch` arranges each
    /// group of newly freed vertices on the frontier; the last one is taken
    /// first.
    fn kahn_peel(&self, mut order_batch: impl FnMut(&mut [Vertex])) -> KahnSort {
        let _span = info_span!(
            "kahn_topological_sort",
            vertices = self.vertex_count(),
            edges = self.edge_count()
        )
        .entered();
        let mut transposed = self.transpose();
        let mut frontier: Vec<Vertex> = transposed.sink_vertices().into_iter().collect();
        order_batch(&mut frontier);
        let mut sorted = Vec::with_capacity(self.vertex_count());

        while let Some(vertex) = frontier.pop() {
            sorted.push(vertex);
            let freed_from = frontier.len();
            for succ in self.outgoing(vertex) {
                transposed.disconnect(succ, vertex);
                if transposed.count_outgoing(succ) == 0 {
                    frontier.push(succ);
                }
            }
            order_batch(&mut frontier[freed_from..]);
        }

        debug!(
            sorted = sorted.len(),
            remaining_edges = transposed.edge_count(),
            "kahn peeling finished"
        );
        KahnSort {
            sorted,
            remaining_transposed: transposed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_diamond() -> Digraph {
        Digraph::from_iter([(1, 2), (1, 3), (2, 4), (3, 4)])
    }

    fn position(order: &[Vertex]) -> HashMap<Vertex, usize> {
        order.iter().enumerate().map(|(i, &v)| (v, i)).collect()
    }

    #[test]
    fn test_finish_order_reversed_is_topological() {
        let graph = create_diamond();
        let mut order = graph.topological_sort_by_finish();
        assert_eq!(order.len(), 4);
        order.reverse();
        let index = position(&order);
        for (from, to) in graph.edges() {
            assert!(index[&from] < index[&to]);
        }
    }

    #[test]
    fn test_finish_order_from_roots() {
        let graph = create_diamond();
        assert_eq!(graph.topological_sort_by_finish_from([4]), vec![4]);
        let order = graph.topological_sort_by_finish_from([2, 1]);
        assert_eq!(order[..2], [4, 2]);
        assert_eq!(order.last(), Some(&1));
    }

    #[test]
    fn test_ranks_respect_edges() {
        let mut graph = create_diamond();
        graph.connect(4, 4);
        graph.insert(10);
        let ranks = graph.topological_sort();
        let mut values: Vec<_> = ranks.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        for (from, to) in graph.edges().filter(|(from, to)| from != to) {
            assert!(ranks[&from] < ranks[&to]);
        }
        let back_edges = graph.back_edges_of_topological_sort(&ranks);
        assert_eq!(back_edges, Digraph::from_iter([(4, 4)]));
    }

    #[test]
    fn test_ranks_ignore_unknown_roots() {
        let graph = create_diamond();
        let ranks = graph.topological_sort_from([99, 2]);
        assert_eq!(ranks.len(), 2);
        assert_eq!(ranks[&2], 2);
        assert_eq!(ranks[&4], 3);
    }

    #[test]
    fn test_back_edges_of_cycle() {
        let graph = Digraph::from_iter([(1, 2), (2, 3), (3, 1)]);
        let ranks = graph.topological_sort();
        let back_edges = graph.back_edges_of_topological_sort(&ranks);
        assert_eq!(back_edges.edge_count(), 1);
        assert!(back_edges.is_subgraph_of(&graph));
    }

    #[test]
    fn test_kahn_sorts_dag() {
        let graph = create_diamond();
        let kahn = graph.kahn_topological_sort();
        assert!(!kahn.has_cycles());
        assert_eq!(kahn.sorted.len(), 4);
        assert_eq!(kahn.sorted[0], 1);
        assert_eq!(kahn.sorted[3], 4);
        assert_eq!(kahn.remaining_transposed.vertex_count(), 4);
    }

    #[test]
    fn test_kahn_reports_cycles() {
        let graph = Digraph::from_iter([(0, 1), (1, 2), (2, 1), (2, 3)]);
        let kahn = graph.kahn_topological_sort();
        assert!(kahn.has_cycles());
        assert_eq!(kahn.sorted, vec![0]);
        assert_eq!(kahn.remaining_transposed.edge_count(), 3);
    }

    #[test]
    fn test_kahn_self_loop_is_a_cycle() {
        let graph = Digraph::from_iter([(5, 5)]);
        let kahn = graph.kahn_topological_sort();
        assert!(kahn.has_cycles());
        assert!(kahn.sorted.is_empty());
    }

    #[test]
    fn test_kahn_with_compare_is_deterministic() {
        let mut graph = Digraph::from_iter([(1, 4), (1, 3), (2, 5)]);
        graph.insert(0);
        let ascending = graph.kahn_topological_sort_by(Ord::cmp);
        assert_eq!(ascending.sorted, vec![0, 1, 3, 4, 2, 5]);
        let descending = graph.kahn_topological_sort_by(|a, b| b.cmp(a));
        assert_eq!(descending.sorted, vec![2, 5, 1, 4, 3, 0]);
    }

    #[test]
    fn test_kahn_with_compare_is_depth_first() {
        let graph = Digraph::from_iter([(1, 10), (10, 11), (2, 3)]);
        let kahn = graph.kahn_topological_sort_by(Ord::cmp);
        assert_eq!(kahn.sorted, vec![1, 10, 11, 2, 3]);
    }
}
