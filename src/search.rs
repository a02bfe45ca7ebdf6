//! Depth-first search and reachability.
//!
//! All traversals here use an explicit work-stack, so their memory use is on
//! the heap and deep graphs cannot overflow the call stack.
use std::collections::{HashMap, HashSet, hash_map::Entry};

use crate::{
    digraph::{Digraph, Outgoing, Vertex},
    tracing_support::{debug, info_span},
};

/// The record of one visited vertex in a depth-first search.
///
/// Timestamps come from a single counter shared by every discover and finish
/// event of one search, starting at 1.  A vertex is finished only after all
/// of its descendants, so `discovered < finished` and the intervals of two
/// vertices are either nested or disjoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DfsNode {
    /// The vertex this one was discovered from, or `None` for a root.
    pub parent: Option<Vertex>,
    pub discovered: usize,
    pub finished: usize,
}

impl DfsNode {
    fn discovered_at(parent: Option<Vertex>, discovered: usize) -> Self {
        Self {
            parent,
            discovered,
            finished: 0,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Builds the forest of a depth-first search: one edge from parent to child
/// for each non-root node, and an isolated vertex for each root.
pub fn forest_of_dfs(dfs: &HashMap<Vertex, DfsNode>) -> Digraph {
    let mut forest = Digraph::with_capacity(dfs.len());
    for (&vertex, node) in dfs {
        forest.insert(vertex);
        if let Some(parent) = node.parent {
            forest.connect(parent, vertex);
        }
    }
    forest
}

impl Digraph {
    /// Runs a depth-first search rooted at every vertex in turn.
    pub fn depth_first_search(&self) -> HashMap<Vertex, DfsNode> {
        self.depth_first_search_from(self.vertices())
    }

    /// Runs a depth-first search from each of `roots` in order, skipping
    /// roots already visited from an earlier one.  The result covers exactly
    /// the vertices reachable from the roots.  A root that is not a vertex of
    /// the graph is recorded as an isolated node.
    pub fn depth_first_search_from(
        &self,
        roots: impl IntoIterator<Item = Vertex>,
    ) -> HashMap<Vertex, DfsNode> {
        let _span = info_span!("depth_first_search", vertices = self.vertex_count()).entered();
        let mut nodes: HashMap<Vertex, DfsNode> = HashMap::with_capacity(self.vertex_count());
        let mut clock = 0;
        let mut stack: Vec<(Vertex, Outgoing<'_>)> = Vec::new();

        for root in roots {
            let Entry::Vacant(entry) = nodes.entry(root) else {
                continue;
            };
            clock += 1;
            entry.insert(DfsNode::discovered_at(None, clock));
            stack.push((root, self.outgoing(root)));

            while let Some((vertex, successors)) = stack.last_mut() {
                let vertex = *vertex;
                match successors.next() {
                    Some(succ) => {
                        if let Entry::Vacant(entry) = nodes.entry(succ) {
                            clock += 1;
                            entry.insert(DfsNode::discovered_at(Some(vertex), clock));
                            stack.push((succ, self.outgoing(succ)));
                        }
                    }
                    None => {
                        clock += 1;
                        if let Some(node) = nodes.get_mut(&vertex) {
                            node.finished = clock;
                        }
                        stack.pop();
                    }
                }
            }
        }

        debug!(visited = nodes.len(), "depth-first search finished");
        nodes
    }

    /// The forest of [`Self::depth_first_search`].
    pub fn depth_first_search_forest(&self) -> Digraph {
        forest_of_dfs(&self.depth_first_search())
    }

    /// The forest of [`Self::depth_first_search_from`].
    pub fn depth_first_search_forest_from(
        &self,
        roots: impl IntoIterator<Item = Vertex>,
    ) -> Digraph {
        forest_of_dfs(&self.depth_first_search_from(roots))
    }

    /// Vertices reachable from `starts` by a path of at least one edge.  A
    /// start vertex is included only if it lies on a cycle through reachable
    /// vertices.
    pub fn reachable_from(&self, starts: impl IntoIterator<Item = Vertex>) -> HashSet<Vertex> {
        let mut pending: Vec<Vertex> = starts.into_iter().collect();
        let mut hull = HashSet::new();
        self.expand_hull(&mut pending, &mut hull);
        hull
    }

    /// Vertices reachable from `starts` by a path of zero or more edges, so
    /// the starts themselves are always included.
    pub fn closure_from(&self, starts: impl IntoIterator<Item = Vertex>) -> HashSet<Vertex> {
        let mut pending: Vec<Vertex> = starts.into_iter().collect();
        let mut hull: HashSet<Vertex> = pending.iter().copied().collect();
        self.expand_hull(&mut pending, &mut hull);
        hull
    }

    fn expand_hull(&self, pending: &mut Vec<Vertex>, hull: &mut HashSet<Vertex>) {
        while let Some(vertex) = pending.pop() {
            for succ in self.outgoing(vertex) {
                if hull.insert(succ) {
                    pending.push(succ);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_simple_graph() -> Digraph {
        Digraph::from_iter([(0, 1), (0, 2), (1, 3)])
    }

    fn create_cyclic_graph() -> Digraph {
        Digraph::from_iter([(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn test_dfs_visits_all_vertices() {
        let mut graph = create_simple_graph();
        graph.insert(9);
        let dfs = graph.depth_first_search();
        assert_eq!(
            dfs.keys().copied().collect::<HashSet<_>>(),
            HashSet::from([0, 1, 2, 3, 9])
        );
    }

    #[test]
    fn test_dfs_timestamps_are_unique_and_ordered() {
        let graph = create_simple_graph();
        let dfs = graph.depth_first_search_from([0]);
        let mut stamps: Vec<usize> = dfs
            .values()
            .flat_map(|node| [node.discovered, node.finished])
            .collect();
        stamps.sort_unstable();
        assert_eq!(stamps, (1..=8).collect::<Vec<_>>());
        for node in dfs.values() {
            assert!(node.discovered < node.finished);
        }
    }

    #[test]
    fn test_dfs_parents_nest_children() {
        let graph = create_simple_graph();
        let dfs = graph.depth_first_search_from([0]);
        assert!(dfs[&0].is_root());
        assert_eq!(dfs[&1].parent, Some(0));
        assert_eq!(dfs[&2].parent, Some(0));
        assert_eq!(dfs[&3].parent, Some(1));
        for node in dfs.values() {
            if let Some(parent) = node.parent {
                let parent = dfs[&parent];
                assert!(parent.discovered < node.discovered);
                assert!(node.finished < parent.finished);
            }
        }
        assert_eq!(dfs[&0].discovered, 1);
        assert_eq!(dfs[&0].finished, 8);
    }

    #[test]
    fn test_dfs_from_covers_only_reachable_vertices() {
        let graph = create_simple_graph();
        let dfs = graph.depth_first_search_from([1]);
        assert_eq!(
            dfs.keys().copied().collect::<HashSet<_>>(),
            HashSet::from([1, 3])
        );
    }

    #[test]
    fn test_dfs_multiple_roots_skip_visited() {
        let graph = create_simple_graph();
        let dfs = graph.depth_first_search_from([1, 0, 1]);
        assert_eq!(dfs.len(), 4);
        assert!(dfs[&1].is_root());
        assert!(dfs[&0].is_root());
        assert!(dfs[&1].finished < dfs[&0].discovered);
    }

    #[test]
    fn test_dfs_handles_cycles() {
        let graph = create_cyclic_graph();
        let dfs = graph.depth_first_search_from([0]);
        assert_eq!(dfs.len(), 3);
        assert_eq!(dfs[&1].parent, Some(0));
        assert_eq!(dfs[&2].parent, Some(1));
    }

    #[test]
    fn test_dfs_records_unknown_root() {
        let graph = create_simple_graph();
        let dfs = graph.depth_first_search_from([42]);
        assert_eq!(dfs.len(), 1);
        assert_eq!(
            dfs[&42],
            DfsNode {
                parent: None,
                discovered: 1,
                finished: 2
            }
        );
    }

    #[test]
    fn test_dfs_forest() {
        let graph = create_cyclic_graph();
        let forest = graph.depth_first_search_forest_from([0]);
        assert_eq!(forest, Digraph::from_iter([(0, 1), (1, 2)]));

        let mut graph = create_simple_graph();
        graph.insert(5);
        let dfs = graph.depth_first_search();
        let roots = dfs.values().filter(|node| node.is_root()).count();
        let forest = forest_of_dfs(&dfs);
        assert_eq!(forest.vertex_count(), 5);
        assert_eq!(forest.edge_count(), 5 - roots);
        assert!(forest.is_subgraph_of(&graph));
        assert_eq!(graph.depth_first_search_forest().vertex_count(), 5);
    }

    #[test]
    fn test_reachable_from_excludes_starts() {
        let graph = create_simple_graph();
        assert_eq!(graph.reachable_from([0]), HashSet::from([1, 2, 3]));
        assert_eq!(graph.reachable_from([3]), HashSet::new());
    }

    #[test]
    fn test_reachable_from_includes_starts_on_cycles() {
        let graph = create_cyclic_graph();
        assert_eq!(graph.reachable_from([0]), HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_closure_from_includes_starts() {
        let graph = create_simple_graph();
        assert_eq!(graph.closure_from([1]), HashSet::from([1, 3]));
        assert_eq!(graph.closure_from([3, 2]), HashSet::from([2, 3]));
        assert_eq!(graph.closure_from([]), HashSet::new());
    }
}
