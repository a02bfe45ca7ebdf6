//! The [`Digraph`] incidence structure.
//!
//! A `Digraph` is a set of integer vertices together with, for each vertex,
//! the set of its successors.  Edges are directed, there are no parallel
//! edges, and self-loops are allowed.  Every endpoint of an edge is itself a
//! vertex of the graph: [`Digraph::connect`] creates missing endpoints and
//! [`Digraph::delete`] removes the edges that point at the deleted vertex.
//!
//! The algorithms built on top of this structure live in sibling modules and
//! are exposed as further `impl Digraph` blocks:
//!
//! - [`search`](crate::search): depth-first search and reachability
//! - [`transform`](crate::transform): transpose, symmetric and transitive closure
//! - [`topo`](crate::topo): topological orderings
//! - [`reduction`](crate::reduction): transitive reduction and closure of DAGs
//! - [`components`](crate::components): weak and strong components
//! - [`relation`](crate::relation): subgraph comparisons
use std::{
    collections::{HashMap, HashSet, hash_set},
    fmt::Debug,
};

use derivative::Derivative;

use crate::error::GraphError;

/// Identifier of a vertex.  Payloads, if any, are kept by the caller in a
/// map keyed by vertex.
pub type Vertex = i64;

/// Converts an integer of another type into a [`Vertex`].
pub fn try_vertex<T>(value: T) -> Result<Vertex, GraphError>
where
    T: TryInto<Vertex> + Copy + Debug,
{
    value
        .try_into()
        .map_err(|_| GraphError::InvalidVertex(format!("{value:?}")))
}

/// A directed graph over integer vertices without parallel edges.
///
/// Two graphs compare equal when they have the same vertices and the same
/// edges.  Graphs are also partially ordered by the subgraph relation; see
/// [`Digraph::compare`].
#[derive(Clone, Default, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct Digraph {
    successors: HashMap<Vertex, HashSet<Vertex>>,
    #[derivative(PartialEq = "ignore")]
    edge_count: usize,
}

/// Iterator over the successors of a vertex.
///
/// This borrows the successor set of the graph directly, so the graph cannot
/// be mutated while the iterator is alive.  Collect it first if the graph
/// needs to change during iteration.
#[derive(Clone, Debug, Default)]
pub struct Outgoing<'g> {
    inner: Option<hash_set::Iter<'g, Vertex>>,
}

impl Iterator for Outgoing<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

impl ExactSizeIterator for Outgoing<'_> {}

impl Digraph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            successors: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Adds a vertex without edges.  Returns `false` if it already existed.
    pub fn insert(&mut self, vertex: Vertex) -> bool {
        if self.successors.contains_key(&vertex) {
            return false;
        }
        self.successors.insert(vertex, HashSet::new());
        true
    }

    /// Like [`Self::insert`], for values of other integer types.
    pub fn try_insert<T>(&mut self, vertex: T) -> Result<bool, GraphError>
    where
        T: TryInto<Vertex> + Copy + Debug,
    {
        Ok(self.insert(try_vertex(vertex)?))
    }

    /// Removes a vertex along with every edge starting or ending at it.
    /// Returns `false` if there was no such vertex.
    pub fn delete(&mut self, vertex: Vertex) -> bool {
        let Some(outgoing) = self.successors.remove(&vertex) else {
            return false;
        };
        self.edge_count -= outgoing.len();
        for successors in self.successors.values_mut() {
            if successors.remove(&vertex) {
                self.edge_count -= 1;
            }
        }
        debug_assert_eq!(self.check_invariants(), Ok(()));
        true
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.successors.clear();
        self.edge_count = 0;
    }

    pub fn has_vertex(&self, vertex: Vertex) -> bool {
        self.successors.contains_key(&vertex)
    }

    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.successors
            .get(&from)
            .is_some_and(|successors| successors.contains(&to))
    }

    /// Adds an edge, creating either endpoint if needed.  Returns `false` if
    /// the edge was already present.
    pub fn connect(&mut self, from: Vertex, to: Vertex) -> bool {
        let added = self.successors.entry(from).or_default().insert(to);
        if added {
            self.edge_count += 1;
            self.successors.entry(to).or_default();
        }
        added
    }

    /// Like [`Self::connect`], for values of other integer types.
    pub fn try_connect<T>(&mut self, from: T, to: T) -> Result<bool, GraphError>
    where
        T: TryInto<Vertex> + Copy + Debug,
    {
        let (from, to) = (try_vertex(from)?, try_vertex(to)?);
        Ok(self.connect(from, to))
    }

    /// Removes an edge.  Returns `false` if the edge was not present.
    pub fn disconnect(&mut self, from: Vertex, to: Vertex) -> bool {
        let removed = self
            .successors
            .get_mut(&from)
            .is_some_and(|successors| successors.remove(&to));
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    /// Iterates over the vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.successors.keys().copied()
    }

    /// Iterates over all edges as `(from, to)` pairs, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.successors
            .iter()
            .flat_map(|(&from, successors)| successors.iter().map(move |&to| (from, to)))
    }

    /// Iterates over the successors of `vertex`.  Empty if the vertex does
    /// not exist.
    pub fn outgoing(&self, vertex: Vertex) -> Outgoing<'_> {
        Outgoing {
            inner: self.successors.get(&vertex).map(|successors| successors.iter()),
        }
    }

    pub fn count_outgoing(&self, vertex: Vertex) -> usize {
        self.successors.get(&vertex).map_or(0, HashSet::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The number of vertices plus the number of edges.
    pub fn size(&self) -> usize {
        self.vertex_count() + self.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Checks that the edge counter matches the successor sets and that every
    /// edge target is a vertex, returning a reason if not.  O(V + E).
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        let mut counted = 0;
        for successors in self.successors.values() {
            counted += successors.len();
            if successors
                .iter()
                .any(|succ| !self.successors.contains_key(succ))
            {
                return Err("edge target is not a vertex");
            }
        }
        if counted != self.edge_count {
            return Err("edge counter does not match successor sets");
        }
        Ok(())
    }
}

impl Extend<(Vertex, Vertex)> for Digraph {
    fn extend<I: IntoIterator<Item = (Vertex, Vertex)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.connect(from, to);
        }
    }
}

impl FromIterator<(Vertex, Vertex)> for Digraph {
    fn from_iter<I: IntoIterator<Item = (Vertex, Vertex)>>(edges: I) -> Self {
        let mut graph = Digraph::new();
        graph.extend(edges);
        graph
    }
}
