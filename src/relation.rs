//! Comparing graphs by the subgraph relation.
use std::cmp::Ordering;

use crate::digraph::Digraph;

/// The outcome of comparing two values under a partial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Unrelated,
    Less,
    Equal,
    Greater,
}

impl Relation {
    /// The relation seen from the other side of the comparison.
    pub fn invert(self) -> Relation {
        match self {
            Relation::Less => Relation::Greater,
            Relation::Greater => Relation::Less,
            Relation::Equal => Relation::Equal,
            Relation::Unrelated => Relation::Unrelated,
        }
    }

    /// The corresponding [`Ordering`], or `None` for [`Relation::Unrelated`].
    pub fn as_ordering(self) -> Option<Ordering> {
        match self {
            Relation::Less => Some(Ordering::Less),
            Relation::Equal => Some(Ordering::Equal),
            Relation::Greater => Some(Ordering::Greater),
            Relation::Unrelated => None,
        }
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Relation::Less,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::Greater,
        }
    }
}

impl Digraph {
    /// True if every vertex and every edge of this graph is also in `other`.
    pub fn is_subgraph_of(&self, other: &Digraph) -> bool {
        self.vertices().all(|vertex| {
            other.has_vertex(vertex) && self.outgoing(vertex).all(|succ| other.has_edge(vertex, succ))
        })
    }

    /// Compares two graphs by the subgraph relation: `Less` if this graph is
    /// a proper subgraph of `other`, `Greater` if `other` is a proper subgraph
    /// of this one.
    pub fn compare(&self, other: &Digraph) -> Relation {
        match (self.is_subgraph_of(other), other.is_subgraph_of(self)) {
            (true, true) => Relation::Equal,
            (true, false) => Relation::Less,
            (false, true) => Relation::Greater,
            (false, false) => Relation::Unrelated,
        }
    }
}

impl PartialOrd for Digraph {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).as_ordering()
    }
}
