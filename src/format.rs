use std::fmt::{self, Debug, Display, Formatter};

use crate::digraph::{Digraph, Vertex};

struct EdgeTag(Vertex, Vertex);

impl Debug for EdgeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.0, self.1)
    }
}

impl Debug for Digraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<_> = self.vertices().collect();
        vertices.sort_unstable();
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort_unstable();
        f.debug_struct("Digraph")
            .field("vertices", &vertices)
            .field(
                "edges",
                &edges
                    .into_iter()
                    .map(|(from, to)| EdgeTag(from, to))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Adjacency-list rendering of a [`Digraph`], created by
/// [`Digraph::display_with`].  Vertices and their successors are listed in
/// ascending order.
pub struct DisplayDigraph<'g, F> {
    graph: &'g Digraph,
    label: F,
}

impl<F, L> Display for DisplayDigraph<'_, F>
where
    F: Fn(Vertex) -> L,
    L: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph has {} vertices and {} edges:",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        let mut vertices: Vec<_> = self.graph.vertices().collect();
        vertices.sort_unstable();
        for vertex in vertices {
            let mut successors: Vec<_> = self.graph.outgoing(vertex).collect();
            successors.sort_unstable();
            write!(f, "  Vertex {}: ", (self.label)(vertex))?;
            for (i, succ) in successors.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", (self.label)(succ))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  □")
    }
}

impl Digraph {
    /// Renders the graph with each vertex shown through `label`.
    pub fn display_with<F, L>(&self, label: F) -> DisplayDigraph<'_, F>
    where
        F: Fn(Vertex) -> L,
        L: Display,
    {
        DisplayDigraph { graph: self, label }
    }
}

impl Display for Digraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display_with(|vertex| vertex), f)
    }
}
