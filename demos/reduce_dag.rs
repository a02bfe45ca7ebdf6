//! Example that builds a graph from edges given on the command line and
//! prints its transitive reduction, closure and strongly connected
//! components.
//!
//! Usage:
//!   cargo run --example reduce_dag -- 1:2 1:3 3:2
//!   cargo run --example reduce_dag -- --verbose 1:2 2:1

#[cfg(feature = "tracing")]
mod inner {
    use std::process;

    use clap::Parser;
    use intgraph::prelude::*;
    use tracing::Level;

    /// Reduce a DAG given as a list of edges.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Edges written as FROM:TO, e.g. 1:2
        #[arg(value_parser = parse_edge, required = true)]
        edges: Vec<(Vertex, Vertex)>,

        /// Isolated vertices to add
        #[arg(long = "vertex")]
        vertices: Vec<Vertex>,

        /// Log spans and events at debug level
        #[arg(short, long)]
        verbose: bool,
    }

    fn parse_edge(arg: &str) -> Result<(Vertex, Vertex), String> {
        let (from, to) = arg
            .split_once(':')
            .ok_or_else(|| format!("expected FROM:TO, got '{arg}'"))?;
        let parse = |s: &str| {
            s.trim()
                .parse::<Vertex>()
                .map_err(|err| format!("invalid vertex '{s}': {err}"))
        };
        Ok((parse(from)?, parse(to)?))
    }

    pub fn run() {
        let args = Args::parse();
        let level = if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();

        let mut graph: Digraph = args.edges.into_iter().collect();
        for vertex in args.vertices {
            graph.insert(vertex);
        }
        print!("{graph}");

        let mut components = graph.strongly_connected_components();
        components.retain(|component| component.len() > 1);
        for component in &components {
            let mut members: Vec<_> = component.iter().copied().collect();
            members.sort_unstable();
            println!("cycle through {members:?}");
        }

        match graph.transitive_reduction_and_closure_of_dag() {
            Ok(ReductionAndClosure { reduction, closure }) => {
                let order = graph.kahn_topological_sort_by(Ord::cmp).sorted;
                println!("topological order: {order:?}");
                print!("reduction: {reduction}");
                print!("closure: {closure}");
            }
            Err(err) => {
                eprintln!("cannot reduce: {err}");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "tracing")]
fn main() {
    inner::run();
}

#[cfg(not(feature = "tracing"))]
fn main() {
    println!("This example requires the 'tracing' feature to be enabled.");
    println!("Run with: cargo run --example reduce_dag --features tracing");
}
