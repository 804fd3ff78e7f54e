//! Result reporting: console summary, optional clique file, graph dump.
//! Thin presentation layer over [`SearchResult`] — no algorithmic content.

use std::io::{self, Write};

use crate::graph::Graph;
use crate::search::SearchResult;

/// Human-readable run summary on stdout.
pub fn print_summary(graph: &Graph, result: &SearchResult) {
    println!(
        "graph: {} vertices, {} edges",
        graph.n(),
        graph.m()
    );
    println!("size of best clique found = {}", result.best_size());
    println!("found at iteration {} of {}", result.found_at, result.iterations);
    println!("restarts: {}", result.restarts);
    println!("best clique: {}", members_line(&result.best));
}

/// Write the clique members as one space-separated line.
pub fn write_clique<W: Write>(mut w: W, result: &SearchResult) -> io::Result<()> {
    writeln!(w, "{}", members_line(&result.best))
}

/// Write the full adjacency-list dump of the graph.
pub fn write_graph_dump<W: Write>(mut w: W, graph: &Graph) -> io::Result<()> {
    write!(w, "{graph}")
}

fn members_line(members: &[usize]) -> String {
    members
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/*────────────────── tests ──────────────────*/
