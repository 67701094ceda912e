//! Queries one shared graph from many threads at once
//!
//! The graph is read-only after construction, so rayon workers can hammer
//! it without any locking.
//!
//! `cargo run --release --example parallel_search <obo-file>`

use bioterm::OboGraph;
use rayon::prelude::*;

fn main() {
    let filename = std::env::args()
        .nth(1)
        .expect("usage: parallel_search <obo-file>");
    let graph = OboGraph::from_obo_file(&filename).expect("unable to load ontology");

    // every term name becomes a query against the graph it came from
    let queries: Vec<String> = graph
        .nodes()
        .map(|node| node.name().to_string())
        .collect();

    let total: usize = queries
        .par_iter()
        .map(|query| graph.search(query).len())
        .sum();

    println!(
        "{} results for {} queries over {} terms",
        total,
        queries.len(),
        graph.len()
    );
}
