//! Loads an ontology and runs one ranked query against it
//!
//! `cargo run --release --example search <obo-file> <query words...>`

use bioterm::OboGraph;

fn main() {
    simple_logger::SimpleLogger::new().init().unwrap();

    let mut args = std::env::args().skip(1);
    let filename = args.next().expect("usage: search <obo-file> <query>");
    let query = args.collect::<Vec<String>>().join(" ");

    let graph = OboGraph::from_obo_file(&filename).expect("unable to load ontology");
    println!("{} terms loaded", graph.len());

    let hits = graph.search_hits(&query);
    if hits.is_empty() {
        println!("no match for '{}'", query);
    }
    for hit in hits {
        let node = hit.node();
        println!("[score {}] {} ({})", hit.score(), node.name(), node.id());
        for synonym in node.synonyms() {
            println!("    synonym: {}", synonym);
        }
    }
}
