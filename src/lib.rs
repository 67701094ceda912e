//! `bioterm` aggregates biomedical terminology into a uniform record shape.
//!
//! The heart of the crate is [`OboGraph`], an in-memory graph built from an
//! OBO flat file. It resolves terms by id (including alternate ids), answers
//! exact name/synonym lookups and ranked free-text queries, and projects any
//! node into the source-independent [`record::Entity`] shape that downstream
//! caches consume.
//!
//! # Examples
//!
//! ```
//! use bioterm::OboGraph;
//!
//! let graph = OboGraph::from_obo_file("tests/small.obo").unwrap();
//!
//! let term = graph.node("GO:0000001").unwrap();
//! assert_eq!(term.name(), "mitochondrion inheritance");
//!
//! // alternate ids resolve to the same node
//! assert_eq!(graph.node("GO:0000096").unwrap().id(), term.id());
//!
//! // ranked search returns all best-scoring terms
//! for hit in graph.search_hits("mitochondrial genome") {
//!     println!("{}: {}", hit.score(), hit.node().name());
//! }
//! ```
//!
//! The graph is immutable once constructed and can be queried from multiple
//! threads without coordination. Picking up a new ontology release means
//! building a fresh instance.

use thiserror::Error;

pub mod dao;
mod graph;
mod node;
mod parser;
pub mod record;
pub mod species;

pub use graph::{OboGraph, SearchHit};
pub use node::{AttributeKind, Edge, EdgeLabel, NodeId, OboNode, SynonymScope};

/// Errors raised while loading terminology data
///
/// Graph construction fails atomically: when any variant is returned, no
/// partially built graph is handed to the caller. Query-time misses are
/// `None`/empty results, never errors.
#[derive(Error, Debug)]
pub enum TermError {
    #[error("cannot open file: {0}")]
    CannotOpenFile(String),
    #[error("[Term] stanza is missing a `{tag}` tag: {stanza}")]
    MissingTag { tag: &'static str, stanza: String },
    #[error("malformed term line, expected {expected}: `{line}`")]
    MalformedLine {
        expected: &'static str,
        line: String,
    },
    #[error("edge `{edge}` references unknown term `{id}`")]
    DanglingReference { edge: String, id: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-wide `Result` with [`TermError`] as the error variant
pub type TermResult<T> = Result<T, TermError>;
