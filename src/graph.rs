use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;
use tracing::debug;

use crate::node::internal::NodeInternal;
use crate::{OboNode, TermError, TermResult};

mod arena;
pub(crate) mod builder;

use arena::Arena;
use builder::GraphBuilder;
use crate::parser::obo::Stanzas;

/// Tokens excluded from the full-text index
const STOPWORDS: [&str; 14] = [
    "of", "the", "a", "an", "and", "that", "to", "by", "from", "as", "in", "or", "which", "with",
];

/// Arena slots of the nodes registered under one index key
pub(crate) type Postings = SmallVec<[usize; 4]>;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A directed, labelled graph of ontology terms parsed from an OBO file
///
/// The graph owns every term, connects them through their `is_a`,
/// `relationship`, `intersection_of` and `consider` edges and maintains two
/// derived indexes:
///
/// - a name/synonym index for exact, case-insensitive lookups
/// - a token index over names, synonyms and definitions for ranked
///   free-text search
///
/// ```mermaid
/// graph LR
///     O[OBO file] --> S[stanzas]
///     S --> N[nodes + pending edges]
///     N --> A[assembly]
///     A --> G[OboGraph]
///     G --> Q1["node(id)"]
///     G --> Q2["search_exact(name)"]
///     G --> Q3["search(query)"]
/// ```
///
/// Construction happens once, single-threaded; afterwards the graph is
/// read-only and can be shared across threads freely. Loading a new
/// ontology release means building a new instance; readers of the old one
/// are unaffected.
///
/// # Examples
///
/// ```
/// use bioterm::OboGraph;
///
/// let graph = OboGraph::from_obo_file("tests/small.obo").unwrap();
///
/// let node = graph.node("GO:0000001").unwrap();
/// assert_eq!(node.name(), "mitochondrion inheritance");
///
/// // unknown ids are a plain miss, not an error
/// assert!(graph.node("GO:9999999").is_none());
///
/// // ranked search: all terms tied at the best score are returned
/// let results = graph.search("mitochondrion inheritance");
/// assert!(!results.is_empty());
/// ```
pub struct OboGraph {
    arena: Arena,
    name_index: HashMap<String, Postings>,
    token_index: HashMap<String, Postings>,
}

impl OboGraph {
    /// Reads and assembles a graph from an `.obo` file
    ///
    /// # Errors
    ///
    /// - [`TermError::CannotOpenFile`] when the file cannot be opened
    /// - any construction error of [`OboGraph::from_reader`]
    pub fn from_obo_file<P: AsRef<Path>>(filename: P) -> TermResult<Self> {
        let path_str = filename.as_ref().display().to_string();
        debug!("Loading OBO graph from {}", path_str);
        let file = File::open(filename).map_err(|_| TermError::CannotOpenFile(path_str))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Assembles a graph from any buffered OBO character stream
    ///
    /// The stream is consumed stanza by stanza; construction is atomic, so
    /// the first malformed stanza or unresolvable edge fails the whole
    /// load.
    ///
    /// # Errors
    ///
    /// - [`TermError::MissingTag`] / [`TermError::MalformedLine`] for
    ///   malformed stanzas
    /// - [`TermError::DanglingReference`] for edges without a target node
    /// - [`TermError::InvalidInput`] when reading from the stream fails
    ///
    /// # Examples
    ///
    /// ```
    /// use bioterm::OboGraph;
    ///
    /// let obo = "[Term]\nid: GO:0000001\nname: mitochondrion inheritance\n\n";
    /// let graph = OboGraph::from_reader(obo.as_bytes()).unwrap();
    /// assert_eq!(graph.len(), 1);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> TermResult<Self> {
        let mut builder = GraphBuilder::default();
        for stanza in Stanzas::new(reader) {
            let lines =
                stanza.map_err(|err| TermError::InvalidInput(format!("read failure: {err}")))?;
            builder.add_stanza(&lines)?;
        }
        builder.assemble()
    }

    /// Returns the term registered under `id`
    ///
    /// Alternate ids resolve to the same node as the primary id. A miss is
    /// `None`, never an error.
    pub fn node(&self, id: &str) -> Option<OboNode<'_>> {
        self.arena
            .get(id)
            .map(|internal| OboNode::new(self, internal))
    }

    /// Exact, case-insensitive lookup over names and synonyms
    ///
    /// Returns every node whose name or synonym equals the query; the vec
    /// is empty when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use bioterm::OboGraph;
    ///
    /// let graph = OboGraph::from_obo_file("tests/small.obo").unwrap();
    /// let hits = graph.search_exact("Mitochondrial Inheritance");
    /// assert_eq!(hits[0].id(), &"GO:0000001");
    /// ```
    pub fn search_exact(&self, name: &str) -> Vec<OboNode<'_>> {
        match self.name_index.get(&name.to_lowercase()) {
            Some(postings) => postings.iter().map(|&idx| self.node_at(idx)).collect(),
            None => Vec::new(),
        }
    }

    /// Ranked free-text search over names, synonyms and definitions
    ///
    /// Shorthand for [`OboGraph::search_hits`] without the scores.
    pub fn search(&self, query: &str) -> Vec<OboNode<'_>> {
        self.search_hits(query)
            .into_iter()
            .map(|hit| hit.node)
            .collect()
    }

    /// Ranked free-text search, returning the tied best hits with scores
    ///
    /// The query is lower-cased and split on whitespace; each node's score
    /// is the number of distinct query tokens found in its indexed text.
    /// Every node tied at the maximum score is returned (in graph insertion
    /// order); nodes matching no token never appear. An empty result means
    /// no token matched at all.
    pub fn search_hits(&self, query: &str) -> Vec<SearchHit<'_>> {
        let mut scores: HashMap<usize, usize> = HashMap::new();
        for token in query.to_lowercase().split_whitespace() {
            if let Some(postings) = self.token_index.get(token) {
                for &idx in postings {
                    *scores.entry(idx).or_insert(0) += 1;
                }
            }
        }

        let Some(&best) = scores.values().max() else {
            return Vec::new();
        };
        let mut tied: Vec<usize> = scores
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(idx, _)| idx)
            .collect();
        tied.sort_unstable();
        tied.into_iter()
            .map(|idx| SearchHit {
                node: self.node_at(idx),
                score: best,
            })
            .collect()
    }

    /// Returns the number of terms in the graph
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the graph contains no terms
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over every term, in insertion order
    pub fn nodes(&self) -> Iter<'_> {
        self.into_iter()
    }

    fn node_at(&self, idx: usize) -> OboNode<'_> {
        OboNode::new(self, self.arena.node_at(idx))
    }
}

impl std::fmt::Debug for OboGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OboGraph with {} terms", self.len())
    }
}

/// One result of a ranked search, carrying the tied best score
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    node: OboNode<'a>,
    score: usize,
}

impl<'a> SearchHit<'a> {
    /// The matched term
    pub fn node(&self) -> OboNode<'a> {
        self.node
    }

    /// Number of distinct query tokens the term matched
    pub fn score(&self) -> usize {
        self.score
    }
}

/// Iterator over all terms of an [`OboGraph`]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, NodeInternal>,
    graph: &'a OboGraph,
}

impl<'a> Iterator for Iter<'a> {
    type Item = OboNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|internal| OboNode::new(self.graph, internal))
    }
}

impl<'a> IntoIterator for &'a OboGraph {
    type Item = OboNode<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.arena.nodes().iter(),
            graph: self,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn graph(input: &str) -> OboGraph {
        OboGraph::from_reader(input.as_bytes()).expect("test input must assemble")
    }

    #[test]
    fn single_node_single_token() {
        let g = graph("[Term]\nid: GO:1\nname: alpha\n\n");
        let hits = g.search_hits("alpha");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node().id(), &"GO:1");
        assert_eq!(hits[0].score(), 1);
    }

    #[test]
    fn all_tied_nodes_are_returned() {
        let g = graph(
            "[Term]\nid: GO:1\nname: alpha beta\n\n\
             [Term]\nid: GO:2\nname: beta alpha\n\n",
        );
        let results = g.search("alpha beta");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id(), &"GO:1");
        assert_eq!(results[1].id(), &"GO:2");
    }

    #[test]
    fn lower_scoring_nodes_are_excluded() {
        let g = graph(
            "[Term]\nid: GO:1\nname: alpha beta\n\n\
             [Term]\nid: GO:2\nname: alpha\n\n",
        );
        let hits = g.search_hits("alpha beta");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node().id(), &"GO:1");
        assert_eq!(hits[0].score(), 2);
    }

    #[test]
    fn unknown_tokens_yield_an_empty_result() {
        let g = graph("[Term]\nid: GO:1\nname: alpha\n\n");
        assert!(g.search("zymurgy").is_empty());
        assert!(g.search_hits("zymurgy zyzzyva").is_empty());
    }

    #[test]
    fn exact_search_is_case_insensitive() {
        let g = graph("[Term]\nid: GO:1\nname: Apoptosis\n\n");
        let upper = g.search_exact("Apoptosis");
        let lower = g.search_exact("apoptosis");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id(), lower[0].id());
    }

    #[test]
    fn definitions_are_searchable() {
        let g = graph(
            "[Term]\nid: GO:1\nname: alpha\n\
             def: \"Cell death; controlled demolition.\" [refs]\n\n",
        );
        let results = g.search("demolition");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let g = graph(
            "[Term]\nid: GO:2\nname: second\n\n\
             [Term]\nid: GO:1\nname: first\n\n",
        );
        let ids: Vec<String> = g.nodes().map(|node| node.id().to_string()).collect();
        assert_eq!(ids, ["GO:2", "GO:1"]);
    }
}
