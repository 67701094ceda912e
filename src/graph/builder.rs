use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::graph::arena::Arena;
use crate::graph::{OboGraph, Postings, STOPWORDS};
use crate::node::internal::NodeInternal;
use crate::node::Edge;
use crate::parser::obo;
use crate::{NodeId, TermError, TermResult};

/// Accumulates parsed nodes and pending edges, then assembles the graph
///
/// Assembly is a single global pass that runs after every stanza has been
/// parsed: it owns the node table, resolves alternate-id aliases, connects
/// edges to their endpoint nodes and builds both lookup indexes. The
/// returned [`OboGraph`] is never mutated again.
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    nodes: Vec<NodeInternal>,
    edges: HashSet<Edge>,
}

impl GraphBuilder {
    /// Parses one `[Term]` stanza into the builder
    pub fn add_stanza(&mut self, lines: &[String]) -> TermResult<()> {
        let node = obo::node_from_stanza(lines, &mut self.edges)?;
        self.nodes.push(node);
        Ok(())
    }

    /// Consumes the builder into the finished, immutable graph
    ///
    /// # Errors
    ///
    /// [`TermError::DanglingReference`] when an edge references an id that
    /// no node (primary or alternate) carries. Construction fails as a
    /// whole; no partial graph escapes.
    pub fn assemble(self) -> TermResult<OboGraph> {
        let GraphBuilder { nodes, edges } = self;
        debug!(
            "Assembling graph from {} terms and {} edges",
            nodes.len(),
            edges.len()
        );

        let mut arena = Arena::with_capacity(nodes.len());
        for node in nodes {
            arena.insert(node);
        }
        for idx in 0..arena.len() {
            let aliases: Vec<NodeId> = arena
                .node_at(idx)
                .alt_ids()
                .iter()
                .map(|alt| NodeId::from(alt.as_str()))
                .collect();
            for alias in aliases {
                arena.alias(alias, idx);
            }
        }

        // attach in sorted order so the per-node edge lists are deterministic
        let mut edges: Vec<Edge> = edges.into_iter().collect();
        edges.sort_unstable();
        for edge in edges {
            let source = arena
                .idx_of(edge.source().as_str())
                .ok_or_else(|| dangling(&edge, edge.source()))?;
            let target = arena
                .idx_of(edge.target().as_str())
                .ok_or_else(|| dangling(&edge, edge.target()))?;
            arena.node_at_mut(source).add_outgoing(edge.clone());
            arena.node_at_mut(target).add_incoming(edge);
        }

        let name_index = build_name_index(&arena);
        let token_index = build_token_index(&arena);

        Ok(OboGraph {
            arena,
            name_index,
            token_index,
        })
    }
}

fn dangling(edge: &Edge, id: &NodeId) -> TermError {
    TermError::DanglingReference {
        edge: edge.to_string(),
        id: id.to_string(),
    }
}

/// Maps every lower-cased name and synonym to the nodes carrying it
///
/// A name already present in the index appends to the existing entry; one
/// name can map to several nodes.
fn build_name_index(arena: &Arena) -> HashMap<String, Postings> {
    let mut index: HashMap<String, Postings> = HashMap::new();
    for (idx, node) in arena.nodes().iter().enumerate() {
        index
            .entry(node.name().to_lowercase())
            .or_default()
            .push(idx);
        for synonym in node.synonyms() {
            index.entry(synonym.to_lowercase()).or_default().push(idx);
        }
    }
    index
}

/// Inverted index from token to the nodes whose name, synonyms or
/// definition contain that token
///
/// Tokens are deduplicated per node, so a node appears at most once in any
/// posting list.
fn build_token_index(arena: &Arena) -> HashMap<String, Postings> {
    let mut index: HashMap<String, Postings> = HashMap::new();
    for (idx, node) in arena.nodes().iter().enumerate() {
        for token in node_tokens(node) {
            index.entry(token).or_default().push(idx);
        }
    }
    index
}

/// The distinct, stopword-filtered tokens of one node
fn node_tokens(node: &NodeInternal) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in node.name().to_lowercase().split_whitespace() {
        tokens.insert(word.to_string());
    }
    for synonym in node.synonyms() {
        for word in synonym.to_lowercase().replace(',', " ").split_whitespace() {
            tokens.insert(word.to_string());
        }
    }
    let definition = node
        .definition()
        .to_lowercase()
        .replace(['.', ',', ':', ';'], " ");
    for word in definition.split_whitespace() {
        tokens.insert(word.to_string());
    }
    tokens.retain(|token| !STOPWORDS.contains(&token.as_str()));
    tokens
}

#[cfg(test)]
mod test {
    use super::*;

    fn stanza(builder: &mut GraphBuilder, lines: &[&str]) {
        let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        builder.add_stanza(&lines).expect("stanza must parse");
    }

    #[test]
    fn edges_attach_to_both_endpoints() {
        let mut builder = GraphBuilder::default();
        stanza(&mut builder, &["id: GO:1", "name: parent"]);
        stanza(&mut builder, &["id: GO:2", "name: child", "is_a: GO:1 ! parent"]);
        let graph = builder.assemble().unwrap();

        let parent = graph.node("GO:1").unwrap();
        let child = graph.node("GO:2").unwrap();
        assert_eq!(parent.incoming_edges().len(), 1);
        assert_eq!(*parent.incoming_edges()[0].source(), "GO:2");
        assert_eq!(child.outgoing_edges().len(), 1);
        assert_eq!(*child.outgoing_edges()[0].target(), "GO:1");
    }

    #[test]
    fn edges_resolve_through_alternate_ids() {
        let mut builder = GraphBuilder::default();
        stanza(&mut builder, &["id: GO:1", "name: parent", "alt_id: GO:9"]);
        stanza(&mut builder, &["id: GO:2", "name: child", "is_a: GO:9 ! via alias"]);
        let graph = builder.assemble().unwrap();

        assert_eq!(graph.node("GO:1").unwrap().incoming_edges().len(), 1);
    }

    #[test]
    fn dangling_edge_aborts_assembly() {
        let mut builder = GraphBuilder::default();
        stanza(&mut builder, &["id: GO:2", "name: child", "is_a: GO:404 ! nowhere"]);
        let err = builder.assemble().unwrap_err();
        assert!(matches!(
            err,
            TermError::DanglingReference { ref id, .. } if id == "GO:404"
        ));
    }

    #[test]
    fn colliding_names_append_to_the_index_entry() {
        let mut builder = GraphBuilder::default();
        stanza(&mut builder, &["id: GO:1", "name: Apoptosis"]);
        stanza(
            &mut builder,
            &["id: GO:2", "name: other", "synonym: \"apoptosis\" EXACT []"],
        );
        let graph = builder.assemble().unwrap();

        let hits = graph.search_exact("APOPTOSIS");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn stopwords_never_reach_the_token_index() {
        let mut builder = GraphBuilder::default();
        stanza(
            &mut builder,
            &[
                "id: GO:1",
                "name: regulation of apoptosis",
                "def: \"The process by which apoptosis happens.\" [refs]",
            ],
        );
        let graph = builder.assemble().unwrap();

        assert!(graph.search("of").is_empty());
        assert!(graph.search("by").is_empty());
        assert_eq!(graph.search("regulation").len(), 1);
    }
}
