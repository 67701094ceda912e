//! Ontology term nodes and their edges

use core::fmt::Debug;

mod attribute;
mod edge;
mod id;
pub(crate) mod internal;

pub use attribute::{AttributeKind, SynonymScope};
pub use edge::{Edge, EdgeLabel};
pub use id::NodeId;

use crate::node::internal::NodeInternal;
use crate::OboGraph;

/// A single term of an [`OboGraph`]
///
/// `OboNode` is a cheap, copyable view borrowing from the graph. Besides the
/// term's own fields it can traverse the graph through its edges.
///
/// # Examples
///
/// ```
/// use bioterm::OboGraph;
///
/// let graph = OboGraph::from_obo_file("tests/small.obo").unwrap();
/// let term = graph.node("GO:0000001").unwrap();
///
/// assert_eq!(term.name(), "mitochondrion inheritance");
/// assert_eq!(term.kind(), "biological process");
/// for parent in term.parents() {
///     println!("{}", parent.name());
/// }
/// ```
#[derive(Clone, Copy)]
pub struct OboNode<'a> {
    graph: &'a OboGraph,
    internal: &'a NodeInternal,
}

impl<'a> OboNode<'a> {
    pub(crate) fn new(graph: &'a OboGraph, internal: &'a NodeInternal) -> OboNode<'a> {
        OboNode { graph, internal }
    }

    /// The canonical id of the term, e.g. `GO:0005400`
    pub fn id(&self) -> &'a NodeId {
        self.internal.id()
    }

    /// The name of the term
    pub fn name(&self) -> &'a str {
        self.internal.name()
    }

    /// The `def` text of the term, empty when the stanza carried none
    pub fn definition(&self) -> &'a str {
        self.internal.definition()
    }

    /// The namespace classification, with underscores replaced by spaces
    ///
    /// Empty when the stanza carried no `namespace` tag.
    pub fn kind(&self) -> &'a str {
        self.internal.kind()
    }

    /// Returns `true` if the stanza recorded at least one value for `kind`
    pub fn has_attribute(&self, kind: AttributeKind) -> bool {
        self.internal.has_attribute(kind)
    }

    /// The values recorded under `kind`, in stanza order
    ///
    /// Absent attributes yield an empty slice, never an error.
    pub fn attribute(&self, kind: AttributeKind) -> &'a [String] {
        self.internal.attribute(kind)
    }

    /// All synonyms across every scope, deduplicated in first-seen order
    pub fn synonyms(&self) -> Vec<&'a str> {
        self.internal.synonyms()
    }

    /// The alternate ids of the term (each also resolves via [`OboGraph::node`])
    pub fn alt_ids(&self) -> &'a [String] {
        self.internal.alt_ids()
    }

    /// Edges pointing at this term
    pub fn incoming_edges(&self) -> &'a [Edge] {
        self.internal.incoming()
    }

    /// Edges leaving this term
    pub fn outgoing_edges(&self) -> &'a [Edge] {
        self.internal.outgoing()
    }

    /// Terms this one subsumes into via `is a` edges
    pub fn parents(&self) -> impl Iterator<Item = OboNode<'a>> + 'a {
        let graph = self.graph;
        self.internal
            .outgoing()
            .iter()
            .filter(|edge| *edge.label() == EdgeLabel::IsA)
            .filter_map(move |edge| graph.node(edge.target().as_str()))
    }

    /// Terms that name this one as their `is a` parent
    pub fn children(&self) -> impl Iterator<Item = OboNode<'a>> + 'a {
        let graph = self.graph;
        self.internal
            .incoming()
            .iter()
            .filter(|edge| *edge.label() == EdgeLabel::IsA)
            .filter_map(move |edge| graph.node(edge.source().as_str()))
    }
}

impl Debug for OboNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OboNode({} | {})", self.id(), self.name())
    }
}

impl PartialEq for OboNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for OboNode<'_> {}
