//! Query-by-string access to terminology sources
//!
//! Every source wrapper (ontology file, web service, graph database)
//! answers the same three queries and returns [`Entity`] records; callers
//! never see source-specific types. The only implementation in this crate
//! is [`OboResource`], which is fully local.

use std::path::Path;

use crate::record::{Entity, Origin};
use crate::{OboGraph, TermResult};

/// The mandatory query interface of a terminology source
///
/// A query without matches is an empty result (or `None`), never an error.
pub trait TermSource {
    /// Ranked free-text query, returning the best-scoring entities
    /// (ties included)
    fn entities(&self, query: &str) -> Vec<Entity>;

    /// Like [`TermSource::entities`], but with `exact` set only exact
    /// name/synonym matches are returned
    ///
    /// The exact variant trades recall for precision; what counts as an
    /// exact match is up to the implementation.
    fn entities_matching(&self, query: &str, exact: bool) -> Vec<Entity>;

    /// Lookup by source-qualified id, e.g. `GO:0005400`
    fn entity_by_id(&self, id: &str) -> Option<Entity>;
}

/// A terminology source backed by a local [`OboGraph`]
///
/// Queries are answered entirely in memory and projected into [`Entity`]
/// records tagged with the source's [`Origin`]; no network is involved.
///
/// # Examples
///
/// ```
/// use bioterm::dao::{OboResource, TermSource};
///
/// let go = OboResource::gene_ontology("tests/small.obo").unwrap();
///
/// let results = go.entities("mitochondrion inheritance");
/// assert_eq!(results[0].name(), "mitochondrion inheritance");
///
/// let entity = go.entity_by_id("GO:0000001").unwrap();
/// assert_eq!(entity.ids()[0].to_string(), "GO:GO:0000001");
/// ```
#[derive(Debug)]
pub struct OboResource {
    graph: OboGraph,
    origin: Origin,
}

impl OboResource {
    pub fn new(graph: OboGraph, origin: Origin) -> Self {
        OboResource { graph, origin }
    }

    /// Loads a Gene Ontology release from an `.obo` file
    ///
    /// # Errors
    ///
    /// Any [`crate::TermError`] raised while opening or assembling the file
    pub fn gene_ontology<P: AsRef<Path>>(obo_file: P) -> TermResult<Self> {
        Ok(OboResource {
            graph: OboGraph::from_obo_file(obo_file)?,
            origin: Origin::GeneOntology,
        })
    }

    /// The underlying graph, for graph-level queries and traversal
    pub fn graph(&self) -> &OboGraph {
        &self.graph
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}

impl TermSource for OboResource {
    fn entities(&self, query: &str) -> Vec<Entity> {
        self.graph
            .search(query)
            .iter()
            .map(|node| Entity::from_node(node, self.origin))
            .collect()
    }

    fn entities_matching(&self, query: &str, exact: bool) -> Vec<Entity> {
        if exact {
            self.graph
                .search_exact(query)
                .iter()
                .map(|node| Entity::from_node(node, self.origin))
                .collect()
        } else {
            self.entities(query)
        }
    }

    fn entity_by_id(&self, id: &str) -> Option<Entity> {
        self.graph
            .node(id)
            .map(|node| Entity::from_node(&node, self.origin))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::OboGraph;

    fn resource() -> OboResource {
        let obo = "[Term]\n\
            id: GO:0000001\n\
            name: mitochondrion inheritance\n\
            alt_id: GO:0000096\n\
            synonym: \"mitochondrial inheritance\" EXACT []\n\n";
        let graph = OboGraph::from_reader(obo.as_bytes()).unwrap();
        OboResource::new(graph, Origin::GeneOntology)
    }

    #[test]
    fn exact_matching_restricts_results() {
        let go = resource();
        assert_eq!(go.entities_matching("mitochondrial inheritance", true).len(), 1);
        assert!(go.entities_matching("inheritance", true).is_empty());
        // the ranked query still matches on a single token
        assert_eq!(go.entities_matching("inheritance", false).len(), 1);
    }

    #[test]
    fn id_lookup_covers_alternate_ids() {
        let go = resource();
        let by_primary = go.entity_by_id("GO:0000001").unwrap();
        let by_alt = go.entity_by_id("GO:0000096").unwrap();
        assert_eq!(by_primary, by_alt);
        assert!(go.entity_by_id("GO:9999999").is_none());
    }
}
