use std::collections::HashMap;

use crate::node::{AttributeKind, Edge, SynonymScope};
use crate::NodeId;

const EMPTY_VALUES: &[String] = &[];

/// The four synonym scopes, in the order synonyms are aggregated
const SYNONYM_SCOPES: [SynonymScope; 4] = [
    SynonymScope::Exact,
    SynonymScope::Narrow,
    SynonymScope::Broad,
    SynonymScope::Related,
];

/// Owned data of a single ontology term
///
/// Instances are created by the stanza parser with empty edge lists; the
/// assembly pass attaches edges and nothing is mutated afterwards.
#[derive(Debug)]
pub(crate) struct NodeInternal {
    id: NodeId,
    name: String,
    definition: String,
    kind: String,
    attributes: HashMap<AttributeKind, Vec<String>>,
    incoming: Vec<Edge>,
    outgoing: Vec<Edge>,
}

impl NodeInternal {
    pub fn new(id: NodeId, name: String) -> Self {
        NodeInternal {
            id,
            name,
            definition: String::new(),
            kind: String::new(),
            attributes: HashMap::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_definition(&mut self, definition: String) {
        self.definition = definition;
    }

    pub fn set_kind(&mut self, kind: String) {
        self.kind = kind;
    }

    pub fn has_attribute(&self, kind: AttributeKind) -> bool {
        self.attributes.contains_key(&kind)
    }

    /// Values recorded under `kind`, empty when the tag never appeared
    pub fn attribute(&self, kind: AttributeKind) -> &[String] {
        self.attributes
            .get(&kind)
            .map_or(EMPTY_VALUES, Vec::as_slice)
    }

    pub fn push_attribute(&mut self, kind: AttributeKind, value: String) {
        self.attributes.entry(kind).or_default().push(value);
    }

    /// All synonyms across the four scopes, deduplicated in first-seen order
    pub fn synonyms(&self) -> Vec<&str> {
        let mut synonyms: Vec<&str> = Vec::new();
        for scope in SYNONYM_SCOPES {
            for synonym in self.attribute(AttributeKind::Synonym(scope)) {
                if !synonyms.contains(&synonym.as_str()) {
                    synonyms.push(synonym);
                }
            }
        }
        synonyms
    }

    pub fn alt_ids(&self) -> &[String] {
        self.attribute(AttributeKind::AltId)
    }

    pub fn incoming(&self) -> &[Edge] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[Edge] {
        &self.outgoing
    }

    pub fn add_incoming(&mut self, edge: Edge) {
        self.incoming.push(edge);
    }

    pub fn add_outgoing(&mut self, edge: Edge) {
        self.outgoing.push(edge);
    }
}

impl PartialEq for NodeInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NodeInternal {}
