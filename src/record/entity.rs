use crate::record::{Identifier, Origin, Relation};
use crate::{AttributeKind, OboNode};

/// The general output shape of any terminology source
///
/// Carries a name, definition, type classification, synonyms, qualified
/// identifiers, arbitrary relations and the origin of the information.
/// Projection from a source-specific shape (such as [`OboNode`]) is a pure
/// transform; an `Entity` never refers back into the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    definition: String,
    kind: String,
    synonyms: Vec<String>,
    ids: Vec<Identifier>,
    relations: Vec<Relation>,
    origin: Origin,
}

impl Entity {
    pub fn new(name: &str, origin: Origin) -> Self {
        Entity {
            name: name.to_string(),
            definition: String::new(),
            kind: String::new(),
            synonyms: Vec::new(),
            ids: Vec::new(),
            relations: Vec::new(),
            origin,
        }
    }

    /// Projects an ontology term into the generic record shape
    ///
    /// The entity carries the node's name, definition and type, one
    /// qualified id per primary and alternate id, the deduplicated synonym
    /// union, and one relation per `relationship` and `is a` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bioterm::record::{Entity, Origin};
    /// use bioterm::OboGraph;
    ///
    /// let graph = OboGraph::from_obo_file("tests/small.obo").unwrap();
    /// let node = graph.node("GO:0000001").unwrap();
    ///
    /// let entity = Entity::from_node(&node, Origin::GeneOntology);
    /// assert_eq!(entity.name(), "mitochondrion inheritance");
    /// assert_eq!(entity.ids()[0].to_string(), "GO:GO:0000001");
    /// ```
    pub fn from_node(node: &OboNode, origin: Origin) -> Self {
        let mut entity = Entity::new(node.name(), origin);
        entity.definition = node.definition().to_string();
        entity.kind = node.kind().to_string();

        entity.add_id(Identifier::new(origin.authority(), node.id().as_str()));
        for alt_id in node.alt_ids() {
            entity.add_id(Identifier::new(origin.authority(), alt_id));
        }
        for synonym in node.synonyms() {
            entity.add_synonym(synonym);
        }
        for combined in node.attribute(AttributeKind::Relationship) {
            // the stanza parser guarantees the `<relation> <target>` shape
            if let Some((property, value)) = combined.split_once(' ') {
                entity.add_relation(Relation::new(property, value));
            }
        }
        for target in node.attribute(AttributeKind::IsA) {
            entity.add_relation(Relation::new("is a", target));
        }
        entity
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

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn ids(&self) -> &[Identifier] {
        &self.ids
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn set_definition(&mut self, definition: &str) {
        self.definition = definition.to_string();
    }

    pub fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }

    pub fn add_synonym(&mut self, synonym: &str) {
        self.synonyms.push(synonym.to_string());
    }

    pub fn add_id(&mut self, id: Identifier) {
        self.ids.push(id);
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::OboGraph;

    #[test]
    fn projection_covers_every_field() {
        let obo = "[Term]\n\
            id: GO:0000010\n\
            name: example term\n\
            namespace: biological_process\n\
            alt_id: GO:0000011\n\
            def: \"An example.\" [refs]\n\
            synonym: \"sample term\" EXACT []\n\
            is_a: GO:0000012 ! other\n\
            relationship: part_of GO:0000012 ! other\n\
            \n\
            [Term]\n\
            id: GO:0000012\n\
            name: other\n\n";
        let graph = OboGraph::from_reader(obo.as_bytes()).unwrap();
        let node = graph.node("GO:0000010").unwrap();

        let entity = Entity::from_node(&node, Origin::GeneOntology);
        assert_eq!(entity.name(), "example term");
        assert_eq!(entity.definition(), "An example.");
        assert_eq!(entity.kind(), "biological process");
        assert_eq!(entity.origin(), Origin::GeneOntology);
        assert_eq!(entity.synonyms(), ["sample term"]);

        let ids: Vec<String> = entity.ids().iter().map(Identifier::to_string).collect();
        assert_eq!(ids, ["GO:GO:0000010", "GO:GO:0000011"]);

        let relations: Vec<String> = entity
            .relations()
            .iter()
            .map(Relation::to_string)
            .collect();
        assert_eq!(relations, ["part_of: GO:0000012", "is a: GO:0000012"]);
    }
}
