use crate::record::{Entity, Origin};

/// One subject-verb-object statement about a term
///
/// The flattened form every record is reduced to before it reaches the
/// relational cache: a relationship name, its value, a confidence weight
/// and the origin of the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TermRelationship {
    from_term: String,
    relationship: String,
    to_term: String,
    confidence: f64,
    origin: Origin,
    parent_term: Option<String>,
}

impl TermRelationship {
    pub fn new(
        from_term: &str,
        relationship: &str,
        to_term: &str,
        confidence: f64,
        origin: Origin,
    ) -> Self {
        TermRelationship {
            from_term: from_term.to_string(),
            relationship: relationship.to_string(),
            to_term: to_term.to_string(),
            confidence,
            origin,
            parent_term: None,
        }
    }

    /// Same as [`TermRelationship::new`] with the owning concept attached
    pub fn with_parent(
        from_term: &str,
        relationship: &str,
        to_term: &str,
        confidence: f64,
        origin: Origin,
        parent_term: &str,
    ) -> Self {
        TermRelationship {
            parent_term: Some(parent_term.to_string()),
            ..TermRelationship::new(from_term, relationship, to_term, confidence, origin)
        }
    }

    pub fn from_term(&self) -> &str {
        &self.from_term
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn to_term(&self) -> &str {
        &self.to_term
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn parent_term(&self) -> Option<&str> {
        self.parent_term.as_deref()
    }
}

impl std::fmt::Display for TermRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {}; {}; {}",
            self.from_term, self.relationship, self.to_term, self.confidence, self.origin
        )
    }
}

/// A named term together with everything stated about it
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    name: String,
    relationships: Vec<TermRelationship>,
}

impl Term {
    pub fn new(name: &str) -> Self {
        Term {
            name: name.to_string(),
            relationships: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_relationship(&mut self, relationship: TermRelationship) {
        self.relationships.push(relationship);
    }

    pub fn relationships(&self) -> &[TermRelationship] {
        &self.relationships
    }

    /// All statements whose relationship name equals `relation`
    pub fn relationships_by_relation(&self, relation: &str) -> Vec<&TermRelationship> {
        self.relationships
            .iter()
            .filter(|tr| tr.relationship() == relation)
            .collect()
    }
}

impl From<&Entity> for Term {
    /// Flattens an [`Entity`] into its relationship-list form
    ///
    /// Type, definition, ids and synonyms each become one statement, then
    /// every relation follows, all at confidence 1.0.
    fn from(entity: &Entity) -> Self {
        let mut term = Term::new(entity.name());
        let origin = entity.origin();

        term.add_relationship(TermRelationship::new(
            entity.name(),
            "type",
            entity.kind(),
            1.0,
            origin,
        ));
        term.add_relationship(TermRelationship::new(
            entity.name(),
            "definition",
            entity.definition(),
            1.0,
            origin,
        ));
        for id in entity.ids() {
            term.add_relationship(TermRelationship::new(
                entity.name(),
                "ID",
                &id.to_string(),
                1.0,
                origin,
            ));
        }
        for synonym in entity.synonyms() {
            term.add_relationship(TermRelationship::new(
                entity.name(),
                "synonym",
                synonym,
                1.0,
                origin,
            ));
        }
        for relation in entity.relations() {
            term.add_relationship(TermRelationship::new(
                entity.name(),
                relation.property(),
                relation.value(),
                1.0,
                origin,
            ));
        }
        term
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::{Identifier, Relation};

    fn entity() -> Entity {
        let mut entity = Entity::new("mitochondrion inheritance", Origin::GeneOntology);
        entity.set_kind("biological process");
        entity.set_definition("The distribution of mitochondria.");
        entity.add_id(Identifier::new("GO", "GO:0000001"));
        entity.add_synonym("mitochondrial inheritance");
        entity.add_relation(Relation::new("is a", "GO:0048308"));
        entity
    }

    #[test]
    fn entity_flattens_into_statements() {
        let term = Term::from(&entity());
        assert_eq!(term.name(), "mitochondrion inheritance");
        // type + definition + 1 id + 1 synonym + 1 relation
        assert_eq!(term.relationships().len(), 5);
        assert!(term
            .relationships()
            .iter()
            .all(|tr| tr.confidence() == 1.0));
    }

    #[test]
    fn statements_filter_by_relation_name() {
        let term = Term::from(&entity());
        let ids = term.relationships_by_relation("ID");
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].to_term(), "GO:GO:0000001");
        assert!(term.relationships_by_relation("phenotype").is_empty());
    }
}
