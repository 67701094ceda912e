use std::fmt::Display;

use crate::NodeId;

/// The label of a directed [`Edge`] between two ontology terms
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeLabel {
    /// `is_a` subsumption
    IsA,
    /// `consider` replacement hint
    Consider,
    /// A named `relationship`, e.g. `part_of`
    Relation(String),
    /// `intersection_of`, optionally qualified by a relation type
    Intersection(Option<String>),
}

impl Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeLabel::IsA => write!(f, "is a"),
            EdgeLabel::Consider => write!(f, "consider"),
            EdgeLabel::Relation(relation) => write!(f, "{}", relation),
            EdgeLabel::Intersection(None) => write!(f, "intersection of"),
            EdgeLabel::Intersection(Some(kind)) => write!(f, "intersection of {}", kind),
        }
    }
}

/// A directed, labelled connection between two terms of an [`crate::OboGraph`]
///
/// Equality and hashing are structural over the `(source, target, label)`
/// triple, so accumulating edges in a set collapses duplicates. Edges are
/// created while a stanza is parsed, before the target term necessarily
/// exists; they are only attached to their endpoint nodes during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    label: EdgeLabel,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, label: EdgeLabel) -> Self {
        Edge {
            source,
            target,
            label,
        }
    }

    /// Id of the term the edge starts from
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    /// Id of the term the edge points to
    pub fn target(&self) -> &NodeId {
        &self.target
    }

    /// The edge label
    pub fn label(&self) -> &EdgeLabel {
        &self.label
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.source, self.label, self.target)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn edge(source: &str, target: &str, label: EdgeLabel) -> Edge {
        Edge::new(NodeId::from(source), NodeId::from(target), label)
    }

    #[test]
    fn duplicate_edges_collapse_in_a_set() {
        let mut edges = HashSet::new();
        edges.insert(edge("GO:1", "GO:2", EdgeLabel::IsA));
        edges.insert(edge("GO:1", "GO:2", EdgeLabel::IsA));
        edges.insert(edge("GO:1", "GO:2", EdgeLabel::Relation("part_of".into())));
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn display_is_source_label_target() {
        let e = edge("GO:1", "GO:2", EdgeLabel::Relation("part_of".into()));
        assert_eq!(e.to_string(), "GO:1,part_of,GO:2");

        let e = edge("GO:1", "GO:2", EdgeLabel::Intersection(Some("part_of".into())));
        assert_eq!(e.to_string(), "GO:1,intersection of part_of,GO:2");
    }
}
