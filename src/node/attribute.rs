use std::fmt::Display;

/// The scope qualifier of an OBO `synonym` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SynonymScope {
    Exact,
    Narrow,
    Broad,
    Related,
}

impl SynonymScope {
    /// Parses the scope keyword as it appears in a `synonym` line
    ///
    /// Returns `None` for anything outside the four standard scopes.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "EXACT" => Some(SynonymScope::Exact),
            "NARROW" => Some(SynonymScope::Narrow),
            "BROAD" => Some(SynonymScope::Broad),
            "RELATED" => Some(SynonymScope::Related),
            _ => None,
        }
    }
}

impl Display for SynonymScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = match self {
            SynonymScope::Exact => "EXACT",
            SynonymScope::Narrow => "NARROW",
            SynonymScope::Broad => "BROAD",
            SynonymScope::Related => "RELATED",
        };
        write!(f, "{}", scope)
    }
}

/// Key of the multi-valued attribute table of an [`crate::OboNode`]
///
/// Every tag that is recorded but not lifted into a dedicated node field
/// is stored under one of these keys, in the order the stanza listed its
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    AltId,
    Synonym(SynonymScope),
    IsA,
    Relationship,
    IntersectionOf,
    Consider,
    Xref,
    Comment,
    DisjointFrom,
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeKind::AltId => write!(f, "alt id"),
            AttributeKind::Synonym(scope) => write!(f, "synonym-{}", scope),
            AttributeKind::IsA => write!(f, "is a"),
            AttributeKind::Relationship => write!(f, "relationship"),
            AttributeKind::IntersectionOf => write!(f, "intersection of"),
            AttributeKind::Consider => write!(f, "consider"),
            AttributeKind::Xref => write!(f, "xref"),
            AttributeKind::Comment => write!(f, "comment"),
            AttributeKind::DisjointFrom => write!(f, "disjoint from"),
        }
    }
}
