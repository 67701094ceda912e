//! Stanza-level parser for `.obo` files
//!
//! An OBO file is a sequence of blank-line-delimited stanzas. Only `[Term]`
//! stanzas are of interest here; header metadata and `[Typedef]` stanzas are
//! skipped. Within a stanza, every line is `tag: value` with tag-specific
//! sub-syntax (quoted definitions, `!`-delimited comments, scoped synonyms).

use std::collections::HashSet;
use std::io::BufRead;

use tracing::trace;

use crate::node::internal::NodeInternal;
use crate::node::{AttributeKind, Edge, EdgeLabel, SynonymScope};
use crate::{NodeId, TermError, TermResult};

const TERM_MARKER: &str = "[Term]";

/// Lazy iterator over the `[Term]` stanzas of an OBO character stream
///
/// Yields the lines of one stanza at a time, without the `[Term]` marker
/// line itself. A blank line terminates the current stanza; lines before the
/// first `[Term]` marker are never captured. A stream that ends mid-stanza
/// still yields that final stanza.
pub(crate) struct Stanzas<R> {
    lines: std::io::Lines<R>,
    current: Option<Vec<String>>,
}

impl<R: BufRead> Stanzas<R> {
    pub(crate) fn new(reader: R) -> Self {
        Stanzas {
            lines: reader.lines(),
            current: None,
        }
    }
}

impl<R: BufRead> Iterator for Stanzas<R> {
    type Item = std::io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.is_empty() {
                        if let Some(stanza) = self.current.take() {
                            return Some(Ok(stanza));
                        }
                    } else if line == TERM_MARKER {
                        // a marker while still capturing flushes the
                        // unterminated stanza before starting the next one
                        if let Some(stanza) = self.current.replace(Vec::new()) {
                            return Some(Ok(stanza));
                        }
                    } else if let Some(stanza) = self.current.as_mut() {
                        stanza.push(line);
                    } else {
                        trace!("Ignoring line outside of [Term] stanza: {}", line);
                    }
                }
                Some(Err(err)) => return Some(Err(err)),
                None => return self.current.take().map(Ok),
            }
        }
    }
}

/// The `[Term]` tags this crate understands
///
/// `is_obsolete`, `replaced_by`, `union_of` and `subset` are deliberately
/// not modelled; they map to `Ignored` together with any unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TermTag {
    Id,
    Name,
    Namespace,
    AltId,
    Def,
    Synonym,
    IsA,
    Relationship,
    IntersectionOf,
    Consider,
    Xref,
    Comment,
    DisjointFrom,
    Ignored,
}

impl TermTag {
    fn from_tag(tag: &str) -> TermTag {
        match tag {
            "id" => TermTag::Id,
            "name" => TermTag::Name,
            "namespace" => TermTag::Namespace,
            "alt_id" => TermTag::AltId,
            "def" => TermTag::Def,
            "synonym" => TermTag::Synonym,
            "is_a" => TermTag::IsA,
            "relationship" => TermTag::Relationship,
            "intersection_of" => TermTag::IntersectionOf,
            "consider" => TermTag::Consider,
            "xref" => TermTag::Xref,
            "comment" => TermTag::Comment,
            "disjoint_from" => TermTag::DisjointFrom,
            _ => TermTag::Ignored,
        }
    }
}

/// Builds one [`NodeInternal`] from the lines of a `[Term]` stanza
///
/// Edges discovered along the way go into the shared `edges` accumulator;
/// their targets are not resolved here and may not exist yet.
///
/// # Errors
///
/// - [`TermError::MissingTag`] when the stanza lacks `id` or `name`
/// - [`TermError::MalformedLine`] when a line misses a required delimiter
pub(crate) fn node_from_stanza(
    lines: &[String],
    edges: &mut HashSet<Edge>,
) -> TermResult<NodeInternal> {
    // Pre-scan for id and name. `id:` may repeat within a stanza, in which
    // case the last assignment wins and every edge carries the final id.
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    for line in lines {
        match tag_value(line)? {
            ("id", value) => id = Some(value),
            ("name", value) => name = Some(value),
            _ => (),
        }
    }
    let Some(id) = id else {
        return Err(TermError::MissingTag {
            tag: "id",
            stanza: stanza_excerpt(lines),
        });
    };
    let Some(name) = name else {
        return Err(TermError::MissingTag {
            tag: "name",
            stanza: stanza_excerpt(lines),
        });
    };
    let mut node = NodeInternal::new(NodeId::from(id), name.to_string());

    for line in lines {
        let (tag, value) = tag_value(line)?;
        match TermTag::from_tag(tag) {
            // handled in the pre-scan
            TermTag::Id | TermTag::Name => (),
            TermTag::Namespace => node.set_kind(value.replace('_', " ")),
            TermTag::AltId => {
                // no edge: an alt_id aliases the node itself
                node.push_attribute(AttributeKind::AltId, value.to_string());
            }
            TermTag::Def => node.set_definition(quoted_def(line)?.to_string()),
            TermTag::Synonym => {
                let (text, scope) = synonym_parts(line)?;
                node.push_attribute(AttributeKind::Synonym(scope), text.trim().to_string());
            }
            TermTag::IsA => {
                let target = before_comment(value, line)?;
                node.push_attribute(AttributeKind::IsA, target.to_string());
                edges.insert(Edge::new(
                    node.id().clone(),
                    NodeId::from(target),
                    EdgeLabel::IsA,
                ));
            }
            TermTag::Relationship => {
                let combined = before_comment(value, line)?;
                let Some((relation, target)) = combined.split_once(' ') else {
                    return Err(TermError::MalformedLine {
                        expected: "`<relation> <target-id>`",
                        line: line.clone(),
                    });
                };
                node.push_attribute(AttributeKind::Relationship, combined.to_string());
                edges.insert(Edge::new(
                    node.id().clone(),
                    NodeId::from(target),
                    EdgeLabel::Relation(relation.to_string()),
                ));
            }
            TermTag::IntersectionOf => {
                // either a bare target id or `<relation> <target-id>`
                let combined = before_comment(value, line)?;
                node.push_attribute(AttributeKind::IntersectionOf, combined.to_string());
                let edge = match combined.split_once(' ') {
                    Some((kind, target)) => Edge::new(
                        node.id().clone(),
                        NodeId::from(target),
                        EdgeLabel::Intersection(Some(kind.to_string())),
                    ),
                    None => Edge::new(
                        node.id().clone(),
                        NodeId::from(combined),
                        EdgeLabel::Intersection(None),
                    ),
                };
                edges.insert(edge);
            }
            TermTag::Consider => {
                // `consider` carries no `!` comment, the value is the target
                node.push_attribute(AttributeKind::Consider, value.to_string());
                edges.insert(Edge::new(
                    node.id().clone(),
                    NodeId::from(value),
                    EdgeLabel::Consider,
                ));
            }
            TermTag::Xref => node.push_attribute(AttributeKind::Xref, value.to_string()),
            TermTag::Comment => node.push_attribute(AttributeKind::Comment, value.to_string()),
            TermTag::DisjointFrom => {
                node.push_attribute(AttributeKind::DisjointFrom, value.to_string());
            }
            TermTag::Ignored => trace!("Ignoring tag `{}` of {}", tag, node.id()),
        }
    }
    Ok(node)
}

/// Splits a stanza line into tag and value at the first `: `
fn tag_value(line: &str) -> TermResult<(&str, &str)> {
    let Some((tag, rest)) = line.split_once(':') else {
        return Err(TermError::MalformedLine {
            expected: "a `tag: value` line",
            line: line.to_string(),
        });
    };
    let Some(value) = rest.strip_prefix(' ') else {
        return Err(TermError::MalformedLine {
            expected: "a space after the tag separator",
            line: line.to_string(),
        });
    };
    Ok((tag, value))
}

/// Extracts the `def` text between the first ` "` and the following `" `
///
/// An embedded `" ` sequence truncates the text early; that limitation is
/// part of the format contract this parser replicates.
fn quoted_def(line: &str) -> TermResult<&str> {
    let Some(start) = line.find(" \"").map(|idx| idx + 2) else {
        return Err(TermError::MalformedLine {
            expected: "a quoted definition",
            line: line.to_string(),
        });
    };
    let Some(len) = line[start..].find("\" ") else {
        return Err(TermError::MalformedLine {
            expected: "a closing `\" ` after the definition",
            line: line.to_string(),
        });
    };
    Ok(&line[start..start + len])
}

/// Extracts the quoted synonym text and the scope keyword following it
fn synonym_parts(line: &str) -> TermResult<(&str, SynonymScope)> {
    let Some(start) = line.find(" \"").map(|idx| idx + 2) else {
        return Err(TermError::MalformedLine {
            expected: "a quoted synonym",
            line: line.to_string(),
        });
    };
    let quoted = &line[start..];
    let Some(len) = quoted.find('"') else {
        return Err(TermError::MalformedLine {
            expected: "a closing quote after the synonym",
            line: line.to_string(),
        });
    };
    let text = &quoted[..len];

    let Some(rest) = quoted[len..].strip_prefix("\" ") else {
        return Err(TermError::MalformedLine {
            expected: "a scope keyword after the closing quote",
            line: line.to_string(),
        });
    };
    let Some(scope_len) = rest.find(" [") else {
        return Err(TermError::MalformedLine {
            expected: "a ` [` references block after the scope",
            line: line.to_string(),
        });
    };
    let Some(scope) = SynonymScope::parse(&rest[..scope_len]) else {
        return Err(TermError::MalformedLine {
            expected: "one of EXACT, NARROW, BROAD or RELATED",
            line: line.to_string(),
        });
    };
    Ok((text, scope))
}

/// Strips the ` ! human-readable comment` suffix from a tag value
fn before_comment<'a>(value: &'a str, line: &str) -> TermResult<&'a str> {
    match value.find(" !") {
        Some(idx) => Ok(&value[..idx]),
        None => Err(TermError::MalformedLine {
            expected: "a ` !` comment delimiter",
            line: line.to_string(),
        }),
    }
}

fn stanza_excerpt(lines: &[String]) -> String {
    lines
        .first()
        .map_or_else(|| String::from("<empty stanza>"), Clone::clone)
}
