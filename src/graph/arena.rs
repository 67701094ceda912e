use std::collections::HashMap;

use crate::node::internal::NodeInternal;
use crate::NodeId;

/// Owned table of every node of a graph
///
/// Nodes live in a flat arena in insertion order; the id table maps each
/// primary and alternate id to an arena slot. Aliasing an id points a second
/// key at the same slot, it never copies the node.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<NodeInternal>,
    ids: HashMap<NodeId, usize>,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a node under its primary id and returns its slot
    ///
    /// A node whose primary id is already present replaces the previous
    /// occupant of that slot.
    pub fn insert(&mut self, node: NodeInternal) -> usize {
        match self.ids.get(node.id().as_str()) {
            Some(&idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                let idx = self.nodes.len();
                self.ids.insert(node.id().clone(), idx);
                self.nodes.push(node);
                idx
            }
        }
    }

    /// Registers `alias` as a secondary id of the node in slot `idx`
    pub fn alias(&mut self, alias: NodeId, idx: usize) {
        self.ids.insert(alias, idx);
    }

    /// Slot of the node registered under `id` (primary or alternate)
    pub fn idx_of(&self, id: &str) -> Option<usize> {
        self.ids.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&NodeInternal> {
        self.idx_of(id).map(|idx| &self.nodes[idx])
    }

    pub fn node_at(&self, idx: usize) -> &NodeInternal {
        &self.nodes[idx]
    }

    pub fn node_at_mut(&mut self, idx: usize) -> &mut NodeInternal {
        &mut self.nodes[idx]
    }

    /// All nodes in insertion order, each exactly once regardless of aliases
    pub fn nodes(&self) -> &[NodeInternal] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aliases_point_at_the_same_slot() {
        let mut arena = Arena::default();
        let idx = arena.insert(NodeInternal::new(NodeId::from("GO:1"), "foo".to_string()));
        arena.alias(NodeId::from("GO:9"), idx);

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.idx_of("GO:1"), arena.idx_of("GO:9"));
    }

    #[test]
    fn duplicate_primary_id_replaces_the_slot() {
        let mut arena = Arena::default();
        arena.insert(NodeInternal::new(NodeId::from("GO:1"), "old".to_string()));
        arena.insert(NodeInternal::new(NodeId::from("GO:1"), "new".to_string()));

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get("GO:1").unwrap().name(), "new");
    }
}
