use std::collections::HashMap;

use super::node::{Node, SlotRole};

/// Handle to a node in a [`DisplayTree`].
///
/// Ids are minted by the tree and are only meaningful for the tree that
/// created them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

struct NodeData {
    node: Node,
    children: Vec<NodeId>,
}

/// Retained node store.
///
/// Performance characteristics:
/// - `insert` / `insert_child` are O(1)
/// - `by_id` is a hash lookup
/// - `timestamped` iterates nodes in document (insertion) order
///
/// Text writes mutate nodes in place; nothing is ever removed. That matches
/// the surface this models: the surrounding host creates and destroys
/// elements, the components here only read attributes and write text.
#[derive(Default)]
pub struct DisplayTree {
    nodes: Vec<NodeData>,
    ids: HashMap<String, NodeId>,
}

impl DisplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── construction ──────────────────────────────────────────────────────

    /// Inserts a node at the top level.
    pub fn insert(&mut self, node: Node) -> NodeId {
        self.push(node)
    }

    /// Inserts a node as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.push(node);
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        if let Some(elem_id) = &node.id {
            // First registration wins, like element-id lookup on a real page.
            self.ids.entry(elem_id.clone()).or_insert(id);
        }
        self.nodes.push(NodeData {
            node,
            children: Vec::new(),
        });
        id
    }

    // ── lookup ────────────────────────────────────────────────────────────

    /// Looks an element up by its id attribute.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Direct children of `node`, in insertion order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0 as usize].children
    }

    /// First descendant of `node` with the given slot role, depth-first.
    ///
    /// Returns `None` when the subtree has no such slot; callers treat that
    /// as "leave this slot alone", not as an error.
    pub fn slot(&self, node: NodeId, role: SlotRole) -> Option<NodeId> {
        for &child in self.children(node) {
            if self.nodes[child.0 as usize].node.role == Some(role) {
                return Some(child);
            }
            if let Some(found) = self.slot(child, role) {
                return Some(found);
            }
        }
        None
    }

    /// All nodes carrying a timestamp attribute, in document order.
    pub fn timestamped(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.node.timestamp.is_some())
            .map(|(i, _)| NodeId(i as u32))
    }

    // ── content access ────────────────────────────────────────────────────

    /// Current text content of `node`.
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0 as usize].node.text
    }

    /// Replaces the text content of `node`.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0 as usize].node.text = text.into();
    }

    /// Raw timestamp attribute of `node`, if any.
    pub fn timestamp(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0 as usize].node.timestamp.as_deref()
    }

    /// Sets or replaces the timestamp attribute of `node`.
    pub fn set_timestamp_millis(&mut self, node: NodeId, ms: i64) {
        self.nodes[node.0 as usize].node.timestamp = Some(ms.to_string());
    }
}
