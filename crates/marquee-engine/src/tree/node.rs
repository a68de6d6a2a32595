/// Role marking a node as a write target for the timestamp refresher.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SlotRole {
    /// Receives the human-relative age string ("3 minutes ago").
    Relative,
    /// Receives the absolute locale-formatted date/time string.
    Fixed,
}

/// Builder for a node about to be inserted into a [`DisplayTree`].
///
/// # Example
/// ```rust,ignore
/// let card = tree.insert(Node::new().id("upload-card").timestamp_millis(ts));
/// tree.insert_child(card, Node::new().role(SlotRole::Relative));
/// tree.insert_child(card, Node::new().role(SlotRole::Fixed));
/// ```
///
/// [`DisplayTree`]: super::DisplayTree
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) id: Option<String>,
    pub(crate) text: String,
    pub(crate) timestamp: Option<String>,
    pub(crate) role: Option<SlotRole>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id used for lookup via `DisplayTree::by_id`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Initial text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Timestamp attribute as epoch milliseconds.
    pub fn timestamp_millis(mut self, ms: i64) -> Self {
        self.timestamp = Some(ms.to_string());
        self
    }

    /// Timestamp attribute as a raw string.
    ///
    /// The tree stores attributes string-encoded, so malformed values are
    /// representable; the refresher decides what to do with them.
    pub fn timestamp_raw(mut self, raw: impl Into<String>) -> Self {
        self.timestamp = Some(raw.into());
        self
    }

    /// Slot role, making this node a refresher write target.
    pub fn role(mut self, role: SlotRole) -> Self {
        self.role = Some(role);
        self
    }
}
