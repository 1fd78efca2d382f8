//! Node store: wards indexed by their identifier.

use serde::{Deserialize, Serialize};

use super::SlotError;
use crate::input::RecordError;
use crate::model::{Node, NodeId};

/// Sparse, 1-indexed arena of ward slots.
///
/// Slot `i` holds the ward whose identifier is `i`. A slot is `None` until a
/// link mentions that ward. Slot 0 is the sentinel and stays `None`. The
/// arena grows on demand up to `max_nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNodeStore")]
pub struct NodeStore {
    slots: Vec<Option<Node>>,
    max_nodes: usize,
}

/// Wire form of [`NodeStore`], checked before it becomes one.
#[derive(Deserialize)]
struct RawNodeStore {
    slots: Vec<Option<Node>>,
    max_nodes: usize,
}

impl TryFrom<RawNodeStore> for NodeStore {
    type Error = SlotError;

    fn try_from(raw: RawNodeStore) -> Result<Self, SlotError> {
        match raw.slots.first() {
            None => return Err(SlotError::MissingSentinel),
            Some(Some(_)) => return Err(SlotError::OccupiedSentinel),
            Some(None) => {}
        }
        let highest = raw.slots.len() - 1;
        if highest > raw.max_nodes && raw.slots[raw.max_nodes + 1..].iter().any(Option::is_some) {
            return Err(SlotError::OverCapacity { count: highest, max: raw.max_nodes });
        }
        Ok(Self { slots: raw.slots, max_nodes: raw.max_nodes })
    }
}

impl NodeStore {
    /// An empty arena accepting identifiers `1..=max_nodes`.
    pub fn with_capacity(max_nodes: usize) -> Self {
        Self { slots: vec![None], max_nodes }
    }

    /// Highest identifier the store can hold.
    pub fn capacity(&self) -> usize {
        self.max_nodes
    }

    /// Number of slots, sentinel included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index())?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    /// The node at `id`, allocating an unlabelled placeholder if the slot is
    /// empty. Fails if `id` is beyond capacity.
    pub fn get_or_placeholder(&mut self, id: NodeId) -> Result<&mut Node, RecordError> {
        if id.is_sentinel() || id.index() > self.max_nodes {
            return Err(RecordError::NodeCapacity { id, max: self.max_nodes });
        }
        if id.index() >= self.slots.len() {
            self.slots.resize(id.index() + 1, None);
        }
        Ok(self.slots[id.index()].get_or_insert_with(Node::placeholder))
    }

    /// Like [`NodeStore::get_or_placeholder`] but ignores the capacity
    /// instead of failing. Returns the node and whether a placeholder had to be made.
    pub fn get_or_grow(&mut self, id: NodeId) -> (&mut Node, bool) {
        if id.index() >= self.slots.len() {
            self.slots.resize(id.index() + 1, None);
        }
        let slot = &mut self.slots[id.index()];
        let created = slot.is_none();
        (slot.get_or_insert_with(Node::placeholder), created)
    }

    /// Label the slot at `id` if it is an unlabelled placeholder.
    ///
    /// Returns `true` if the label was set. Empty slots are left alone.
    pub fn label_placeholder(&mut self, id: NodeId) -> bool {
        match self.get_mut(id) {
            Some(node) if node.is_placeholder() => {
                node.label = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Clear the label of every occupied slot.
    pub fn reset_labels(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.label = None;
        }
    }

    /// Identifier of the highest occupied slot, 0 if none.
    pub fn highest_occupied(&self) -> usize {
        self.slots.iter().rposition(Option::is_some).unwrap_or(0)
    }

    /// Cut the arena down to identifiers `0..=last` and release the rest.
    pub fn truncate(&mut self, last: usize) {
        self.slots.truncate(last + 1);
        self.slots.shrink_to_fit();
    }

    /// Occupied slots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i as u32), node)))
    }

    /// Raw slots, sentinel included.
    pub fn slots(&self) -> &[Option<Node>] {
        &self.slots
    }
}
