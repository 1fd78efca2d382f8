//! Ward node in the contact network.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Ward identifier as it appears in the input files.
///
/// The identifier doubles as the node's slot index in the node store, so
/// `NodeId(0)` is the sentinel and never names a real ward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Slot index of this ward in the node store.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_sentinel(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ward and its adjacency bookkeeping for both link layers.
///
/// A slot whose `label` is `None` is a placeholder: it was allocated because
/// a link pointed at it (or the play pass reset it) but nothing has claimed
/// it yet. The gap filler turns every placeholder referenced by a link into
/// a labelled node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub label: Option<NodeId>,

    // Work layer
    /// First outgoing work link (inclusive).
    pub begin_to: usize,
    /// One past the last outgoing work link.
    pub end_to: usize,
    pub self_w: Option<usize>,
    /// Sum of outgoing work weights.
    pub denominator_n: f64,
    /// Sum of incoming work weights.
    pub denominator_d: f64,

    // Play layer
    pub begin_p: usize,
    pub end_p: usize,
    pub self_p: Option<usize>,
    pub denominator_p: f64,
    pub play_suscept: f64,
    pub save_play_suscept: f64,

    pub x: f64,
    pub y: f64,
}

impl Node {
    /// An unlabelled slot with every counter at zero.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.label.is_none()
    }

    /// Indices of this ward's outgoing work links.
    ///
    /// Only meaningful when the work-link file lists each source's links on
    /// consecutive lines.
    pub fn work_range(&self) -> Range<usize> {
        self.begin_to..self.end_to
    }

    /// Indices of this ward's outgoing play links. Same grouping caveat as
    /// [`Node::work_range`].
    pub fn play_range(&self) -> Range<usize> {
        self.begin_p..self.end_p
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
