//! The built contact network.

use serde::{Deserialize, Serialize};

use crate::input::NetworkLimits;
use crate::model::{Layer, Node, NodeId, ToLink};
use crate::storage::{LinkStore, NodeStore};

/// Wards plus their work and play links.
///
/// Produced by [`crate::build::build_wards_network`]; read-only from then on
/// as far as the simulation is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Labelled wards.
    pub nnodes: usize,
    /// Work links.
    pub nlinks: usize,
    /// Play links.
    pub plinks: usize,
    pub nodes: NodeStore,
    pub to_links: LinkStore,
    pub play: LinkStore,
    /// Sum of work-link distances, once distances have been added.
    pub total_distance: Option<f64>,
}

impl Network {
    /// An empty network with stores sized by `limits`.
    pub fn with_limits(limits: &NetworkLimits) -> Self {
        Self {
            nnodes: 0,
            nlinks: 0,
            plinks: 0,
            nodes: NodeStore::with_capacity(limits.max_nodes),
            to_links: LinkStore::new(limits.max_links),
            play: LinkStore::new(limits.max_links),
            total_distance: None,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn links(&self, layer: Layer) -> &LinkStore {
        match layer {
            Layer::Work => &self.to_links,
            Layer::Play => &self.play,
        }
    }

    /// Outgoing work links of `id`, via its `begin_to..end_to` range.
    pub fn work_links_from(&self, id: NodeId) -> impl Iterator<Item = &ToLink> {
        let range = self.node(id).map(Node::work_range).unwrap_or_default();
        self.to_links.range(range)
    }

    /// Outgoing play links of `id`, via its `begin_p..end_p` range.
    pub fn play_links_from(&self, id: NodeId) -> impl Iterator<Item = &ToLink> {
        let range = self.node(id).map(Node::play_range).unwrap_or_default();
        self.play.range(range)
    }

    /// Release unused capacity.
    ///
    /// The node store keeps every occupied identifier even when identifiers
    /// are sparse, so it is cut at `max(nnodes, highest occupied id)`.
    pub fn trim(&mut self) {
        let last = self.nnodes.max(self.nodes.highest_occupied());
        self.nodes.truncate(last);
        self.to_links.shrink_to_fit();
        self.play.shrink_to_fit();
    }
}
