//! Directed weighted link between two wards.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// Which of the two link layers a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Primary commuting network.
    Work,
    /// Secondary non-work contacts.
    Play,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layer::Work => f.write_str("work"),
            Layer::Play => f.write_str("play"),
        }
    }
}

/// A directed link `ifrom -> ito`.
///
/// `Default` yields the all-zero link used to patch empty slots; it is never
/// produced from an input record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToLink {
    pub ifrom: NodeId,
    pub ito: NodeId,
    pub weight: f64,
    pub suscept: f64,
    /// Euclidean distance between the endpoints. Work links only.
    pub distance: Option<f64>,
}

impl ToLink {
    pub fn new(ifrom: NodeId, ito: NodeId, weight: f64) -> Self {
        Self {
            ifrom,
            ito,
            weight,
            suscept: weight,
            distance: None,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.ifrom == self.ito
    }
}
