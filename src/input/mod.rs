//! # Input Files
//!
//! Where the network comes from: the set of input paths, the capacity
//! limits of the stores, and the line-record readers.

pub mod records;
pub mod done;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use records::{
    Record, RecordError, LinkRecord, PlaySizeRecord, PositionRecord,
    for_each_record, for_each_record_in,
};
pub use done::read_done_file;

// ============================================================================
// Input file set
// ============================================================================

/// Paths to the files a network is built from.
///
/// Only `work` is required. When `play` names the same path as `work`, the
/// play layer is renormalised by each source's play denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFiles {
    /// `from_id to_id weight` — primary links.
    pub work: PathBuf,
    /// `from_id to_id weight` — secondary links.
    #[serde(default)]
    pub play: Option<PathBuf>,
    /// `node_id size` — play susceptibility overrides.
    #[serde(default)]
    pub play_size: Option<PathBuf>,
    /// `node_id x y` — ward coordinates.
    #[serde(default)]
    pub position: Option<PathBuf>,
    /// Single seed value, see [`read_done_file`].
    #[serde(default)]
    pub done: Option<PathBuf>,
}

impl InputFiles {
    pub fn new(work: impl Into<PathBuf>) -> Self {
        Self {
            work: work.into(),
            play: None,
            play_size: None,
            position: None,
            done: None,
        }
    }

    pub fn with_play(mut self, path: impl Into<PathBuf>) -> Self {
        self.play = Some(path.into());
        self
    }

    pub fn with_play_size(mut self, path: impl Into<PathBuf>) -> Self {
        self.play_size = Some(path.into());
        self
    }

    pub fn with_position(mut self, path: impl Into<PathBuf>) -> Self {
        self.position = Some(path.into());
        self
    }

    pub fn with_done(mut self, path: impl Into<PathBuf>) -> Self {
        self.done = Some(path.into());
        self
    }

    /// True when the play layer is read from the work file itself.
    ///
    /// Compares the paths as given, not their canonical forms.
    pub fn renormalise_play(&self) -> bool {
        self.play.as_deref() == Some(self.work.as_path())
    }

    pub fn play_path(&self) -> Option<&Path> {
        self.play.as_deref()
    }

    /// Load a file set from JSON, e.g. `{"work": "links.dat", "play": "play.dat"}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Capacity limits
// ============================================================================

/// Upper bounds on the stores.
///
/// `max_nodes` is the highest ward identifier accepted; `max_links` bounds
/// each link layer separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkLimits {
    pub max_nodes: usize,
    pub max_links: usize,
}

impl NetworkLimits {
    pub const DEFAULT_MAX_NODES: usize = 10050;
    pub const DEFAULT_MAX_LINKS: usize = 2414000;

    /// Reject limits no store can be built with.
    ///
    /// Ward identifiers are `u32`, so `max_nodes` must lie in
    /// `1..=u32::MAX`. `max_links` must be positive and leave room for the
    /// sentinel slot.
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == 0 || self.max_nodes > u32::MAX as usize {
            return Err(Error::InvalidLimits { field: "max_nodes", value: self.max_nodes });
        }
        if self.max_links == 0 || self.max_links.checked_add(1).is_none() {
            return Err(Error::InvalidLimits { field: "max_links", value: self.max_links });
        }
        Ok(())
    }
}

impl Default for NetworkLimits {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_links: Self::DEFAULT_MAX_LINKS,
        }
    }
}
