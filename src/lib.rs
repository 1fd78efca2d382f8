//! # wardnet — Ward Contact-Network Builder
//!
//! Reads the flat files describing who commutes where and builds the sparse
//! graph an epidemic simulation runs over.
//!
//! ## Design Principles
//!
//! 1. **Identifier is index**: ward `n` lives in node slot `n`; slot 0 is a sentinel
//! 2. **Two layers, one node store**: work links and play links share the wards
//! 3. **All or nothing**: one bad line aborts the build with file, line and cause
//! 4. **Single pass per file**: every input is read once, sequentially
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wardnet::{build_wards_network, InputFiles, NetworkLimits, NodeId};
//!
//! # fn example() -> wardnet::Result<()> {
//! let files = InputFiles::new("data/work.dat")
//!     .with_play("data/play.dat")
//!     .with_play_size("data/play_size.dat");
//!
//! let network = build_wards_network(&files, &NetworkLimits::default())?;
//!
//! for link in network.work_links_from(NodeId(1)) {
//!     println!("{} -> {} ({})", link.ifrom, link.ito, link.weight);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Input Files
//!
//! | File | Line format | Required |
//! |------|-------------|----------|
//! | work | `from_id to_id weight` | yes |
//! | play | `from_id to_id weight` | no |
//! | play size | `node_id size` | no |
//! | position | `node_id x y` | distance build only |
//! | done | `seed` | read separately |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod input;
pub mod network;
pub mod build;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Node, NodeId, ToLink, Layer};
pub use storage::{NodeStore, LinkStore};
pub use input::{InputFiles, NetworkLimits, RecordError, read_done_file};
pub use network::Network;
pub use build::{build_wards_network, build_wards_network_distance, fill_in_gaps};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{file} is corrupted or unreadable? line {line_no} = {line:?}, error = {source}")]
    Corrupt {
        file: String,
        line_no: usize,
        line: String,
        #[source]
        source: RecordError,
    },

    #[error("{file} is unreadable: {source}")]
    File {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}: play denominator of node {node} is zero, cannot renormalise")]
    ZeroDenominator { file: String, node: NodeId },

    #[error("Invalid network limit {field} = {value}")]
    InvalidLimits { field: &'static str, value: usize },

    #[error("Missing input file: {0}")]
    MissingInput(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
