//! # Network Construction
//!
//! Turns the input files into a [`Network`].
//!
//! ```text
//! work file ─► read_work_links ─► fill_in_gaps ─► build_play_matrix ─► trim
//!                                                        ▲
//!                                  play file, play-size file
//!
//! position file ─► add_distances   (build_wards_network_distance only)
//! ```
//!
//! Every pass is a single sequential read. Any bad line aborts the whole
//! build; a partially built network is never returned.

pub mod work;
pub mod gaps;
pub mod play;
pub mod distance;

use tracing::info;

use crate::input::{InputFiles, NetworkLimits};
use crate::network::Network;
use crate::{Error, Result};

pub use work::read_work_links;
pub use gaps::fill_in_gaps;
pub use play::build_play_matrix;
pub use distance::add_distances;

/// Build the work and play layers described by `files`.
///
/// `begin_to..end_to` (and `begin_p..end_p`) are only meaningful if each
/// link file lists a source's links on consecutive lines. This is not
/// checked.
pub fn build_wards_network(files: &InputFiles, limits: &NetworkLimits) -> Result<Network> {
    let mut network = read_work_links(&files.work, limits)?;

    info!(nnodes = network.nnodes, "Number of nodes equals {}", network.nnodes);
    info!(nlinks = network.nlinks, "Number of links equals {}", network.nlinks);

    fill_in_gaps(&mut network);

    info!(nnodes = network.nnodes, "Number of nodes after filling equals {}", network.nnodes);

    build_play_matrix(&mut network, files)?;

    network.trim();
    Ok(network)
}

/// [`build_wards_network`], then read ward positions and measure work links.
pub fn build_wards_network_distance(files: &InputFiles, limits: &NetworkLimits) -> Result<Network> {
    let position = files.position.as_deref().ok_or(Error::MissingInput("position"))?;

    let mut network = build_wards_network(files, limits)?;
    add_distances(&mut network, position)?;
    Ok(network)
}
