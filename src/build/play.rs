//! Play-matrix pass: the secondary link layer and play-size overrides.

use std::path::Path;

use tracing::{debug, info};

use super::gaps::fill_in_gaps;
use crate::input::{for_each_record, InputFiles, LinkRecord, PlaySizeRecord, RecordError};
use crate::model::ToLink;
use crate::network::Network;
use crate::{Error, Result};

/// Build the play layer on top of a network that already holds work links.
///
/// Labels are cleared first so this pass tracks first sight of each play
/// source on its own; the closing gap fill relabels everything a link in
/// either layer points at, which also recounts `nnodes`.
pub fn build_play_matrix(network: &mut Network, files: &InputFiles) -> Result<()> {
    let Some(play_path) = files.play_path() else {
        debug!("No play link file, play layer left empty");
        return Ok(());
    };

    network.nodes.reset_labels();
    network.nnodes = 0;

    for_each_record(play_path, |record: LinkRecord| add_play_link(network, record))?;

    finish_play_weights(network, play_path, files.renormalise_play())?;

    fill_in_gaps(network);

    if let Some(size_path) = files.play_size.as_deref() {
        apply_play_sizes(network, size_path)?;
    }

    info!(plinks = network.plinks, "Number of play links equals {}", network.plinks);
    Ok(())
}

/// Apply one play-link record. The weight is kept as read, but must be
/// finite.
pub fn add_play_link(network: &mut Network, record: LinkRecord) -> std::result::Result<(), RecordError> {
    if !record.weight.is_finite() {
        return Err(RecordError::NonFiniteWeight(record.weight));
    }
    let index = network.play.push(ToLink::new(record.from, record.to, record.weight))?;
    network.plinks = index;

    let source = network.nodes.get_or_placeholder(record.from)?;
    if source.is_placeholder() {
        source.label = Some(record.from);
        source.begin_p = index;
        source.end_p = index;
        network.nnodes += 1;
    }
    if record.from == record.to {
        source.self_p = Some(index);
    }
    source.end_p += 1;
    source.denominator_p += record.weight;
    source.play_suscept += record.weight;

    network.nodes.get_or_placeholder(record.to)?;
    Ok(())
}

/// Optionally divide each play weight by its source's play denominator,
/// then copy the weight into `suscept`. `play_path` only names the file in
/// the error.
pub fn finish_play_weights(network: &mut Network, play_path: &Path, renormalise: bool) -> Result<()> {
    let Network { nodes, play, .. } = network;

    for (_, link) in play.iter_mut() {
        if renormalise {
            let denominator = nodes.get(link.ifrom).map_or(0.0, |node| node.denominator_p);
            if denominator == 0.0 {
                return Err(Error::ZeroDenominator {
                    file: play_path.display().to_string(),
                    node: link.ifrom,
                });
            }
            link.weight /= denominator;
        }
        link.suscept = link.weight;
    }
    Ok(())
}

/// Overwrite play susceptibility and denominator from a `node_id size` file.
pub fn apply_play_sizes(network: &mut Network, path: &Path) -> Result<()> {
    let applied = for_each_record(path, |record: PlaySizeRecord| {
        let node = network
            .nodes
            .get_mut(record.node)
            .ok_or(RecordError::UnknownNode(record.node))?;
        let size = record.size as f64;
        node.play_suscept = size;
        node.denominator_p = size;
        node.save_play_suscept = size;
        Ok(())
    })?;
    debug!(applied, file = %path.display(), "Applied play sizes");
    Ok(())
}
