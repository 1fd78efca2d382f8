//! Work-link pass: nodes and the primary link layer.

use std::path::Path;

use crate::input::{for_each_record, LinkRecord, NetworkLimits, RecordError};
use crate::model::ToLink;
use crate::network::Network;
use crate::Result;

/// Read the work-link file into a fresh, untrimmed network.
///
/// Destination-only wards are left as unlabelled placeholders; run
/// [`super::fill_in_gaps`] afterwards. Fails before reading if `limits` is
/// out of range.
pub fn read_work_links(path: &Path, limits: &NetworkLimits) -> Result<Network> {
    limits.validate()?;
    let mut network = Network::with_limits(limits);
    for_each_record(path, |record: LinkRecord| add_work_link(&mut network, record))?;
    Ok(network)
}

/// Apply one work-link record.
///
/// The weight is truncated toward zero before it is stored or summed.
pub fn add_work_link(network: &mut Network, record: LinkRecord) -> std::result::Result<(), RecordError> {
    if !record.weight.is_finite() {
        return Err(RecordError::NonFiniteWeight(record.weight));
    }
    let weight = record.weight.trunc();

    let index = network.to_links.push(ToLink::new(record.from, record.to, weight))?;
    network.nlinks = index;

    let source = network.nodes.get_or_placeholder(record.from)?;
    if source.is_placeholder() {
        source.label = Some(record.from);
        source.begin_to = index;
        source.end_to = index;
        network.nnodes += 1;
    }
    if record.from == record.to {
        source.self_w = Some(index);
    }
    source.end_to += 1;
    source.denominator_n += weight;

    network.nodes.get_or_placeholder(record.to)?.denominator_d += weight;
    Ok(())
}
