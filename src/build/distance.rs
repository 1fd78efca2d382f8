//! Distance pass: ward coordinates and per-link Euclidean distance.
//!
//! Only work links get a distance. The link loop walks slots
//! `0..nlinks`, so the sentinel slot is visited (and patched with a default
//! link) while the link at index `nlinks` is never measured. Empty node
//! slots met along the way are patched with zero-coordinate placeholders and
//! the distance against them is kept.

use std::path::Path;

use tracing::{info, warn};

use crate::input::{for_each_record, PositionRecord, RecordError};
use crate::model::{NodeId, ToLink};
use crate::network::Network;
use crate::storage::NodeStore;
use crate::Result;

/// Read `node_id x y` records, then measure the work links.
///
/// Returns the total distance, which is also stored on the network.
pub fn add_distances(network: &mut Network, position: &Path) -> Result<f64> {
    read_positions(network, position)?;
    Ok(measure_work_links(network))
}

/// Set ward coordinates. A record for a ward outside the network aborts.
pub fn read_positions(network: &mut Network, path: &Path) -> Result<usize> {
    for_each_record(path, |record: PositionRecord| {
        let node = network
            .nodes
            .get_mut(record.node)
            .ok_or(RecordError::UnknownNode(record.node))?;
        node.x = record.x;
        node.y = record.y;
        Ok(())
    })
}

/// Store the endpoint distance on work-link slots `0..nlinks` and return
/// the sum.
pub fn measure_work_links(network: &mut Network) -> f64 {
    let Network { nlinks, nodes, to_links, total_distance, .. } = network;

    let mut total = 0.0;
    for i in 0..*nlinks {
        let Some(link) = to_links.get(i) else {
            warn!(index = i, "Missing link {i}?");
            to_links.patch(i, ToLink::default());
            continue;
        };
        let (from, to) = (link.ifrom, link.ito);

        let (x1, y1) = ward_position(nodes, from);
        let (x2, y2) = ward_position(nodes, to);

        let (dx, dy) = (x1 - x2, y1 - y2);
        let distance = (dx * dx + dy * dy).sqrt();

        if let Some(link) = to_links.get_mut(i) {
            link.distance = Some(distance);
        }
        total += distance;
    }

    info!(total_distance = total, "Total distance equals {total}");
    *total_distance = Some(total);
    total
}

fn ward_position(nodes: &mut NodeStore, id: NodeId) -> (f64, f64) {
    let (ward, created) = nodes.get_or_grow(id);
    if created {
        warn!(ward = %id, "Missing ward {id}?");
    }
    ward.position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NetworkLimits;

    fn network_with_links(links: &[(u32, u32)]) -> Network {
        let mut net = Network::with_limits(&NetworkLimits { max_nodes: 10, max_links: 10 });
        for &(from, to) in links {
            net.nlinks = net.to_links.push(ToLink::new(NodeId(from), NodeId(to), 1.0)).unwrap();
            net.nodes.get_or_placeholder(NodeId(from)).unwrap();
            net.nodes.get_or_placeholder(NodeId(to)).unwrap();
        }
        net
    }

    fn place(net: &mut Network, id: u32, x: f64, y: f64) {
        let node = net.nodes.get_mut(NodeId(id)).unwrap();
        node.x = x;
        node.y = y;
    }

    #[test]
    fn test_last_link_is_not_measured() {
        let mut net = network_with_links(&[(1, 2), (2, 1)]);
        place(&mut net, 1, 0.0, 0.0);
        place(&mut net, 2, 3.0, 4.0);

        let total = measure_work_links(&mut net);

        assert_eq!(total, 5.0);
        assert_eq!(net.to_links.get(1).unwrap().distance, Some(5.0));
        assert_eq!(net.to_links.get(2).unwrap().distance, None);
        assert_eq!(net.to_links.slots()[0], Some(ToLink::default()));
        assert_eq!(net.total_distance, Some(5.0));
    }

    #[test]
    fn test_missing_ward_gets_placeholder() {
        let mut net = network_with_links(&[(1, 2), (2, 1)]);
        place(&mut net, 1, 6.0, 8.0);
        net.to_links.get_mut(1).unwrap().ito = NodeId(15);

        let total = measure_work_links(&mut net);

        assert_eq!(total, 10.0);
        let patched = net.node(NodeId(15)).unwrap();
        assert!(patched.is_placeholder());
        assert_eq!(patched.position(), (0.0, 0.0));
    }

    #[test]
    fn test_empty_network_measures_nothing() {
        let mut net = network_with_links(&[]);
        assert_eq!(measure_work_links(&mut net), 0.0);
        assert!(net.to_links.slots()[0].is_none());
    }
}
