//! Gap filling: label every ward a link points at.

use tracing::debug;

use crate::network::Network;

/// Give every unlabelled endpoint of a work or play link its label and
/// count it in `nnodes`.
///
/// Returns how many slots were filled. Running it twice fills nothing the
/// second time.
pub fn fill_in_gaps(network: &mut Network) -> usize {
    let Network { nnodes, nodes, to_links, play, .. } = network;

    let mut filled = 0;
    for (_, link) in to_links.iter().chain(play.iter()) {
        for id in [link.ifrom, link.ito] {
            if nodes.label_placeholder(id) {
                filled += 1;
            }
        }
    }

    *nnodes += filled;
    debug!(filled, nnodes = *nnodes, "Filled gaps");
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NetworkLimits;
    use crate::model::{NodeId, ToLink};

    #[test]
    fn test_fills_destinations_once() {
        let mut net = Network::with_limits(&NetworkLimits { max_nodes: 10, max_links: 10 });
        net.to_links.push(ToLink::new(NodeId(1), NodeId(3), 1.0)).unwrap();
        net.nodes.get_or_placeholder(NodeId(1)).unwrap().label = Some(NodeId(1));
        net.nodes.get_or_placeholder(NodeId(3)).unwrap();
        net.nnodes = 1;

        assert_eq!(fill_in_gaps(&mut net), 1);
        assert_eq!(net.nnodes, 2);
        assert_eq!(net.node(NodeId(3)).unwrap().label, Some(NodeId(3)));

        assert_eq!(fill_in_gaps(&mut net), 0);
        assert_eq!(net.nnodes, 2);
    }

    #[test]
    fn test_covers_play_layer() {
        let mut net = Network::with_limits(&NetworkLimits { max_nodes: 10, max_links: 10 });
        net.play.push(ToLink::new(NodeId(2), NodeId(6), 1.0)).unwrap();
        net.nodes.get_or_placeholder(NodeId(2)).unwrap();
        net.nodes.get_or_placeholder(NodeId(6)).unwrap();

        assert_eq!(fill_in_gaps(&mut net), 2);
        assert_eq!(net.nnodes, 2);
    }
}
