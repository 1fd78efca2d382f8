//! Network export — write a built network back out.
//!
//! Two formats:
//!
//! ```text
//! export_links  → "from to weight" lines, readable by build_wards_network
//! export_json   → pretty JSON snapshot of the whole Network
//! ```

use std::io::Write;

use crate::model::Layer;
use crate::network::Network;
use crate::Result;

/// Write one link layer in link-file format.
///
/// Weights are written as stored, so a work layer re-read through the
/// builder reproduces the same (already truncated) weights.
pub fn export_links(network: &Network, layer: Layer, writer: &mut dyn Write) -> Result<()> {
    for (_, link) in network.links(layer).iter() {
        writeln!(writer, "{} {} {}", link.ifrom, link.ito, link.weight)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize the whole network, sentinel slots included.
///
/// Link weights are always finite, since the builder rejects anything else.
/// Ward coordinates are copied from the position file unchecked, and JSON
/// has no NaN or infinity: such a coordinate is written as `null` and the
/// snapshot will not deserialize back.
pub fn export_json(network: &Network, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, network)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NetworkLimits;
    use crate::model::{NodeId, ToLink};

    fn sample() -> Network {
        let mut net = Network::with_limits(&NetworkLimits { max_nodes: 5, max_links: 5 });
        net.to_links.push(ToLink::new(NodeId(1), NodeId(2), 3.0)).unwrap();
        net.to_links.push(ToLink::new(NodeId(2), NodeId(1), 4.0)).unwrap();
        net.play.push(ToLink::new(NodeId(1), NodeId(2), 0.5)).unwrap();
        net.nlinks = 2;
        net.plinks = 1;
        net
    }

    #[test]
    fn test_export_work_layer() {
        let mut buf = Vec::new();
        export_links(&sample(), Layer::Work, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2 3\n2 1 4\n");
    }

    #[test]
    fn test_export_play_layer() {
        let mut buf = Vec::new();
        export_links(&sample(), Layer::Play, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2 0.5\n");
    }

    #[test]
    fn test_export_json_roundtrip() {
        let net = sample();
        let mut buf = Vec::new();
        export_json(&net, &mut buf).unwrap();
        let back: Network = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, net);
    }
}
