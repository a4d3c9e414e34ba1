//! Wire routing between placed nodes

use super::{Connection, InputPort, LayoutNode, Point};
use crate::config::LayoutConfig;
use crate::node_id::NodeId;
use std::collections::HashMap;

/// One connection per input port, in node order
///
/// Nodes are in post-order, so every source is already known when its
/// target's ports are visited.
pub(super) fn connect(nodes: &[LayoutNode], config: &LayoutConfig) -> Vec<Connection> {
    let mut sources: HashMap<&NodeId, Point> = HashMap::with_capacity(nodes.len());
    let mut connections = Vec::new();

    for node in nodes {
        for port in &node.inputs {
            if let Some(&from) = sources.get(&port.source_id) {
                connections.push(Connection {
                    id: NodeId::wire(&port.source_id, &node.id),
                    from_id: port.source_id.clone(),
                    to_id: node.id.clone(),
                    points: route(from, port, config),
                });
            } else {
                log::warn!("port of {} has no placed source {}", node.id, port.source_id);
            }
        }
        sources.insert(&node.id, node.output_port());
    }
    connections
}

/// Straight when the ports are nearly level, otherwise two bends at the
/// horizontal midpoint
fn route(from: Point, to: &InputPort, config: &LayoutConfig) -> Vec<Point> {
    let end = Point::new(to.x, to.y);
    if (from.y - to.y).abs() > config.bend_threshold {
        let mid_x = (from.x + to.x) / 2.0;
        vec![
            from,
            Point::new(mid_x, from.y),
            Point::new(mid_x, to.y),
            end,
        ]
    } else {
        vec![from, end]
    }
}
