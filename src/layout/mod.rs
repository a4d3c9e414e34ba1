//! Circuit diagram layout
//!
//! Turns an [`Ast`] into positioned nodes and wire polylines. Only geometry
//! is produced here; drawing gate symbols is left to the renderer.
//!
//! The engine runs three passes over the tree:
//!
//! 1. **Sizing** (bottom-up): the extent each subtree needs. A leaf reserves
//!    one input band (`v_spacing` high); a gate adds `gate_width +
//!    h_spacing` to its widest child and stacks its children's heights,
//!    floored at `gate_height`.
//! 2. **Placement** (top-down): leaves go in the input column, a NOT gate
//!    sits right of its operand's output port, a two-input gate sits right
//!    of its rightmost operand and is centred between both operand ports.
//! 3. **Routing**: one wire per tree edge from the child's output port to
//!    the parent's input port, with two bends at the horizontal midpoint
//!    when the ports are more than `bend_threshold` apart vertically, plus
//!    a final wire into a synthetic output node.
//!
//! Layout is deterministic: the same tree always yields identical
//! coordinates.
//!
//! # Examples
//!
//! ```
//! use logic_sim::{layout, parse_expression};
//!
//! let ast = parse_expression("a and b").unwrap();
//! let diagram = layout(&ast);
//!
//! // two inputs, one gate, one output
//! assert_eq!(diagram.nodes.len(), 4);
//! assert_eq!(diagram.connections.len(), 3);
//! assert!(diagram.node("gate-root").is_some());
//! ```

mod place;
mod route;

use crate::config::LayoutConfig;
use crate::expression::{Ast, Operator};
use crate::node_id::NodeId;
use serde::Serialize;

/// A coordinate in diagram space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Input,
    Gate,
    Output,
}

/// Where a wire attaches on the left of a gate or the output node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputPort {
    pub x: f64,
    pub y: f64,
    pub source_id: NodeId,
}

/// A positioned box in the diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Variable letter, gate keyword, or `Output`
    pub label: String,
    /// The gate's operator; `None` for inputs and the output node
    pub operator: Option<Operator>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub output_x: f64,
    pub output_y: f64,
    /// Empty for inputs, one port for NOT and the output node, two otherwise
    pub inputs: Vec<InputPort>,
}

impl LayoutNode {
    pub fn output_port(&self) -> Point {
        Point::new(self.output_x, self.output_y)
    }
}

/// A wire from a node's output port to another node's input port
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub id: NodeId,
    pub from_id: NodeId,
    pub to_id: NodeId,
    /// Polyline, first point at the source port, last at the target port
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Complete diagram geometry for one expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Post-order (operands before their gate), output node last
    pub nodes: Vec<LayoutNode>,
    /// In the order their target ports appear in `nodes`
    pub connections: Vec<Connection>,
    pub bounds: Bounds,
}

impl Layout {
    /// Lay out `ast` with the given geometry
    pub fn new(ast: &Ast, config: &LayoutConfig) -> Self {
        let extent = place::measure(ast, config);
        let mut nodes = place::Placer::new(config).run(ast, &extent);
        if let Some(root) = nodes.last() {
            let output = place::output_node(root, config);
            nodes.push(output);
        }
        let connections = route::connect(&nodes, config);
        let bounds = bounds(&nodes, config);

        log::debug!(
            "layout: {} nodes, {} connections, {}x{}",
            nodes.len(),
            connections.len(),
            bounds.width,
            bounds.height
        );
        Layout {
            nodes,
            connections,
            bounds,
        }
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Every node and wire id, nodes first
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes
            .iter()
            .map(|n| &n.id)
            .chain(self.connections.iter().map(|c| &c.id))
    }
}

fn bounds(nodes: &[LayoutNode], config: &LayoutConfig) -> Bounds {
    let right = nodes.iter().map(|n| n.x + n.width).fold(0.0, f64::max);
    let bottom = nodes.iter().map(|n| n.y + n.height).fold(0.0, f64::max);
    Bounds {
        width: right + config.margin,
        height: bottom + config.margin,
    }
}

/// Lay out `ast` with the default geometry
pub fn layout(ast: &Ast) -> Layout {
    Layout::new(ast, &LayoutConfig::default())
}

/// Lay out `ast` with custom geometry
pub fn layout_with(ast: &Ast, config: &LayoutConfig) -> Layout {
    Layout::new(ast, config)
}
