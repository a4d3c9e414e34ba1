//! Sizing and placement passes

use super::{InputPort, LayoutNode, NodeKind};
use crate::config::LayoutConfig;
use crate::expression::Ast;
use crate::node_id::NodeId;

/// Space reserved for a subtree, mirroring the tree's shape
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Extent {
    pub width: f64,
    pub height: f64,
    pub children: Vec<Extent>,
}

/// Bottom-up sizing pass
pub(super) fn measure(ast: &Ast, config: &LayoutConfig) -> Extent {
    match ast {
        Ast::Variable { .. } => Extent {
            width: config.input_width,
            height: config.v_spacing,
            children: Vec::new(),
        },
        Ast::Not { operand } => {
            let child = measure(operand, config);
            Extent {
                width: child.width + config.gate_width + config.h_spacing,
                height: config.gate_height.max(child.height),
                children: vec![child],
            }
        }
        Ast::Gate { left, right, .. } => {
            let l = measure(left, config);
            let r = measure(right, config);
            Extent {
                width: l.width.max(r.width) + config.gate_width + config.h_spacing,
                height: config.gate_height.max(l.height + r.height),
                children: vec![l, r],
            }
        }
    }
}

/// Top-down placement pass, collecting nodes in post-order
pub(super) struct Placer<'c> {
    config: &'c LayoutConfig,
    nodes: Vec<LayoutNode>,
    path: Vec<usize>,
}

impl<'c> Placer<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Placer {
            config,
            nodes: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn run(mut self, ast: &Ast, extent: &Extent) -> Vec<LayoutNode> {
        let top = self.config.margin;
        self.place(ast, extent, top);
        self.nodes
    }

    /// Place the subtree whose band starts at `top`; returns the index of
    /// its root node in `self.nodes`
    fn place(&mut self, ast: &Ast, extent: &Extent, top: f64) -> usize {
        let cfg = self.config;
        let node = match ast {
            Ast::Variable { name } => {
                let x = cfg.margin;
                LayoutNode {
                    id: NodeId::input(&self.path),
                    kind: NodeKind::Input,
                    label: name.to_string(),
                    operator: None,
                    x,
                    y: top,
                    width: cfg.input_width,
                    height: cfg.input_height,
                    output_x: x + cfg.input_width,
                    output_y: top + cfg.input_height / 2.0,
                    inputs: Vec::new(),
                }
            }
            Ast::Not { operand } => {
                let child = self.place_child(operand, &extent.children[0], 0, top);
                let x = child.x + cfg.h_spacing / 2.0;
                let center = child.y;
                self.gate_node(ast, x, center, cfg.not_gate_width, vec![(center, child)])
            }
            Ast::Gate { left, right, .. } => {
                let l = self.place_child(left, &extent.children[0], 0, top);
                let r = self.place_child(
                    right,
                    &extent.children[1],
                    1,
                    top + extent.children[0].height,
                );
                let x = l.x.max(r.x) + cfg.h_spacing / 2.0;
                let center = (l.y + r.y) / 2.0;
                let y = center - cfg.gate_height / 2.0;
                let ports = vec![
                    (y + cfg.gate_height / 4.0, l),
                    (y + cfg.gate_height * 3.0 / 4.0, r),
                ];
                self.gate_node(ast, x, center, cfg.gate_width, ports)
            }
        };
        log::trace!("placed {} at ({}, {})", node.id, node.x, node.y);
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Place child `index` and return its output port plus id
    fn place_child(&mut self, ast: &Ast, extent: &Extent, index: usize, top: f64) -> PlacedPort {
        self.path.push(index);
        let at = self.place(ast, extent, top);
        self.path.pop();
        let node = &self.nodes[at];
        PlacedPort {
            x: node.output_x,
            y: node.output_y,
            id: node.id.clone(),
        }
    }

    /// A gate box at `x`, vertically centred on `center`, with one input
    /// port per `(port_y, source)` pair
    fn gate_node(
        &self,
        ast: &Ast,
        x: f64,
        center: f64,
        width: f64,
        ports: Vec<(f64, PlacedPort)>,
    ) -> LayoutNode {
        let cfg = self.config;
        let operator = ast.operator();
        LayoutNode {
            id: NodeId::gate(&self.path),
            kind: NodeKind::Gate,
            label: operator.map(|op| op.gate_name().to_string()).unwrap_or_default(),
            operator,
            x,
            y: center - cfg.gate_height / 2.0,
            width,
            height: cfg.gate_height,
            output_x: x + width,
            output_y: center,
            inputs: ports
                .into_iter()
                .map(|(y, source)| InputPort {
                    x: x - cfg.port_lead,
                    y,
                    source_id: source.id,
                })
                .collect(),
        }
    }
}

struct PlacedPort {
    x: f64,
    y: f64,
    id: NodeId,
}

/// The synthetic sink right of the root's output port
pub(super) fn output_node(root: &LayoutNode, config: &LayoutConfig) -> LayoutNode {
    let port = root.output_port();
    let x = port.x + config.output_gap;
    LayoutNode {
        id: NodeId::output(),
        kind: NodeKind::Output,
        label: "Output".to_string(),
        operator: None,
        x,
        y: port.y - config.output_height / 2.0,
        width: config.output_width,
        height: config.output_height,
        output_x: x + config.output_width,
        output_y: port.y,
        inputs: vec![InputPort {
            x: x - config.port_lead,
            y: port.y,
            source_id: root.id.clone(),
        }],
    }
}
