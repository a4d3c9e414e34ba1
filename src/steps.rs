//! Narrated execution steps for playback
//!
//! Each [`Step`] lists the diagram ids to highlight, using the same
//! [`NodeId`]s the layout engine assigns, so a player can animate a
//! [`Layout`](crate::Layout) without walking the tree itself.
//!
//! Operation steps are reported NOT first, then AND/NAND, then the
//! OR family, keeping post-order within each group. This reads well but is
//! not a dependency order: in `not (a and b)` the NOT step comes before the
//! AND it consumes.

use crate::expression::{Ast, BinaryOp, Operator};
use crate::node_id::NodeId;
use serde::Serialize;

/// One phase of the playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: String,
    pub active_component_ids: Vec<NodeId>,
    pub explanation: String,
    pub substeps: Vec<String>,
}

/// A gate with the ids and labels of its operands
struct Operation {
    operator: Operator,
    gate: NodeId,
    operands: Vec<(NodeId, String)>,
}

impl Operation {
    fn rank(&self) -> u8 {
        match self.operator {
            Operator::Not => 0,
            Operator::Binary(BinaryOp::And | BinaryOp::Nand) => 1,
            Operator::Binary(_) => 2,
        }
    }

    fn labels(&self) -> Vec<&str> {
        self.operands.iter().map(|(_, label)| label.as_str()).collect()
    }

    fn into_step(self) -> Step {
        let name = self.operator.gate_name();
        let labels = self.labels().join(", ");
        let (explanation, substeps) = match self.operator {
            Operator::Not => (
                format!("The NOT gate inverts the input signal \"{}\" (0→1, 1→0).", labels),
                vec![
                    format!("Input signal \"{}\" reaches NOT gate", labels),
                    "Gate inverts signal value".to_string(),
                    "Inverted output signal is generated".to_string(),
                ],
            ),
            Operator::Binary(op) => (
                format!(
                    "The {} gate processes input signals ({}), {}.",
                    name,
                    labels,
                    producing(op)
                ),
                vec![
                    format!("Input signals ({}) reach {} gate inputs", labels, name),
                    format!("Gate evaluates all inputs (required: {})", requirement(op)),
                    "Output signal is generated based on inputs".to_string(),
                ],
            ),
        };

        let mut active: Vec<NodeId> = self.operands.iter().map(|(id, _)| id.clone()).collect();
        active.push(self.gate.clone());
        active.extend(self.operands.iter().map(|(id, _)| NodeId::wire(id, &self.gate)));

        Step {
            title: format!("{} Operation", name),
            active_component_ids: active,
            explanation,
            substeps,
        }
    }
}

fn producing(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::And => "producing output only when all inputs are 1",
        BinaryOp::Nand => "producing 0 only when all inputs are 1",
        BinaryOp::Or => "producing output when any input is 1",
        BinaryOp::Nor => "producing output only when every input is 0",
        BinaryOp::Xor => "producing output when the inputs differ",
        BinaryOp::Xnor => "producing output when the inputs are equal",
    }
}

fn requirement(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::And => "all 1s",
        BinaryOp::Nand => "any 0",
        BinaryOp::Or => "any 1",
        BinaryOp::Nor => "all 0s",
        BinaryOp::Xor => "inputs differ",
        BinaryOp::Xnor => "inputs match",
    }
}

fn operations(ast: &Ast) -> Vec<Operation> {
    let mut ops = Vec::new();
    ast.visit_post_order(&mut |node, path| {
        let Some(operator) = node.operator() else {
            return;
        };
        let mut child_path = path.to_vec();
        let operands = node
            .children()
            .into_iter()
            .enumerate()
            .map(|(i, child)| {
                child_path.push(i);
                let id = NodeId::for_node(child, &child_path);
                child_path.pop();
                let label = match child {
                    Ast::Variable { name } => name.to_string(),
                    other => other.to_string(),
                };
                (id, label)
            })
            .collect();
        ops.push(Operation {
            operator,
            gate: NodeId::gate(path),
            operands,
        });
    });
    ops
}

/// Build the playback steps for `ast` over `variables`
///
/// Always yields at least the input, decode and output steps, plus one
/// step per gate.
pub fn sequence_steps(ast: &Ast, variables: &[char]) -> Vec<Step> {
    let mut inputs = Vec::new();
    let mut gates = Vec::new();
    ast.visit_post_order(&mut |node, path| {
        if node.is_variable() {
            inputs.push(NodeId::input(path));
        } else {
            gates.push(NodeId::gate(path));
        }
    });

    let names: Vec<String> = variables.iter().map(char::to_string).collect();
    let mut steps = vec![
        Step {
            title: "Input Initialization".to_string(),
            active_component_ids: inputs,
            explanation: format!(
                "Input signals for variables ({}) are prepared for processing.",
                names.join(", ")
            ),
            substeps: vec![
                "CPU loads variable values from registers".to_string(),
                "Values are converted to electrical signals (0V for 0, 5V for 1)".to_string(),
            ],
        },
        Step {
            title: "Expression Decoding".to_string(),
            active_component_ids: gates,
            explanation: format!(
                "The logic expression \"{}\" is decoded into individual operations.",
                ast
            ),
            substeps: vec![
                "Instruction decoder identifies operators and operands".to_string(),
                "Operation sequence is determined based on precedence rules".to_string(),
            ],
        },
    ];

    let mut ops = operations(ast);
    ops.sort_by_key(Operation::rank);
    steps.extend(ops.into_iter().map(Operation::into_step));

    let root = NodeId::for_node(ast, &[]);
    let output = NodeId::output();
    steps.push(Step {
        title: "Result Output".to_string(),
        active_component_ids: vec![output.clone(), NodeId::wire(&root, &output)],
        explanation: "The final result is stored in the output register.".to_string(),
        substeps: vec![
            "Result signal reaches output register".to_string(),
            "Value is stored for further processing or display".to_string(),
            "CPU flags may be updated based on result".to_string(),
        ],
    });

    log::debug!("sequenced {} steps", steps.len());
    steps
}
