//! Stable identifiers for diagram nodes and wires
//!
//! IDs are derived from an AST node's child-index path, so the layout
//! engine and the step sequencer produce the same strings for the same
//! tree without sharing any state:
//!
//! | element            | id                         |
//! |--------------------|----------------------------|
//! | variable leaf      | `input-root-0-1`           |
//! | gate               | `gate-root-0`              |
//! | synthetic sink     | `output`                   |
//! | wire               | `wire-<from>-to-<to>`      |

use crate::expression::Ast;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

fn path_suffix(path: &[usize]) -> String {
    let mut s = String::from("root");
    for index in path {
        s.push('-');
        s.push_str(&index.to_string());
    }
    s
}

impl NodeId {
    pub fn input(path: &[usize]) -> Self {
        NodeId(format!("input-{}", path_suffix(path)))
    }

    pub fn gate(path: &[usize]) -> Self {
        NodeId(format!("gate-{}", path_suffix(path)))
    }

    /// The synthetic output node right of the root
    pub fn output() -> Self {
        NodeId("output".to_string())
    }

    /// Wire from one node's output port into another node's input port
    pub fn wire(from: &NodeId, to: &NodeId) -> Self {
        NodeId(format!("wire-{}-to-{}", from.0, to.0))
    }

    /// Id of the node at `path`, an input for leaves and a gate otherwise
    pub fn for_node(node: &Ast, path: &[usize]) -> Self {
        if node.is_variable() {
            NodeId::input(path)
        } else {
            NodeId::gate(path)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
