//! Operator table for boolean expressions
//!
//! Holds keyword spelling, precedence, truth semantics and the short gate
//! catalogue shown alongside a circuit.

use serde::{Serialize, Serializer};
use std::fmt;

/// A two-input gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Xnor,
}

/// Any operator keyword accepted in an expression
///
/// Serializes as its lowercase keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Prefix inversion, the only unary operator
    Not,
    /// One of the six two-input gates
    Binary(BinaryOp),
}

impl BinaryOp {
    /// All binary operators in catalogue order
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::And,
        BinaryOp::Nand,
        BinaryOp::Or,
        BinaryOp::Nor,
        BinaryOp::Xor,
        BinaryOp::Xnor,
    ];

    /// Binding strength: AND/NAND bind tighter than OR/NOR/XOR/XNOR
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::And | BinaryOp::Nand => 3,
            BinaryOp::Or | BinaryOp::Nor | BinaryOp::Xor | BinaryOp::Xnor => 2,
        }
    }

    /// Lowercase keyword as written in expressions
    pub fn keyword(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Nand => "nand",
            BinaryOp::Or => "or",
            BinaryOp::Nor => "nor",
            BinaryOp::Xor => "xor",
            BinaryOp::Xnor => "xnor",
        }
    }

    /// Apply the gate to two input bits
    ///
    /// NAND, NOR and XNOR are the complements of AND, OR and XOR.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Nand => !(left && right),
            BinaryOp::Or => left || right,
            BinaryOp::Nor => !(left || right),
            BinaryOp::Xor => left != right,
            BinaryOp::Xnor => left == right,
        }
    }
}

impl Operator {
    /// All seven operators in catalogue order
    pub const ALL: [Operator; 7] = [
        Operator::Not,
        Operator::Binary(BinaryOp::And),
        Operator::Binary(BinaryOp::Nand),
        Operator::Binary(BinaryOp::Or),
        Operator::Binary(BinaryOp::Nor),
        Operator::Binary(BinaryOp::Xor),
        Operator::Binary(BinaryOp::Xnor),
    ];

    /// Look up an operator by its (already lowercased) keyword
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "not" => Some(Operator::Not),
            "and" => Some(Operator::Binary(BinaryOp::And)),
            "nand" => Some(Operator::Binary(BinaryOp::Nand)),
            "or" => Some(Operator::Binary(BinaryOp::Or)),
            "nor" => Some(Operator::Binary(BinaryOp::Nor)),
            "xor" => Some(Operator::Binary(BinaryOp::Xor)),
            "xnor" => Some(Operator::Binary(BinaryOp::Xnor)),
            _ => None,
        }
    }

    /// Precedence table: NOT=4, AND/NAND=3, OR/NOR/XOR/XNOR=2
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::Binary(op) => op.precedence(),
        }
    }

    /// Number of operands the operator consumes
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::Binary(_) => 2,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::Binary(op) => op.keyword(),
        }
    }

    /// Uppercase gate name used in step titles and diagnostics
    pub fn gate_name(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::Binary(BinaryOp::And) => "AND",
            Operator::Binary(BinaryOp::Nand) => "NAND",
            Operator::Binary(BinaryOp::Or) => "OR",
            Operator::Binary(BinaryOp::Nor) => "NOR",
            Operator::Binary(BinaryOp::Xor) => "XOR",
            Operator::Binary(BinaryOp::Xnor) => "XNOR",
        }
    }

    /// One-sentence behaviour of the gate
    pub fn description(self) -> &'static str {
        match self {
            Operator::Not => "The NOT gate (inverter) produces the opposite of its input.",
            Operator::Binary(BinaryOp::And) => {
                "The AND gate produces a HIGH output only when all inputs are HIGH."
            }
            Operator::Binary(BinaryOp::Nand) => {
                "The NAND gate is a universal gate that produces a LOW output only when all inputs are HIGH."
            }
            Operator::Binary(BinaryOp::Or) => {
                "The OR gate produces a HIGH output when at least one input is HIGH."
            }
            Operator::Binary(BinaryOp::Nor) => {
                "The NOR gate is a universal gate that produces a HIGH output only when all inputs are LOW."
            }
            Operator::Binary(BinaryOp::Xor) => {
                "The XOR gate produces a HIGH output when its inputs are different."
            }
            Operator::Binary(BinaryOp::Xnor) => {
                "The XNOR gate produces a HIGH output when its inputs are the same."
            }
        }
    }

    /// Where the gate typically shows up inside a CPU
    pub fn applications(self) -> &'static [&'static str] {
        match self {
            Operator::Not => &[
                "Complement operations in ALU",
                "Signal inversion in control logic",
                "Memory address decoding",
                "Clock signal generation",
            ],
            Operator::Binary(BinaryOp::And) => &[
                "Data masking and selection in registers",
                "Address decoding in memory units",
                "Control signal generation",
                "Implementing complex boolean functions",
            ],
            Operator::Binary(BinaryOp::Nand) => &[
                "Building complex logic circuits efficiently",
                "Memory cell design",
                "Arithmetic logic unit (ALU) implementation",
                "Control unit logic",
            ],
            Operator::Binary(BinaryOp::Or) => &[
                "Interrupt handling and priority encoding",
                "Bus arbitration logic",
                "Error detection circuits",
                "Combining multiple control signals",
            ],
            Operator::Binary(BinaryOp::Nor) => &[
                "Building flip-flops and latches",
                "State machine implementation",
                "Control signal generation",
                "Memory address decoding",
            ],
            Operator::Binary(BinaryOp::Xor) => &[
                "Binary addition in ALU",
                "Parity checking",
                "Error detection and correction",
                "Data encryption/decryption",
            ],
            Operator::Binary(BinaryOp::Xnor) => &[
                "Equality comparison in ALU",
                "Parity generation",
                "Error detection circuits",
                "Data comparison operations",
            ],
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Operator::Binary(op)
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.keyword())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
