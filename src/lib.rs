//! # Logic Circuit Simulator
//!
//! This crate turns textual Boolean expressions such as `(a and b) or (not c)`
//! into everything needed to teach or visualise them as a gate-level circuit.
//!
//! ## Overview
//!
//! A single expression is compiled through a fixed one-way pipeline:
//!
//! ```text
//! &str -> tokenize -> validate -> parse -> Ast -+-> truth table
//!                                                +-> diagram layout
//!                                                +-> playback steps
//! ```
//!
//! It's particularly useful for:
//!
//! - Introductory digital logic courses
//! - Generating circuit diagrams from expressions
//! - Step-by-step narration of how a CPU evaluates gates
//!
//! Expressions use single-letter variables and the keywords `and`, `or`,
//! `not`, `nand`, `nor`, `xor` and `xnor`, in any case. `not` binds
//! tightest, then `and`/`nand`, then the `or` family; parentheses override.
//!
//! ## Two Ways to Use the Simulator
//!
//! ### 1. The whole pipeline at once
//!
//! ```
//! use logic_sim::Circuit;
//!
//! # fn main() -> Result<(), logic_sim::Error> {
//! let circuit = Circuit::compile("a xor b")?;
//!
//! for row in &circuit.truth_table.rows {
//!     println!("{:?} -> {}", row.inputs, row.output);
//! }
//! println!("{} nodes to draw", circuit.layout.nodes.len());
//! println!("{} playback steps", circuit.steps.len());
//! # Ok(())
//! # }
//! ```
//!
//! Invalid input is reported with a message meant for the person who typed
//! it:
//!
//! ```
//! use logic_sim::Circuit;
//!
//! let err = Circuit::compile("a and").unwrap_err();
//! assert_eq!(err.to_string(), "Binary operator 'AND' requires two operands");
//! ```
//!
//! ### 2. Individual stages
//!
//! ```
//! use logic_sim::{generate_truth_table, layout, parse, sequence_steps, tokenize, validate};
//!
//! # fn main() -> Result<(), logic_sim::Error> {
//! let validated = validate(&tokenize("not (a or b)"))?;
//! let ast = parse(&validated.tokens)?;
//!
//! let table = generate_truth_table(&ast, &validated.variables)?;
//! assert_eq!(table.minterms(), vec![0]);
//!
//! let diagram = layout(&ast);
//! let steps = sequence_steps(&ast, &validated.variables);
//! assert_eq!(steps.first().map(|s| s.title.as_str()), Some("Input Initialization"));
//! # let _ = diagram;
//! # Ok(())
//! # }
//! ```
//!
//! Trees can also be built at compile time with the [`expr!`] macro:
//!
//! ```
//! use logic_sim::{expr, Ast};
//!
//! let carry: Ast = expr!("a" and "b");
//! let sum = expr!("a" xor "b");
//! let either = expr!(sum or carry);
//! assert_eq!(either.to_string(), "a xor b or a and b");
//! ```
//!
//! ## Serialization
//!
//! Every artefact implements `serde::Serialize`, so a front end can receive
//! a [`Circuit`] as JSON and draw it without re-deriving anything. Node and
//! wire ids in [`Layout`] and [`Step`] agree by construction.

extern crate self as logic_sim;

// Public modules
pub mod circuit;
pub mod config;
pub mod error;
pub mod expression;
pub mod layout;
pub mod node_id;
pub mod steps;
pub mod truth_table;

// Re-export high-level public API
pub use circuit::{Circuit, GateInfo};
pub use config::{ConfigError, LayoutConfig, Limits, Options};
pub use error::Error;
pub use expression::{
    evaluate, parse, parse_expression, tokenize, validate, Assignment, Ast, AstNode, BinaryOp,
    EvalError, Operator, ParseError, Token, TokenKind, Validated, ValidationError,
};
pub use layout::{layout, layout_with, Bounds, Connection, Layout, LayoutNode, NodeKind, Point};
pub use logic_sim_macros::expr;
pub use node_id::NodeId;
pub use steps::{sequence_steps, Step};
pub use truth_table::{generate_truth_table, TruthRow, TruthTable};
