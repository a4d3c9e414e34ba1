//! Boolean expression front-end: tokens, validation, parsing and evaluation
//!
//! Expressions use single-letter variables, the keywords `and`, `or`, `not`,
//! `nand`, `nor`, `xor`, `xnor` (any case) and parentheses.
//!
//! # Pipeline
//!
//! ```text
//! &str --tokenize--> Vec<Token> --validate--> Validated --parse--> Ast
//! ```
//!
//! Validation is the only gate for user mistakes. The parser and the
//! evaluator assume their input already passed it and report violations as
//! contract errors.
//!
//! # Quick Start
//!
//! ```
//! use logic_sim::{parse_expression, Assignment};
//!
//! # fn main() -> Result<(), logic_sim::Error> {
//! let ast = parse_expression("not a and b")?;
//! println!("{}", ast); // (not a) and b
//!
//! let assignment: Assignment = [('a', false), ('b', false)].into();
//! assert_eq!(ast.evaluate(&assignment)?, false);
//! # Ok(())
//! # }
//! ```
//!
//! # Operator Precedence
//!
//! From highest to lowest:
//! 1. `( )` (Parentheses)
//! 2. `not`
//! 3. `and`, `nand`
//! 4. `or`, `nor`, `xor`, `xnor`
//!
//! Operators of equal precedence associate to the left.

mod ast;
mod display;
pub mod error;
mod eval;
mod operators;
mod parser;
mod token;
mod validate;

pub use ast::{Ast, AstNode, NodePath};
pub use error::{EvalError, ParseError, ValidationError};
pub use eval::{evaluate, Assignment};
pub use operators::{BinaryOp, Operator};
pub use parser::{build_ast, parse, to_postfix, PostfixItem};
pub use token::{tokenize, Token, TokenKind};
pub use validate::{validate, Validated};

/// Tokenize, validate and parse `input` in one call
pub fn parse_expression(input: &str) -> Result<Ast, crate::Error> {
    let validated = validate(&tokenize(input))?;
    Ok(parse(&validated.tokens)?)
}
