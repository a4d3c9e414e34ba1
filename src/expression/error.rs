//! Error types for boolean expression validation, parsing and evaluation

use super::operators::Operator;
use std::io;
use thiserror::Error;

/// Errors reported when an expression is rejected before parsing
///
/// These are all recoverable: the caller shows the message and asks the
/// user for another expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input contained no tokens
    #[error("Expression cannot be empty")]
    EmptyExpression,

    /// A word that is neither an operator nor a single letter
    #[error("Invalid variable \"{0}\". Variables must be single letters.")]
    InvalidVariable(String),

    /// Parenthesis depth went negative or did not return to zero
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// `NOT` at the end of input or directly before another operator
    #[error("'NOT' must be followed by a variable or '('")]
    NotMissingOperand,

    /// A binary operator without an operand on one side
    #[error("Binary operator '{}' requires two operands", .0.gate_name())]
    BinaryOperatorArity(Operator),

    /// A binary operator next to another operator keyword
    #[error("Invalid operator placement near '{}'", .0.gate_name())]
    InvalidOperatorPlacement(Operator),

    /// Two operands with no operator between them, e.g. `a b`
    #[error("Missing operator between \"{left}\" and \"{right}\"")]
    MissingOperator { left: String, right: String },

    /// A `()` pair with nothing inside
    #[error("Empty parentheses")]
    EmptyParentheses,
}

/// Contract violations found while building the AST
///
/// The parser assumes validated input, so these indicate a bug in the
/// caller rather than bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No tokens to parse
    #[error("cannot parse an empty token sequence")]
    Empty,

    /// An operator found fewer operands on the stack than it needs
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(Operator),

    /// More than one tree remained after reduction
    #[error("{0} operands left over after reduction")]
    LeftoverOperands(usize),

    /// A parenthesis without its partner
    #[error("unbalanced parenthesis at position {0}")]
    UnbalancedParenthesis(usize),

    /// A token the parser cannot place, such as an unknown word
    #[error("unexpected token \"{text}\" at position {position}")]
    UnexpectedToken { text: String, position: usize },
}

/// Errors raised while evaluating an AST
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no value for a variable used in the AST
    #[error("no value assigned to variable '{0}'")]
    MissingAssignment(char),

    /// Too many variables to enumerate every row
    #[error("cannot enumerate a truth table over {0} variables")]
    TooManyVariables(usize),
}

impl From<ValidationError> for io::Error {
    fn from(err: ValidationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
