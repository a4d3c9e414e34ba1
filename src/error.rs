//! Error types for the logic circuit pipeline
//!
//! Each stage has its own error enum so callers can match on exactly the
//! failures a stage can produce. [`Error`] wraps all of them for
//! [`Circuit::compile`](crate::Circuit::compile) and friends.

use crate::config::ConfigError;
use crate::expression::{EvalError, ParseError, ValidationError};
use std::io;
use thiserror::Error;

/// The main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// The expression text was rejected before parsing
    ///
    /// These are the user-facing mistakes: bad variables, unbalanced
    /// parentheses and misplaced operators.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The parser was handed tokens that never passed validation
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The expression uses more or fewer distinct variables than allowed
    #[error("Expression uses {count} variables; between {min} and {max} are supported")]
    VariableCount {
        count: usize,
        min: usize,
        max: usize,
    },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Config(config) => config.into(),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Operator;

    #[test]
    fn test_validation_message_passes_through() {
        let err: Error = ValidationError::MismatchedParentheses.into();
        assert_eq!(
            err.to_string(),
            ValidationError::MismatchedParentheses.to_string()
        );
    }

    #[test]
    fn test_variable_count_display() {
        let err = Error::VariableCount {
            count: 5,
            min: 1,
            max: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("5 variables"));
        assert!(msg.contains("between 1 and 4"));
    }

    #[test]
    fn test_io_conversion_is_invalid_data() {
        let err: Error = ParseError::MissingOperand(Operator::Not).into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_config_io_error_keeps_kind() {
        let err: Error = ConfigError::Io {
            path: "missing.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }
        .into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
