//! Display formatting for expression trees
//!
//! Prints keywords in lowercase with only the parentheses the precedence
//! table and the operator placement rules require, so the output re-parses
//! to the same tree.

use super::ast::Ast;
use super::operators::Operator;
use std::fmt;

/// Which side of the parent a subtree is printed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Ast {
    fn needs_parens(&self, parent: Operator, side: Side) -> bool {
        let Some(own) = self.operator() else {
            return false;
        };
        match parent {
            // NOT must be followed by a variable or `(`
            Operator::Not => true,
            // a keyword may not sit next to a binary operator
            Operator::Binary(_) if own == Operator::Not => true,
            Operator::Binary(_) => match own.precedence().cmp(&parent.precedence()) {
                std::cmp::Ordering::Less => true,
                // left associative: an equal-precedence right child was grouped explicitly
                std::cmp::Ordering::Equal => side == Side::Right,
                std::cmp::Ordering::Greater => false,
            },
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, parent: Operator, side: Side) -> fmt::Result {
        if self.needs_parens(parent, side) {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

/// Formats with minimal parentheses, e.g. `a or b and c`, `not (a xor b)`,
/// `(not a) and b`
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Variable { name } => write!(f, "{}", name),
            Ast::Not { operand } => {
                write!(f, "not ")?;
                operand.fmt_child(f, Operator::Not, Side::Right)
            }
            Ast::Gate { op, left, right } => {
                let parent = Operator::Binary(*op);
                left.fmt_child(f, parent, Side::Left)?;
                write!(f, " {} ", op)?;
                right.fmt_child(f, parent, Side::Right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::parse_expression;

    fn round_trip(input: &str) -> String {
        let ast = parse_expression(input).unwrap();
        let shown = ast.to_string();
        assert_eq!(parse_expression(&shown).unwrap(), ast, "{shown}");
        shown
    }

    #[test]
    fn test_minimal_parentheses() {
        assert_eq!(round_trip("a or (b and c)"), "a or b and c");
        assert_eq!(round_trip("(a or b) and c"), "(a or b) and c");
        assert_eq!(round_trip("((a))"), "a");
    }

    #[test]
    fn test_not_of_compound_keeps_parentheses() {
        assert_eq!(round_trip("not (a and b)"), "not (a and b)");
        assert_eq!(round_trip("NOT A"), "not a");
        assert_eq!(round_trip("not (not a)"), "not (not a)");
    }

    #[test]
    fn test_not_under_binary_gate_is_parenthesised() {
        assert_eq!(round_trip("a and (not b)"), "a and (not b)");
        assert_eq!(round_trip("not a and b"), "(not a) and b");
        assert_eq!(round_trip("c or (not a) and b"), "c or (not a) and b");
        assert_eq!(round_trip("not (not a) xor b"), "(not (not a)) xor b");
    }

    #[test]
    fn test_right_grouping_is_preserved() {
        assert_eq!(round_trip("a xor (b or c)"), "a xor (b or c)");
        assert_eq!(round_trip("(a xor b) or c"), "a xor b or c");
    }
}
