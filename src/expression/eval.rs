//! Evaluation of boolean expression trees

use super::ast::Ast;
use super::error::EvalError;
use std::collections::HashMap;

/// Variable assignment: one bit per variable letter
pub type Assignment = HashMap<char, bool>;

impl Ast {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Every variable in the tree must be bound; an unbound variable is
    /// reported instead of being read as 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_sim::{parse_expression, Assignment};
    ///
    /// let ast = parse_expression("a or b and c").unwrap();
    /// let assignment: Assignment = [('a', false), ('b', true), ('c', true)].into();
    /// assert_eq!(ast.evaluate(&assignment), Ok(true));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Ast::Variable { name } => assignment
                .get(name)
                .copied()
                .ok_or(EvalError::MissingAssignment(*name)),
            Ast::Not { operand } => Ok(!operand.evaluate(assignment)?),
            Ast::Gate { op, left, right } => {
                let l = left.evaluate(assignment)?;
                let r = right.evaluate(assignment)?;
                Ok(op.apply(l, r))
            }
        }
    }
}

/// Evaluate `ast` under `assignment`
pub fn evaluate(ast: &Ast, assignment: &Assignment) -> Result<bool, EvalError> {
    ast.evaluate(assignment)
}
