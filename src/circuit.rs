//! One-call compilation of an expression into every derived artefact

use crate::config::Options;
use crate::error::Error;
use crate::expression::{parse, tokenize, validate, Ast, Operator, Token};
use crate::layout::{layout_with, Layout};
use crate::steps::{sequence_steps, Step};
use crate::truth_table::TruthTable;
use serde::Serialize;

/// Catalogue entry for a gate used by an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateInfo {
    pub operator: Operator,
    pub name: &'static str,
    pub description: &'static str,
    pub applications: &'static [&'static str],
}

impl From<Operator> for GateInfo {
    fn from(operator: Operator) -> Self {
        GateInfo {
            operator,
            name: operator.gate_name(),
            description: operator.description(),
            applications: operator.applications(),
        }
    }
}

/// A compiled expression
///
/// Holds everything a front end needs to show a circuit: the tree, its
/// truth table, diagram geometry, playback steps and the gate catalogue.
/// Nothing is computed lazily; a `Circuit` is never partially built.
///
/// # Examples
///
/// ```
/// use logic_sim::Circuit;
///
/// # fn main() -> Result<(), logic_sim::Error> {
/// let circuit = Circuit::compile("A AND (B OR C)")?;
/// assert_eq!(circuit.normalized, "a and (b or c)");
/// assert_eq!(circuit.variables, vec!['a', 'b', 'c']);
/// assert_eq!(circuit.truth_table.minterms(), vec![5, 6, 7]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    /// The text as given
    pub expression: String,
    /// Lowercase rendering with only the parentheses precedence needs
    pub normalized: String,
    pub tokens: Vec<Token>,
    /// Sorted, de-duplicated
    pub variables: Vec<char>,
    pub ast: Ast,
    pub truth_table: TruthTable,
    pub layout: Layout,
    pub steps: Vec<Step>,
    /// Gates used, in order of first appearance
    pub gates: Vec<GateInfo>,
}

impl Circuit {
    /// Compile with default [`Options`]
    pub fn compile(expression: &str) -> Result<Self, Error> {
        Self::compile_with(expression, &Options::default())
    }

    /// Compile, enforcing `options.limits` on the number of variables
    pub fn compile_with(expression: &str, options: &Options) -> Result<Self, Error> {
        let tokens = tokenize(expression);
        log::debug!("{} tokens", tokens.len());

        let validated = validate(&tokens)?;
        let count = validated.variables.len();
        if !options.limits.allows(count) {
            return Err(Error::VariableCount {
                count,
                min: options.limits.min_variables,
                max: options.limits.max_variables,
            });
        }

        let ast = parse(&validated.tokens)?;
        let truth_table = TruthTable::generate(&ast, &validated.variables)?;
        let layout = layout_with(&ast, &options.layout);
        let steps = sequence_steps(&ast, &validated.variables);
        let gates = ast.operators().into_iter().map(GateInfo::from).collect();

        Ok(Circuit {
            expression: expression.to_string(),
            normalized: ast.to_string(),
            tokens: validated.tokens,
            variables: validated.variables,
            ast,
            truth_table,
            layout,
            steps,
            gates,
        })
    }

    /// Number of gates in the diagram
    pub fn gate_count(&self) -> usize {
        self.ast.gate_count()
    }
}
