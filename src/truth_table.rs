//! Exhaustive truth tables
//!
//! Rows are enumerated in increasing binary order of the input tuple read
//! as a big-endian integer, so the first variable is the most significant
//! bit and row `i` has the inputs of `i` in binary.

use crate::expression::{Assignment, Ast, EvalError};
use serde::Serialize;
use std::fmt;

/// One row: input bits in variable order plus the output bit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthRow {
    pub inputs: Vec<bool>,
    pub output: bool,
}

/// Complete truth table of an expression over an ordered variable list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub variables: Vec<char>,
    pub rows: Vec<TruthRow>,
}

impl TruthRow {
    /// Row index the inputs encode, first input most significant
    pub fn index(&self) -> usize {
        self.inputs
            .iter()
            .fold(0, |acc, &bit| (acc << 1) | usize::from(bit))
    }
}

/// `2^n`, or `None` when the rows could never fit in memory
fn row_count(n: usize) -> Option<usize> {
    let total = 1usize.checked_shl(u32::try_from(n).ok()?)?;
    let row_bytes = std::mem::size_of::<TruthRow>().checked_add(n)?;
    total
        .checked_mul(row_bytes)
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .map(|_| total)
}

impl TruthTable {
    /// Evaluate `ast` for every assignment over `variables`
    ///
    /// `variables` must cover every variable in the tree; extra letters just
    /// add columns. Produces exactly `2^n` rows regardless of tree shape.
    pub fn generate(ast: &Ast, variables: &[char]) -> Result<Self, EvalError> {
        let n = variables.len();
        let total = row_count(n).ok_or(EvalError::TooManyVariables(n))?;
        let mut rows = Vec::new();
        let mut assignment = Assignment::with_capacity(n);

        for i in 0..total {
            let inputs: Vec<bool> = (0..n).map(|bit| (i >> (n - 1 - bit)) & 1 == 1).collect();
            for (&name, &value) in variables.iter().zip(&inputs) {
                assignment.insert(name, value);
            }
            let output = ast.evaluate(&assignment)?;
            rows.push(TruthRow { inputs, output });
        }

        log::debug!("truth table over {:?}: {} rows", variables, rows.len());
        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output bits in row order
    pub fn output_column(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.output).collect()
    }

    /// Indices of the rows whose output is 1
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.output)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of rows whose output is 1
    pub fn ones(&self) -> usize {
        self.rows.iter().filter(|row| row.output).count()
    }

    /// Output is 1 on every row
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.output)
    }

    /// Output is 0 on every row
    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|row| !row.output)
    }
}

/// Plain-text grid with one column per variable and an `out` column
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.variables {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "| out")?;
        for row in &self.rows {
            for &bit in &row.inputs {
                write!(f, "{} ", u8::from(bit))?;
            }
            writeln!(f, "| {}", u8::from(row.output))?;
        }
        Ok(())
    }
}

/// Build the truth table of `ast` over `variables`
pub fn generate_truth_table(ast: &Ast, variables: &[char]) -> Result<TruthTable, EvalError> {
    TruthTable::generate(ast, variables)
}
