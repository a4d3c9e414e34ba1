//! AST representation and tree traversal operations
//!
//! The tree is built once per expression and never mutated. Every node is
//! addressed by its child-index path from the root, which is how the layout
//! engine and the step sequencer agree on node identity.

use super::operators::{BinaryOp, Operator};
use serde::Serialize;
use std::collections::BTreeSet;

/// Abstract syntax tree of a boolean expression
///
/// Arity is carried by the shape: `Not` has one child, `Gate` has two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Ast {
    /// A single-letter input
    Variable { name: char },
    /// Logical NOT of the operand
    Not { operand: Box<Ast> },
    /// A two-input gate; `left` and `right` keep their written order
    Gate {
        op: BinaryOp,
        left: Box<Ast>,
        right: Box<Ast>,
    },
}

/// Node type for expression tree folding
///
/// Used with [`Ast::fold`]; `T` is the result already computed for each
/// child subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode<T> {
    Variable(char),
    Not(T),
    Gate(BinaryOp, T, T),
}

/// Child-index path from the root, e.g. `[1, 0]` is the left child of the
/// root's right child
pub type NodePath = Vec<usize>;

impl Ast {
    pub fn variable(name: char) -> Self {
        Ast::Variable { name }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Ast) -> Self {
        Ast::Not {
            operand: Box::new(operand),
        }
    }

    pub fn gate(op: BinaryOp, left: Ast, right: Ast) -> Self {
        Ast::Gate {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The operator at this node, `None` for a variable leaf
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Ast::Variable { .. } => None,
            Ast::Not { .. } => Some(Operator::Not),
            Ast::Gate { op, .. } => Some(Operator::Binary(*op)),
        }
    }

    /// Children in written order
    pub fn children(&self) -> Vec<&Ast> {
        match self {
            Ast::Variable { .. } => Vec::new(),
            Ast::Not { operand } => vec![operand.as_ref()],
            Ast::Gate { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Ast::Variable { .. })
    }

    /// Fold the tree depth-first from leaves to root
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_sim::{parse_expression, AstNode};
    ///
    /// let ast = parse_expression("a and (not b)").unwrap();
    /// let gates = ast.fold(&|node: AstNode<usize>| match node {
    ///     AstNode::Variable(_) => 0,
    ///     AstNode::Not(inner) => inner + 1,
    ///     AstNode::Gate(_, l, r) => l + r + 1,
    /// });
    /// assert_eq!(gates, 2);
    /// ```
    pub fn fold<T, F>(&self, f: &F) -> T
    where
        F: Fn(AstNode<T>) -> T,
    {
        match self {
            Ast::Variable { name } => f(AstNode::Variable(*name)),
            Ast::Not { operand } => {
                let inner = operand.fold(f);
                f(AstNode::Not(inner))
            }
            Ast::Gate { op, left, right } => {
                let l = left.fold(f);
                let r = right.fold(f);
                f(AstNode::Gate(*op, l, r))
            }
        }
    }

    /// Visit every node in post-order (children before parent) with its path
    pub fn visit_post_order<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Ast, &[usize]),
    {
        let mut path = Vec::new();
        self.visit_post_order_at(&mut path, f);
    }

    fn visit_post_order_at<'a, F>(&'a self, path: &mut NodePath, f: &mut F)
    where
        F: FnMut(&'a Ast, &[usize]),
    {
        for (i, child) in self.children().into_iter().enumerate() {
            path.push(i);
            child.visit_post_order_at(path, f);
            path.pop();
        }
        f(self, path);
    }

    /// Sorted set of variable letters used in the tree
    pub fn collect_variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        self.visit_post_order(&mut |node, _| {
            if let Ast::Variable { name } = node {
                vars.insert(*name);
            }
        });
        vars
    }

    /// Distinct operators in order of first appearance, left to right
    pub fn operators(&self) -> Vec<Operator> {
        fn walk(node: &Ast, seen: &mut Vec<Operator>) {
            match node {
                Ast::Variable { .. } => {}
                Ast::Not { operand } => {
                    if !seen.contains(&Operator::Not) {
                        seen.push(Operator::Not);
                    }
                    walk(operand, seen);
                }
                Ast::Gate { op, left, right } => {
                    walk(left, seen);
                    let op = Operator::Binary(*op);
                    if !seen.contains(&op) {
                        seen.push(op);
                    }
                    walk(right, seen);
                }
            }
        }
        let mut seen = Vec::new();
        walk(self, &mut seen);
        seen
    }

    /// Number of operator nodes
    pub fn gate_count(&self) -> usize {
        self.fold(&|node: AstNode<usize>| match node {
            AstNode::Variable(_) => 0,
            AstNode::Not(inner) => inner + 1,
            AstNode::Gate(_, l, r) => l + r + 1,
        })
    }

    /// Longest root-to-leaf path counted in edges
    pub fn depth(&self) -> usize {
        self.fold(&|node: AstNode<usize>| match node {
            AstNode::Variable(_) => 0,
            AstNode::Not(inner) => inner + 1,
            AstNode::Gate(_, l, r) => l.max(r) + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ast {
        // (a and b) or (not c)
        Ast::gate(
            BinaryOp::Or,
            Ast::gate(BinaryOp::And, Ast::variable('a'), Ast::variable('b')),
            Ast::not(Ast::variable('c')),
        )
    }

    #[test]
    fn test_post_order_paths() {
        let ast = sample();
        let mut visited = Vec::new();
        ast.visit_post_order(&mut |node, path| {
            visited.push((node.operator().map(|op| op.keyword()), path.to_vec()));
        });
        assert_eq!(
            visited,
            vec![
                (None, vec![0, 0]),
                (None, vec![0, 1]),
                (Some("and"), vec![0]),
                (None, vec![1, 0]),
                (Some("not"), vec![1]),
                (Some("or"), vec![]),
            ]
        );
    }

    #[test]
    fn test_collect_variables_sorted() {
        let ast = Ast::gate(BinaryOp::Xor, Ast::variable('c'), Ast::variable('a'));
        let vars: Vec<char> = ast.collect_variables().into_iter().collect();
        assert_eq!(vars, vec!['a', 'c']);
    }

    #[test]
    fn test_operators_in_first_appearance_order() {
        assert_eq!(
            sample().operators(),
            vec![
                Operator::Binary(BinaryOp::And),
                Operator::Binary(BinaryOp::Or),
                Operator::Not
            ]
        );
    }

    #[test]
    fn test_gate_count_and_depth() {
        let ast = sample();
        assert_eq!(ast.gate_count(), 3);
        assert_eq!(ast.depth(), 2);
        assert_eq!(Ast::variable('a').depth(), 0);
    }
}
