//! Parsing support for boolean expressions
//!
//! Infix tokens are reordered into postfix with the shunting-yard algorithm,
//! then the postfix sequence is reduced to an [`Ast`] on a single stack.
//! Input is expected to have passed [`validate`](super::validate::validate);
//! anything else is reported as a [`ParseError`] rather than producing a
//! partial tree.

use super::ast::Ast;
use super::error::ParseError;
use super::operators::Operator;
use super::token::{Token, TokenKind};

/// Element of the postfix sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixItem {
    Variable(char),
    Operator(Operator),
}

/// Operator-stack entry during shunting-yard
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator),
    /// Open parenthesis with its byte offset
    Paren(usize),
}

/// Reorder infix tokens into postfix
///
/// Equal precedence pops (left associative). NOT is a prefix operator with
/// no left operand, so pushing it never pops anything.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<PostfixItem>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Variable => {
                let name = token.variable().ok_or_else(|| unexpected(token))?;
                output.push(PostfixItem::Variable(name));
            }
            TokenKind::LParen => stack.push(StackEntry::Paren(token.position)),
            TokenKind::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(PostfixItem::Operator(op)),
                    Some(StackEntry::Paren(_)) => break,
                    None => return Err(ParseError::UnbalancedParenthesis(token.position)),
                }
            },
            TokenKind::Operator(op) => {
                if op != Operator::Not {
                    while let Some(&StackEntry::Operator(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        output.push(PostfixItem::Operator(top));
                        stack.pop();
                    }
                }
                stack.push(StackEntry::Operator(op));
            }
            TokenKind::Unknown => return Err(unexpected(token)),
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(PostfixItem::Operator(op)),
            StackEntry::Paren(position) => return Err(ParseError::UnbalancedParenthesis(position)),
        }
    }
    Ok(output)
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        text: token.text.clone(),
        position: token.position,
    }
}

/// Reduce a postfix sequence to a single tree
///
/// Binary operators pop the right operand first, then the left.
pub fn build_ast(postfix: &[PostfixItem]) -> Result<Ast, ParseError> {
    let mut stack: Vec<Ast> = Vec::new();

    for item in postfix {
        match *item {
            PostfixItem::Variable(name) => stack.push(Ast::variable(name)),
            PostfixItem::Operator(op @ Operator::Not) => {
                let operand = stack.pop().ok_or(ParseError::MissingOperand(op))?;
                stack.push(Ast::not(operand));
            }
            PostfixItem::Operator(op @ Operator::Binary(gate)) => {
                let right = stack.pop().ok_or(ParseError::MissingOperand(op))?;
                let left = stack.pop().ok_or(ParseError::MissingOperand(op))?;
                stack.push(Ast::gate(gate, left, right));
            }
        }
    }

    match stack.len() {
        0 => Err(ParseError::Empty),
        1 => stack.pop().ok_or(ParseError::Empty),
        n => Err(ParseError::LeftoverOperands(n)),
    }
}

/// Parse validated tokens into an AST
pub fn parse(tokens: &[Token]) -> Result<Ast, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let postfix = to_postfix(tokens)?;
    log::trace!("postfix: {:?}", postfix);
    build_ast(&postfix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::operators::BinaryOp;
    use crate::expression::token::tokenize;

    fn postfix_text(input: &str) -> String {
        to_postfix(&tokenize(input))
            .unwrap()
            .iter()
            .map(|item| match item {
                PostfixItem::Variable(c) => c.to_string(),
                PostfixItem::Operator(op) => op.keyword().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_postfix_precedence() {
        assert_eq!(postfix_text("a or b and c"), "a b c and or");
        assert_eq!(postfix_text("a and b or c"), "a b and c or");
        assert_eq!(postfix_text("not a and b"), "a not b and");
    }

    #[test]
    fn test_postfix_left_associative() {
        assert_eq!(postfix_text("a xor b or c"), "a b xor c or");
        assert_eq!(postfix_text("a nand b and c"), "a b nand c and");
    }

    #[test]
    fn test_postfix_parentheses_are_discarded() {
        assert_eq!(postfix_text("(a or b) and c"), "a b or c and");
        assert_eq!(postfix_text("not (a or b)"), "a b or not");
    }

    #[test]
    fn test_binary_keeps_left_right_order() {
        let ast = parse(&tokenize("a nor b")).unwrap();
        assert_eq!(
            ast,
            Ast::gate(BinaryOp::Nor, Ast::variable('a'), Ast::variable('b'))
        );
    }

    #[test]
    fn test_not_binds_tightest() {
        let ast = parse(&tokenize("not a and b")).unwrap();
        assert_eq!(
            ast,
            Ast::gate(
                BinaryOp::And,
                Ast::not(Ast::variable('a')),
                Ast::variable('b')
            )
        );
    }

    #[test]
    fn test_double_negation_reduces() {
        // Rejected by the validator, but the parser itself handles it
        let ast = parse(&tokenize("not not a")).unwrap();
        assert_eq!(ast, Ast::not(Ast::not(Ast::variable('a'))));
    }

    #[test]
    fn test_contract_violations_fail_loudly() {
        assert_eq!(parse(&[]), Err(ParseError::Empty));
        assert_eq!(
            parse(&tokenize("a b")),
            Err(ParseError::LeftoverOperands(2))
        );
        assert_eq!(
            parse(&tokenize("and a")),
            Err(ParseError::MissingOperand(Operator::Binary(BinaryOp::And)))
        );
        assert_eq!(
            parse(&tokenize("not")),
            Err(ParseError::MissingOperand(Operator::Not))
        );
        assert_eq!(
            parse(&tokenize("a)")),
            Err(ParseError::UnbalancedParenthesis(1))
        );
        assert_eq!(
            parse(&tokenize("(a")),
            Err(ParseError::UnbalancedParenthesis(0))
        );
        assert!(matches!(
            parse(&tokenize("a and xy")),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert_eq!(parse(&tokenize("()")), Err(ParseError::Empty));
    }
}
