//! Validation gate between the tokenizer and the parser
//!
//! Checks run in a fixed order and stop at the first failure, since the
//! message a user sees depends on which check trips first:
//!
//! 1. every word is a keyword, a parenthesis or a single letter
//! 2. parentheses balance
//! 3. every operator has its operands
//! 4. no two operands sit next to each other without an operator

use super::error::ValidationError;
use super::operators::Operator;
use super::token::{Token, TokenKind};
use serde::Serialize;

/// Tokens that passed validation together with their variable set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validated {
    pub tokens: Vec<Token>,
    /// Sorted, de-duplicated variable letters
    pub variables: Vec<char>,
}

/// Validate a token sequence, returning it with its sorted variable set
pub fn validate(tokens: &[Token]) -> Result<Validated, ValidationError> {
    if tokens.is_empty() {
        return Err(ValidationError::EmptyExpression);
    }
    check_token_legality(tokens)?;
    check_parenthesis_balance(tokens)?;
    check_operator_placement(tokens)?;
    check_operand_adjacency(tokens)?;

    let mut variables: Vec<char> = tokens.iter().filter_map(Token::variable).collect();
    variables.sort_unstable();
    variables.dedup();

    log::debug!("validated {} tokens, variables {:?}", tokens.len(), variables);
    Ok(Validated {
        tokens: tokens.to_vec(),
        variables,
    })
}

fn check_token_legality(tokens: &[Token]) -> Result<(), ValidationError> {
    match tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
        Some(token) => Err(ValidationError::InvalidVariable(token.text.clone())),
        None => Ok(()),
    }
}

fn check_parenthesis_balance(tokens: &[Token]) -> Result<(), ValidationError> {
    let mut depth = 0usize;
    for token in tokens {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ValidationError::MismatchedParentheses)?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(ValidationError::MismatchedParentheses)
    }
}

fn check_operator_placement(tokens: &[Token]) -> Result<(), ValidationError> {
    for (i, token) in tokens.iter().enumerate() {
        let Some(op) = token.operator() else {
            continue;
        };
        let prev = i.checked_sub(1).and_then(|p| tokens.get(p));
        let next = tokens.get(i + 1);

        match op {
            Operator::Not => match next.map(|t| t.kind) {
                Some(TokenKind::Variable) | Some(TokenKind::LParen) => {}
                _ => return Err(ValidationError::NotMissingOperand),
            },
            Operator::Binary(_) => {
                let (Some(prev), Some(next)) = (prev, next) else {
                    return Err(ValidationError::BinaryOperatorArity(op));
                };
                if prev.is_operator() || next.is_operator() {
                    return Err(ValidationError::InvalidOperatorPlacement(op));
                }
                if prev.kind == TokenKind::LParen || next.kind == TokenKind::RParen {
                    return Err(ValidationError::BinaryOperatorArity(op));
                }
            }
        }
    }
    Ok(())
}

fn ends_operand(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Variable | TokenKind::RParen)
}

fn starts_operand(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Variable | TokenKind::LParen | TokenKind::Operator(Operator::Not)
    )
}

fn check_operand_adjacency(tokens: &[Token]) -> Result<(), ValidationError> {
    for pair in tokens.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        if left.kind == TokenKind::LParen && right.kind == TokenKind::RParen {
            return Err(ValidationError::EmptyParentheses);
        }
        if ends_operand(left) && starts_operand(right) {
            return Err(ValidationError::MissingOperator {
                left: left.text.clone(),
                right: right.text.clone(),
            });
        }
    }
    Ok(())
}
