//! Lexical analysis: turns a raw expression string into a flat token list.
//!
//! Parentheses delimit themselves, everything else is split on whitespace.
//! Words that are neither keywords nor single letters are kept as
//! [`TokenKind::Unknown`] so the validator can name them in its error.

use super::operators::Operator;
use serde::Serialize;

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A single lowercase letter
    Variable,
    Operator(Operator),
    LParen,
    RParen,
    /// A word that is not a keyword and not a single letter
    Unknown,
}

/// One lexical unit with its case-folded text and byte offset in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    fn classify(word: &str, position: usize) -> Self {
        let text = word.to_lowercase();
        let kind = match text.as_str() {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            other => match Operator::from_keyword(other) {
                Some(op) => TokenKind::Operator(op),
                None if is_variable_name(other) => TokenKind::Variable,
                None => TokenKind::Unknown,
            },
        };
        Token {
            kind,
            text,
            position,
        }
    }

    /// The variable letter, if this token is a variable
    pub fn variable(&self) -> Option<char> {
        match self.kind {
            TokenKind::Variable => self.text.chars().next(),
            _ => None,
        }
    }

    /// The operator, if this token is an operator keyword
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }
}

/// Exactly one ASCII lowercase letter
fn is_variable_name(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

/// Lex `input` into tokens. Blank input yields an empty vector.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() || c == '(' || c == ')' {
            if let Some(start) = word_start.take() {
                tokens.push(Token::classify(&input[start..i], start));
            }
            if c == '(' || c == ')' {
                tokens.push(Token::classify(&input[i..i + 1], i));
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::classify(&input[start..], start));
    }

    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::operators::BinaryOp;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_parentheses_split_without_spaces() {
        assert_eq!(
            kinds("(a)and(b)"),
            vec![
                TokenKind::LParen,
                TokenKind::Variable,
                TokenKind::RParen,
                TokenKind::Operator(Operator::Binary(BinaryOp::And)),
                TokenKind::LParen,
                TokenKind::Variable,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_case_folding() {
        let tokens = tokenize("A XNOR b");
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[0].variable(), Some('a'));
        assert_eq!(
            tokens[1].operator(),
            Some(Operator::Binary(BinaryOp::Xnor))
        );
        assert_eq!(tokens[1].text, "xnor");
    }

    #[test]
    fn test_malformed_words_are_kept() {
        let tokens = tokenize("xy and 1 or a&b");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "xy");
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].text, "1");
        assert_eq!(tokens[4].kind, TokenKind::Unknown);
        assert_eq!(tokens[4].text, "a&b");
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let tokens = tokenize("  not (a)");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![2, 6, 7, 8]);
    }

    #[test]
    fn test_non_ascii_letter_is_unknown() {
        let tokens = tokenize("é");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
    }
}
