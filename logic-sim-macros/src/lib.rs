use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident};

/// Gate keywords and the `BinaryOp` variant each one builds
const AND_FAMILY: &[(&str, &str)] = &[("and", "And"), ("nand", "Nand")];
const OR_FAMILY: &[(&str, &str)] = &[("or", "Or"), ("nor", "Nor"), ("xor", "Xor"), ("xnor", "Xnor")];

/// AST for boolean expressions
enum Expr {
    /// An `Ast` already in scope
    Binding(Ident),
    /// A quoted single letter
    Letter(char),
    Not(Box<Expr>),
    Gate(&'static str, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Generate code building an owned `Ast`; bindings are cloned
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Binding(ident) => {
                quote! {
                    ::core::clone::Clone::clone(&#ident)
                }
            }
            Expr::Letter(name) => {
                quote! {
                    ::logic_sim::Ast::variable(#name)
                }
            }
            Expr::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    ::logic_sim::Ast::not(#inner_tokens)
                }
            }
            Expr::Gate(variant, left, right) => {
                let op = format_ident!("{}", variant);
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    ::logic_sim::Ast::gate(::logic_sim::BinaryOp::#op, #left_tokens, #right_tokens)
                }
            }
        }
    }
}

/// Parser for boolean expressions with operator precedence
struct AstParser {
    expr: Expr,
}

impl Parse for AstParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_or(input)?;
        if !input.is_empty() {
            return Err(input.error("expected a gate keyword between operands"));
        }
        Ok(AstParser { expr })
    }
}

/// The next token if it is an identifier
fn peek_word(input: ParseStream) -> Option<String> {
    input.cursor().ident().map(|(ident, _)| ident.to_string())
}

/// Consume the next word if it is one of `family`, returning its variant
fn eat_keyword(input: ParseStream, family: &[(&str, &'static str)]) -> Result<Option<&'static str>> {
    let Some(word) = peek_word(input) else {
        return Ok(None);
    };
    match family.iter().find(|(kw, _)| word.eq_ignore_ascii_case(kw)) {
        Some(&(_, variant)) => {
            input.parse::<Ident>()?;
            Ok(Some(variant))
        }
        None => Ok(None),
    }
}

fn is_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("not")
        || AND_FAMILY
            .iter()
            .chain(OR_FAMILY)
            .any(|(kw, _)| word.eq_ignore_ascii_case(kw))
}

/// Parse OR/NOR/XOR/XNOR chains (lowest precedence, left associative)
fn parse_or(input: ParseStream) -> Result<Expr> {
    let mut left = parse_and(input)?;

    while let Some(variant) = eat_keyword(input, OR_FAMILY)? {
        reject_not_operand(input, variant)?;
        let right = parse_and(input)?;
        left = Expr::Gate(variant, Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse AND/NAND chains
fn parse_and(input: ParseStream) -> Result<Expr> {
    let mut left = parse_unary(input)?;

    while let Some(variant) = eat_keyword(input, AND_FAMILY)? {
        reject_not_operand(input, variant)?;
        let right = parse_unary(input)?;
        left = Expr::Gate(variant, Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn peek_not(input: ParseStream) -> bool {
    peek_word(input).is_some_and(|w| w.eq_ignore_ascii_case("not"))
}

/// A binary keyword may not be followed by `not`; write `a and (not b)`
fn reject_not_operand(input: ParseStream, variant: &str) -> Result<()> {
    if peek_not(input) {
        return Err(input.error(format!(
            "Invalid operator placement near '{}'",
            variant.to_ascii_uppercase()
        )));
    }
    Ok(())
}

/// Parse NOT and atoms (highest precedence)
fn parse_unary(input: ParseStream) -> Result<Expr> {
    if !peek_not(input) {
        return parse_atom(input);
    }
    let not = input.parse::<Ident>()?;
    if peek_word(input).is_some_and(|w| is_keyword(&w)) {
        return Err(syn::Error::new(
            not.span(),
            "'NOT' must be followed by a variable or '('",
        ));
    }
    let inner = parse_atom(input)?;
    Ok(Expr::Not(Box::new(inner)))
}

/// Parse a letter literal, a binding, or a parenthesized expression
fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = parse_or(&content)?;
        if !content.is_empty() {
            return Err(content.error("expected a gate keyword between operands"));
        }
        Ok(inner)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        letter(&lit.value(), lit.span())
    } else if input.peek(syn::LitChar) {
        let lit: syn::LitChar = input.parse()?;
        letter(&lit.value().to_string(), lit.span())
    } else {
        let ident: Ident = input.parse()?;
        if is_keyword(&ident.to_string()) {
            return Err(syn::Error::new(
                ident.span(),
                format!("'{}' is missing an operand", ident),
            ));
        }
        Ok(Expr::Binding(ident))
    }
}

fn letter(text: &str, span: Span) -> Result<Expr> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(Expr::Letter(c.to_ascii_lowercase())),
        _ => Err(syn::Error::new(
            span,
            format!("Invalid variable \"{}\". Variables must be single letters.", text),
        )),
    }
}

/// The `expr!` procedural macro for circuit expressions
///
/// Builds a `logic_sim::Ast` at compile time with the same keywords and
/// precedence as the runtime parser.
///
/// # Supported Syntax
///
/// - `"a"` or `'a'` - A variable leaf (any case, folded to lowercase)
/// - `x` - Any `Ast` binding in scope (cloned)
/// - `not x` - Inversion of a letter, binding or parenthesized group
/// - `x and y`, `x nand y`
/// - `x or y`, `x nor y`, `x xor y`, `x xnor y`
/// - `(x or y) and z` - Parentheses for grouping
///
/// # Operator Precedence
///
/// From highest to lowest:
/// 1. `( )` (Parentheses)
/// 2. `not`
/// 3. `and`, `nand`
/// 4. `or`, `nor`, `xor`, `xnor`
///
/// # Operator Placement
///
/// The macro rejects what the runtime validator rejects: `not not x` needs
/// parentheses (`not (not x)`), and `not` cannot directly follow a binary
/// keyword, so `x and not y` is written `x and (not y)`. A leading `not`
/// (`not x and y`) is fine.
///
/// # Examples
///
/// ```ignore
/// use logic_sim::expr;
///
/// let half_adder_sum = expr!("a" xor "b");
/// let carry = expr!("a" and "b");
///
/// // Compose existing trees
/// let either = expr!(half_adder_sum or (not carry));
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as AstParser);
    let tokens = parser.expr.to_tokens();
    TokenStream::from(tokens)
}
