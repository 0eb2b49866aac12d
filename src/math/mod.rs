// Restricted arithmetic: a fixed character set, a hand-written parser and a
// tree-walking executor over a closed set of functions and constants.

pub mod ast;
pub mod error;
pub mod executor;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod tests;

pub use ast::{BinaryOp, Constant, Expr, Function, UnaryOp};
pub use error::MathError;
pub use executor::{execute, format_value, Value};
pub use parser::parse_expression;

use crate::query::types::{Category, Evaluation};

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '^', '%', ','];
const SYMBOL_CHARS: &[char] = &['.', '+', '-', '*', '/', '(', ')', '^', '%', ','];

/// Reject anything outside digits, lowercase letters, whitespace and the
/// arithmetic symbols before any parsing happens
pub fn check_characters(query: &str) -> Result<(), MathError> {
    match query.char_indices().find(|(_, c)| {
        !(c.is_ascii_digit()
            || c.is_ascii_lowercase()
            || c.is_ascii_whitespace()
            || SYMBOL_CHARS.contains(c))
    }) {
        Some((pos, c)) => Err(MathError::DisallowedCharacter(c, pos)),
        None => Ok(()),
    }
}

/// A bare number is not a calculation: require an operator, comma or name
pub fn check_has_operator(query: &str) -> Result<(), MathError> {
    if query
        .chars()
        .any(|c| c.is_ascii_lowercase() || OPERATOR_CHARS.contains(&c))
    {
        Ok(())
    } else {
        Err(MathError::NoOperator)
    }
}

/// Arithmetic strategy over a trimmed, lowercased query
pub fn evaluate_math(query: &str) -> Result<Evaluation, MathError> {
    check_characters(query)?;
    check_has_operator(query)?;
    let expr = parse_expression(query)?;
    let value = execute(&expr)?;
    Ok(Evaluation::new(format_value(&value), Category::Math))
}
