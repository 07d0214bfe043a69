use crate::interpreter::error::Result;
use crate::interpreter::token::Token;
use log::trace;

/// Splits an expression on single spaces and classifies every piece.
///
/// Empty pieces, as produced by leading, trailing or repeated spaces, are dropped.
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    expression
        .split(' ')
        .filter(|text| !text.is_empty())
        .map(|text| {
            trace!("classifying '{}'", text);
            text.parse::<Token>()
        })
        .collect()
}
