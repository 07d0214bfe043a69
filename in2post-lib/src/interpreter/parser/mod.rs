mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

/// An expression in postfix (Reverse Polish) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    pub(crate) tokens: Vec<Token>,
    pub(crate) has_variables: bool,
}

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when any operand is an identifier, which makes the expression impossible to reduce
    /// to a number.
    pub fn has_variables(&self) -> bool {
        self.has_variables
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

/// Reorders the given infix tokens into postfix order.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The postfix form of the expression.
///
/// # Examples
///
/// ```
/// # use in2post::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use in2post::interpreter::lexer::tokenize;
/// use in2post::interpreter::parser::parse;
///
/// let infix_tokens = tokenize("x * ( y + 2 )")?;
/// let postfix = parse(infix_tokens)?;
/// assert_eq!(postfix.to_string(), "x y 2 + *");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Postfix> {
    infix_to_postfix(infix_tokens)
}
