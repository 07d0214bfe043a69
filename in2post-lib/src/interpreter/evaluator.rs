use crate::interpreter::error::{ConversionError, Result};
use crate::interpreter::parser::Postfix;
use crate::interpreter::token::Token;
use log::{trace, warn};
use std::fmt;
use std::fmt::Formatter;

/// The outcome of evaluating a postfix expression.
///
/// `Display` renders only the result itself: the formatted number, the postfix text for a
/// symbolic expression, or nothing when undefined.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// All operands were numeric and reduced to a single value.
    Numeric(f64),
    /// The expression contains variables, so the postfix form is its own result.
    Symbolic(String),
    /// The operands did not reduce to exactly one value.
    Undefined,
}

impl Evaluation {
    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Numeric(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Numeric(value) => write!(f, "{}", format_value(*value)),
            Evaluation::Symbolic(postfix) => write!(f, "{}", postfix),
            Evaluation::Undefined => Ok(()),
        }
    }
}

/// Renders with six fractional digits, then strips trailing zeros and a bare decimal point.
fn format_value(value: f64) -> String {
    let text = format!("{:.6}", value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Reduces the given postfix expression to a value.
///
/// # Arguments
///
/// * `postfix`: A converted expression. It is only read, so evaluating it again gives the same result.
///
/// returns: The numeric value, the symbolic form when variables are present, or `Undefined`
/// when the operands do not reduce to exactly one value.
pub fn evaluate(postfix: &Postfix) -> Result<Evaluation> {
    if postfix.has_variables() {
        return Ok(Evaluation::Symbolic(postfix.to_string()));
    }

    let mut operands: Vec<f64> = Vec::with_capacity(postfix.tokens().len());
    for token in postfix.tokens() {
        trace!("token {}, operand stack {:?}", token, operands);
        match token {
            Token::Number(text) => {
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ConversionError::InvalidToken(text.clone()))?;
                operands.push(value);
            }
            Token::Operator(operator) => {
                let rhs = operands.pop().ok_or_else(|| missing_operand(token))?;
                let lhs = operands.pop().ok_or_else(|| missing_operand(token))?;
                operands.push(operator.evaluate(lhs, rhs));
            }
            Token::Identifier(name) => {
                return Err(ConversionError::InvalidToken(name.clone()));
            }
            Token::GroupOpen | Token::GroupClose => {
                return Err(ConversionError::UnsupportedOperator(token.to_string()));
            }
        }
    }

    match operands.as_slice() {
        [value] => Ok(Evaluation::Numeric(*value)),
        remaining => {
            warn!(
                "'{}' left {} values on the operand stack",
                postfix,
                remaining.len()
            );
            Ok(Evaluation::Undefined)
        }
    }
}

fn missing_operand(token: &Token) -> ConversionError {
    ConversionError::StackUnderflow(format!("'{}' is missing an operand", token))
}
