pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::Evaluation;
use crate::interpreter::parser::Postfix;
use log::debug;

pub use crate::interpreter::operator::BinaryOperator;

/// Converts the given infix expression into postfix order.
///
/// # Arguments
///
/// * `expression`: Space-delimited infix text, e.g. `( 3 + 4 ) * 2`.
///
/// returns: The postfix form of the expression.
///
/// # Examples
///
/// ```
/// use in2post::interpreter::convert;
/// # use in2post::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let postfix = convert("( 3 + 4 ) * 2")?;
/// assert_eq!(postfix.to_string(), "3 4 + 2 *");
/// # Ok(()) }
/// ```
pub fn convert(expression: &str) -> Result<Postfix> {
    let tokens = lexer::tokenize(expression)?;
    parser::parse(tokens)
}

/// Converts the given infix expression and evaluates the result in one go.
///
/// # Examples
///
/// ```
/// use in2post::interpreter::convert_and_evaluate;
/// # use in2post::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let (postfix, evaluation) = convert_and_evaluate("3 + 4 * 2")?;
/// assert_eq!(postfix.to_string(), "3 4 2 * +");
/// assert_eq!(evaluation.to_string(), "11");
/// # Ok(()) }
/// ```
pub fn convert_and_evaluate(expression: &str) -> Result<(Postfix, Evaluation)> {
    let postfix = convert(expression)?;
    let evaluation = evaluator::evaluate(&postfix)?;
    Ok((postfix, evaluation))
}

/// Holds the most recent conversion so it can be evaluated any number of times.
///
/// Every call to [`Converter::convert`] starts from a clean state, so one instance
/// can be reused for a whole stream of unrelated expressions.
///
/// # Examples
///
/// ```
/// use in2post::interpreter::Converter;
/// # use in2post::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let mut converter = Converter::new();
/// converter.convert("6 / 2")?;
/// assert_eq!(converter.evaluate()?.to_string(), "3");
/// # Ok(()) }
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    postfix: Postfix,
}

impl Converter {
    pub fn new() -> Converter {
        Converter::default()
    }

    pub fn convert(&mut self, expression: &str) -> Result<&Postfix> {
        self.reset();
        debug!("converting '{}'", expression);
        self.postfix = convert(expression)?;
        Ok(&self.postfix)
    }

    pub fn evaluate(&self) -> Result<Evaluation> {
        evaluator::evaluate(&self.postfix)
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn reset(&mut self) {
        self.postfix = Postfix::default();
    }
}
