use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

/// Everything that can go wrong while converting or evaluating a single expression.
///
/// All variants are scoped to the expression that produced them; a caller can report
/// the error and move on to the next expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Expression contains invalid token: '{0}'")]
    InvalidToken(String),

    #[error("Stack underflow: {0}")]
    StackUnderflow(String),

    #[error("Expression contains an unclosed group")]
    UnclosedGroup,

    #[error("Supplied operation is not supported: '{0}'")]
    UnsupportedOperator(String),
}
