use crate::interpreter::error::{ConversionError, Result};
use crate::interpreter::operator::BinaryOperator;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::fmt::Formatter;
use std::str;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+(\.?[0-9]+)?$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z]+[0-9a-zA-Z_]*$").unwrap();
}

/// A discrete part of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(String),
    Identifier(String),
    Operator(BinaryOperator),
    GroupOpen,
    GroupClose,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) | Token::Identifier(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::GroupOpen => write!(f, "("),
            Token::GroupClose => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = ConversionError;

    fn from_str(input: &str) -> Result<Token> {
        match input {
            "(" => Ok(Token::GroupOpen),
            ")" => Ok(Token::GroupClose),
            "+" | "-" | "*" | "/" => Ok(Token::Operator(input.parse()?)),
            text if IDENTIFIER.is_match(text) => Ok(Token::Identifier(text.to_string())),
            text if NUMBER.is_match(text) => Ok(Token::Number(text.to_string())),
            text => Err(ConversionError::InvalidToken(text.to_string())),
        }
    }
}
