use crate::interpreter::error::{ConversionError, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator with IEEE semantics, so dividing by zero gives an infinity or NaN.
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Subtract => lhs - rhs,
            BinaryOperator::Multiply => lhs * rhs,
            BinaryOperator::Divide => lhs / rhs,
        }
    }
}

impl str::FromStr for BinaryOperator {
    type Err = ConversionError;

    fn from_str(input: &str) -> Result<BinaryOperator> {
        match input {
            "+" => Ok(BinaryOperator::Add),
            "-" => Ok(BinaryOperator::Subtract),
            "*" => Ok(BinaryOperator::Multiply),
            "/" => Ok(BinaryOperator::Divide),
            other => Err(ConversionError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_ge(&equal2) && equal2.precedence_ge(&equal1))
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        assert!(BinaryOperator::Subtract.precedence_ge(&BinaryOperator::Add));
        assert!(BinaryOperator::Divide.precedence_ge(&BinaryOperator::Add));
        assert!(!BinaryOperator::Add.precedence_ge(&BinaryOperator::Multiply));
    }

    #[parameterized(
    symbol = { "+", "-", "*", "/" },
    expected = { 8.0, 4.0, 12.0, 3.0 }
    )]
    fn evaluate_applies_operator_to_operands(symbol: &str, expected: f64) {
        let operator: BinaryOperator = symbol.parse().unwrap();
        assert_eq!(operator.evaluate(6.0, 2.0), expected);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert!(BinaryOperator::Divide.evaluate(1.0, 0.0).is_infinite());
        assert!(BinaryOperator::Divide.evaluate(0.0, 0.0).is_nan());
    }

    #[test]
    fn unknown_symbol_is_unsupported() {
        let error = "^".parse::<BinaryOperator>().unwrap_err();
        assert_eq!(error, ConversionError::UnsupportedOperator("^".to_string()));
    }
}
