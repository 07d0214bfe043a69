use crate::interpreter::error::{ConversionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::Postfix;
use crate::interpreter::token::Token;
use log::{debug, trace};
use std::collections::VecDeque;

pub(super) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Postfix> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: Vec<Token> = vec![];
    let mut postfix = Postfix::default();
    while let Some(token) = tokens.pop_front() {
        trace!("token {}, operator stack {:?}", token, operators);
        match token {
            Token::Identifier(_) => {
                postfix.has_variables = true;
                postfix.tokens.push(token)
            }
            Token::Number(_) => postfix.tokens.push(token),
            Token::GroupOpen => operators.push(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut postfix.tokens, operator)
            }
            Token::GroupClose => parse_group_close_token(&mut operators, &mut postfix.tokens)?,
        };
    }

    transfer_leftover_operators(&mut operators, &mut postfix.tokens)?;

    debug!("converted to postfix: {}", postfix);
    Ok(postfix)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::GroupOpen => return Err(ConversionError::UnclosedGroup),
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_group_close_token(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                return Err(ConversionError::StackUnderflow(
                    "')' has no matching '('".to_string(),
                ))
            }
            // Discard the open group.
            Some(Token::GroupOpen) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    // Every operator is left associative, so equal precedence pops too.
    while let Some(Token::Operator(top_of_operator_stack)) = operators.last() {
        if !top_of_operator_stack.precedence_ge(&operator) {
            break;
        }
        if let Some(popped) = operators.pop() {
            output.push(popped);
        }
    }

    operators.push(Token::Operator(operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    fn convert_to_string(expression: &str) -> String {
        let infix = tokenize(expression).unwrap();
        infix_to_postfix(infix).unwrap().to_string()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // x + y
        let infix = vec![
            Token::Identifier("x".to_string()),
            "+".parse().unwrap(),
            Token::Identifier("y".to_string()),
        ];
        let postfix = vec![
            Token::Identifier("x".to_string()),
            Token::Identifier("y".to_string()),
            "+".parse().unwrap(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual.tokens, postfix);
        assert!(actual.has_variables);
    }

    #[test]
    fn infix_to_postfix_numeric_expression_has_no_variables() {
        let infix = tokenize("3 + 4 * 2").unwrap();
        let postfix = vec![
            Token::Number("3".to_string()),
            Token::Number("4".to_string()),
            Token::Number("2".to_string()),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual.tokens, postfix);
        assert!(!actual.has_variables);
    }

    #[parameterized(
    expression = {
    "3 + 4 * 2",
    "( 3 + 4 ) * 2",
    "8 - 3 - 2",
    "8 / 4 / 2",
    "x - ( y + z )",
    "A + B * C - D",
    "a + ( ( b + c ) * d )",
    "a * b + c / d",
    "( ( 1 ) )",
    "",
    },
    expected_postfix = {
    "3 4 2 * +",
    "3 4 + 2 *",
    "8 3 - 2 -",
    "8 4 / 2 /",
    "x y z + -",
    "A B C * + D -",
    "a b c + d * +",
    "a b * c d / +",
    "1",
    "",
    }
    )]
    fn infix_to_postfix_returns_correct_order(expression: &str, expected_postfix: &str) {
        assert_eq!(convert_to_string(expression), expected_postfix);
    }

    #[test]
    fn infix_to_postfix_lone_group_close_should_underflow() {
        let infix = vec![Token::GroupClose];

        let error = infix_to_postfix(infix).unwrap_err();

        assert!(matches!(error, ConversionError::StackUnderflow(_)));
    }

    #[test]
    fn infix_to_postfix_mismatched_group_close_should_underflow() {
        // ( x + y ) )
        let infix = tokenize("( x + y ) )").unwrap();

        let error = infix_to_postfix(infix).unwrap_err();

        assert!(matches!(error, ConversionError::StackUnderflow(_)));
    }

    #[test]
    fn infix_to_postfix_unclosed_group_should_return_err() {
        let infix = tokenize("( 1 + 2").unwrap();

        let error = infix_to_postfix(infix).unwrap_err();

        assert_eq!(error, ConversionError::UnclosedGroup);
    }
}
