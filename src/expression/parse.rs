use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::expression::ast::Operator;
use crate::expression::errors::ExpressionError;

/// Evaluate an infix integer expression with `+ - * /` and parentheses under
/// standard precedence and left associativity. Division must be exact.
///
/// # Errors
///
/// Returns an error on malformed input, division by zero, inexact division or
/// overflow.
pub fn evaluate_infix(input: &str) -> Result<i64, ExpressionError> {
    let mut parser = InfixParser {
        chars: input.char_indices().peekable(),
    };
    let value = parser.expression()?;
    match parser.next_significant() {
        None => Ok(value),
        Some((position, found)) => {
            debug!("Trailing input in '{}' at {}", input, position);
            Err(ExpressionError::UnexpectedToken { found, position })
        }
    }
}

struct InfixParser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl InfixParser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek_significant(&mut self) -> Option<(usize, char)> {
        self.skip_whitespace();
        self.chars.peek().copied()
    }

    fn next_significant(&mut self) -> Option<(usize, char)> {
        self.skip_whitespace();
        self.chars.next()
    }

    fn peek_operator(&mut self) -> Option<Operator> {
        self.peek_significant()
            .and_then(|(_, c)| Operator::from_symbol(c))
    }

    fn expression(&mut self) -> Result<i64, ExpressionError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek_operator().filter(|op| op.is_additive()) {
            self.chars.next();
            let right = self.term()?;
            value = combine(op, value, right)?;
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<i64, ExpressionError> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek_operator().filter(|op| op.is_multiplicative()) {
            self.chars.next();
            let right = self.factor()?;
            value = combine(op, value, right)?;
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<i64, ExpressionError> {
        match self.next_significant() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some((_, '(')) => {
                let value = self.expression()?;
                match self.next_significant() {
                    Some((_, ')')) => Ok(value),
                    Some((position, found)) => {
                        Err(ExpressionError::UnexpectedToken { found, position })
                    }
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some((_, digit)) if digit.is_ascii_digit() => {
                let mut value = i64::from(digit as u8 - b'0');
                while let Some((_, next)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(next as u8 - b'0')))
                        .ok_or(ExpressionError::Overflow)?;
                }
                Ok(value)
            }
            Some((position, found)) => Err(ExpressionError::UnexpectedToken { found, position }),
        }
    }
}

fn combine(op: Operator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    match op {
        Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
        Operator::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow),
        Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
        Operator::Div => {
            if right == 0 {
                Err(ExpressionError::DivisionByZero)
            } else if left % right != 0 {
                Err(ExpressionError::InexactDivision {
                    dividend: left,
                    divisor: right,
                })
            } else {
                Ok(left / right)
            }
        }
    }
}
