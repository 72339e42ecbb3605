use std::fmt;

use log::trace;

use crate::expression::ast::{Operator, Token};
use crate::expression::errors::ExpressionError;

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

/// A reduced operand: its rendered text and the precedence of its outermost node
struct Operand {
    text: String,
    precedence: u8,
}

impl Operand {
    fn leaf(value: u64) -> Self {
        Self {
            text: value.to_string(),
            precedence: Token::Number(value).precedence(),
        }
    }

    fn wrapped_if(self, need_parens: bool) -> String {
        if need_parens {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

/// Render a postfix trace as an infix string with the fewest parentheses that
/// keep its evaluation order.
///
/// The left operand is parenthesized only when it binds more loosely than the
/// operator. The right operand is also parenthesized at equal precedence when
/// the operator is `-` or `/`.
///
/// # Errors
///
/// Returns an error if the trace does not describe exactly one expression tree.
pub fn format_trace(trace: &[Token]) -> Result<String, ExpressionError> {
    let mut operands: Vec<Operand> = Vec::with_capacity(trace.len());

    for token in trace {
        match *token {
            Token::Number(value) => operands.push(Operand::leaf(value)),
            Token::Op(op) => {
                let right = operands
                    .pop()
                    .ok_or(ExpressionError::MissingOperand(op.symbol()))?;
                let left = operands
                    .pop()
                    .ok_or(ExpressionError::MissingOperand(op.symbol()))?;

                let precedence = op.precedence();
                let need_left = precedence > left.precedence;
                let need_right = precedence > right.precedence
                    || (precedence == right.precedence && !op.is_associative());

                operands.push(Operand {
                    text: format!(
                        "{} {} {}",
                        left.wrapped_if(need_left),
                        op,
                        right.wrapped_if(need_right)
                    ),
                    precedence,
                });
            }
        }
    }

    match operands.len() {
        0 => Err(ExpressionError::EmptyTrace),
        1 => {
            let result = operands.pop().map(|o| o.text).unwrap_or_default();
            trace!("Formatted trace of {} tokens as '{}'", trace.len(), result);
            Ok(result)
        }
        n => Err(ExpressionError::UnreducedOperands(n)),
    }
}
