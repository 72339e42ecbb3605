use log::debug;

use crate::expression::ast::{Operator, Token};
use crate::expression::errors::ExpressionError;

/// Apply `op` under the countdown rules: every result must be a positive integer.
///
/// # Errors
///
/// Returns an error for division by zero, a division that leaves a remainder,
/// a non-positive result or a result that does not fit in `u64`.
pub fn apply(op: Operator, left: u64, right: u64) -> Result<u64, ExpressionError> {
    let result = match op {
        Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow)?,
        Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow)?,
        Operator::Sub => {
            if left <= right {
                return Err(ExpressionError::NonPositiveResult);
            }
            left - right
        }
        Operator::Div => {
            if right == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            if left % right != 0 {
                return Err(ExpressionError::InexactDivision {
                    dividend: i64::try_from(left).map_err(|_| ExpressionError::Overflow)?,
                    divisor: i64::try_from(right).map_err(|_| ExpressionError::Overflow)?,
                });
            }
            left / right
        }
    };

    if result == 0 {
        Err(ExpressionError::NonPositiveResult)
    } else {
        Ok(result)
    }
}

/// Evaluate a postfix trace, checking every intermediate value.
///
/// # Errors
///
/// Returns an error if the trace is malformed or any step breaks the
/// positive-integer rules of [`apply`].
pub fn evaluate_trace(trace: &[Token]) -> Result<u64, ExpressionError> {
    let mut values: Vec<u64> = Vec::with_capacity(trace.len());

    for token in trace {
        match *token {
            Token::Number(value) => values.push(value),
            Token::Op(op) => {
                let right = values
                    .pop()
                    .ok_or(ExpressionError::MissingOperand(op.symbol()))?;
                let left = values
                    .pop()
                    .ok_or(ExpressionError::MissingOperand(op.symbol()))?;
                values.push(apply(op, left, right)?);
            }
        }
    }

    let result = match values.as_slice() {
        [] => Err(ExpressionError::EmptyTrace),
        [value] => Ok(*value),
        rest => Err(ExpressionError::UnreducedOperands(rest.len())),
    };

    if let Err(e) = &result {
        debug!("Trace evaluation failed: {}", e);
    }

    result
}
