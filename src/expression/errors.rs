use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Trace is empty")]
    EmptyTrace,
    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(char),
    #[error("Trace leaves {0} operands unreduced")]
    UnreducedOperands(usize),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division {dividend} / {divisor} leaves a remainder")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("Intermediate result is not a positive integer")]
    NonPositiveResult,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: char, position: usize },
    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,
}
