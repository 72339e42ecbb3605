//! Expression tokens, postfix trace formatting and evaluation

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{LEAF_PRECEDENCE, Operator, Token};
pub use display::format_trace;
pub use errors::ExpressionError;
pub use eval::{apply, evaluate_trace};
pub use parse::evaluate_infix;

#[cfg(test)]
mod tests;
