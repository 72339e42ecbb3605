//! Backtracking search for countdown expressions and the nearest-value driver

mod core;
mod errors;
mod pool;
mod search;
mod sink;

pub use self::core::{ExpressionSolver, SolveReport, SolverConfig};
pub use errors::SolverError;
pub use pool::NumberPool;
pub use search::{Operand, PassOutcome, SearchEngine, SearchStats, allowed_result, search};
pub use sink::{PrintSink, Solution, SolutionSink, UniqueSink};
