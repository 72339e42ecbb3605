//! Countdown - A solver for the countdown numbers puzzle
//!
//! Given a multiset of positive integers and a target, this library finds the
//! arithmetic expressions over `+ - * /` that reach the target exactly, or the
//! nearest values above and below it when the target is out of reach.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{ExpressionError, Operator, Token, format_trace};
pub use solver::{
    ExpressionSolver, PrintSink, Solution, SolutionSink, SolveReport, SolverConfig, SolverError,
};
pub use utils::{Puzzle, UtilsError, validate_numbers};

/// Solve a puzzle with the default configuration and collect the solutions
///
/// This is a convenience function that creates a default solver and gathers
/// every emitted solution into a list, in the order they were found.
///
/// # Arguments
///
/// * `target` - The value to reach
/// * `numbers` - The numbers available, each usable as often as it appears
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * `numbers` contains a zero
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// let (solutions, report) = solve(6, &[3, 2]).unwrap();
/// assert!(report.is_exact());
/// assert_eq!(solutions[0].to_string(), "6 = 2 * 3");
/// ```
pub fn solve(target: u64, numbers: &[u64]) -> Result<(Vec<Solution>, SolveReport), SolverError> {
    let solver = ExpressionSolver::new();
    let mut solutions = Vec::new();
    let report = solver.solve(target, numbers, &mut solutions)?;
    Ok((solutions, report))
}
