use log::{info, warn};

use crate::solver::errors::SolverError;
use crate::solver::pool::NumberPool;
use crate::solver::search::{PassOutcome, search};
use crate::solver::sink::{SolutionSink, UniqueSink};
use crate::utils::{UtilsError, validate_numbers};

/// Configuration for the solve driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Search for the nearest reachable values when the target itself is out of reach
    pub nearest_fallback: bool,
    /// Emit each distinct solution only once
    pub unique: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            nearest_fallback: true,
            unique: false,
        }
    }
}

/// Summary of one solve: the exact pass and any fallback passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub target: u64,
    /// Distance between the target and the closest reachable value
    pub deviation: u64,
    /// Passes in the order they ran; the first is always the exact pass
    pub passes: Vec<PassOutcome>,
}

impl SolveReport {
    pub fn is_exact(&self) -> bool {
        self.deviation == 0
    }

    /// Solutions emitted across all passes
    pub fn solutions(&self) -> u64 {
        self.passes.iter().map(|p| p.stats.solutions).sum()
    }

    pub fn nodes(&self) -> u64 {
        self.passes.iter().map(|p| p.stats.nodes).sum()
    }
}

/// Main solver for the countdown numbers puzzle
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// Create a solver with the default configuration
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every expression over `numbers` that reaches `target`, emitting
    /// each one to `sink` as it is found.
    ///
    /// When the target cannot be reached exactly and the fallback is enabled,
    /// the search is repeated for `target - d` (if still positive) and then
    /// `target + d`, where `d` is the smallest deviation found. Solutions from
    /// those passes carry the adjusted target.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or contains a zero.
    pub fn solve<S: SolutionSink + ?Sized>(
        &self,
        target: u64,
        numbers: &[u64],
        sink: &mut S,
    ) -> Result<SolveReport, SolverError> {
        validate_numbers(numbers)?;
        let mut pool = NumberPool::new(numbers);

        if self.config.unique {
            let mut unique = UniqueSink::new(sink);
            self.run_passes(target, &mut pool, &mut unique)
        } else {
            self.run_passes(target, &mut pool, sink)
        }
    }

    fn run_passes<S: SolutionSink + ?Sized>(
        &self,
        target: u64,
        pool: &mut NumberPool,
        sink: &mut S,
    ) -> Result<SolveReport, SolverError> {
        let exact = search(target, pool, sink)?;
        let deviation = exact.deviation.ok_or(UtilsError::EmptyNumbers)?;
        let mut passes = vec![exact];

        if deviation != 0 && self.config.nearest_fallback {
            warn!(
                "Target {} is out of reach, searching values {} away",
                target, deviation
            );
            if target > deviation {
                passes.push(search(target - deviation, pool, sink)?);
            }
            match target.checked_add(deviation) {
                Some(above) => passes.push(search(above, pool, sink)?),
                None => warn!("Skipping fallback above {}: value overflows", target),
            }
        }

        let report = SolveReport {
            target,
            deviation,
            passes,
        };
        info!(
            "Solved {} with deviation {}: {} solutions over {} passes, {} nodes",
            target,
            deviation,
            report.solutions(),
            report.passes.len(),
            report.nodes()
        );
        Ok(report)
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
