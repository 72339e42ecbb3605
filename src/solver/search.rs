use std::ops::{Deref, DerefMut};

use log::debug;

use crate::expression::{Operator, Token, apply, format_trace};
use crate::solver::errors::SolverError;
use crate::solver::pool::NumberPool;
use crate::solver::sink::{Solution, SolutionSink};

/// Counters gathered over one search pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub solutions: u64,
}

/// Result of one full search against one effective target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    pub target: u64,
    /// Distance from the target to the closest reachable value; `None` only
    /// when the pool is empty
    pub deviation: Option<u64>,
    pub stats: SearchStats,
}

/// A value on the search stack together with the operator that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub value: u64,
    /// `None` for a number taken straight from the pool
    pub producer: Option<Operator>,
}

impl Operand {
    pub fn leaf(value: u64) -> Self {
        Self {
            value,
            producer: None,
        }
    }

    pub fn derived(value: u64, producer: Operator) -> Self {
        Self {
            value,
            producer: Some(producer),
        }
    }

    fn produced_by(&self, class: fn(Operator) -> bool) -> bool {
        self.producer.is_some_and(class)
    }
}

/// Value of `left op right` when the search may take that step, `None` when
/// the step is pruned.
///
/// Addition and multiplication never take a right operand produced by the
/// same operator class, so `(a + b) + c` is tried but `a + (b + c)` and
/// `a + (b - c)` are not. Their operands are taken smaller first unless the
/// left operand is itself a chain of that class. Multiplying or dividing by
/// one is skipped, and every result stays a positive integer.
pub fn allowed_result(op: Operator, left: Operand, right: Operand) -> Option<u64> {
    let (a, b) = (left.value, right.value);
    let allowed = match op {
        Operator::Add => {
            (a <= b || left.produced_by(Operator::is_additive))
                && !right.produced_by(Operator::is_additive)
        }
        Operator::Mul => {
            (a <= b || left.produced_by(Operator::is_multiplicative))
                && a != 1
                && b != 1
                && !right.produced_by(Operator::is_multiplicative)
        }
        Operator::Sub => a > b,
        Operator::Div => b > 1 && a % b == 0,
    };

    if allowed { apply(op, a, b).ok() } else { None }
}

/// Mutable state threaded through the recursion
struct SearchState<'p> {
    pool: &'p mut NumberPool,
    operands: Vec<Operand>,
    trace: Vec<Token>,
}

enum Undo {
    Combine { left: Operand, right: Operand },
    Introduce { slot: usize },
}

/// A move applied to the search state, reverted when dropped
struct Applied<'a, 'p> {
    state: &'a mut SearchState<'p>,
    undo: Undo,
}

impl<'p> Deref for Applied<'_, 'p> {
    type Target = SearchState<'p>;

    fn deref(&self) -> &Self::Target {
        &*self.state
    }
}

impl DerefMut for Applied<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.state
    }
}

impl Drop for Applied<'_, '_> {
    fn drop(&mut self) {
        self.state.operands.pop();
        self.state.trace.pop();
        match self.undo {
            Undo::Combine { left, right } => {
                self.state.operands.push(left);
                self.state.operands.push(right);
            }
            Undo::Introduce { slot } => self.state.pool.restore(slot),
        }
    }
}

impl<'p> SearchState<'p> {
    fn new(pool: &'p mut NumberPool) -> Self {
        let capacity = pool.remaining() * 2;
        Self {
            pool,
            operands: Vec::with_capacity(capacity),
            trace: Vec::with_capacity(capacity),
        }
    }

    /// Replace the top two values with `result`, recording `op` in the trace
    fn combine(&mut self, op: Operator, result: u64) -> Option<Applied<'_, 'p>> {
        let right = self.operands.pop()?;
        let Some(left) = self.operands.pop() else {
            self.operands.push(right);
            return None;
        };
        self.operands.push(Operand::derived(result, op));
        self.trace.push(Token::Op(op));
        Some(Applied {
            state: self,
            undo: Undo::Combine { left, right },
        })
    }

    /// Move one copy of the value in `slot` from the pool onto both stacks
    fn introduce(&mut self, slot: usize) -> Option<Applied<'_, 'p>> {
        let value = self.pool.take(slot)?;
        self.operands.push(Operand::leaf(value));
        self.trace.push(Token::Number(value));
        Some(Applied {
            state: self,
            undo: Undo::Introduce { slot },
        })
    }
}

fn closest(best: Option<u64>, candidate: Option<u64>) -> Option<u64> {
    match (best, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Depth-first search for expressions reaching one target
pub struct SearchEngine<'s, S: SolutionSink + ?Sized> {
    target: u64,
    sink: &'s mut S,
    stats: SearchStats,
}

impl<'s, S: SolutionSink + ?Sized> SearchEngine<'s, S> {
    pub fn new(target: u64, sink: &'s mut S) -> Self {
        Self {
            target,
            sink,
            stats: SearchStats::default(),
        }
    }

    /// Explore every expression buildable from `pool`, emitting each exact
    /// match to the sink as it is found.
    ///
    /// The pool is back in its original state when this returns.
    ///
    /// # Errors
    ///
    /// Returns an error only if a found trace cannot be formatted.
    pub fn run(mut self, pool: &mut NumberPool) -> Result<PassOutcome, SolverError> {
        debug!(
            "Starting search pass for {} with {} numbers",
            self.target,
            pool.remaining()
        );

        let mut state = SearchState::new(pool);
        let deviation = self.explore(&mut state)?;

        debug!(
            "Search pass for {} finished: deviation {:?}, {} nodes, {} solutions",
            self.target, deviation, self.stats.nodes, self.stats.solutions
        );

        Ok(PassOutcome {
            target: self.target,
            deviation,
            stats: self.stats,
        })
    }

    fn explore(&mut self, state: &mut SearchState<'_>) -> Result<Option<u64>, SolverError> {
        self.stats.nodes += 1;
        let mut best = None;

        if let &[Operand { value, .. }] = state.operands.as_slice() {
            if value == self.target {
                let expression = format_trace(&state.trace)?;
                self.stats.solutions += 1;
                self.sink.accept(Solution::new(self.target, expression));
            }
            best = Some(self.target.abs_diff(value));
        }

        if let &[.., left, right] = state.operands.as_slice() {
            for op in Operator::ALL {
                if let Some(result) = allowed_result(op, left, right)
                    && let Some(mut next) = state.combine(op, result)
                {
                    best = closest(best, self.explore(&mut *next)?);
                }
            }
        }

        for slot in 0..state.pool.slots() {
            if let Some(mut next) = state.introduce(slot) {
                best = closest(best, self.explore(&mut *next)?);
            }
        }

        Ok(best)
    }
}

/// Run one search pass against `target`
///
/// # Errors
///
/// See [`SearchEngine::run`].
pub fn search<S: SolutionSink + ?Sized>(
    target: u64,
    pool: &mut NumberPool,
    sink: &mut S,
) -> Result<PassOutcome, SolverError> {
    SearchEngine::new(target, sink).run(pool)
}
