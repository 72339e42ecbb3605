use std::collections::HashSet;
use std::fmt;

use log::trace;

/// An exact match found by the search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    /// The target the expression reaches; the adjusted target for fallback passes
    pub target: u64,
    pub expression: String,
}

impl Solution {
    pub fn new(target: u64, expression: String) -> Self {
        Self { target, expression }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.target, self.expression)
    }
}

/// Receives each solution as soon as the search finds it
pub trait SolutionSink {
    fn accept(&mut self, solution: Solution);
}

impl SolutionSink for Vec<Solution> {
    fn accept(&mut self, solution: Solution) {
        self.push(solution);
    }
}

impl<S: SolutionSink + ?Sized> SolutionSink for &mut S {
    fn accept(&mut self, solution: Solution) {
        (**self).accept(solution);
    }
}

/// Prints every solution on its own line
#[derive(Debug, Default)]
pub struct PrintSink;

impl SolutionSink for PrintSink {
    fn accept(&mut self, solution: Solution) {
        println!("{}", solution);
    }
}

/// Forwards each distinct solution once
#[derive(Debug)]
pub struct UniqueSink<S> {
    inner: S,
    seen: HashSet<Solution>,
}

impl<S: SolutionSink> UniqueSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SolutionSink> SolutionSink for UniqueSink<S> {
    fn accept(&mut self, solution: Solution) {
        if self.seen.insert(solution.clone()) {
            self.inner.accept(solution);
        } else {
            trace!("Dropping repeated solution: {}", solution);
        }
    }
}
