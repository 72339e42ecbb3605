use std::fmt;

use log::debug;
use rand::Rng;

/// Smallest target a practice puzzle may ask for
pub const MIN_TARGET: u64 = 101;
/// Largest target a practice puzzle may ask for
pub const MAX_TARGET: u64 = 1000;
/// How many numbers a practice puzzle deals
pub const NUMBER_COUNT: usize = 6;

pub const SMALL_NUMBERS: std::ops::RangeInclusive<u64> = 1..=10;
pub const LARGE_NUMBERS: [u64; 4] = [25, 50, 75, 100];
/// Each small number is twice as likely to be dealt as each large one
pub const SMALL_WEIGHT: usize = 2;
pub const LARGE_WEIGHT: usize = 1;

/// A target together with the numbers available to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub target: u64,
    pub numbers: Vec<u64>,
}

impl Puzzle {
    pub fn new(target: u64, numbers: Vec<u64>) -> Self {
        Self { target, numbers }
    }

    /// Deal a practice puzzle: a uniform target in `MIN_TARGET..=MAX_TARGET` and
    /// `NUMBER_COUNT` numbers drawn with replacement from the weighted deck.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let deck = weighted_deck();
        let target = rng.random_range(MIN_TARGET..=MAX_TARGET);
        let numbers = (0..NUMBER_COUNT)
            .map(|_| deck[rng.random_range(0..deck.len())])
            .collect();

        let puzzle = Self { target, numbers };
        debug!("Dealt practice puzzle: {:?}", puzzle);
        puzzle
    }

    /// The `Values: ...` line shown before solving a dealt puzzle
    pub fn values_line(&self) -> String {
        let values: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        format!("Values: {}", values.join(", "))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.values_line())?;
        write!(f, "Total: {}", self.target)
    }
}

/// Every value repeated as many times as its weight, so a uniform draw from
/// the deck is a weighted draw from the values
fn weighted_deck() -> Vec<u64> {
    let small = SMALL_NUMBERS.flat_map(|n| std::iter::repeat_n(n, SMALL_WEIGHT));
    let large = LARGE_NUMBERS
        .iter()
        .flat_map(|&n| std::iter::repeat_n(n, LARGE_WEIGHT));
    small.chain(large).collect()
}
