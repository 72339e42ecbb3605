/// The multiset of numbers still available to a search.
///
/// Distinct values keep the order in which they first appeared in the input,
/// which fixes the order the search introduces them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPool {
    entries: Vec<(u64, usize)>,
}

impl NumberPool {
    pub fn new(numbers: &[u64]) -> Self {
        let mut entries: Vec<(u64, usize)> = Vec::new();
        for &number in numbers {
            match entries.iter_mut().find(|(value, _)| *value == number) {
                Some((_, count)) => *count += 1,
                None => entries.push((number, 1)),
            }
        }
        Self { entries }
    }

    /// Number of distinct values, used or not
    pub fn slots(&self) -> usize {
        self.entries.len()
    }

    pub fn value(&self, slot: usize) -> Option<u64> {
        self.entries.get(slot).map(|(value, _)| *value)
    }

    /// Copies left of the value in `slot`; zero for an unknown slot
    pub fn count(&self, slot: usize) -> usize {
        self.entries.get(slot).map_or(0, |(_, count)| *count)
    }

    /// Total numbers still available
    pub fn remaining(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Slots whose value can still be introduced
    pub fn available(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(slot, _)| slot)
    }

    /// Take one copy of the value in `slot`; `None` when none is left
    pub fn take(&mut self, slot: usize) -> Option<u64> {
        let (value, count) = self.entries.get_mut(slot)?;
        if *count == 0 {
            return None;
        }
        *count -= 1;
        Some(*value)
    }

    /// Return one copy of the value in `slot`
    pub fn restore(&mut self, slot: usize) {
        if let Some((_, count)) = self.entries.get_mut(slot) {
            *count += 1;
        }
    }
}
