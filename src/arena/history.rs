//! Bounded turn history for time rewind.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::Pair;
use crate::fighters::CharacterSnapshot;

/// Both fighters' state as it was when a turn began.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub turn: u32,
    pub states: Pair<CharacterSnapshot>,
}

/// Fixed-capacity FIFO of snapshots, oldest first.
///
/// Pushing past capacity evicts the oldest entry; rewinding truncates
/// everything at or after the restored entry.
#[derive(Clone, Debug)]
pub struct HistoryRing<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryRing<T> {
    /// Create an empty ring. Capacity is at least 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest if full.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Keep only the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest() {
        let mut ring = HistoryRing::new(3);
        for turn in 1..=5 {
            ring.push(turn);
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_truncate() {
        let mut ring = HistoryRing::new(5);
        for turn in 1..=4 {
            ring.push(turn);
        }
        ring.truncate(1);
        assert_eq!(ring.get(0), Some(&1));
        assert_eq!(ring.get(1), None);
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut ring = HistoryRing::new(0);
        ring.push('a');
        ring.push('b');
        assert_eq!(ring.capacity(), 1);
        assert_eq!(ring.get(0), Some(&'b'));
    }
}
