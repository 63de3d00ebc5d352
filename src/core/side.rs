//! Battle sides and per-side storage.
//!
//! ## Side
//!
//! A battle always has exactly two participants: [`Side::One`] acts first.
//!
//! ## Pair
//!
//! Fixed two-slot storage indexed by `Side`, with a split borrow so the
//! active fighter and its opponent can be mutated together.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two battle participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides in turn order.
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Slot index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "Player 1"),
            Side::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-side storage with O(1) access.
///
/// ```
/// use card_mayhem::core::{Pair, Side};
///
/// let mut health = Pair::new(150, 80);
/// health[Side::Two] -= 18;
/// assert_eq!(health[Side::Two], 62);
///
/// let (active, other) = health.split_mut(Side::One);
/// *active += *other;
/// assert_eq!(health[Side::One], 212);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<T> {
    data: [T; 2],
}

impl<T> Pair<T> {
    /// Create a pair from the two sides' values.
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Get a reference to a side's value.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow `side` and its opponent mutably at the same time.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        match side {
            Side::One => (one, two),
            Side::Two => (two, one),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Map both values.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Pair<U> {
        Pair::new(f(&self.data[0]), f(&self.data[1]))
    }

    /// Unwrap into `(one, two)`.
    pub fn into_inner(self) -> (T, T) {
        let [one, two] = self.data;
        (one, two)
    }
}

impl<T> Index<Side> for Pair<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Pair<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
