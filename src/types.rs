//! Core types for the optimizer library.

use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    Minimize,
    /// Maximize the objective value.
    Maximize,
}

impl Direction {
    /// Returns the signed direction flag: `-1` to minimize, `+1` to maximize.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Minimize => -1,
            Direction::Maximize => 1,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Minimize => Direction::Maximize,
            Direction::Maximize => Direction::Minimize,
        }
    }

    /// Orders two objective values best-first.
    ///
    /// Returns `Ordering::Less` when `a` ranks ahead of `b`. This is a total
    /// order: NaN ranks behind every number in both directions.
    #[must_use]
    pub fn rank(self, a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                match self {
                    Direction::Minimize => ord,
                    Direction::Maximize => ord.reverse(),
                }
            }
        }
    }

    /// Returns `true` if `a` is strictly better than `b` in this direction.
    #[must_use]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.rank(a, b) == Ordering::Less
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Minimize => f.write_str("Minimize"),
            Direction::Maximize => f.write_str("Maximize"),
        }
    }
}
