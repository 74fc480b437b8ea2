//! Ordered trial history.
//!
//! [`TrialStore`] keeps every recorded [`Trial`] sorted best-first under the
//! direction it was last written with. The head is always the best trial, and
//! a prefix of the sequence is the "good" partition used by the TPE sampler.

use crate::error::{Error, Result};
use crate::trial::Trial;
use crate::types::Direction;

/// Trials sorted by value under the current optimization direction.
///
/// For any positions `i < j`, `trials[i]` ranks at least as well as
/// `trials[j]`. Trials are never removed or mutated.
///
/// # Examples
///
/// ```
/// use poe::{Direction, Params, Trial, TrialStore};
///
/// let mut store = TrialStore::new();
/// for value in [3.0, 1.0, 2.0] {
///     store.insert(Trial::new(Params::new(), value), Direction::Minimize);
/// }
///
/// assert_eq!(store.best().unwrap().value, 1.0);
/// let (good, bad) = store.bisect(0.34);
/// assert_eq!(good.len(), 1);
/// assert_eq!(bad.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrialStore {
    trials: Vec<Trial>,
    direction: Option<Direction>,
    next_id: u64,
}

impl TrialStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `trial` at its rank under `direction`.
    ///
    /// Among equal values the new trial goes after every existing one. If the
    /// store was last ordered under the opposite direction it is re-sorted
    /// first. Returns the insertion position (0 means new best).
    pub fn insert(&mut self, mut trial: Trial, direction: Direction) -> usize {
        self.resort(direction);

        trial.id = self.next_id;
        self.next_id += 1;

        let pos = self
            .trials
            .partition_point(|t| direction.rank(t.value, trial.value).is_le());
        self.trials.insert(pos, trial);
        pos
    }

    /// Re-sorts the whole store under `direction` if it is currently ordered
    /// the other way. Returns `true` if a sort happened.
    ///
    /// The sort is stable, so equal-valued trials keep their relative order.
    pub fn resort(&mut self, direction: Direction) -> bool {
        if self.direction == Some(direction) {
            return false;
        }
        let switched = self.direction.is_some() && !self.trials.is_empty();
        self.direction = Some(direction);
        if switched {
            self.trials.sort_by(|a, b| direction.rank(a.value, b.value));
            trace_debug!(n_trials = self.trials.len(), ?direction, "store re-sorted");
        }
        switched
    }

    /// Returns the best trial (the head of the sequence).
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStore` if no trial has been recorded.
    pub fn best(&self) -> Result<&Trial> {
        self.trials.first().ok_or(Error::EmptyStore)
    }

    /// Splits the history into a best-ranked prefix ("good") and the rest ("bad").
    ///
    /// The split index is `max(floor(len * quantile), 1)`, capped at `len`.
    /// With one trial or none, everything is "good".
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn bisect(&self, quantile: f64) -> (&[Trial], &[Trial]) {
        if self.trials.len() <= 1 {
            return (&self.trials, &[]);
        }
        let index = ((self.trials.len() as f64 * quantile).floor() as usize)
            .max(1)
            .min(self.trials.len());
        self.trials.split_at(index)
    }

    /// The direction the store is currently ordered by, if any trial has been
    /// inserted.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The best `n` trials, best first.
    #[must_use]
    pub fn top(&self, n: usize) -> &[Trial] {
        &self.trials[..n.min(self.trials.len())]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Trial] {
        &self.trials
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Trial> {
        self.trials.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

impl<'a> IntoIterator for &'a TrialStore {
    type Item = &'a Trial;
    type IntoIter = core::slice::Iter<'a, Trial>;

    fn into_iter(self) -> Self::IntoIter {
        self.trials.iter()
    }
}
