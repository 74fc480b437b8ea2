//! A single evaluated observation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::space::Params;

/// One evaluation of the objective: the input parameters and the value
/// they produced.
///
/// Trials are immutable once recorded. The `id` reflects insertion order
/// within the owning [`TrialStore`](crate::TrialStore), not rank.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trial {
    /// Sequential identifier assigned by the store.
    pub id: u64,
    /// The evaluated parameter vector.
    pub params: Params,
    /// The objective value.
    pub value: f64,
}

impl Trial {
    /// Creates a trial. The id is overwritten when the trial is inserted
    /// into a store.
    #[must_use]
    pub fn new(params: Params, value: f64) -> Self {
        Self {
            id: 0,
            params,
            value,
        }
    }

    /// Returns the value of dimension `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.params.get(name).copied()
    }
}
