//! Study implementation: the optimization loop around a trial history.

use std::collections::VecDeque;

use crate::objective::Objective;
use crate::sampler::Sampler;
use crate::space::Params;
use crate::store::TrialStore;
use crate::trial::Trial;
use crate::types::Direction;

mod analysis;
mod export;
mod optimize;

/// A study owns an objective and the history of its evaluations.
///
/// Each optimization step asks a [`Sampler`] for a candidate given the
/// current history, evaluates the objective there, and inserts the result
/// into the [`TrialStore`] under the requested direction. The best point is
/// always the head of the store.
///
/// The direction is chosen per call, so a study can be minimized and then
/// maximized; switching re-sorts the history once.
///
/// # Examples
///
/// ```
/// use poe::prelude::*;
///
/// let space = SearchSpace::new().with("x", 0.0, 10.0);
/// let sampler = TpeSampler::builder(space).seed(42).build().unwrap();
///
/// let mut study = Study::new(|p: &Params| Ok::<_, Error>((p["x"] - 3.0).powi(2)));
/// study.minimize(&sampler, 60).unwrap();
///
/// let best = study.best_trial().unwrap();
/// assert!(best.value < 1.0);
/// ```
pub struct Study<O> {
    objective: O,
    trials: TrialStore,
    /// Points to evaluate before consulting the sampler.
    enqueued: VecDeque<Params>,
}

impl<O: Objective> Study<O> {
    /// Create a study around `objective` with an empty history.
    #[must_use]
    pub fn new(objective: O) -> Self {
        Self::with_trials(objective, TrialStore::new())
    }

    /// Create a study that continues from an existing history.
    #[must_use]
    pub fn with_trials(objective: O, trials: TrialStore) -> Self {
        Self {
            objective,
            trials,
            enqueued: VecDeque::new(),
        }
    }

    /// The objective being optimized.
    #[must_use]
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Enqueue a parameter vector to be evaluated before the sampler is
    /// consulted.
    ///
    /// Enqueued points are consumed first-in first-out by
    /// [`optimize`](Self::optimize) and [`ask`](Self::ask), exactly as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe::prelude::*;
    ///
    /// let space = SearchSpace::new().with("x", -10.0, 10.0);
    /// let mut study = Study::new(|p: &Params| Ok::<_, Error>(p["x"].powi(2)));
    ///
    /// let start: Params = [("x".to_string(), 0.0)].into_iter().collect();
    /// study.enqueue(start);
    /// study.minimize(&RandomSampler::new(space), 5).unwrap();
    ///
    /// assert_eq!(study.best_value().unwrap(), 0.0);
    /// ```
    pub fn enqueue(&mut self, params: Params) {
        self.enqueued.push_back(params);
    }

    /// Number of enqueued points not yet evaluated.
    #[must_use]
    pub fn n_enqueued(&self) -> usize {
        self.enqueued.len()
    }

    /// Propose the next point to evaluate without evaluating it.
    ///
    /// Returns the oldest enqueued point if any, otherwise a sample drawn
    /// from the current history. Pair with [`tell`](Self::tell) when the
    /// objective is evaluated outside the study.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe::prelude::*;
    ///
    /// let space = SearchSpace::new().with("x", 0.0, 10.0);
    /// let sampler = RandomSampler::with_seed(space, 3);
    /// let mut study = Study::new(|p: &Params| Ok::<_, Error>(p["x"]));
    ///
    /// for _ in 0..10 {
    ///     let params = study.ask(&sampler);
    ///     let value = params["x"] * 2.0; // evaluated elsewhere
    ///     study.tell(params, value, Direction::Maximize);
    /// }
    /// assert_eq!(study.n_trials(), 10);
    /// ```
    pub fn ask<S: Sampler + ?Sized>(&mut self, sampler: &S) -> Params {
        self.enqueued
            .pop_front()
            .unwrap_or_else(|| sampler.sample(&self.trials))
    }

    /// Record an externally evaluated point under `direction`.
    ///
    /// Returns the rank the new trial landed at (0 means new best).
    pub fn tell(&mut self, params: Params, value: f64, direction: Direction) -> usize {
        self.record(Trial::new(params, value), direction)
    }

    /// Insert a trial and report it.
    fn record(&mut self, trial: Trial, direction: Direction) -> usize {
        let pos = self.trials.insert(trial, direction);

        #[cfg(feature = "tracing")]
        {
            let trial = &self.trials.as_slice()[pos];
            tracing::info!(trial_id = trial.id, value = trial.value, "trial completed");
            if pos == 0 {
                tracing::info!(trial_id = trial.id, value = trial.value, "new best value found");
            }
        }

        pos
    }

    /// The trial history, best first.
    #[must_use]
    pub fn trials(&self) -> &TrialStore {
        &self.trials
    }

    /// Number of recorded trials.
    #[must_use]
    pub fn n_trials(&self) -> usize {
        self.trials.len()
    }

    /// The direction the history is currently ordered by, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.trials.direction()
    }

    /// Consume the study, returning its history.
    #[must_use]
    pub fn into_trials(self) -> TrialStore {
        self.trials
    }
}
