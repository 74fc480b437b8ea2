use core::ops::ControlFlow;

use crate::objective::Objective;
use crate::sampler::Sampler;
use crate::trial::Trial;
use crate::types::Direction;

use super::Study;

impl<O: Objective> Study<O> {
    /// Run `n_trials` evaluations in `direction`.
    ///
    /// If the history was last ordered the other way it is re-sorted once
    /// before the first new trial. Each step takes the next enqueued point or
    /// asks `sampler` for a candidate given the current history, evaluates the
    /// objective, and inserts the result. The loop ends early if
    /// [`Objective::after_trial`] breaks.
    ///
    /// # Errors
    ///
    /// Returns the objective's error unchanged, as soon as it occurs. Trials
    /// recorded before the failure stay in the history.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe::prelude::*;
    ///
    /// let space = SearchSpace::new().with("x", -10.0, 10.0);
    /// let sampler = RandomSampler::with_seed(space, 42);
    /// let mut study = Study::new(|p: &Params| Ok::<_, Error>(p["x"] * p["x"]));
    ///
    /// study.optimize(Direction::Minimize, &sampler, 10).unwrap();
    ///
    /// assert_eq!(study.n_trials(), 10);
    /// assert!(study.best_value().unwrap() >= 0.0);
    /// ```
    pub fn optimize<S: Sampler + ?Sized>(
        &mut self,
        direction: Direction,
        sampler: &S,
        n_trials: usize,
    ) -> Result<(), O::Error> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("optimize", n_trials, ?direction).entered();

        self.trials.resort(direction);

        for _ in 0..n_trials {
            let params = self.ask(sampler);
            let value = self.objective.evaluate(&params)?;
            let pos = self.record(Trial::new(params, value), direction);

            let trial = &self.trials.as_slice()[pos];
            if let ControlFlow::Break(()) = self.objective.after_trial(&self.trials, trial) {
                trace_info!(trial_id = trial.id, "optimization stopped by objective");
                break;
            }
        }

        Ok(())
    }

    /// Run `n_trials` evaluations minimizing the objective.
    ///
    /// # Errors
    ///
    /// Returns the objective's error unchanged.
    pub fn minimize<S: Sampler + ?Sized>(
        &mut self,
        sampler: &S,
        n_trials: usize,
    ) -> Result<(), O::Error> {
        self.optimize(Direction::Minimize, sampler, n_trials)
    }

    /// Run `n_trials` evaluations maximizing the objective.
    ///
    /// # Errors
    ///
    /// Returns the objective's error unchanged.
    pub fn maximize<S: Sampler + ?Sized>(
        &mut self,
        sampler: &S,
        n_trials: usize,
    ) -> Result<(), O::Error> {
        self.optimize(Direction::Maximize, sampler, n_trials)
    }
}
