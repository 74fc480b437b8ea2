use crate::objective::Objective;
use crate::space::Params;
use crate::trial::Trial;

use super::Study;

impl<O: Objective> Study<O> {
    /// Return the trial with the best objective value.
    ///
    /// "Best" follows the direction the history was last ordered by: the
    /// lowest value after minimizing, the highest after maximizing.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStore` if no trial has been recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe::prelude::*;
    ///
    /// let mut study = Study::new(|p: &Params| Ok::<_, Error>(p["x"]));
    ///
    /// // Error when no trials recorded
    /// assert!(study.best_trial().is_err());
    ///
    /// let at = |x: f64| -> Params { [("x".to_string(), x)].into_iter().collect() };
    /// study.tell(at(0.8), 0.8, Direction::Minimize);
    /// study.tell(at(0.3), 0.3, Direction::Minimize);
    ///
    /// let best = study.best_trial().unwrap();
    /// assert_eq!(best.value, 0.3); // Minimize: lower is better
    /// ```
    pub fn best_trial(&self) -> crate::Result<&Trial> {
        self.trials.best()
    }

    /// Return the parameters of the best trial.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStore` if no trial has been recorded.
    pub fn best_params(&self) -> crate::Result<&Params> {
        self.best_trial().map(|trial| &trial.params)
    }

    /// Return the best objective value found so far.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStore` if no trial has been recorded.
    pub fn best_value(&self) -> crate::Result<f64> {
        self.best_trial().map(|trial| trial.value)
    }

    /// Return the top `n` trials, best first.
    ///
    /// If fewer than `n` trials exist, returns all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe::prelude::*;
    ///
    /// let mut study = Study::new(|p: &Params| Ok::<_, Error>(p["x"]));
    /// for val in [5.0, 1.0, 3.0] {
    ///     study.tell(Params::new(), val, Direction::Minimize);
    /// }
    ///
    /// let top2 = study.top_trials(2);
    /// assert_eq!(top2.len(), 2);
    /// assert!(top2[0].value <= top2[1].value);
    /// ```
    #[must_use]
    pub fn top_trials(&self, n: usize) -> &[Trial] {
        self.trials.top(n)
    }
}
