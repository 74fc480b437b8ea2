use core::fmt;

use crate::objective::Objective;

use super::Study;

impl<O: Objective> Study<O> {
    /// Return a human-readable summary of the study.
    ///
    /// Includes the direction, the number of trials, and the best trial with
    /// its parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use poe::prelude::*;
    ///
    /// let mut study = Study::new(|p: &Params| Ok::<_, Error>(p["x"]));
    /// let params: Params = [("x".to_string(), 0.42)].into_iter().collect();
    /// study.tell(params, 0.42, Direction::Minimize);
    ///
    /// let summary = study.summary();
    /// assert!(summary.contains("Minimize"));
    /// assert!(summary.contains("0.42"));
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        use fmt::Write;

        let direction_str = match self.direction() {
            Some(direction) => direction.to_string(),
            None => "Unset".to_owned(),
        };

        let mut s = format!("Study: {direction_str} | {n} trials", n = self.n_trials());
        if !self.enqueued.is_empty() {
            let _ = write!(s, " ({} enqueued)", self.enqueued.len());
        }

        if let Ok(best) = self.best_trial() {
            let _ = write!(s, "\nBest value: {} (trial #{})", best.value, best.id);
            if !best.params.is_empty() {
                s.push_str("\nBest parameters:");
                for (name, value) in &best.params {
                    let _ = write!(s, "\n  {name} = {value}");
                }
            }
        }

        s
    }
}

impl<O: Objective> fmt::Display for Study<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
