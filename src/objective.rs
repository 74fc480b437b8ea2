//! The [`Objective`] trait defines what gets optimized.
//!
//! For simple closures, pass them directly to [`Study::new`](crate::Study::new):
//!
//! ```
//! use poe::prelude::*;
//!
//! let space = SearchSpace::new().with("x", -10.0, 10.0);
//! let mut study = Study::new(|p: &Params| Ok::<_, Error>((p["x"] - 3.0).powi(2)));
//!
//! study
//!     .minimize(&RandomSampler::with_seed(space, 1), 50)
//!     .unwrap();
//! ```
//!
//! Total functions that cannot fail can be wrapped with [`total`]:
//!
//! ```
//! use poe::objective::total;
//! use poe::prelude::*;
//!
//! let space = SearchSpace::new().with("x", -10.0, 10.0);
//! let mut study = Study::new(total(|p: &Params| p["x"].abs()));
//! study.minimize(&RandomSampler::with_seed(space, 1), 20).unwrap();
//! assert!(study.best_value().unwrap() >= 0.0);
//! ```
//!
//! For early stopping, implement [`Objective`] on a struct and override
//! [`after_trial`](Objective::after_trial):
//!
//! ```
//! use std::convert::Infallible;
//! use std::ops::ControlFlow;
//!
//! use poe::Objective;
//! use poe::prelude::*;
//!
//! struct QuadraticWithEarlyStopping {
//!     target: f64,
//! }
//!
//! impl Objective for QuadraticWithEarlyStopping {
//!     type Error = Infallible;
//!
//!     fn evaluate(&self, params: &Params) -> Result<f64, Infallible> {
//!         Ok((params["x"] - 3.0).powi(2))
//!     }
//!
//!     fn after_trial(&self, _trials: &TrialStore, trial: &Trial) -> ControlFlow<()> {
//!         if trial.value < self.target {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let space = SearchSpace::new().with("x", -10.0, 10.0);
//! let mut study = Study::new(QuadraticWithEarlyStopping { target: 1.0 });
//! study.minimize(&RandomSampler::with_seed(space, 7), 500).unwrap();
//! assert!(study.best_value().unwrap() < 1.0);
//! assert!(study.n_trials() < 500);
//! ```

use core::convert::Infallible;
use core::ops::ControlFlow;

use crate::space::Params;
use crate::store::TrialStore;
use crate::trial::Trial;

/// Defines an objective function with an optional early-stopping hook.
///
/// The only required method is [`evaluate`](Objective::evaluate). It should
/// be a pure function of its input so seeded runs replay exactly. Errors are
/// not caught or retried: [`Study::optimize`](crate::Study::optimize) returns
/// the first one unchanged.
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error;

    /// Evaluate the objective at `params`.
    ///
    /// # Errors
    ///
    /// Any error of the objective's choosing; it aborts the optimization loop.
    fn evaluate(&self, params: &Params) -> Result<f64, Self::Error>;

    /// Called after each trial is recorded.
    ///
    /// Return `ControlFlow::Break(())` to stop the optimization loop.
    ///
    /// Default: always continues.
    fn after_trial(&self, _trials: &TrialStore, _trial: &Trial) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: Fn(&Params) -> Result<f64, E>,
{
    type Error = E;

    fn evaluate(&self, params: &Params) -> Result<f64, E> {
        self(params)
    }
}

/// An [`Objective`] built from an infallible function. See [`total`].
#[derive(Clone, Copy, Debug)]
pub struct Total<F>(F);

impl<F> Objective for Total<F>
where
    F: Fn(&Params) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, params: &Params) -> Result<f64, Infallible> {
        Ok((self.0)(params))
    }
}

/// Wraps a function that always returns a value.
#[must_use]
pub fn total<F>(f: F) -> Total<F>
where
    F: Fn(&Params) -> f64,
{
    Total(f)
}
