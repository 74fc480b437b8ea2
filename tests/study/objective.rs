use core::cell::Cell;
use core::ops::ControlFlow;

use poe::prelude::*;

#[derive(Debug, PartialEq)]
struct Diverged(u32);

#[test]
fn test_objective_error_aborts_and_keeps_prior_trials() {
    let space = SearchSpace::new().with("x", 0.0, 1.0);
    let sampler = RandomSampler::with_seed(space, 4);
    let calls = Cell::new(0_u32);

    let mut study = Study::new(|p: &Params| {
        calls.set(calls.get() + 1);
        if calls.get() == 4 {
            Err(Diverged(calls.get()))
        } else {
            Ok(p["x"])
        }
    });

    let result = study.minimize(&sampler, 10);
    assert_eq!(result, Err(Diverged(4)));
    assert_eq!(study.n_trials(), 3);
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_error_on_first_trial_leaves_history_empty() {
    let space = SearchSpace::new().with("x", 0.0, 1.0);
    let sampler = RandomSampler::with_seed(space, 4);
    let mut study = Study::new(|_: &Params| Err::<f64, _>("unavailable"));

    assert_eq!(study.minimize(&sampler, 5), Err("unavailable"));
    assert!(matches!(study.best_trial(), Err(Error::EmptyStore)));
}

struct StopBelow {
    threshold: f64,
}

impl Objective for StopBelow {
    type Error = core::convert::Infallible;

    fn evaluate(&self, params: &Params) -> Result<f64, Self::Error> {
        Ok((params["x"] - 3.0).abs())
    }

    fn after_trial(&self, _trials: &TrialStore, trial: &Trial) -> ControlFlow<()> {
        if trial.value < self.threshold {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn test_after_trial_stops_early() {
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = RandomSampler::with_seed(space, 8);
    let mut study = Study::new(StopBelow { threshold: 0.5 });

    study.minimize(&sampler, 1000).unwrap();

    assert!(study.n_trials() < 1000);
    assert!(study.best_value().unwrap() < 0.5);
    // The stopping trial is the only one under the threshold.
    assert_eq!(study.trials().iter().filter(|t| t.value < 0.5).count(), 1);
}

#[test]
fn test_after_trial_sees_recorded_history() {
    struct CountCheck;

    impl Objective for CountCheck {
        type Error = core::convert::Infallible;

        fn evaluate(&self, params: &Params) -> Result<f64, Self::Error> {
            Ok(params["x"])
        }

        fn after_trial(&self, trials: &TrialStore, trial: &Trial) -> ControlFlow<()> {
            assert!(trials.iter().any(|t| t.id == trial.id));
            if trials.len() == 7 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    let space = SearchSpace::new().with("x", 0.0, 1.0);
    let sampler = RandomSampler::with_seed(space, 8);
    let mut study = Study::new(CountCheck);
    study.minimize(&sampler, 50).unwrap();
    assert_eq!(study.n_trials(), 7);
}
