use poe::prelude::*;

#[test]
fn test_maximize_keeps_highest_first() {
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = RandomSampler::with_seed(space, 3);
    let mut study = Study::new(total(|p: &Params| p["x"]));

    study.maximize(&sampler, 50).unwrap();

    let values: Vec<f64> = study.trials().iter().map(|t| t.value).collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(study.direction(), Some(Direction::Maximize));
}

#[test]
fn test_direction_switch_resorts_history() {
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = RandomSampler::with_seed(space, 12);
    let mut study = Study::new(total(|p: &Params| p["x"]));

    study.minimize(&sampler, 20).unwrap();
    let lowest = study.best_value().unwrap();

    study.maximize(&sampler, 20).unwrap();
    assert_eq!(study.n_trials(), 40);
    assert_eq!(study.direction(), Some(Direction::Maximize));

    let values: Vec<f64> = study.trials().iter().map(|t| t.value).collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    let last = *values.last().unwrap();
    assert!(last <= lowest);
    assert!(values.iter().all(|&v| v >= last));
}

#[test]
fn test_nan_values_rank_last() {
    let mut study = Study::new(total(|p: &Params| p["x"]));
    study.tell(super::x(0.0), f64::NAN, Direction::Minimize);
    study.tell(super::x(1.0), 3.0, Direction::Minimize);
    study.tell(super::x(2.0), 1.0, Direction::Minimize);

    assert_eq!(study.best_value().unwrap(), 1.0);
    assert!(study.trials().as_slice()[2].value.is_nan());

    study.tell(super::x(3.0), 2.0, Direction::Maximize);
    assert_eq!(study.best_value().unwrap(), 3.0);
    assert!(study.trials().as_slice()[3].value.is_nan());
}
