use poe::prelude::*;

#[test]
fn test_ask_tell_loop() {
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = TpeSampler::builder(space.clone()).seed(6).build().unwrap();
    let mut study = Study::new(total(|p: &Params| p["x"]));

    for _ in 0..60 {
        let params = study.ask(&sampler);
        assert!(space.contains(&params));
        let value = (params["x"] - 3.0).powi(2);
        study.tell(params, value, Direction::Minimize);
    }

    assert_eq!(study.n_trials(), 60);
    assert!(study.best_value().unwrap() < 1.0);
}

#[test]
fn test_ask_does_not_record() {
    let space = SearchSpace::new().with("x", 0.0, 1.0);
    let sampler = RandomSampler::with_seed(space, 2);
    let mut study = Study::new(total(|p: &Params| p["x"]));

    let _ = study.ask(&sampler);
    assert_eq!(study.n_trials(), 0);
}

#[test]
fn test_ask_pops_enqueued_point() {
    let space = SearchSpace::new().with("x", 0.0, 1.0);
    let sampler = RandomSampler::with_seed(space, 2);
    let mut study = Study::new(total(|p: &Params| p["x"]));

    study.enqueue(super::x(0.5));
    assert_eq!(study.ask(&sampler), super::x(0.5));
    assert_eq!(study.n_enqueued(), 0);
}

#[test]
fn test_tell_reports_rank() {
    let mut study = Study::new(total(|p: &Params| p["x"]));

    assert_eq!(study.tell(super::x(5.0), 5.0, Direction::Minimize), 0);
    assert_eq!(study.tell(super::x(9.0), 9.0, Direction::Minimize), 1);
    assert_eq!(study.tell(super::x(1.0), 1.0, Direction::Minimize), 0);
    // Equal values land after existing ones.
    assert_eq!(study.tell(super::x(5.5), 5.0, Direction::Minimize), 2);
}
