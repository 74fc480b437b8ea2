use poe::prelude::*;

fn quadratic(p: &Params) -> f64 {
    (p["x"] - 3.0).powi(2)
}

/// Store of `n` trials of `quadratic` on an evenly spaced grid over `[0, 10]`.
fn grid_history(n: u32) -> TrialStore {
    let mut store = TrialStore::new();
    for i in 0..n {
        let x = 10.0 * f64::from(i) / f64::from(n - 1);
        let params: Params = [("x".to_string(), x)].into_iter().collect();
        let value = quadratic(&params);
        store.insert(Trial::new(params, value), Direction::Minimize);
    }
    store
}

#[test]
fn test_tpe_optimizes_quadratic_function() {
    // Minimize f(x) = (x - 3)^2 where x in [0, 10]
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = TpeSampler::builder(space)
        .quantile(0.15)
        .n_candidates(24)
        .seed(42)
        .build()
        .unwrap();

    let mut study = Study::new(total(quadratic));
    study.minimize(&sampler, 100).unwrap();

    let best = study.best_trial().expect("should have at least one trial");
    assert!(
        best.value < 0.5,
        "TPE should find near-optimal: best value {} should be < 0.5",
        best.value
    );
}

#[test]
fn test_tpe_optimizes_multivariate_function() {
    // Minimize f(x, y) = x^2 + y^2 where x, y in [-5, 5]
    let space = SearchSpace::new().with("x", -5.0, 5.0).with("y", -5.0, 5.0);
    let sampler = TpeSampler::builder(space).seed(123).build().unwrap();

    let mut study = Study::new(total(|p: &Params| p["x"].powi(2) + p["y"].powi(2)));
    study.minimize(&sampler, 150).unwrap();

    let best = study.best_value().unwrap();
    assert!(best < 1.0, "best value {best} should be < 1.0");
}

#[test]
fn test_tpe_maximizes() {
    // Maximize f(x) = -(x - 7)^2 where x in [0, 10]
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = TpeSampler::builder(space).seed(8).build().unwrap();

    let mut study = Study::new(total(|p: &Params| -(p["x"] - 7.0).powi(2)));
    study.maximize(&sampler, 100).unwrap();

    let best = study.best_trial().unwrap();
    assert!(best.value > -0.5, "best value {} should be > -0.5", best.value);
    assert!((best.params["x"] - 7.0).abs() < 0.75);
}

#[test]
fn test_tpe_proposals_concentrate_near_good_region() {
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = TpeSampler::builder(space).seed(17).build().unwrap();
    let history = grid_history(60);

    let n = 400;
    let near = (0..n)
        .filter(|_| (sampler.sample(&history)["x"] - 3.0).abs() < 2.0)
        .count();

    // Uniform sampling would land within 2 of the optimum 40% of the time.
    assert!(
        near as f64 / f64::from(n) > 0.6,
        "only {near} of {n} proposals near the optimum"
    );
}

#[test]
fn test_tpe_proposals_stay_in_bounds() {
    let space = SearchSpace::new().with("x", 0.0, 10.0);
    let sampler = TpeSampler::builder(space.clone()).seed(4).build().unwrap();
    let history = grid_history(40);

    for _ in 0..500 {
        let params = sampler.sample(&history);
        assert!(space.contains(&params), "{params:?} escaped {space:?}");
    }
}

#[test]
fn test_tpe_warm_up_matches_random_sampler() {
    let space = SearchSpace::new().with("x", 0.0, 10.0).with("y", -1.0, 1.0);
    let tpe = TpeSampler::builder(space.clone())
        .n_candidates(24)
        .seed(31)
        .build()
        .unwrap();
    let random = RandomSampler::with_seed(space, 31);

    // 23 trials is below the warm-up threshold of 24 candidates.
    let history = grid_history(23);
    for _ in 0..10 {
        assert_eq!(tpe.sample(&history), random.sample(&history));
    }
}

#[test]
fn test_tpe_seeded_runs_replay() {
    let run = || {
        let space = SearchSpace::new().with("x", 0.0, 10.0);
        let sampler = TpeSampler::builder(space).seed(2024).build().unwrap();
        let mut study = Study::new(total(quadratic));
        study.minimize(&sampler, 60).unwrap();
        study
            .trials()
            .iter()
            .map(|t| (t.id, t.value))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_tpe_invalid_quantile_rejected() {
    let space = SearchSpace::new().with("x", 0.0, 1.0);
    for q in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
        let result = TpeSampler::builder(space.clone()).quantile(q).build();
        assert!(
            matches!(result, Err(Error::InvalidQuantile(_))),
            "quantile {q} should be rejected"
        );
    }
}

#[test]
fn test_tpe_degenerate_domain() {
    let space = SearchSpace::new().with("x", 5.0, 5.0).with("y", 0.0, 1.0);
    let sampler = TpeSampler::builder(space).seed(3).build().unwrap();

    let mut study = Study::new(total(|p: &Params| p["x"] + p["y"]));
    study.minimize(&sampler, 60).unwrap();

    assert!(study.trials().iter().all(|t| t.params["x"] == 5.0));
    assert!(study.best_value().unwrap().is_finite());
}
