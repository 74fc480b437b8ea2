use poe::prelude::*;

fn quadratic(p: &Params) -> f64 {
    (p["x"] - 3.0).powi(2)
}

fn space() -> SearchSpace {
    SearchSpace::new().with("x", 0.0, 10.0)
}

fn best_of<S: Sampler>(sampler: &S, n_trials: usize) -> f64 {
    let mut study = Study::new(total(quadratic));
    study.minimize(sampler, n_trials).unwrap();
    study.best_value().unwrap()
}

#[test]
fn test_random_search_finds_quadratic_minimum() {
    for seed in 0..5 {
        let best = best_of(&RandomSampler::with_seed(space(), seed), 200);
        assert!(best < 1.0, "seed {seed}: best value {best} should be < 1.0");
    }
}

#[test]
fn test_tpe_matches_or_beats_random_baseline() {
    let runs = 20_u64;
    let wins = (0..runs)
        .filter(|&seed| {
            let tpe = TpeSampler::builder(space())
                .quantile(0.15)
                .n_candidates(24)
                .seed(seed)
                .build()
                .unwrap();
            let random = RandomSampler::with_seed(space(), seed);
            best_of(&tpe, 100) <= best_of(&random, 100)
        })
        .count();

    assert!(
        wins as f64 >= 0.8 * runs as f64,
        "TPE matched the random baseline in only {wins} of {runs} runs"
    );
}
