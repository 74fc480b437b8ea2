//! Tree-structured Parzen Estimator (TPE) sampler implementation.

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::kde::ParzenEstimator;
use crate::sampler::Sampler;
use crate::sampler::random::sample_space;
use crate::sampler::tpe::bandwidth;
use crate::space::{Domain, Params, SearchSpace};
use crate::store::TrialStore;
use crate::trial::Trial;

/// Guards the l(x)/g(x) ratio against a zero bad-density.
const RATIO_EPSILON: f64 = 1e-12;

const DEFAULT_QUANTILE: f64 = 0.25;
const DEFAULT_N_CANDIDATES: usize = 24;
const MIN_CANDIDATES: usize = 2;

/// A Tree-structured Parzen Estimator (TPE) sampler for Bayesian optimization.
///
/// TPE splits the ranked history into good trials (the best `quantile`
/// fraction) and bad trials (the rest). For every dimension it fits a Gaussian
/// Parzen estimator to each group, mixed with a broad prior centered on the
/// domain, then draws `n_candidates` points from the good model and returns
/// the one with the highest product of per-dimension l(x)/g(x) ratios.
///
/// While fewer than `n_candidates` trials exist, TPE falls back to uniform
/// random sampling to gather initial data.
///
/// # Examples
///
/// ```
/// use poe::SearchSpace;
/// use poe::sampler::tpe::TpeSampler;
///
/// let space = SearchSpace::new().with("x", -5.0, 5.0);
///
/// // Create with default settings
/// let sampler = TpeSampler::new(space.clone());
///
/// // Create with custom settings using the builder
/// let sampler = TpeSampler::builder(space)
///     .quantile(0.15)
///     .n_candidates(32)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
pub struct TpeSampler {
    space: SearchSpace,
    /// Fraction of ranked trials considered "good".
    quantile: f64,
    /// Candidates scored per call; also the warm-up length.
    n_candidates: usize,
    /// Thread-safe RNG for sampling.
    rng: Mutex<fastrand::Rng>,
}

/// Good and bad density models of one dimension.
struct DimensionModel<'a> {
    name: &'a str,
    domain: &'a Domain,
    good: ParzenEstimator,
    bad: ParzenEstimator,
}

impl DimensionModel<'_> {
    /// l(x) / (g(x) + eps)
    fn ratio(&self, x: f64) -> f64 {
        self.good.pdf(x) / (self.bad.pdf(x) + RATIO_EPSILON)
    }
}

impl TpeSampler {
    /// Creates a new TPE sampler with default settings.
    ///
    /// Default settings:
    /// - `quantile`: 0.25 (top 25% of trials are considered "good")
    /// - `n_candidates`: 24 (random sampling for the first 24 trials, then 24
    ///   candidates scored per sample)
    /// - RNG seeded from OS entropy
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            quantile: DEFAULT_QUANTILE,
            n_candidates: DEFAULT_N_CANDIDATES,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a builder for configuring a TPE sampler.
    #[must_use]
    pub fn builder(space: SearchSpace) -> TpeSamplerBuilder {
        TpeSamplerBuilder::new(space)
    }

    /// Creates a new TPE sampler with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `space` - The search space to sample from.
    /// * `quantile` - Fraction of trials to consider "good", in (0.0, 1.0).
    /// * `n_candidates` - Candidates scored per sample; raised to 2 if smaller.
    /// * `seed` - Optional seed for reproducibility.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuantile` if `quantile` is not in (0.0, 1.0).
    pub fn with_config(
        space: SearchSpace,
        quantile: f64,
        n_candidates: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        if !(quantile > 0.0 && quantile < 1.0) {
            return Err(Error::InvalidQuantile(quantile));
        }

        let rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        Ok(Self {
            space,
            quantile,
            n_candidates: n_candidates.max(MIN_CANDIDATES),
            rng: Mutex::new(rng),
        })
    }

    /// The space this sampler draws from.
    #[must_use]
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    /// Fraction of ranked trials considered "good".
    #[must_use]
    pub fn quantile(&self) -> f64 {
        self.quantile
    }

    /// Candidates scored per sample.
    #[must_use]
    pub fn n_candidates(&self) -> usize {
        self.n_candidates
    }

    /// Fits the good and bad estimators of every dimension.
    fn fit(&self, good: &[Trial], bad: &[Trial], n_total: usize) -> Vec<DimensionModel<'_>> {
        let dims = self.space.dims();
        self.space
            .iter()
            .map(|(name, domain)| {
                let fit_partition = |trials: &[Trial]| {
                    let values: Vec<f64> = trials.iter().filter_map(|t| t.get(name)).collect();
                    let bw = bandwidth::select(domain, values.len(), n_total, dims);
                    trace_debug!(
                        dimension = name,
                        n = values.len(),
                        bandwidth = bw,
                        "tpe bandwidth"
                    );
                    ParzenEstimator::new(values, bw, domain.midpoint(), domain.width())
                };
                DimensionModel {
                    name,
                    domain,
                    good: fit_partition(good),
                    bad: fit_partition(bad),
                }
            })
            .collect()
    }
}

impl Sampler for TpeSampler {
    fn sample(&self, trials: &TrialStore) -> Params {
        let mut rng = self.rng.lock();

        // Fall back to random sampling during warm-up
        if trials.len() < self.n_candidates {
            trace_debug!(n_trials = trials.len(), "tpe warm-up, sampling uniformly");
            return sample_space(&self.space, &mut rng);
        }

        let (good, bad) = trials.bisect(self.quantile);
        let models = self.fit(good, bad, trials.len());

        let mut best: Option<Params> = None;
        let mut best_score = f64::NEG_INFINITY;
        for _ in 0..self.n_candidates {
            let mut candidate = Params::new();
            let mut score = 1.0;
            for model in &models {
                let x = model.domain.clip(model.good.sample(&mut rng));
                score *= model.ratio(x);
                candidate.insert(model.name.to_owned(), x);
            }

            // Ties keep the earlier candidate
            if best.is_none() || score > best_score {
                best = Some(candidate);
                best_score = score;
            }
        }

        trace_debug!(score = best_score, "tpe best candidate");
        best.unwrap_or_else(|| sample_space(&self.space, &mut rng))
    }
}

/// Builder for configuring a [`TpeSampler`].
///
/// # Examples
///
/// ```
/// use poe::SearchSpace;
/// use poe::sampler::tpe::TpeSamplerBuilder;
///
/// let space = SearchSpace::new().with("x", 0.0, 1.0);
/// let sampler = TpeSamplerBuilder::new(space)
///     .quantile(0.15)
///     .n_candidates(32)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TpeSamplerBuilder {
    space: SearchSpace,
    quantile: f64,
    n_candidates: usize,
    seed: Option<u64>,
}

impl TpeSamplerBuilder {
    /// Creates a new builder with default settings.
    ///
    /// Default settings:
    /// - `quantile`: 0.25
    /// - `n_candidates`: 24
    /// - `seed`: None (use OS-provided entropy)
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            quantile: DEFAULT_QUANTILE,
            n_candidates: DEFAULT_N_CANDIDATES,
            seed: None,
        }
    }

    /// Sets the fraction of ranked trials considered "good".
    ///
    /// A quantile of 0.15 means the best 15% of trials (at least one) build
    /// the l(x) model. Validated by [`build`](Self::build).
    #[must_use]
    pub fn quantile(mut self, quantile: f64) -> Self {
        self.quantile = quantile;
        self
    }

    /// Sets the number of candidates scored per sample.
    ///
    /// This is also the warm-up length: while the history holds fewer trials,
    /// the sampler draws uniformly. Values below 2 are raised to 2.
    #[must_use]
    pub fn n_candidates(mut self, n: usize) -> Self {
        self.n_candidates = n;
        self
    }

    /// Sets a seed for reproducible sampling.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured [`TpeSampler`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuantile` if the quantile is not in (0.0, 1.0).
    pub fn build(self) -> Result<TpeSampler> {
        TpeSampler::with_config(self.space, self.quantile, self.n_candidates, self.seed)
    }
}
