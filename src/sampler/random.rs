//! Random sampler implementation.

use parking_lot::Mutex;

use crate::rng_util;
use crate::sampler::Sampler;
use crate::space::{Params, SearchSpace};
use crate::store::TrialStore;

/// A simple random sampler that samples uniformly from the search space.
///
/// This sampler ignores the trial history and draws every dimension
/// independently and uniformly from its domain. It serves as a baseline
/// sampler and as the warm-up strategy of [`TpeSampler`](super::TpeSampler).
///
/// # Examples
///
/// ```
/// use poe::SearchSpace;
/// use poe::sampler::random::RandomSampler;
///
/// let space = SearchSpace::new().with("x", 0.0, 10.0);
///
/// // Create with default RNG
/// let sampler = RandomSampler::new(space.clone());
///
/// // Create with a fixed seed for reproducibility
/// let sampler = RandomSampler::with_seed(space, 42);
/// ```
pub struct RandomSampler {
    space: SearchSpace,
    rng: Mutex<fastrand::Rng>,
}

impl RandomSampler {
    /// Creates a new random sampler with a default random seed.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Creates a new random sampler with a fixed seed for reproducibility.
    ///
    /// Using the same seed will produce the same sequence of sampled values.
    #[must_use]
    pub fn with_seed(space: SearchSpace, seed: u64) -> Self {
        Self {
            space,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// The space this sampler draws from.
    #[must_use]
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }
}

/// Draws one point uniformly from `space`.
pub(crate) fn sample_space(space: &SearchSpace, rng: &mut fastrand::Rng) -> Params {
    space
        .iter()
        .map(|(name, d)| {
            let v = rng_util::f64_range(rng, d.low(), d.high());
            (name.to_owned(), d.clip(v))
        })
        .collect()
}

impl Sampler for RandomSampler {
    fn sample(&self, _trials: &TrialStore) -> Params {
        let mut rng = self.rng.lock();
        sample_space(&self.space, &mut rng)
    }
}
