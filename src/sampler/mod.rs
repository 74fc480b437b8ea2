//! Sampler trait and implementations for proposing the next point.
//!
//! | Sampler | Algorithm | Uses history |
//! |---------|-----------|--------------|
//! | [`RandomSampler`] | Uniform draw per dimension | no |
//! | [`TpeSampler`] | Tree-structured Parzen Estimator | yes |

pub mod random;
pub mod tpe;

pub use random::RandomSampler;
pub use tpe::{TpeSampler, TpeSamplerBuilder};

use crate::space::Params;
use crate::store::TrialStore;

/// Trait for pluggable sampling strategies.
///
/// A sampler owns its search space and random-number generator and proposes
/// one full parameter vector per call. It reads the trial history but never
/// keeps it. The trait requires `Send + Sync`, so implementations keep
/// mutable state (the RNG) behind a lock and sample through `&self`.
pub trait Sampler: Send + Sync {
    /// Proposes the next point to evaluate, given the history so far.
    ///
    /// The returned vector has exactly the sampler's space keys, each value
    /// inside its domain.
    fn sample(&self, trials: &TrialStore) -> Params;
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn sample(&self, trials: &TrialStore) -> Params {
        (**self).sample(trials)
    }
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn sample(&self, trials: &TrialStore) -> Params {
        (**self).sample(trials)
    }
}
