//! Tree-structured Parzen Estimator (TPE) sampler for Bayesian optimization.
//!
//! TPE models P(x|y) instead of P(y|x). It splits the ranked trial history
//! into a "good" prefix (the best `quantile` fraction) and a "bad" remainder,
//! fits a prior-mixed kernel density estimator to each partition per
//! dimension, and proposes the candidate that maximizes the l(x)/g(x) ratio,
//! an approximation of Expected Improvement.
//!
//! Dimensions are modeled independently: the score of a candidate is the
//! product of the per-dimension ratios, so no covariance is estimated.
//!
//! # Examples
//!
//! ```
//! use poe::SearchSpace;
//! use poe::sampler::tpe::TpeSampler;
//!
//! let space = SearchSpace::new().with("x", 0.0, 10.0);
//! let sampler = TpeSampler::builder(space)
//!     .quantile(0.15)
//!     .n_candidates(24)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! assert_eq!(sampler.n_candidates(), 24);
//! ```

pub(crate) mod bandwidth;
mod sampler;

pub use sampler::{TpeSampler, TpeSamplerBuilder};
