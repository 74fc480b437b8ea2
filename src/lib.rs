#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Sequential black-box optimization over continuous parameters, driven by a
//! Tree-structured Parzen Estimator. Give it an objective over a named set of
//! bounded dimensions and it searches for the input that minimizes (or
//! maximizes) the score, using the history of past trials to bias sampling
//! toward promising regions.
//!
//! # Getting Started
//!
//! ```
//! use poe::prelude::*;
//!
//! let space = SearchSpace::new().with("x", 0.0, 10.0);
//! let sampler = TpeSampler::builder(space)
//!     .quantile(0.15)
//!     .n_candidates(24)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut study = Study::new(|p: &Params| Ok::<_, Error>((p["x"] - 3.0).powi(2)));
//! study.minimize(&sampler, 100).unwrap();
//!
//! let best = study.best_trial().unwrap();
//! println!("x = {:.4}, f(x) = {:.4}", best.params["x"], best.value);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`SearchSpace`] | Named dimensions, each a closed [`Domain`] `[low, high]`. |
//! | [`Study`] | Drive the optimization loop: propose, evaluate, record, track the best. |
//! | [`TrialStore`] | The history of [`Trial`]s, kept sorted best-first. |
//! | [`Sampler`](sampler::Sampler) | Strategy for choosing the next point: [`RandomSampler`](sampler::RandomSampler) or [`TpeSampler`](sampler::TpeSampler). |
//! | [`Direction`] | Whether a run minimizes or maximizes the objective value. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Direction`], [`Domain`], [`SearchSpace`], [`Trial`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key optimization points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
mod kde;
pub mod objective;
mod rng_util;
pub mod sampler;
mod space;
mod store;
mod study;
mod trial;
mod types;

pub use error::{Error, Result};
pub use objective::Objective;
pub use space::{Domain, Params, SearchSpace};
pub use store::TrialStore;
pub use study::Study;
pub use trial::Trial;
pub use types::Direction;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use poe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::objective::{Objective, total};
    pub use crate::sampler::{RandomSampler, Sampler, TpeSampler, TpeSamplerBuilder};
    pub use crate::space::{Domain, Params, SearchSpace};
    pub use crate::store::TrialStore;
    pub use crate::study::Study;
    pub use crate::trial::Trial;
    pub use crate::types::Direction;
}
