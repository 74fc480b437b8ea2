//! Kernel Density Estimation for parameter distributions.
//!
//! This module provides the prior-mixed Gaussian Parzen estimator used by the
//! TPE sampler to model the good and bad trial regions of one dimension.

mod univariate;

pub(crate) use univariate::ParzenEstimator;
