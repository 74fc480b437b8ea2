//! Prior-mixed Gaussian Parzen estimator over a single dimension.

use crate::rng_util;

/// Density of `N(mean, std_dev^2)` at `x`.
///
/// Returns `0.0` for a non-positive (or NaN) `std_dev`, which happens on
/// zero-width domains.
#[inline]
pub(crate) fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev.is_nan() || std_dev <= 0.0 {
        return 0.0;
    }
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * core::f64::consts::PI).sqrt())
}

/// A Gaussian kernel density estimator mixed with a broad prior.
///
/// The mixture has `n + 1` equally weighted components: one Gaussian kernel
/// of width `bandwidth` centered on each of the `n` observed values, plus one
/// prior Gaussian `N(prior_mean, prior_std_dev^2)`. With no observations it
/// reduces to the prior, so the density is never identically zero on a
/// non-degenerate domain.
///
/// # Examples
///
/// ```ignore
/// use crate::kde::ParzenEstimator;
///
/// let kde = ParzenEstimator::new(vec![1.0, 2.0, 3.0], 0.5, 5.0, 10.0);
///
/// // Get probability density at a point
/// assert!(kde.pdf(2.0) > kde.pdf(9.0));
///
/// // Sample from the mixture
/// let mut rng = fastrand::Rng::with_seed(42);
/// let sample = kde.sample(&mut rng);
/// ```
#[derive(Clone, Debug)]
pub(crate) struct ParzenEstimator {
    /// Kernel centers.
    samples: Vec<f64>,
    /// Standard deviation of every kernel.
    bandwidth: f64,
    prior_mean: f64,
    prior_std_dev: f64,
}

impl ParzenEstimator {
    pub(crate) fn new(
        samples: Vec<f64>,
        bandwidth: f64,
        prior_mean: f64,
        prior_std_dev: f64,
    ) -> Self {
        Self {
            samples,
            bandwidth,
            prior_mean,
            prior_std_dev,
        }
    }

    /// Weight of each mixture component, `1 / (n + 1)`.
    #[allow(clippy::cast_precision_loss)]
    fn component_weight(&self) -> f64 {
        1.0 / (self.samples.len() + 1) as f64
    }

    /// Returns the mixture density at `x`.
    ///
    /// f(x) = (prior(x) + `sum_i` K((x - `x_i`) / h) / h) / (n + 1)
    pub(crate) fn pdf(&self, x: f64) -> f64 {
        let prior = normal_pdf(x, self.prior_mean, self.prior_std_dev);
        let kernels: f64 = self
            .samples
            .iter()
            .map(|&xi| normal_pdf(x, xi, self.bandwidth))
            .sum();

        (prior + kernels) * self.component_weight()
    }

    /// Draws a value from the mixture.
    ///
    /// Picks a component uniformly among the `n + 1`: the prior with
    /// probability `1 / (n + 1)`, otherwise one observed value perturbed by
    /// Gaussian noise with the kernel bandwidth.
    pub(crate) fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
        let idx = rng.usize(0..=self.samples.len());
        match self.samples.get(idx) {
            Some(&center) => rng_util::normal(rng, center, self.bandwidth),
            None => rng_util::normal(rng, self.prior_mean, self.prior_std_dev),
        }
    }

    /// Returns the kernel bandwidth.
    #[cfg(test)]
    pub(crate) fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}
