//! Kernel bandwidth selection for the TPE estimators.

use crate::space::Domain;

/// Largest history size that still lowers the bandwidth floor.
const FLOOR_SATURATION: usize = 100;

/// Scott-style bandwidth with dimensionality correction:
/// `width / 5 * n^(-1 / (dims + 4))`.
///
/// `n` is clamped to at least 1.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scott(width: f64, n: usize, dims: usize) -> f64 {
    let n = n.max(1) as f64;
    width / 5.0 * n.powf(-1.0 / (dims as f64 + 4.0))
}

/// Minimum bandwidth `width / min(100, n_total)`.
///
/// Keeps kernels from collapsing as the history grows. `n_total` is the
/// length of the whole history, clamped to at least 1.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn floor(width: f64, n_total: usize) -> f64 {
    width / n_total.clamp(1, FLOOR_SATURATION) as f64
}

/// Bandwidth for one partition of `n` trials in one dimension.
pub(crate) fn select(domain: &Domain, n: usize, n_total: usize, dims: usize) -> f64 {
    let width = domain.width();
    scott(width, n, dims).max(floor(width, n_total))
}
