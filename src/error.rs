/// Errors returned by the optimizer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when requesting the best trial before any trial was recorded.
    #[error("trial store is empty")]
    EmptyStore,

    /// Returned when a domain is built from bounds that are out of order or not finite.
    #[error("invalid domain: low ({low}) must be finite and less than or equal to high ({high})")]
    InvalidDomain {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when the TPE quantile is not in the open range (0.0, 1.0).
    #[error("invalid quantile: {0} must be in (0.0, 1.0)")]
    InvalidQuantile(f64),
}

pub type Result<T> = core::result::Result<T, Error>;
