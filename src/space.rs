//! Search-space definition: per-dimension closed intervals.
//!
//! A [`SearchSpace`] maps each dimension name to a [`Domain`]. Every
//! parameter vector ([`Params`]) produced by a sampler carries exactly the
//! space's keys. Both maps are ordered, so iterating dimensions is
//! deterministic and seeded runs replay exactly.
//!
//! ```
//! use poe::{Domain, SearchSpace};
//!
//! let space = SearchSpace::new()
//!     .with("x", 0.0, 10.0)
//!     .with("y", 1.0, -1.0); // bounds are normalized
//!
//! assert_eq!(space.dims(), 2);
//! assert_eq!(space.get("y"), Some(&Domain::new(-1.0, 1.0)));
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A parameter vector: dimension name to value.
pub type Params = BTreeMap<String, f64>;

/// An immutable closed interval `[low, high]` with `low <= high`.
///
/// Deserialization goes through [`Domain::try_new`], so inverted or
/// non-finite bounds are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DomainRepr"))]
pub struct Domain {
    low: f64,
    high: f64,
}

/// Wire shape of a [`Domain`] before validation.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DomainRepr {
    low: f64,
    high: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<DomainRepr> for Domain {
    type Error = Error;

    fn try_from(repr: DomainRepr) -> Result<Self> {
        Self::try_new(repr.low, repr.high)
    }
}

impl Domain {
    /// Creates a domain from an unordered pair of bounds.
    ///
    /// The smaller bound becomes `low`. A zero-width domain (`a == b`) is legal.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Creates a domain from ordered bounds without normalizing them.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDomain` if `low > high` or either bound is not finite.
    pub fn try_new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(Error::InvalidDomain { low, high });
        }
        Ok(Self { low, high })
    }

    /// The lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// The upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// `high - low`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// `(low + high) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Returns `true` if `v` lies in `[low, high]`.
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        (self.low..=self.high).contains(&v)
    }

    /// Clamps `v` into `[low, high]`.
    ///
    /// Never panics, even for a domain built from NaN bounds.
    #[must_use]
    pub fn clip(&self, v: f64) -> f64 {
        v.max(self.low).min(self.high)
    }
}

impl From<(f64, f64)> for Domain {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl From<[f64; 2]> for Domain {
    fn from([a, b]: [f64; 2]) -> Self {
        Self::new(a, b)
    }
}

/// A mapping from dimension name to [`Domain`].
///
/// Immutable once handed to a sampler: samplers take their own copy.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchSpace {
    domains: BTreeMap<String, Domain>,
}

impl SearchSpace {
    /// Creates an empty search space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a dimension with bounds `[a, b]`, normalized.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, a: f64, b: f64) -> Self {
        self.domains.insert(name.into(), Domain::new(a, b));
        self
    }

    /// Builds a space from `(name, bounds)` pairs.
    ///
    /// ```
    /// use poe::SearchSpace;
    ///
    /// let space = SearchSpace::from_bounds([("x", [0.0, 10.0]), ("y", [-5.0, 5.0])]);
    /// assert_eq!(space.names().collect::<Vec<_>>(), ["x", "y"]);
    /// ```
    #[must_use]
    pub fn from_bounds<I, K, B>(bounds: I) -> Self
    where
        I: IntoIterator<Item = (K, B)>,
        K: Into<String>,
        B: Into<Domain>,
    {
        Self {
            domains: bounds
                .into_iter()
                .map(|(name, b)| (name.into(), b.into()))
                .collect(),
        }
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Returns the domain of dimension `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Domain> {
        self.domains.get(name)
    }

    /// Iterates dimension names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Iterates `(name, domain)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Domain)> {
        self.domains.iter().map(|(k, d)| (k.as_str(), d))
    }

    /// Clamps every value of `params` whose key belongs to this space.
    ///
    /// Keys outside the space are left untouched.
    #[must_use]
    pub fn clip(&self, params: &Params) -> Params {
        params
            .iter()
            .map(|(name, &v)| {
                let v = self.domains.get(name).map_or(v, |d| d.clip(v));
                (name.clone(), v)
            })
            .collect()
    }

    /// Returns `true` if `params` has exactly this space's keys and every
    /// value lies inside its domain.
    #[must_use]
    pub fn contains(&self, params: &Params) -> bool {
        params.len() == self.domains.len()
            && self
                .domains
                .iter()
                .all(|(name, d)| params.get(name).is_some_and(|&v| d.contains(v)))
    }
}

impl<K: Into<String>> FromIterator<(K, Domain)> for SearchSpace {
    fn from_iter<I: IntoIterator<Item = (K, Domain)>>(iter: I) -> Self {
        Self::from_bounds(iter)
    }
}
