//! Objective landscapes for benchmarking, over every dimension of a [`Params`].

use core::f64::consts::PI;

use poe::Params;

/// Sphere: unimodal and convex. Minimum 0 at the origin.
pub fn sphere(p: &Params) -> f64 {
    p.values().map(|x| x * x).sum()
}

/// Rosenbrock: a narrow curved valley. Minimum 0 at `(1, ..., 1)`.
pub fn rosenbrock(p: &Params) -> f64 {
    let x: Vec<f64> = p.values().copied().collect();
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Rastrigin: highly multimodal. Minimum 0 at the origin.
pub fn rastrigin(p: &Params) -> f64 {
    p.values()
        .map(|x| 10.0 + x * x - 10.0 * (2.0 * PI * x).cos())
        .sum()
}
