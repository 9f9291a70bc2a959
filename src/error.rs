//! Crate-wide error type
//!
//! All numeric-core failures are recoverable by the caller: the core never
//! terminates the process, never retries, and never clamps a bad value

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbError {
    /// Invalid physical parameter (non-positive or non-finite mass, radius,
    /// mu, dt, eccentricity out of range, ...)
    #[error("invalid parameter `{name}`: {value}")]
    Domain { name: &'static str, value: f64 },

    /// Two bodies (or a body and the central attractor) occupy the exact
    /// same position, making the force evaluation singular
    #[error("coincident bodies `{a}` and `{b}` at t = {t} s")]
    Singularity { a: String, b: String, t: f64 },

    /// Newton iteration on Kepler's equation hit the iteration cap
    #[error("Kepler solve did not converge after {iterations} iterations (M = {mean_anomaly}, e = {eccentricity})")]
    Convergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    /// Body index out of range
    #[error("no body at index {0}")]
    BodyIndex(usize),
}

/// Shared fail-fast check for strictly-positive finite physical parameters.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), OrbError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OrbError::Domain { name, value })
    }
}
