//! statistics::errors — error taxonomy for sequence statistics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every fallible
//! operation in [`crate::statistics`], together with a conversion layer to
//! Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`StatsResult`] and [`StatsError`] as the canonical result and
//!   error types for pair reductions, deviation terms, covariance, and
//!   correlation.
//! - Attach human-readable `Display` messages that embed the offending
//!   quantities (lengths, sums, radicands) so a failure can be diagnosed
//!   without re-running the computation.
//! - Implement `From<StatsError> for PyErr` behind `python-bindings`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are returned verbatim to the immediate caller; no layer wraps or
//!   recovers from another layer's error.
//! - Numeric payloads are narrowed to `f64` so the enum stays `Copy`-sized
//!   and comparable in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests check that each variant's `Display` message embeds its
//!   payload.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type StatsResult<T> = Result<T, StatsError>;

/// StatsError — failure conditions for sequence statistics.
///
/// Variants
/// --------
/// - `LengthMismatch { left, right }`
///   Two sequences paired element-wise have different lengths.
/// - `EmptyInput`
///   An operation requiring at least one element received none.
/// - `InsufficientData { required, actual }`
///   Sample covariance / correlation need at least `required` (= 2)
///   observations.
/// - `NegativeResult { value }`
///   The sum of products was negative under
///   [`SumProductPolicy::RejectNegative`](crate::statistics::options::SumProductPolicy).
/// - `NegativeRadicand { n, sum, sum_squared, radicand }`
///   `n·Σx² − (Σx)²` came out negative, from cancellation or invalid input.
/// - `ZeroDenominator { denominator_x, denominator_y }`
///   The correlation denominator vanished; at least one series is constant.
/// - `InvalidPolicy(name)`
///   An unrecognized sum-product policy name was supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    // ---- Input shape ----
    LengthMismatch { left: usize, right: usize },
    EmptyInput,
    InsufficientData { required: usize, actual: usize },

    // ---- Numeric sanity ----
    NegativeResult { value: f64 },
    NegativeRadicand { n: usize, sum: f64, sum_squared: f64, radicand: f64 },
    ZeroDenominator { denominator_x: f64, denominator_y: f64 },

    // ---- Configuration ----
    InvalidPolicy(String),
}

impl std::error::Error for StatsError {}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::LengthMismatch { left, right } => {
                write!(f, "Sequences must have the same length: {left} != {right}.")
            }
            StatsError::EmptyInput => write!(f, "Sequences must not be empty."),
            StatsError::InsufficientData { required, actual } => write!(
                f,
                "Need at least {required} observations per sequence, got {actual}."
            ),
            StatsError::NegativeResult { value } => {
                write!(f, "Sum of products is negative: {value}.")
            }
            StatsError::NegativeRadicand { n, sum, sum_squared, radicand } => write!(
                f,
                "Negative radicand in deviation term: n={n}, sum={sum}, \
                 sum_squared={sum_squared}, n*sum_squared - sum^2 = {radicand}."
            ),
            StatsError::ZeroDenominator { denominator_x, denominator_y } => write!(
                f,
                "Correlation denominator is zero (denominator_x={denominator_x}, \
                 denominator_y={denominator_y}); a series has zero variance."
            ),
            StatsError::InvalidPolicy(name) => write!(
                f,
                "Invalid sum-product policy: '{name}'. Expected 'reject_negative' or \
                 'allow_negative'."
            ),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StatsError> for PyErr {
    fn from(err: StatsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
