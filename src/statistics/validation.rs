//! statistics::validation — shared shape guards for paired sequences.
//!
//! Purpose
//! -------
//! Centralize the length checks every two-sequence statistic performs before
//! touching the data, so covariance, correlation, and the pair reducer report
//! the same errors in the same order.
//!
//! Key behaviors
//! -------------
//! - Length mismatch is always reported before any minimum-length check.
//! - Successful validation returns the common length `n`.
//!
//! Conventions
//! -----------
//! - Guards work on lengths only; they never inspect element values.
use crate::statistics::errors::{StatsError, StatsResult};

/// Minimum number of observations for sample covariance and correlation.
pub const MIN_PAIRED_OBSERVATIONS: usize = 2;

/// Check that two sequences pair element-wise.
///
/// Returns
/// -------
/// - `Ok(n)` with the common length.
/// - `Err(StatsError::LengthMismatch { left, right })` otherwise.
pub fn validate_same_length(left: usize, right: usize) -> StatsResult<usize> {
    if left != right {
        return Err(StatsError::LengthMismatch { left, right });
    }
    Ok(left)
}

/// Check pairing and a minimum length for sample statistics.
///
/// Parameters
/// ----------
/// - `left`, `right`: `usize`
///   Lengths of the two sequences.
/// - `required`: `usize`
///   Minimum common length (e.g. [`MIN_PAIRED_OBSERVATIONS`]).
///
/// Returns
/// -------
/// `StatsResult<usize>`
///   - `Ok(n)` when `left == right == n` and `n ≥ required`.
///   - `Err(StatsError::LengthMismatch)` when the lengths differ.
///   - `Err(StatsError::InsufficientData)` when `n < required`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_statlib::statistics::validation::validate_pair;
/// # use rust_statlib::statistics::errors::StatsError;
/// assert_eq!(validate_pair(3, 3, 2), Ok(3));
/// assert_eq!(
///     validate_pair(1, 1, 2),
///     Err(StatsError::InsufficientData { required: 2, actual: 1 })
/// );
/// ```
pub fn validate_pair(left: usize, right: usize, required: usize) -> StatsResult<usize> {
    let n = validate_same_length(left, right)?;
    if n < required {
        return Err(StatsError::InsufficientData { required, actual: n });
    }
    Ok(n)
}
