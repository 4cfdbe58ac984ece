//! statistics::deviation — the scaled-spread term of the correlation
//! denominator.
//!
//! Purpose
//! -------
//! Compute `sqrt(n·Σx² − (Σx)²)`, one factor of the Pearson denominator,
//! and refuse to take the root of a negative radicand.
//!
//! Key behaviors
//! -------------
//! - The radicand is mathematically non-negative (Cauchy–Schwarz), but
//!   cancellation on large, tightly clustered inputs can push it below zero.
//!   That case is reported as `NegativeRadicand` with every input quantity,
//!   so callers can tell precision loss from corrupt data.
//! - A zero radicand (constant series) is returned as `0`; detecting the
//!   degenerate denominator is the caller's job.
//! - The sums of a constant series of non-dyadic values (0.1, 0.07, ...)
//!   leave a rounding residue of either sign in the radicand.
//!   [`deviation_denominator_part`] checks the series itself, so zero spread
//!   always yields an exact `0`.
use crate::precision::HighPrecisionFloat;
use crate::statistics::errors::{StatsError, StatsResult};
use crate::statistics::sequence::NumericSequence;

/// Scaled sample spread `sqrt(n·Σx² − (Σx)²)`.
///
/// Parameters
/// ----------
/// - `sum`: `HighPrecisionFloat`
///   Σx of the series.
/// - `sum_squared`: `HighPrecisionFloat`
///   Σx² of the same series.
/// - `n`: `usize`
///   Number of observations.
///
/// Returns
/// -------
/// `StatsResult<HighPrecisionFloat>`
///   - `Ok(root)` with `root ≥ 0`.
///   - `Err(StatsError::NegativeRadicand { n, sum, sum_squared, radicand })`
///     when `n·Σx² − (Σx)² < 0`.
///
/// Notes
/// -----
/// - NaN inputs are not rejected here; they propagate as a NaN root.
pub fn raw_deviation_denominator_part(
    sum: HighPrecisionFloat, sum_squared: HighPrecisionFloat, n: usize,
) -> StatsResult<HighPrecisionFloat> {
    let radicand = HighPrecisionFloat::from(n) * sum_squared - sum.square();
    if radicand.is_sign_negative() {
        return Err(StatsError::NegativeRadicand {
            n,
            sum: sum.to_f64(),
            sum_squared: sum_squared.to_f64(),
            radicand: radicand.to_f64(),
        });
    }
    Ok(radicand.sqrt())
}

/// `true` when every element widens to the same value (vacuously for fewer
/// than two elements). NaN elements never compare equal.
pub fn has_zero_spread<S: NumericSequence + ?Sized>(seq: &S) -> bool {
    let mut values = seq.widened();
    match values.next() {
        Some(first) => values.all(|value| value == first),
        None => true,
    }
}

/// Deviation term for a concrete series.
///
/// Returns an exact `0` for a constant series; otherwise defers to
/// [`raw_deviation_denominator_part`] with the precomputed sums.
pub fn deviation_denominator_part<S: NumericSequence + ?Sized>(
    seq: &S, sum: HighPrecisionFloat, sum_squared: HighPrecisionFloat,
) -> StatsResult<HighPrecisionFloat> {
    if has_zero_spread(seq) {
        return Ok(HighPrecisionFloat::ZERO);
    }
    raw_deviation_denominator_part(sum, sum_squared, seq.len())
}
