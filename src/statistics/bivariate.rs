//! statistics::bivariate — sample covariance and Pearson correlation.
//!
//! Purpose
//! -------
//! Compose the accumulators, the pair reducer, and the deviation term into
//! the two headline statistics for paired series, each validating its own
//! input shape and propagating the first sub-computation failure unchanged.
//!
//! Key behaviors
//! -------------
//! - [`covariance`] returns the sample covariance
//!   `(Σxy − Σx·Σy/n) / (n − 1)`.
//! - [`correlation_coefficient`] returns
//!   `(n·Σxy − Σx·Σy) / (sqrt(n·Σx² − (Σx)²) · sqrt(n·Σy² − (Σy)²))`.
//! - `_with` variants take [`BivariateOptions`]; the plain forms use
//!   `BivariateOptions::default()`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both statistics need `n ≥ 2`; shorter or mismatched inputs fail before
//!   any reduction runs, so no partial result is ever computed.
//! - All intermediate sums are [`HighPrecisionFloat`]; only the error
//!   payloads are narrowed to `f64`.
//! - Both statistics are symmetric in `(x, y)`: every intermediate is built
//!   from commutative double-double operations.
//!
//! Conventions
//! -----------
//! - Errors are returned verbatim via `?`. Rejections and sub-computation
//!   failures are also emitted as `tracing` events at `debug` level;
//!   intermediate sums at `trace` level. The crate never installs a
//!   subscriber.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the error taxonomy, symmetry, self-correlation, and
//!   the option plumbing; `tests/integration_return_correlations.rs` checks
//!   the reference return-series scenarios.
use tracing::{debug, trace};

use crate::precision::HighPrecisionFloat;
use crate::statistics::accumulators::{sum, sum_squared};
use crate::statistics::deviation::deviation_denominator_part;
use crate::statistics::errors::{StatsError, StatsResult};
use crate::statistics::options::BivariateOptions;
use crate::statistics::pair_reducer::sum_product_with;
use crate::statistics::sequence::NumericSequence;
use crate::statistics::validation::{MIN_PAIRED_OBSERVATIONS, validate_pair};

/// Sample covariance of two paired series.
///
/// Parameters
/// ----------
/// - `x`, `y`: any [`NumericSequence`]
///   Paired observations; must have equal length `n ≥ 2`.
///
/// Returns
/// -------
/// `StatsResult<HighPrecisionFloat>`
///   - `Ok((Σxy − Σx·Σy/n) / (n − 1))`.
///   - `Err(StatsError::LengthMismatch)` when lengths differ.
///   - `Err(StatsError::InsufficientData)` when `n < 2`.
///   - `Err(StatsError::NegativeResult)` propagated from the pair reducer
///     when Σxy < 0 (see [`SumProductPolicy`](crate::statistics::options::SumProductPolicy)).
///
/// Examples
/// --------
/// ```rust
/// use rust_statlib::statistics::bivariate::covariance;
///
/// let stock = [-0.10, -0.05, 0.00, 0.08, 0.14, 0.20, 0.25];
/// let market = [-0.20, -0.10, -0.05, 0.00, 0.10, 0.20, 0.30];
/// let cov = covariance(&stock, &market).unwrap();
/// assert!((cov.to_f64() - 0.022571428571428576).abs() < 1e-10);
/// ```
pub fn covariance<X, Y>(x: &X, y: &Y) -> StatsResult<HighPrecisionFloat>
where
    X: NumericSequence + ?Sized,
    Y: NumericSequence + ?Sized,
{
    covariance_with(x, y, &BivariateOptions::default())
}

/// Sample covariance with explicit [`BivariateOptions`].
pub fn covariance_with<X, Y>(x: &X, y: &Y, options: &BivariateOptions) -> StatsResult<HighPrecisionFloat>
where
    X: NumericSequence + ?Sized,
    Y: NumericSequence + ?Sized,
{
    let n = validate_pair(x.len(), y.len(), MIN_PAIRED_OBSERVATIONS)
        .inspect_err(|err| debug!(error = %err, "covariance: input rejected"))?;

    let sum_x = sum(x);
    let sum_y = sum(y);
    let sum_xy = sum_product_with(x, y, options.sum_product)
        .inspect_err(|err| debug!(error = %err, "covariance: sum of products failed"))?;
    trace!(n, %sum_x, %sum_y, %sum_xy, "covariance: reductions");

    let n_hp = HighPrecisionFloat::from(n);
    Ok((sum_xy - sum_x * sum_y / n_hp) / (n_hp - 1.0))
}

/// Pearson correlation coefficient of two paired series.
///
/// Parameters
/// ----------
/// - `x`, `y`: any [`NumericSequence`]
///   Paired observations; must have equal length `n ≥ 2`.
///
/// Returns
/// -------
/// `StatsResult<HighPrecisionFloat>`
///   - `Ok(r)` with `r ∈ [−1, 1]` up to rounding.
///   - `Err(StatsError::LengthMismatch)` when lengths differ.
///   - `Err(StatsError::InsufficientData)` when `n < 2`.
///   - `Err(StatsError::NegativeResult)` propagated from the pair reducer.
///   - `Err(StatsError::NegativeRadicand)` propagated from either
///     deviation term.
///   - `Err(StatsError::ZeroDenominator)` when either series is constant.
///
/// Examples
/// --------
/// ```rust
/// use rust_statlib::statistics::bivariate::correlation_coefficient;
///
/// let returns_a = [0.07, 0.09, 0.10];
/// let returns_b = [0.085, 0.07, 0.095];
/// let r = correlation_coefficient(&returns_a, &returns_b).unwrap();
/// assert!((r.to_f64() - 0.21677749238102959).abs() < 1e-10);
/// ```
pub fn correlation_coefficient<X, Y>(x: &X, y: &Y) -> StatsResult<HighPrecisionFloat>
where
    X: NumericSequence + ?Sized,
    Y: NumericSequence + ?Sized,
{
    correlation_coefficient_with(x, y, &BivariateOptions::default())
}

/// Pearson correlation coefficient with explicit [`BivariateOptions`].
pub fn correlation_coefficient_with<X, Y>(
    x: &X, y: &Y, options: &BivariateOptions,
) -> StatsResult<HighPrecisionFloat>
where
    X: NumericSequence + ?Sized,
    Y: NumericSequence + ?Sized,
{
    let n = validate_pair(x.len(), y.len(), MIN_PAIRED_OBSERVATIONS)
        .inspect_err(|err| debug!(error = %err, "correlation: input rejected"))?;

    let sum_x = sum(x);
    let sum_y = sum(y);
    let sum_x2 = sum_squared(x);
    let sum_y2 = sum_squared(y);
    let sum_xy = sum_product_with(x, y, options.sum_product)
        .inspect_err(|err| debug!(error = %err, "correlation: sum of products failed"))?;
    trace!(n, %sum_x, %sum_y, %sum_x2, %sum_y2, %sum_xy, "correlation: reductions");

    let numerator = HighPrecisionFloat::from(n) * sum_xy - sum_x * sum_y;

    let denominator_x = deviation_denominator_part(x, sum_x, sum_x2)
        .inspect_err(|err| debug!(error = %err, "correlation: x deviation term failed"))?;
    let denominator_y = deviation_denominator_part(y, sum_y, sum_y2)
        .inspect_err(|err| debug!(error = %err, "correlation: y deviation term failed"))?;

    let denominator = denominator_x * denominator_y;
    if denominator.is_zero() {
        let err = StatsError::ZeroDenominator {
            denominator_x: denominator_x.to_f64(),
            denominator_y: denominator_y.to_f64(),
        };
        debug!(error = %err, "correlation: degenerate denominator");
        return Err(err);
    }

    Ok(numerator / denominator)
}
