//! statistics — descriptive and bivariate statistics over numeric sequences.
//!
//! Purpose
//! -------
//! Collect the sequence reductions (sum, sum of squares, product, sum of
//! products), the means derived from them, and their composition into
//! sample covariance and Pearson correlation, together with the shared error
//! type, shape guards, and configuration.
//!
//! Key behaviors
//! -------------
//! - Accept any [`NumericSequence`] (slices, arrays, `Vec`, 1-D `ndarray`
//!   arrays and views) of primitive integers or floats.
//! - Accumulate every reduction in [`HighPrecisionFloat`](crate::precision::HighPrecisionFloat).
//! - Report failures through [`StatsResult`] with structured [`StatsError`]
//!   variants; nothing here prints or panics on user input.
//!
//! Invariants & assumptions
//! ------------------------
//! - Paired inputs must have equal length; covariance and correlation need
//!   at least two observations.
//! - Failures propagate verbatim from the innermost computation to the
//!   caller: the first failure wins.
//! - Functions are pure: no retained state, no I/O, safe to call
//!   concurrently on shared read-only inputs.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_statlib::statistics::{correlation_coefficient, covariance, StatsResult};
//!
//!   fn beta_inputs(stock: &[f64], market: &[f64]) -> StatsResult<(f64, f64)> {
//!       let cov = covariance(stock, market)?;
//!       let r = correlation_coefficient(stock, market)?;
//!       Ok((cov.to_f64(), r.to_f64()))
//!   }
//!   ```
//!
//! - Callers working with mixed-sign data should pass
//!   [`BivariateOptions`] with
//!   [`SumProductPolicy::AllowNegative`] to the `_with` variants.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own branches; the
//!   reference return-series scenarios live in
//!   `tests/integration_return_correlations.rs`.

pub mod accumulators;
pub mod bivariate;
pub mod derived;
pub mod deviation;
pub mod errors;
pub mod options;
pub mod pair_reducer;
pub mod sequence;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::accumulators::{product, sum, sum_squared};
pub use self::bivariate::{
    correlation_coefficient, correlation_coefficient_with, covariance, covariance_with,
};
pub use self::derived::{average, geometric_mean};
pub use self::deviation::{deviation_denominator_part, has_zero_spread, raw_deviation_denominator_part};
pub use self::errors::{StatsError, StatsResult};
pub use self::options::{BivariateOptions, SumProductPolicy};
pub use self::pair_reducer::{sum_product, sum_product_with};
pub use self::sequence::{NumericElement, NumericSequence};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_statlib::statistics::prelude::*;
//
// to import the main statistics surface in a single line.

pub mod prelude {
    pub use super::bivariate::{correlation_coefficient, covariance};
    pub use super::errors::{StatsError, StatsResult};
    pub use super::options::{BivariateOptions, SumProductPolicy};
    pub use super::sequence::NumericSequence;
    pub use crate::precision::HighPrecisionFloat;
}
