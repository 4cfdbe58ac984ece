//! precision — extended-precision arithmetic for statistical reductions.
//!
//! Purpose
//! -------
//! Host the numeric value type that every reduction in this crate accumulates
//! into. Keeping it separate from [`crate::statistics`] lets the statistics
//! layer reason purely in terms of formulas while this module owns rounding
//! behavior.
//!
//! Key behaviors
//! -------------
//! - Expose [`HighPrecisionFloat`], a double-double value with operator
//!   overloads, `sqrt`, `powi`, and `nth_root`.
//! - Provide exact widening from primitive integers and floats.
//!
//! Invariants & assumptions
//! ------------------------
//! - Values are normalized after every operation; non-finite values carry a
//!   zero low limb.
//!
//! Downstream usage
//! ----------------
//! - `statistics::sequence` widens each element into a
//!   [`HighPrecisionFloat`] before it enters any sum or product.
//! - Callers receive `HighPrecisionFloat` results and narrow them with
//!   [`HighPrecisionFloat::to_f64`] when they need a plain `f64`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`high_precision`] cover arithmetic accuracy, conversions,
//!   ordering, and formatting.

pub mod high_precision;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::high_precision::HighPrecisionFloat;
