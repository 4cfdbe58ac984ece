//! statistics::accumulators — single-sequence reductions.
//!
//! Purpose
//! -------
//! Provide the sum, sum of squares, and product reductions from which every
//! other statistic in this crate is assembled.
//!
//! Key behaviors
//! -------------
//! - Each element is widened to [`HighPrecisionFloat`] before it is added,
//!   squared, or multiplied, so the original element type never overflows
//!   or rounds.
//! - Empty sequences reduce to the identity of the operation (0 for sums,
//!   1 for the product). None of these functions can fail.
//!
//! Invariants & assumptions
//! ------------------------
//! - `sum_squared` accumulates `x_i²` term by term; it is never derived from
//!   `sum` (no `(Σx)²/n` style shortcuts).
//! - Products of small integers are exact (`{1,2,3,4,5}` → `120`).
use crate::precision::HighPrecisionFloat;
use crate::statistics::sequence::NumericSequence;

/// Σ xᵢ over the widened elements; `0` for an empty sequence.
pub fn sum<S: NumericSequence + ?Sized>(seq: &S) -> HighPrecisionFloat {
    seq.widened().sum()
}

/// Σ xᵢ², squaring after widening; `0` for an empty sequence.
pub fn sum_squared<S: NumericSequence + ?Sized>(seq: &S) -> HighPrecisionFloat {
    seq.widened().map(HighPrecisionFloat::square).sum()
}

/// Π xᵢ over the widened elements; `1` for an empty sequence.
///
/// Overflow saturates to ±∞ as it would in `f64`; a zero element makes the
/// result zero regardless of the remaining elements.
pub fn product<S: NumericSequence + ?Sized>(seq: &S) -> HighPrecisionFloat {
    seq.widened().product()
}
