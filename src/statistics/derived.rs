//! statistics::derived — means built on the accumulators.
//!
//! Both functions short-circuit an empty sequence to `0` instead of dividing
//! by zero or taking a zeroth root.
use crate::precision::HighPrecisionFloat;
use crate::statistics::accumulators::{product, sum};
use crate::statistics::sequence::NumericSequence;

/// Arithmetic mean `Σx / n`; `0` for an empty sequence.
pub fn average<S: NumericSequence + ?Sized>(seq: &S) -> HighPrecisionFloat {
    let n = seq.len();
    if n == 0 {
        return HighPrecisionFloat::ZERO;
    }
    sum(seq) / HighPrecisionFloat::from(n)
}

/// Geometric mean `(Πx)^(1/n)`; `0` for an empty sequence.
///
/// Element signs are not validated. A negative product yields the negative
/// real root when `n` is odd and `NaN` when `n` is even.
pub fn geometric_mean<S: NumericSequence + ?Sized>(seq: &S) -> HighPrecisionFloat {
    let n = seq.len();
    if n == 0 {
        return HighPrecisionFloat::ZERO;
    }
    let total = product(seq);
    match u32::try_from(n) {
        Ok(order) => total.nth_root(order),
        Err(_) => HighPrecisionFloat::from(total.to_f64().powf(1.0 / n as f64)),
    }
}
