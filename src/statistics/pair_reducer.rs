//! statistics::pair_reducer — element-wise sum of products Σ xᵢ·yᵢ.
//!
//! Purpose
//! -------
//! Reduce two paired sequences to their sum of products, the cross term
//! shared by covariance and correlation, with the shape checks and sign
//! policy that both statistics rely on.
//!
//! Key behaviors
//! -------------
//! - Lengths are checked before emptiness: `LengthMismatch` wins over
//!   `EmptyInput`.
//! - Each term is widened before multiplying and accumulated left to right.
//! - Under [`SumProductPolicy::RejectNegative`] (the default) a negative
//!   total is reported as `NegativeResult`; this is a data-sanity policy for
//!   same-sign return series, not a property of dot products.
use crate::precision::HighPrecisionFloat;
use crate::statistics::errors::{StatsError, StatsResult};
use crate::statistics::options::SumProductPolicy;
use crate::statistics::sequence::NumericSequence;
use crate::statistics::validation::validate_same_length;

/// Σ xᵢ·yᵢ under the default [`SumProductPolicy::RejectNegative`].
///
/// Errors
/// ------
/// - `StatsError::LengthMismatch` when `x.len() != y.len()`.
/// - `StatsError::EmptyInput` when the sequences are empty.
/// - `StatsError::NegativeResult` when the total is below zero.
///
/// Examples
/// --------
/// ```rust
/// use rust_statlib::statistics::pair_reducer::sum_product;
///
/// let total = sum_product(&[1, 2, 3], &[4, 5, 6]).unwrap();
/// assert_eq!(total.to_f64(), 32.0);
/// ```
pub fn sum_product<X, Y>(x: &X, y: &Y) -> StatsResult<HighPrecisionFloat>
where
    X: NumericSequence + ?Sized,
    Y: NumericSequence + ?Sized,
{
    sum_product_with(x, y, SumProductPolicy::default())
}

/// Σ xᵢ·yᵢ with an explicit sign policy.
///
/// Same errors as [`sum_product`], except that `NegativeResult` is only
/// raised under [`SumProductPolicy::RejectNegative`].
pub fn sum_product_with<X, Y>(x: &X, y: &Y, policy: SumProductPolicy) -> StatsResult<HighPrecisionFloat>
where
    X: NumericSequence + ?Sized,
    Y: NumericSequence + ?Sized,
{
    let n = validate_same_length(x.len(), y.len())?;
    if n == 0 {
        return Err(StatsError::EmptyInput);
    }

    let total: HighPrecisionFloat = x.widened().zip(y.widened()).map(|(a, b)| a * b).sum();

    if policy == SumProductPolicy::RejectNegative && total.is_sign_negative() {
        return Err(StatsError::NegativeResult { value: total.to_f64() });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each error branch (length mismatch, empty input, negative total).
    // - Mixed element types and containers on the success path.
    // - The `AllowNegative` policy.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Length mismatch is reported with both lengths, even if one side is
    // empty.
    //
    // Given
    // -----
    // - x of length 0, y of length 2.
    //
    // Expect
    // ------
    // - `LengthMismatch { left: 0, right: 2 }`.
    fn length_mismatch_reported_before_emptiness() {
        // Arrange
        let x: [f64; 0] = [];
        let y = [1.0, 2.0];

        // Act
        let result = sum_product(&x, &y);

        // Assert
        assert_eq!(result, Err(StatsError::LengthMismatch { left: 0, right: 2 }));
    }

    #[test]
    fn empty_pair_is_rejected() {
        let x: Vec<i32> = Vec::new();
        assert_eq!(sum_product(&x, &x), Err(StatsError::EmptyInput));
    }

    #[test]
    // Purpose
    // -------
    // A negative total trips the default policy but not `AllowNegative`.
    //
    // Given
    // -----
    // - x = {1, −2}, y = {1, 3} → Σxy = −5.
    //
    // Expect
    // ------
    // - Default: `NegativeResult { value: -5.0 }`.
    // - AllowNegative: Ok(−5).
    fn negative_total_depends_on_policy() {
        // Arrange
        let x = [1.0, -2.0];
        let y = [1.0, 3.0];

        // Act
        let rejected = sum_product(&x, &y);
        let allowed = sum_product_with(&x, &y, SumProductPolicy::AllowNegative);

        // Assert
        assert_eq!(rejected, Err(StatsError::NegativeResult { value: -5.0 }));
        assert_eq!(allowed.map(HighPrecisionFloat::to_f64), Ok(-5.0));
    }

    #[test]
    fn mixed_containers_and_element_types() {
        let x = array![1.5_f64, 2.0, 0.5];
        let y: Vec<i64> = vec![2, 3, 4];
        let total = sum_product(&x, &y).map(HighPrecisionFloat::to_f64);
        assert_eq!(total, Ok(11.0));
    }

    #[test]
    fn zero_total_is_accepted() {
        let total = sum_product(&[0.0, 0.0], &[5.0, -5.0]);
        assert_eq!(total, Ok(HighPrecisionFloat::ZERO));
    }
}
