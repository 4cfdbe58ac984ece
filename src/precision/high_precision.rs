//! precision::high_precision — double-double accumulator for reductions.
//!
//! Purpose
//! -------
//! Provide [`HighPrecisionFloat`], an extended-precision floating-point value
//! represented as an unevaluated sum `hi + lo` of two `f64` limbs. The pair
//! carries roughly 106 bits of significand, which is what every reduction in
//! [`crate::statistics`] accumulates into before the final result is handed
//! back to the caller.
//!
//! Key behaviors
//! -------------
//! - Error-free transformations (`two_sum`, `quick_two_sum`, `two_prod`)
//!   capture the rounding error of each `f64` operation in the low limb.
//! - Arithmetic operators (`+`, `-`, `*`, `/`, unary `-`, and the assign
//!   forms) on `HighPrecisionFloat` and mixed `f64` right-hand sides.
//! - `sqrt`, `powi`, and `nth_root` refined by one Newton step in
//!   double-double arithmetic.
//! - Exact widening from every primitive integer type up to 64 bits, and from
//!   `f32`/`f64`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Finite values are kept normalized: `|lo| ≤ ulp(hi) / 2`, so
//!   `to_f64()` returns `hi` rounded with `lo` and the pair representation is
//!   unique.
//! - Non-finite results (±∞, NaN) collapse to `lo = 0` so that they propagate
//!   like their `f64` counterparts instead of spawning NaNs in the low limb.
//! - `two_prod` relies on a correctly rounded fused multiply-add
//!   (`f64::mul_add`).
//!
//! Conventions
//! -----------
//! - Algorithms follow Dekker (1971) and Knuth's TwoSum, as popularised by
//!   the QD library of Hida, Li & Bailey.
//! - Nothing here allocates, logs, or touches global state.
//!
//! Testing notes
//! -------------
//! - Unit tests check digit recovery where plain `f64` cancels, exact
//!   widening of extreme 64-bit integers, and residuals of `sqrt`, division
//!   and `nth_root` against the double-double tolerance.
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// HighPrecisionFloat — double-double extended-precision value.
///
/// Purpose
/// -------
/// Serve as the accumulator type for all sums, products, and derived
/// quantities in the statistics layer, reducing cumulative rounding error on
/// long or ill-conditioned inputs (e.g. sums of squares of values in the
/// millions).
///
/// Fields
/// ------
/// - `hi`: `f64`
///   Leading limb; equals the value rounded to the nearest `f64`.
/// - `lo`: `f64`
///   Trailing limb holding the rounding error of `hi`.
///
/// Invariants
/// ----------
/// - For finite values, `hi + lo` rounds to `hi` in `f64` arithmetic.
/// - For non-finite values, `lo == 0.0`.
///
/// Performance
/// -----------
/// - `Copy`, 16 bytes; each arithmetic operation costs a small constant
///   number of `f64` operations (about 20 for addition, 10 for
///   multiplication with FMA).
///
/// Notes
/// -----
/// - Comparison is lexicographic on `(hi, lo)`, which matches numeric order
///   for normalized values. NaN compares unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HighPrecisionFloat {
    hi: f64,
    lo: f64,
}

impl HighPrecisionFloat {
    /// Additive identity.
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// Multiplicative identity.
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// Not-a-number.
    pub const NAN: Self = Self { hi: f64::NAN, lo: 0.0 };

    /// Build a value from two limbs whose exact sum is the intended value.
    ///
    /// The limbs do not need to be normalized; `hi + lo` is re-split with an
    /// error-free `two_sum` so the invariant holds afterwards.
    pub fn from_parts(hi: f64, lo: f64) -> Self {
        let (s, e) = two_sum(hi, lo);
        Self::normalized(s, e)
    }

    /// Leading limb.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Trailing limb.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Round to the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    pub fn is_zero(&self) -> bool {
        self.hi == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.hi.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.hi.is_nan()
    }

    /// `true` when the value is strictly below zero.
    ///
    /// Unlike `f64::is_sign_negative`, negative zero is not reported as
    /// negative, and a zero leading limb defers to the trailing limb.
    pub fn is_sign_negative(&self) -> bool {
        self.hi < 0.0 || (self.hi == 0.0 && self.lo < 0.0)
    }

    pub fn abs(self) -> Self {
        if self.is_sign_negative() { -self } else { self }
    }

    /// `self²`.
    pub fn square(self) -> Self {
        self * self
    }

    /// Square root with one Newton correction in double-double arithmetic.
    ///
    /// Returns
    /// -------
    /// - `0` for a zero input.
    /// - `NaN` for a negative input; callers that must distinguish a
    ///   negative radicand check the sign first.
    /// - `+∞` for `+∞`.
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        if self.is_sign_negative() || self.is_nan() {
            return Self::NAN;
        }
        if !self.is_finite() {
            return self;
        }

        let approx = self.hi.sqrt();
        let residual = self - Self::from(approx).square();
        let correction = residual.hi / (2.0 * approx);
        let (hi, lo) = quick_two_sum(approx, correction);
        Self::normalized(hi, lo)
    }

    /// Integer power by binary exponentiation.
    ///
    /// `powi(0)` is `1` for every input (including zero), matching
    /// `f64::powi`.
    pub fn powi(self, exp: i32) -> Self {
        let mut base = self;
        let mut remaining = exp.unsigned_abs();
        let mut acc = Self::ONE;
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc *= base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.square();
            }
        }
        if exp < 0 { Self::ONE / acc } else { acc }
    }

    /// Real `n`-th root.
    ///
    /// Parameters
    /// ----------
    /// - `n`: `u32`
    ///   Root order. `n == 0` is undefined and yields `NaN`.
    ///
    /// Returns
    /// -------
    /// - The real root, refined by one Newton step
    ///   `x ← x + (a − xⁿ) / (n·xⁿ⁻¹)` from an `f64` starting point.
    /// - For negative inputs, the negative real root when `n` is odd and
    ///   `NaN` when `n` is even.
    pub fn nth_root(self, n: u32) -> Self {
        if n == 0 || self.is_nan() {
            return Self::NAN;
        }
        if n == 1 || self.is_zero() {
            return self;
        }
        let negative = self.is_sign_negative();
        if negative && n % 2 == 0 {
            return Self::NAN;
        }
        if !self.is_finite() {
            return self;
        }

        let magnitude = self.abs();
        let start = magnitude.hi.powf(1.0 / f64::from(n));
        if start == 0.0 || !start.is_finite() {
            let root = Self::from(start);
            return if negative { -root } else { root };
        }

        let x = Self::from(start);
        // Orders past `i32::MAX` keep the `f64` estimate unrefined.
        let Ok(exp) = i32::try_from(n - 1) else {
            return if negative { -x } else { x };
        };
        let x_pow_n_minus_1 = x.powi(exp);
        let derivative = x_pow_n_minus_1 * f64::from(n);
        let root = if derivative.is_finite() && !derivative.is_zero() {
            x + (magnitude - x_pow_n_minus_1 * x) / derivative
        } else {
            x
        };

        if negative { -root } else { root }
    }

    #[inline]
    fn normalized(hi: f64, lo: f64) -> Self {
        if hi.is_finite() { Self { hi, lo } } else { Self { hi, lo: 0.0 } }
    }

    #[inline]
    fn from_i128(value: i128) -> Self {
        let hi = value as f64;
        // `hi` rounds `value`, so the residual is below 2¹¹ and exact in f64.
        let lo = (value - hi as i128) as f64;
        Self::from_parts(hi, lo)
    }
}

//
// ---------- Error-free transformations ----------
//

/// Knuth's TwoSum: `a + b = s + e` exactly.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Dekker's FastTwoSum; requires `|a| ≥ |b|` or `a == 0`.
#[inline]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// `a · b = p + e` exactly, via a fused multiply-add.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

//
// ---------- Arithmetic ----------
//

impl Add for HighPrecisionFloat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (s1, s2) = two_sum(self.hi, rhs.hi);
        if !s1.is_finite() {
            return Self::normalized(s1, 0.0);
        }
        let (t1, t2) = two_sum(self.lo, rhs.lo);
        let (s1, s2) = quick_two_sum(s1, s2 + t1);
        let (hi, lo) = quick_two_sum(s1, s2 + t2);
        Self::normalized(hi, lo)
    }
}

impl Neg for HighPrecisionFloat {
    type Output = Self;

    fn neg(self) -> Self {
        Self { hi: -self.hi, lo: -self.lo }
    }
}

impl Sub for HighPrecisionFloat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for HighPrecisionFloat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p1, p2) = two_prod(self.hi, rhs.hi);
        if !p1.is_finite() {
            return Self::normalized(p1, 0.0);
        }
        let p2 = p2 + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = quick_two_sum(p1, p2);
        Self::normalized(hi, lo)
    }
}

impl Div for HighPrecisionFloat {
    type Output = Self;

    /// Long division with three `f64` quotient digits.
    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() || !rhs.is_finite() {
            return Self::normalized(q1, 0.0);
        }
        let r = self - rhs * q1;
        let q2 = r.hi / rhs.hi;
        let r = r - rhs * q2;
        let q3 = r.hi / rhs.hi;
        let (q1, q2) = quick_two_sum(q1, q2);
        Self { hi: q1, lo: q2 } + q3
    }
}

macro_rules! forward_f64_rhs {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl $trait<f64> for HighPrecisionFloat {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: f64) -> Self {
                    $trait::$method(self, Self::from(rhs))
                }
            }
        )*
    };
}

forward_f64_rhs!(Add::add, Sub::sub, Mul::mul, Div::div);

macro_rules! assign_ops {
    ($($trait:ident :: $method:ident => $op:tt),* $(,)?) => {
        $(
            impl $trait for HighPrecisionFloat {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl $trait<f64> for HighPrecisionFloat {
                #[inline]
                fn $method(&mut self, rhs: f64) {
                    *self = *self $op Self::from(rhs);
                }
            }
        )*
    };
}

assign_ops!(
    AddAssign::add_assign => +,
    SubAssign::sub_assign => -,
    MulAssign::mul_assign => *,
    DivAssign::div_assign => /,
);

impl Sum for HighPrecisionFloat {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for HighPrecisionFloat {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl PartialOrd for HighPrecisionFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi)? {
            Ordering::Equal => self.lo.partial_cmp(&other.lo),
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for HighPrecisionFloat {
    /// Formats the value rounded to `f64`, honouring width and precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

//
// ---------- Conversions ----------
//

impl From<f64> for HighPrecisionFloat {
    fn from(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }
}

impl From<f32> for HighPrecisionFloat {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<HighPrecisionFloat> for f64 {
    fn from(value: HighPrecisionFloat) -> f64 {
        value.to_f64()
    }
}

macro_rules! from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HighPrecisionFloat {
                fn from(value: $ty) -> Self {
                    Self::from(f64::from(value))
                }
            }
        )*
    };
}

from_small_int!(i8, i16, i32, u8, u16, u32);

macro_rules! from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HighPrecisionFloat {
                fn from(value: $ty) -> Self {
                    Self::from_i128(value as i128)
                }
            }
        )*
    };
}

from_wide_int!(i64, u64, isize, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of low-order digits that plain `f64` arithmetic loses.
    // - Exact widening of 64-bit integers beyond 2⁵³.
    // - Accuracy of division, square root, and n-th root.
    // - Ordering, sign handling, and formatting.
    //
    // They intentionally DO NOT cover:
    // - Statistics built on top of this type; see `statistics::*`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Show that the low limb keeps an addend that `f64` absorbs.
    //
    // Given
    // -----
    // - 1e16 + 1 − 1e16, where 1 is below half an ulp of 1e16.
    //
    // Expect
    // ------
    // - The double-double result is exactly 1; plain f64 gives 0.
    fn addition_recovers_digits_lost_in_f64() {
        // Arrange
        let big = HighPrecisionFloat::from(1e16);

        // Act
        let result = big + 1.0 - big;

        // Assert
        assert_eq!(result.to_f64(), 1.0);
        assert_eq!(1e16_f64 + 1.0 - 1e16, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Check that the product of two f64 values is captured exactly.
    //
    // Given
    // -----
    // - a = 1 + 2⁻³⁰, whose square needs 61 significand bits.
    //
    // Expect
    // ------
    // - hi + lo reproduces 1 + 2⁻²⁹ + 2⁻⁶⁰ with a non-zero low limb.
    fn multiplication_is_exact_for_two_doubles() {
        // Arrange
        let a = HighPrecisionFloat::from(1.0 + 2f64.powi(-30));

        // Act
        let sq = a.square();

        // Assert
        assert_eq!(sq.hi(), 1.0 + 2f64.powi(-29));
        assert_eq!(sq.lo(), 2f64.powi(-60));
    }

    #[test]
    // Purpose
    // -------
    // Verify that 64-bit integers beyond 2⁵³ widen without loss.
    //
    // Given
    // -----
    // - i64::MAX and i64::MAX − 1, which share the same nearest f64.
    //
    // Expect
    // ------
    // - Their double-double difference is exactly 1.
    fn wide_integers_widen_exactly() {
        // Arrange
        let a = HighPrecisionFloat::from(i64::MAX);
        let b = HighPrecisionFloat::from(i64::MAX - 1);

        // Act
        let diff = a - b;

        // Assert
        assert_eq!(diff, HighPrecisionFloat::ONE);
        assert_eq!(
            HighPrecisionFloat::from(u64::MAX) - HighPrecisionFloat::from(u64::MAX - 3),
            HighPrecisionFloat::from(3)
        );
    }

    #[test]
    // Purpose
    // -------
    // Division followed by multiplication should round-trip to within
    // double-double precision.
    //
    // Given
    // -----
    // - 1 / 3.
    //
    // Expect
    // ------
    // - (1/3)·3 − 1 is below 1e-30 in magnitude.
    fn division_is_accurate_to_double_double_precision() {
        // Arrange
        let third = HighPrecisionFloat::ONE / 3.0;

        // Act
        let residual = third * 3.0 - HighPrecisionFloat::ONE;

        // Assert
        assert!(residual.abs().to_f64() < 1e-30, "residual too large: {residual:?}");
        assert!(third.lo() != 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Division by zero follows f64 semantics instead of panicking.
    //
    // Given
    // -----
    // - 1 / 0 and 0 / 0.
    //
    // Expect
    // ------
    // - +∞ and NaN respectively.
    fn division_by_zero_matches_f64() {
        let inf = HighPrecisionFloat::ONE / HighPrecisionFloat::ZERO;
        let nan = HighPrecisionFloat::ZERO / HighPrecisionFloat::ZERO;

        assert!(!inf.is_finite() && inf.hi() > 0.0);
        assert!(nan.is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Check the Newton-refined square root.
    //
    // Given
    // -----
    // - sqrt(2), sqrt(0), sqrt(−1).
    //
    // Expect
    // ------
    // - sqrt(2)² − 2 below 1e-30; sqrt(0) = 0; sqrt(−1) is NaN.
    fn sqrt_refines_beyond_f64() {
        // Arrange
        let two = HighPrecisionFloat::from(2.0);

        // Act
        let root = two.sqrt();

        // Assert
        assert!((root.square() - two).abs().to_f64() < 1e-30);
        assert_eq!(HighPrecisionFloat::ZERO.sqrt(), HighPrecisionFloat::ZERO);
        assert!(HighPrecisionFloat::from(-1.0).sqrt().is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Validate integer powers and real roots on exact cases.
    //
    // Given
    // -----
    // - 10⁵, 100000^(1/5), (−27)^(1/3), (−16)^(1/4), 2⁻².
    //
    // Expect
    // ------
    // - 100000, 10, −3, NaN, 0.25.
    fn powi_and_nth_root_handle_exact_cases() {
        let ten = HighPrecisionFloat::from(10);
        assert_eq!(ten.powi(5).to_f64(), 100_000.0);
        assert_eq!(HighPrecisionFloat::from(2).powi(-2).to_f64(), 0.25);
        assert_eq!(ten.powi(0), HighPrecisionFloat::ONE);

        assert_abs_diff_eq!(HighPrecisionFloat::from(100_000).nth_root(5).to_f64(), 10.0, epsilon = 1e-15);
        assert_abs_diff_eq!(HighPrecisionFloat::from(-27).nth_root(3).to_f64(), -3.0, epsilon = 1e-15);
        assert!(HighPrecisionFloat::from(-16).nth_root(4).is_nan());
        assert!(HighPrecisionFloat::from(8).nth_root(0).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Root orders beyond `i32::MAX` still return the real root.
    //
    // Given
    // -----
    // - 2^(1/3_000_000_000) and (−8)^(1/u32::MAX).
    //
    // Expect
    // ------
    // - Agreement with `f64::powf`, sign preserved for the odd order.
    fn nth_root_handles_orders_past_i32_range() {
        let order = 3_000_000_000_u32;
        let root = HighPrecisionFloat::from(2).nth_root(order);
        assert_abs_diff_eq!(root.to_f64(), 2f64.powf(1.0 / f64::from(order)), epsilon = 1e-15);

        let odd = HighPrecisionFloat::from(-8).nth_root(u32::MAX);
        assert_abs_diff_eq!(odd.to_f64(), -(8f64.powf(1.0 / f64::from(u32::MAX))), epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Ordering and sign predicates respect the low limb.
    //
    // Given
    // -----
    // - 1 + 2⁻⁸⁰ (invisible in f64) and 1 − (1 + 2⁻⁸⁰).
    //
    // Expect
    // ------
    // - 1 + 2⁻⁸⁰ > 1 although both round to 1.0; the difference is
    //   negative; −0 is not reported as negative.
    fn ordering_and_sign_use_low_limb() {
        let tiny = HighPrecisionFloat::ONE + 2f64.powi(-80);
        assert!(tiny > HighPrecisionFloat::ONE);
        assert_eq!(tiny.to_f64(), 1.0);

        let below_zero = HighPrecisionFloat::ONE - tiny;
        assert!(below_zero.is_sign_negative());
        assert!(!HighPrecisionFloat::from(-0.0).is_sign_negative());
    }

    #[test]
    fn display_honours_precision() {
        let value = HighPrecisionFloat::from(100_000);
        assert_eq!(format!("{value:.2}"), "100000.00");
        assert_eq!(value.to_string(), "100000");
    }

    #[test]
    fn sum_and_product_iterators_use_identities() {
        let empty: Vec<HighPrecisionFloat> = Vec::new();
        assert_eq!(empty.iter().copied().sum::<HighPrecisionFloat>(), HighPrecisionFloat::ZERO);
        assert_eq!(empty.into_iter().product::<HighPrecisionFloat>(), HighPrecisionFloat::ONE);
    }
}
