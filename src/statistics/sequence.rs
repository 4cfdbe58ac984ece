//! statistics::sequence — capability traits for numeric inputs.
//!
//! Purpose
//! -------
//! Let every statistic accept "anything with a length and ordered numeric
//! elements" (slices, arrays, `Vec`, one-dimensional `ndarray` arrays and
//! views) of any primitive arithmetic element type, while the reductions
//! themselves only ever see widened [`HighPrecisionFloat`] values.
//!
//! Key behaviors
//! -------------
//! - [`NumericElement`] widens a primitive integer or float into a
//!   [`HighPrecisionFloat`] without loss.
//! - [`NumericSequence`] exposes `len`, `is_empty`, an in-order element
//!   iterator, and a widened iterator built on top of it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Sequences are borrowed immutably for the duration of a call and never
//!   retained.
//! - Iteration order is the natural index order of the container.
use ndarray::{ArrayBase, Data, Ix1};

use crate::precision::HighPrecisionFloat;

/// Primitive arithmetic element that widens exactly into a
/// [`HighPrecisionFloat`].
pub trait NumericElement: Copy + 'static {
    fn widen(self) -> HighPrecisionFloat;
}

macro_rules! numeric_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericElement for $ty {
                #[inline]
                fn widen(self) -> HighPrecisionFloat {
                    HighPrecisionFloat::from(self)
                }
            }
        )*
    };
}

numeric_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// NumericSequence — ordered, finite collection of arithmetic values.
///
/// Purpose
/// -------
/// Abstract over the container holding a series so that statistics are
/// written once and work for slices, fixed-size arrays, vectors, and
/// `ndarray` 1-D arrays alike.
///
/// Required methods
/// ----------------
/// - `len`: number of elements.
/// - `values`: in-order iterator over the elements by value.
///
/// Provided methods
/// ----------------
/// - `is_empty`: `len() == 0`.
/// - `widened`: `values()` mapped through [`NumericElement::widen`].
pub trait NumericSequence {
    type Element: NumericElement;

    fn len(&self) -> usize;

    fn values(&self) -> impl Iterator<Item = Self::Element> + '_;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn widened(&self) -> impl Iterator<Item = HighPrecisionFloat> + '_ {
        self.values().map(NumericElement::widen)
    }
}

impl<T: NumericElement> NumericSequence for [T] {
    type Element = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

impl<T: NumericElement, const N: usize> NumericSequence for [T; N] {
    type Element = T;

    fn len(&self) -> usize {
        N
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

impl<T: NumericElement> NumericSequence for Vec<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

impl<T, S> NumericSequence for ArrayBase<S, Ix1>
where
    T: NumericElement,
    S: Data<Elem = T>,
{
    type Element = T;

    fn len(&self) -> usize {
        self.dim()
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array, s};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `len` / `is_empty` / `values` for every container implementation.
    // - Widening of mixed primitive element types.
    // -------------------------------------------------------------------------

    fn collect<S: NumericSequence + ?Sized>(seq: &S) -> Vec<f64> {
        seq.widened().map(HighPrecisionFloat::to_f64).collect()
    }

    #[test]
    // Purpose
    // -------
    // All container impls agree on length and element order.
    //
    // Given
    // -----
    // - The same three values stored in a slice, an array, a Vec, an
    //   `Array1`, and a strided `ArrayView1`.
    //
    // Expect
    // ------
    // - Identical widened element lists of length 3.
    fn containers_expose_same_length_and_order() {
        // Arrange
        let arr = [1.5_f64, -2.0, 3.25];
        let vec = arr.to_vec();
        let nd: Array1<f64> = array![1.5, -2.0, 3.25];
        let wide: Array1<f64> = array![1.5, 0.0, -2.0, 0.0, 3.25];
        let strided = wide.slice(s![..;2]);

        // Act / Assert
        let expected = vec![1.5, -2.0, 3.25];
        assert_eq!(collect(&arr[..]), expected);
        assert_eq!(collect(&arr), expected);
        assert_eq!(collect(&vec), expected);
        assert_eq!(collect(&nd), expected);
        assert_eq!(collect(&strided), expected);
        assert_eq!(NumericSequence::len(&strided), 3);
        assert!(!NumericSequence::is_empty(&nd));
    }

    #[test]
    fn empty_containers_report_empty() {
        let empty: [i32; 0] = [];
        assert!(NumericSequence::is_empty(&empty));
        assert!(NumericSequence::is_empty(&Vec::<u8>::new()));
        assert!(NumericSequence::is_empty(&Array1::<f32>::zeros(0)));
    }

    #[test]
    fn integer_and_float_elements_widen_exactly() {
        assert_eq!(collect(&[u8::MAX]), vec![255.0]);
        assert_eq!(collect(&[-7_i16]), vec![-7.0]);
        assert_eq!(collect(&[0.5_f32]), vec![0.5]);
        let big = [i64::MIN];
        assert_eq!(big.widened().next(), Some(HighPrecisionFloat::from(i64::MIN)));
    }
}
