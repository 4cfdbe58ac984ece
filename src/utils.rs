//! utils — conversion helpers for the PyO3 binding layer.
//!
//! Everything here is compiled only with the `python-bindings` feature.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::statistics::{BivariateOptions, SumProductPolicy};

/// Accept a 1-D numpy array, a pandas Series, or a Python sequence of
/// floats as a contiguous read-only `float64` array.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Borrow the contiguous data of an array returned by [`extract_f64_array`].
#[cfg(feature = "python-bindings")]
pub fn as_f64_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>, name: &str) -> PyResult<&'a [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array")))
}

/// Build [`BivariateOptions`] from the optional Python `policy` argument.
///
/// `None` keeps the default (`"reject_negative"`).
#[cfg(feature = "python-bindings")]
pub fn extract_bivariate_options(policy: Option<&str>) -> PyResult<BivariateOptions> {
    let sum_product = match policy {
        Some(name) => name.parse::<SumProductPolicy>()?,
        None => SumProductPolicy::default(),
    };
    Ok(BivariateOptions::new(sum_product))
}
