//! rust_statlib — extended-precision descriptive and bivariate statistics.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the `python-bindings`
//! feature, as the PyO3 bridge exposing the statistics to Python through the
//! `_rust_statlib` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`precision` and `statistics`) and their
//!   primary items as the public crate surface.
//! - Define the `#[pyfunction]` wrappers and the `#[pymodule]` initializer
//!   registering a `statistics` submodule under `rust_statlib` so that
//!   dot-notation imports work from Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python callers receive `float` results narrowed from
//!   `HighPrecisionFloat`; `StatsError` surfaces as `ValueError` with the
//!   Rust message preserved.
//!
//! Conventions
//! -----------
//! - Python inputs are 1-D float64 array-likes (numpy arrays, pandas Series,
//!   Python sequences); Rust inputs are any `NumericSequence`.
//! - The optional Python `policy` argument accepts `"reject_negative"`
//!   (default) or `"allow_negative"` and maps to `SumProductPolicy`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`statistics`] directly and can ignore the
//!   PyO3 items guarded by `python-bindings`.
//! - The Python packaging layer imports `_rust_statlib.statistics` and may
//!   wrap it in a thin pure-Python facade.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_return_correlations.rs`; the PyO3 wrappers are left to
//!   Python-level smoke tests.

pub mod precision;
pub mod statistics;
pub mod utils;

pub use precision::HighPrecisionFloat;
pub use statistics::{
    BivariateOptions, NumericSequence, StatsError, StatsResult, SumProductPolicy, average,
    correlation_coefficient, covariance, geometric_mean, product, sum, sum_product, sum_squared,
};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::utils::{as_f64_slice, extract_bivariate_options, extract_f64_array};

/// Apply a single-sequence reduction to a Python array-like.
#[cfg(feature = "python-bindings")]
fn reduce_one<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, reduce: impl Fn(&[f64]) -> HighPrecisionFloat,
) -> PyResult<f64> {
    let arr = extract_f64_array(py, data)?;
    let values = as_f64_slice(&arr, "data")?;
    Ok(reduce(values).to_f64())
}

/// Apply a fallible paired reduction to two Python array-likes.
#[cfg(feature = "python-bindings")]
fn reduce_pair<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
    reduce: impl Fn(&[f64], &[f64]) -> StatsResult<HighPrecisionFloat>,
) -> PyResult<f64> {
    let x_arr = extract_f64_array(py, x)?;
    let y_arr = extract_f64_array(py, y)?;
    let x_values = as_f64_slice(&x_arr, "x")?;
    let y_values = as_f64_slice(&y_arr, "y")?;
    Ok(reduce(x_values, y_values)?.to_f64())
}

/// Sum of the elements; `0.0` for an empty input.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "sum")]
#[pyo3(text_signature = "(data, /)")]
fn py_sum<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<f64> {
    reduce_one(py, data, |values| statistics::sum(values))
}

/// Sum of squared elements; `0.0` for an empty input.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "sum_squared")]
#[pyo3(text_signature = "(data, /)")]
fn py_sum_squared<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<f64> {
    reduce_one(py, data, |values| statistics::sum_squared(values))
}

/// Product of the elements; `1.0` for an empty input.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "product")]
#[pyo3(text_signature = "(data, /)")]
fn py_product<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<f64> {
    reduce_one(py, data, |values| statistics::product(values))
}

/// Arithmetic mean; `0.0` for an empty input.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "average")]
#[pyo3(text_signature = "(data, /)")]
fn py_average<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<f64> {
    reduce_one(py, data, |values| statistics::average(values))
}

/// Geometric mean; `0.0` for an empty input.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "geometric_mean")]
#[pyo3(text_signature = "(data, /)")]
fn py_geometric_mean<'py>(py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<f64> {
    reduce_one(py, data, |values| statistics::geometric_mean(values))
}

/// Sum of element-wise products of two equal-length series.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "sum_product")]
#[pyo3(signature = (x, y, policy = None), text_signature = "(x, y, /, policy='reject_negative')")]
fn py_sum_product<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, policy: Option<&str>,
) -> PyResult<f64> {
    let options = extract_bivariate_options(policy)?;
    reduce_pair(py, x, y, |xs, ys| statistics::sum_product_with(xs, ys, options.sum_product))
}

/// Sample covariance of two equal-length series (n ≥ 2).
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "covariance")]
#[pyo3(signature = (x, y, policy = None), text_signature = "(x, y, /, policy='reject_negative')")]
fn py_covariance<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, policy: Option<&str>,
) -> PyResult<f64> {
    let options = extract_bivariate_options(policy)?;
    reduce_pair(py, x, y, |xs, ys| statistics::covariance_with(xs, ys, &options))
}

/// Pearson correlation coefficient of two equal-length series (n ≥ 2).
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "correlation_coefficient")]
#[pyo3(signature = (x, y, policy = None), text_signature = "(x, y, /, policy='reject_negative')")]
fn py_correlation_coefficient<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, policy: Option<&str>,
) -> PyResult<f64> {
    let options = extract_bivariate_options(policy)?;
    reduce_pair(py, x, y, |xs, ys| statistics::correlation_coefficient_with(xs, ys, &options))
}

/// _rust_statlib — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_statlib` Python module and register the `statistics`
/// submodule used by the public `rust_statlib` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_statlib<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistics_mod = PyModule::new(py, "statistics")?;
    register_statistics(m, &statistics_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    py.import("sys")?.getattr("modules")?.set_item("rust_statlib.statistics", statistics_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn register_statistics<'py>(parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_sum, m)?)?;
    m.add_function(wrap_pyfunction!(py_sum_squared, m)?)?;
    m.add_function(wrap_pyfunction!(py_product, m)?)?;
    m.add_function(wrap_pyfunction!(py_average, m)?)?;
    m.add_function(wrap_pyfunction!(py_geometric_mean, m)?)?;
    m.add_function(wrap_pyfunction!(py_sum_product, m)?)?;
    m.add_function(wrap_pyfunction!(py_covariance, m)?)?;
    m.add_function(wrap_pyfunction!(py_correlation_coefficient, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
