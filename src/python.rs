//! Python bindings
//!
//! Mirrors the numpy-facing API: every angle argument accepts a float or a
//! 1-D array and the result takes the matching shape. Attitude arguments are
//! either a `Quat` from this module or any object whose `.transform` is a 3x3
//! float array.
use ndarray::{Array1, Array2};
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::aca::{radec2yagzag, radec2yagzag_batch, yagzag2radec, yagzag2radec_batch};
use crate::alignment::quat_x_to_vec_str;
use crate::conversions::{eci2radec, eci2radec_batch, radec2eci, radec2eci_batch};
use crate::error::QuatUtilError;
use crate::quaternion::{Attitude, Quat};
use crate::utils::vector_math::norm;

impl From<QuatUtilError> for PyErr {
    fn from(err: QuatUtilError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Attitude quaternion
#[pyclass(name = "Quat")]
#[derive(Clone, Debug)]
pub struct PyQuat {
    inner: Quat,
}

#[pymethods]
impl PyQuat {
    /// Build from `[ra, dec, roll]` (degrees) or `[x, y, z, w]`
    #[new]
    fn new(attitude: Vec<f64>) -> PyResult<Self> {
        let inner = match attitude.as_slice() {
            [ra, dec, roll] => Quat::from_equatorial(*ra, *dec, *roll),
            [x, y, z, w] => Quat::new([*x, *y, *z, *w]),
            other => {
                return Err(PyValueError::new_err(format!(
                    "Quat needs 3 (ra, dec, roll) or 4 (x, y, z, w) values, got {}",
                    other.len()
                )))
            }
        };
        Ok(PyQuat { inner })
    }

    #[getter]
    fn q<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        Array1::from(self.inner.q().to_vec()).into_pyarray(py)
    }

    #[getter]
    fn transform<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        let t = self.inner.transform();
        Array2::from_shape_fn((3, 3), |(i, j)| t[i][j]).into_pyarray(py)
    }

    #[getter]
    fn ra(&self) -> f64 {
        self.inner.ra()
    }

    #[getter]
    fn dec(&self) -> f64 {
        self.inner.dec()
    }

    #[getter]
    fn roll(&self) -> f64 {
        self.inner.roll()
    }

    fn inv(&self) -> PyQuat {
        PyQuat {
            inner: self.inner.inv(),
        }
    }

    fn __mul__(&self, other: PyRef<'_, PyQuat>) -> PyQuat {
        PyQuat {
            inner: self.inner * other.inner,
        }
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// Float or 1-D float array argument
enum Angles {
    Scalar(f64),
    Array(Vec<f64>),
}

/// A pair of angle arguments after numpy-style scalar broadcasting
enum PairedAngles {
    Scalar(f64, f64),
    Array(Vec<f64>, Vec<f64>),
}

fn float_array<'py>(obj: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let np = PyModule::import(obj.py(), "numpy")?;
    np.getattr("asarray")?.call1((obj, "float64"))
}

fn extract_angles(obj: &Bound<'_, PyAny>, name: &str) -> PyResult<Angles> {
    let arr = float_array(obj)?;
    let ndim: usize = arr.getattr("ndim")?.extract()?;
    match ndim {
        0 => Ok(Angles::Scalar(arr.call_method0("item")?.extract()?)),
        1 => {
            let ro = arr.extract::<PyReadonlyArray1<f64>>()?;
            Ok(Angles::Array(ro.as_array().to_vec()))
        }
        _ => Err(PyTypeError::new_err(format!(
            "{name} must be a float or a 1-D array, got {ndim} dimensions"
        ))),
    }
}

fn paired_angles(
    a: &Bound<'_, PyAny>,
    a_name: &str,
    b: &Bound<'_, PyAny>,
    b_name: &str,
) -> PyResult<PairedAngles> {
    let paired = match (extract_angles(a, a_name)?, extract_angles(b, b_name)?) {
        (Angles::Scalar(x), Angles::Scalar(y)) => PairedAngles::Scalar(x, y),
        (Angles::Scalar(x), Angles::Array(ys)) => PairedAngles::Array(vec![x; ys.len()], ys),
        (Angles::Array(xs), Angles::Scalar(y)) => {
            let ys = vec![y; xs.len()];
            PairedAngles::Array(xs, ys)
        }
        (Angles::Array(xs), Angles::Array(ys)) => PairedAngles::Array(xs, ys),
    };
    Ok(paired)
}

fn extract_attitude(q: &Bound<'_, PyAny>) -> PyResult<[[f64; 3]; 3]> {
    if let Ok(quat) = q.extract::<PyRef<'_, PyQuat>>() {
        return Ok(quat.inner.transform());
    }
    let t = float_array(&q.getattr("transform")?)?;
    let t = t
        .extract::<PyReadonlyArray2<f64>>()
        .map_err(|_| PyTypeError::new_err("q.transform must be a 3x3 float array"))?;
    let view = t.as_array();
    if view.dim() != (3, 3) {
        return Err(QuatUtilError::invalid_shape(format!(
            "q.transform must have shape (3, 3), got {:?}",
            view.shape()
        ))
        .into());
    }
    Ok(std::array::from_fn(|i| std::array::from_fn(|j| view[[i, j]])))
}

fn extract_vec3(obj: &Bound<'_, PyAny>, name: &str) -> PyResult<[f64; 3]> {
    let arr = float_array(obj)?;
    let ro = arr
        .extract::<PyReadonlyArray1<f64>>()
        .map_err(|_| PyTypeError::new_err(format!("{name} must be a 3-vector")))?;
    let view = ro.as_array();
    if view.len() != 3 {
        return Err(QuatUtilError::invalid_shape(format!(
            "{name} must have length 3, got {}",
            view.len()
        ))
        .into());
    }
    Ok([view[0], view[1], view[2]])
}

fn scalar_pair(py: Python<'_>, a: f64, b: f64) -> PyResult<Py<PyAny>> {
    Ok((a, b).into_pyobject(py)?.into_any().unbind())
}

fn array_pair(py: Python<'_>, a: Array1<f64>, b: Array1<f64>) -> PyResult<Py<PyAny>> {
    Ok((a.into_pyarray(py), b.into_pyarray(py))
        .into_pyobject(py)?
        .into_any()
        .unbind())
}

/// Convert from RA,Dec to ECI: a 3-vector, or a (3, N) array for array input
#[pyfunction]
#[pyo3(name = "radec2eci")]
fn py_radec2eci(
    py: Python<'_>,
    ra: &Bound<'_, PyAny>,
    dec: &Bound<'_, PyAny>,
) -> PyResult<Py<PyAny>> {
    match paired_angles(ra, "ra", dec, "dec")? {
        PairedAngles::Scalar(ra, dec) => Ok(Array1::from(radec2eci(ra, dec).to_vec())
            .into_pyarray(py)
            .into_any()
            .unbind()),
        PairedAngles::Array(ras, decs) => {
            Ok(radec2eci_batch(&ras, &decs)?.into_pyarray(py).into_any().unbind())
        }
    }
}

/// Convert from ECI (3-vector or (3, N) array) to RA,Dec
#[pyfunction]
#[pyo3(name = "eci2radec")]
fn py_eci2radec(py: Python<'_>, eci: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    let arr = float_array(eci)?;
    let ndim: usize = arr.getattr("ndim")?.extract()?;
    match ndim {
        1 => {
            let v = extract_vec3(&arr, "eci")?;
            let (ra, dec) = eci2radec(&v);
            scalar_pair(py, ra, dec)
        }
        2 => {
            let ro = arr.extract::<PyReadonlyArray2<f64>>()?;
            let (ras, decs) = eci2radec_batch(ro.as_array())?;
            array_pair(py, ras, decs)
        }
        _ => Err(QuatUtilError::invalid_shape(format!(
            "eci must be a 3-vector or a (3, N) array, got {ndim} dimensions"
        ))
        .into()),
    }
}

/// Given RA, Dec, and pointing quaternion, determine ACA Y-ang, Z-ang
#[pyfunction]
#[pyo3(name = "radec2yagzag")]
fn py_radec2yagzag(
    py: Python<'_>,
    ra: &Bound<'_, PyAny>,
    dec: &Bound<'_, PyAny>,
    q: &Bound<'_, PyAny>,
) -> PyResult<Py<PyAny>> {
    let transform = extract_attitude(q)?;
    match paired_angles(ra, "ra", dec, "dec")? {
        PairedAngles::Scalar(ra, dec) => {
            let (yag, zag) = radec2yagzag(ra, dec, &transform);
            scalar_pair(py, yag, zag)
        }
        PairedAngles::Array(ras, decs) => {
            let (yags, zags) = radec2yagzag_batch(&ras, &decs, &transform)?;
            array_pair(py, yags, zags)
        }
    }
}

/// Given ACA Y-ang, Z-ang and pointing quaternion determine RA, Dec
#[pyfunction]
#[pyo3(name = "yagzag2radec")]
fn py_yagzag2radec(
    py: Python<'_>,
    yag: &Bound<'_, PyAny>,
    zag: &Bound<'_, PyAny>,
    q: &Bound<'_, PyAny>,
) -> PyResult<Py<PyAny>> {
    let transform = extract_attitude(q)?;
    match paired_angles(yag, "yag", zag, "zag")? {
        PairedAngles::Scalar(yag, zag) => {
            let (ra, dec) = yagzag2radec(yag, zag, &transform);
            scalar_pair(py, ra, dec)
        }
        PairedAngles::Array(yags, zags) => {
            let (ras, decs) = yagzag2radec_batch(&yags, &zags, &transform)?;
            array_pair(py, ras, decs)
        }
    }
}

/// Generate quaternion that rotates X-axis into ``vec``
#[pyfunction]
#[pyo3(name = "quat_x_to_vec", signature = (vec, method="radec"))]
fn py_quat_x_to_vec(vec: &Bound<'_, PyAny>, method: &str) -> PyResult<PyQuat> {
    let vec = extract_vec3(vec, "vec")?;
    Ok(PyQuat {
        inner: quat_x_to_vec_str(&vec, method)?,
    })
}

/// Normalize a 3-vector to unit length
#[pyfunction]
#[pyo3(name = "norm")]
fn py_norm<'py>(
    py: Python<'py>,
    vec: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let vec = extract_vec3(vec, "vec")?;
    Ok(Array1::from(norm(&vec).to_vec()).into_pyarray(py))
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyQuat>()?;
    m.add_function(wrap_pyfunction!(py_radec2eci, m)?)?;
    m.add_function(wrap_pyfunction!(py_eci2radec, m)?)?;
    m.add_function(wrap_pyfunction!(py_radec2yagzag, m)?)?;
    m.add_function(wrap_pyfunction!(py_yagzag2radec, m)?)?;
    m.add_function(wrap_pyfunction!(py_quat_x_to_vec, m)?)?;
    m.add_function(wrap_pyfunction!(py_norm, m)?)?;
    Ok(())
}
