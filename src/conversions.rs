//! RA/Dec <-> ECI unit vector conversions
//!
//! Scalar kernels work on `f64` and `[f64; 3]`. The `_batch` forms take
//! parallel arrays and lay vectors out component-major, shape (3, N), so row 0
//! holds every x component. Each batch element goes through the scalar kernel,
//! so batch and scalar results are identical.
use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{QuatUtilError, QuatUtilResult};

/// Convert RA/Dec coordinates to an ECI unit vector
///
/// # Arguments
/// * `ra` - Right ascension in degrees
/// * `dec` - Declination in degrees
///
/// # Returns
/// Unit vector `[cos(ra)cos(dec), sin(ra)cos(dec), sin(dec)]`
pub fn radec2eci(ra: f64, dec: f64) -> [f64; 3] {
    let ra_rad = ra.to_radians();
    let dec_rad = dec.to_radians();
    let cos_dec = dec_rad.cos();
    [ra_rad.cos() * cos_dec, ra_rad.sin() * cos_dec, dec_rad.sin()]
}

/// Convert an ECI direction to RA/Dec
///
/// Only the ratios of the components matter; the input need not be unit
/// length. At the poles (x = y = 0) RA is 0.
///
/// # Returns
/// `(ra, dec)` in degrees with RA in [0, 360) and Dec in [-90, 90]. A
/// direction a hair below the +X axis gives RA 0, not 360.
pub fn eci2radec(eci: &[f64; 3]) -> (f64, f64) {
    let ra = wrap_360(eci[1].atan2(eci[0]).to_degrees());
    let dec = eci[2]
        .atan2((eci[1] * eci[1] + eci[0] * eci[0]).sqrt())
        .to_degrees();
    (ra, dec)
}

/// Map an angle in (-360, 360) degrees onto [0, 360)
pub(crate) fn wrap_360(deg: f64) -> f64 {
    if deg >= 0.0 {
        return deg;
    }
    // -1e-20 + 360 rounds to 360
    let wrapped = deg + 360.0;
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert parallel RA/Dec arrays to ECI unit vectors (vectorized)
///
/// # Arguments
/// * `ras` - Right ascensions in degrees
/// * `decs` - Declinations in degrees, same length as `ras`
///
/// # Returns
/// Array2 with shape (3, N), one unit vector per column
///
/// # Errors
/// `ShapeMismatch` when the two arrays differ in length
pub fn radec2eci_batch(ras: &[f64], decs: &[f64]) -> QuatUtilResult<Array2<f64>> {
    QuatUtilError::check_paired("ra", ras.len(), "dec", decs.len())?;
    log::trace!("radec2eci_batch: {} targets", ras.len());

    let n = ras.len();
    let mut result = Array2::<f64>::zeros((3, n));
    for (i, (&ra, &dec)) in ras.iter().zip(decs.iter()).enumerate() {
        let eci = radec2eci(ra, dec);
        result[[0, i]] = eci[0];
        result[[1, i]] = eci[1];
        result[[2, i]] = eci[2];
    }
    Ok(result)
}

/// Convert a (3, N) batch of ECI directions to RA/Dec arrays (vectorized)
///
/// # Returns
/// `(ras, decs)`, each of length N, in degrees
///
/// # Errors
/// `InvalidShape` when the input does not have exactly 3 rows
pub fn eci2radec_batch(ecis: ArrayView2<f64>) -> QuatUtilResult<(Array1<f64>, Array1<f64>)> {
    if ecis.nrows() != 3 {
        return Err(QuatUtilError::invalid_shape(format!(
            "ECI batch must have shape (3, N), got ({}, {})",
            ecis.nrows(),
            ecis.ncols()
        )));
    }
    log::trace!("eci2radec_batch: {} vectors", ecis.ncols());

    let n = ecis.ncols();
    let mut ras = Array1::<f64>::zeros(n);
    let mut decs = Array1::<f64>::zeros(n);
    for (i, col) in ecis.axis_iter(Axis(1)).enumerate() {
        let (ra, dec) = eci2radec(&[col[0], col[1], col[2]]);
        ras[i] = ra;
        decs[i] = dec;
    }
    Ok((ras, decs))
}
