//! Aspect camera Y-angle / Z-angle transforms
//!
//! Yag and zag locate a target relative to the camera boresight (body X) in
//! degrees. Both directions need only the attitude's rotation matrix.
use ndarray::Array1;

use crate::conversions::{eci2radec, radec2eci};
use crate::error::{QuatUtilError, QuatUtilResult};
use crate::quaternion::Attitude;
use crate::utils::vector_math::{mat_t_vec, mat_vec};

/// Given RA, Dec and a pointing attitude, compute ACA Y-angle and Z-angle
///
/// The ECI target direction is rotated into the body frame with the transpose
/// of the attitude matrix. No projection onto x = 1 is done: atan2 of each
/// lateral component against x gives the angles, so targets behind the
/// boresight (x <= 0) still return finite but large values.
///
/// # Returns
/// `(yag, zag)` in degrees
pub fn radec2yagzag<A: Attitude + ?Sized>(ra: f64, dec: f64, q: &A) -> (f64, f64) {
    body_to_yagzag(&q.transform(), ra, dec)
}

/// Given ACA Y-angle, Z-angle and a pointing attitude, compute RA, Dec
///
/// Inverse of [`radec2yagzag`] for targets in the forward hemisphere.
/// Angles approaching ±90 deg drive `tan` to infinity and the result to
/// extreme or NaN values; this is not guarded.
///
/// # Returns
/// `(ra, dec)` in degrees, RA in [0, 360)
pub fn yagzag2radec<A: Attitude + ?Sized>(yag: f64, zag: f64, q: &A) -> (f64, f64) {
    yagzag_to_eci_radec(&q.transform(), yag, zag)
}

/// Vectorized [`radec2yagzag`] over parallel RA/Dec arrays
///
/// # Errors
/// `ShapeMismatch` when the two arrays differ in length
pub fn radec2yagzag_batch<A: Attitude + ?Sized>(
    ras: &[f64],
    decs: &[f64],
    q: &A,
) -> QuatUtilResult<(Array1<f64>, Array1<f64>)> {
    QuatUtilError::check_paired("ra", ras.len(), "dec", decs.len())?;
    log::trace!("radec2yagzag_batch: {} targets", ras.len());

    let transform = q.transform();
    let (yags, zags): (Vec<f64>, Vec<f64>) = ras
        .iter()
        .zip(decs.iter())
        .map(|(&ra, &dec)| body_to_yagzag(&transform, ra, dec))
        .unzip();
    Ok((Array1::from_vec(yags), Array1::from_vec(zags)))
}

/// Vectorized [`yagzag2radec`] over parallel yag/zag arrays
///
/// # Errors
/// `ShapeMismatch` when the two arrays differ in length
pub fn yagzag2radec_batch<A: Attitude + ?Sized>(
    yags: &[f64],
    zags: &[f64],
    q: &A,
) -> QuatUtilResult<(Array1<f64>, Array1<f64>)> {
    QuatUtilError::check_paired("yag", yags.len(), "zag", zags.len())?;
    log::trace!("yagzag2radec_batch: {} targets", yags.len());

    let transform = q.transform();
    let (ras, decs): (Vec<f64>, Vec<f64>) = yags
        .iter()
        .zip(zags.iter())
        .map(|(&yag, &zag)| yagzag_to_eci_radec(&transform, yag, zag))
        .unzip();
    Ok((Array1::from_vec(ras), Array1::from_vec(decs)))
}

fn body_to_yagzag(transform: &[[f64; 3]; 3], ra: f64, dec: f64) -> (f64, f64) {
    let eci = radec2eci(ra, dec);
    let d_aca = mat_t_vec(transform, &eci);
    let yag = d_aca[1].atan2(d_aca[0]).to_degrees();
    let zag = d_aca[2].atan2(d_aca[0]).to_degrees();
    (yag, zag)
}

fn yagzag_to_eci_radec(transform: &[[f64; 3]; 3], yag: f64, zag: f64) -> (f64, f64) {
    let mut d_aca = [1.0, yag.to_radians().tan(), zag.to_radians().tan()];
    // Scaled by the sum of squares, not its root. Only the direction reaches
    // eci2radec.
    let scale = 1.0 / (d_aca[0] * d_aca[0] + d_aca[1] * d_aca[1] + d_aca[2] * d_aca[2]);
    for c in d_aca.iter_mut() {
        *c *= scale;
    }
    let eci = mat_vec(transform, &d_aca);
    eci2radec(&eci)
}
