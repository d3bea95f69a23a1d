//! ACA quaternion utilities
//!
//! Conversions between sky coordinates (RA/Dec), ECI unit vectors and aspect
//! camera Y/Z angles for a given pointing attitude, plus construction of a
//! quaternion that points the body X-axis at an arbitrary vector.
//!
//! Every function is pure. Scalar forms are infallible; `_batch` forms check
//! that paired inputs agree in shape before computing anything.

// Module declarations
pub mod aca;
pub mod alignment;
pub mod config;
pub mod conversions;
pub mod error;
#[cfg(feature = "python")]
mod python;
pub mod quaternion;
pub mod utils;

// Re-export public API
pub use aca::{radec2yagzag, radec2yagzag_batch, yagzag2radec, yagzag2radec_batch};
pub use alignment::{quat_x_to_vec, quat_x_to_vec_str, Method};
pub use conversions::{eci2radec, eci2radec_batch, radec2eci, radec2eci_batch};
pub use error::{QuatUtilError, QuatUtilResult};
pub use quaternion::{Attitude, Quat};
pub use utils::vector_math::norm;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _ska_quatutil(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)?;
    m.add("__version__", config::VERSION)?;
    Ok(())
}
