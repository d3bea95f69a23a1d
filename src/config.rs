//! Crate-wide constants

/// Crate version, exported to Python as `__version__`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `|x_hat · vec|` above this treats `vec` as parallel or anti-parallel to the
/// reference X-axis when building the shortest-rotation quaternion.
pub const DEGENERATE_DOT_THRESHOLD: f64 = 1.0 - 1e-8;

/// Z offset added to the reference X-axis in the degenerate case so the
/// rotation axis (a cross product) is never zero-length.
pub const AXIS_PERTURBATION: f64 = 1e-7;

/// Unit X-axis: instrument boresight in the body frame
pub const X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

/// `cos(dec)` of the body X-axis below this counts as pointing at a celestial
/// pole, where RA and roll are not separable. Roll then reads as 0.
pub const POLE_COS_DEC: f64 = 1e-5;
