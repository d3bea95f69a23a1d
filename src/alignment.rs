//! Quaternions that carry the body X-axis onto a target direction
//!
//! Pointing X at a vector leaves one rotational degree of freedom (roll about
//! the new X-axis). [`Method`] picks how that freedom is fixed.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{AXIS_PERTURBATION, DEGENERATE_DOT_THRESHOLD, X_AXIS};
use crate::error::{QuatUtilError, QuatUtilResult};
use crate::quaternion::{Attitude, Quat};
use crate::utils::vector_math::{cross_product, dot_product, norm};

/// Roll disambiguation policy for [`quat_x_to_vec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Minimal rotation carrying X onto the target
    Shortest,
    /// Shortest rotation plus a roll that keeps the original Z-axis in the
    /// new X-Z plane
    KeepZ,
    /// Pointing at the target's (RA, Dec) with zero roll
    #[default]
    Radec,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Shortest => "shortest",
            Method::KeepZ => "keep_z",
            Method::Radec => "radec",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = QuatUtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortest" => Ok(Method::Shortest),
            "keep_z" => Ok(Method::KeepZ),
            "radec" => Ok(Method::Radec),
            other => Err(QuatUtilError::InvalidMethod(other.to_string())),
        }
    }
}

/// Generate a quaternion that rotates the body X-axis onto `vec`
///
/// `vec` is normalized here; callers need not pre-normalize. For every method
/// `transform · [1, 0, 0]` reproduces the normalized `vec`.
///
/// # Arguments
/// * `vec` - Target direction, any nonzero length
/// * `method` - Roll policy, see [`Method`]
pub fn quat_x_to_vec(vec: &[f64; 3], method: Method) -> Quat {
    let vec = norm(vec);
    match method {
        Method::Shortest => shortest_rotation(&vec),
        Method::KeepZ => {
            let q = shortest_rotation(&vec);
            let t = q.transform();
            // Roll about the new X that zeroes the Y component of the
            // transformed Z-axis
            let roll = t[1][2].atan2(t[1][1]);
            q * Quat::from_equatorial(0.0, 0.0, roll.to_degrees())
        }
        Method::Radec => {
            let ra = vec[1].atan2(vec[0]).to_degrees();
            let dec = vec[2].asin().to_degrees();
            Quat::from_equatorial(ra, dec, 0.0)
        }
    }
}

/// [`quat_x_to_vec`] with the method given by name
///
/// # Errors
/// `InvalidMethod` for anything other than `shortest`, `keep_z` or `radec`
pub fn quat_x_to_vec_str(vec: &[f64; 3], method: &str) -> QuatUtilResult<Quat> {
    let method = method.parse::<Method>()?;
    Ok(quat_x_to_vec(vec, method))
}

/// Minimal rotation from X onto the unit vector `vec`
fn shortest_rotation(vec: &[f64; 3]) -> Quat {
    let mut x_hat = X_AXIS;
    let mut dot = dot_product(&x_hat, vec);
    if dot.abs() > DEGENERATE_DOT_THRESHOLD {
        log::debug!(
            "quat_x_to_vec: target {vec:?} is (anti-)parallel to X, perturbing reference axis"
        );
        x_hat = norm(&[1.0, 0.0, AXIS_PERTURBATION]);
        dot = dot_product(&x_hat, vec);
    }

    let angle = dot.clamp(-1.0, 1.0).acos();
    let axis = norm(&cross_product(&x_hat, vec));
    let (sin_a, cos_a) = (angle / 2.0).sin_cos();
    Quat::new([axis[0] * sin_a, axis[1] * sin_a, axis[2] * sin_a, cos_a])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_and_display() {
        for name in ["shortest", "keep_z", "radec"] {
            let m: Method = name.parse().unwrap();
            assert_eq!(m.to_string(), name);
        }
        assert_eq!(Method::default(), Method::Radec);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = quat_x_to_vec_str(&[0.0, 1.0, 0.0], "longest").unwrap_err();
        assert_eq!(err, QuatUtilError::InvalidMethod("longest".to_string()));
        assert!("KEEP_Z".parse::<Method>().is_err());
    }

    #[test]
    fn test_shortest_about_z() {
        // X onto Y is a +90 deg rotation about Z
        let q = quat_x_to_vec(&[0.0, 2.0, 0.0], Method::Shortest).q();
        let h = 0.5_f64.sqrt();
        assert!(q[0].abs() < 1e-15);
        assert!(q[1].abs() < 1e-15);
        assert!((q[2] - h).abs() < 1e-15);
        assert!((q[3] - h).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_targets_stay_finite() {
        for target in [[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]] {
            for method in [Method::Shortest, Method::KeepZ] {
                let t = quat_x_to_vec(&target, method).transform();
                assert!(t.iter().flatten().all(|c| c.is_finite()));
                for i in 0..3 {
                    assert!((t[i][0] - target[i]).abs() < 1e-6, "{method} {target:?}");
                }
            }
        }
    }
}
