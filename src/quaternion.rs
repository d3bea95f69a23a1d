//! Attitude quaternions
//!
//! `Attitude` is the single capability the yag/zag transforms consume: a 3x3
//! rotation matrix taking body-frame vectors to ECI. `Quat` implements it and
//! adds the construction, composition and equatorial accessors needed by
//! `quat_x_to_vec`.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use crate::config::POLE_COS_DEC;
use crate::conversions::wrap_360;

/// Source of a body-to-ECI rotation matrix
pub trait Attitude {
    /// Row-major 3x3 orthonormal matrix `T` with `eci = T · body`
    fn transform(&self) -> [[f64; 3]; 3];
}

impl Attitude for [[f64; 3]; 3] {
    fn transform(&self) -> [[f64; 3]; 3] {
        *self
    }
}

impl<A: Attitude + ?Sized> Attitude for &A {
    fn transform(&self) -> [[f64; 3]; 3] {
        (**self).transform()
    }
}

/// Attitude quaternion, components stored `[x, y, z, w]` (scalar last)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quat {
    q: [f64; 4],
}

impl Quat {
    /// Build from raw `[x, y, z, w]` components. No normalization is applied.
    pub fn new(q: [f64; 4]) -> Self {
        Quat { q }
    }

    /// Build from an equatorial pointing: RA, Dec and Roll in degrees.
    ///
    /// The body X-axis lands on (RA, Dec); roll rotates the body Y/Z axes
    /// about it.
    pub fn from_equatorial(ra: f64, dec: f64, roll: f64) -> Self {
        let (sa, ca) = ra.to_radians().sin_cos();
        let (sd, cd) = dec.to_radians().sin_cos();
        let (sr, cr) = roll.to_radians().sin_cos();

        // Columns are the body X, Y, Z axes expressed in ECI
        let transform = [
            [ca * cd, -ca * sd * sr - sa * cr, -ca * sd * cr + sa * sr],
            [sa * cd, -sa * sd * sr + ca * cr, -sa * sd * cr - ca * sr],
            [sd, cd * sr, cd * cr],
        ];
        Self::from_transform(&transform)
    }

    /// Build from an orthonormal rotation matrix.
    ///
    /// Picks the numerically largest of the four component denominators and
    /// returns the sign with `w >= 0`.
    pub fn from_transform(t: &[[f64; 3]; 3]) -> Self {
        let den = [
            1.0 + t[0][0] - t[1][1] - t[2][2],
            1.0 - t[0][0] + t[1][1] - t[2][2],
            1.0 - t[0][0] - t[1][1] + t[2][2],
            1.0 + t[0][0] + t[1][1] + t[2][2],
        ];
        let mut max_idx = 0;
        for (i, d) in den.iter().enumerate() {
            if *d > den[max_idx] {
                max_idx = i;
            }
        }

        let big = 0.5 * den[max_idx].sqrt();
        let denom = 4.0 * big;
        let q = match max_idx {
            0 => [
                big,
                (t[0][1] + t[1][0]) / denom,
                (t[0][2] + t[2][0]) / denom,
                (t[2][1] - t[1][2]) / denom,
            ],
            1 => [
                (t[0][1] + t[1][0]) / denom,
                big,
                (t[1][2] + t[2][1]) / denom,
                (t[0][2] - t[2][0]) / denom,
            ],
            2 => [
                (t[0][2] + t[2][0]) / denom,
                (t[1][2] + t[2][1]) / denom,
                big,
                (t[1][0] - t[0][1]) / denom,
            ],
            _ => [
                (t[2][1] - t[1][2]) / denom,
                (t[0][2] - t[2][0]) / denom,
                (t[1][0] - t[0][1]) / denom,
                big,
            ],
        };

        if q[3] < 0.0 {
            Quat::new([-q[0], -q[1], -q[2], -q[3]])
        } else {
            Quat::new(q)
        }
    }

    /// Components `[x, y, z, w]`
    pub fn q(&self) -> [f64; 4] {
        self.q
    }

    /// Right ascension of the body X-axis in degrees, [0, 360)
    ///
    /// At a pole only `ra ± roll` is defined. There roll is taken as 0 and RA
    /// is read from the body Y-axis, which then lies along `[-sin ra, cos ra, 0]`.
    pub fn ra(&self) -> f64 {
        let t = self.transform();
        let ra = if at_pole(&t) {
            (-t[0][1]).atan2(t[1][1])
        } else {
            t[1][0].atan2(t[0][0])
        };
        wrap_360(ra.to_degrees())
    }

    /// Declination of the body X-axis in degrees
    pub fn dec(&self) -> f64 {
        let t = self.transform();
        t[2][0]
            .atan2((t[0][0] * t[0][0] + t[1][0] * t[1][0]).sqrt())
            .to_degrees()
    }

    /// Roll about the body X-axis in degrees, [0, 360). 0 at a pole.
    pub fn roll(&self) -> f64 {
        let t = self.transform();
        if at_pole(&t) {
            return 0.0;
        }
        wrap_360(t[2][1].atan2(t[2][2]).to_degrees())
    }

    /// Conjugate. For a unit quaternion this is the inverse rotation.
    pub fn inv(&self) -> Self {
        let [x, y, z, w] = self.q;
        Quat::new([-x, -y, -z, w])
    }

    /// Scale to unit norm
    pub fn normalize(&self) -> Self {
        let [x, y, z, w] = self.q;
        let mag = (x * x + y * y + z * z + w * w).sqrt();
        Quat::new([x / mag, y / mag, z / mag, w / mag])
    }
}

impl Attitude for Quat {
    fn transform(&self) -> [[f64; 3]; 3] {
        let [x, y, z, w] = self.q;
        let (xx2, yy2, zz2) = (2.0 * x * x, 2.0 * y * y, 2.0 * z * z);
        let (xy2, yz2, zx2) = (2.0 * x * y, 2.0 * y * z, 2.0 * z * x);
        let (wx2, wy2, wz2) = (2.0 * w * x, 2.0 * w * y, 2.0 * w * z);
        [
            [1.0 - yy2 - zz2, xy2 - wz2, zx2 + wy2],
            [xy2 + wz2, 1.0 - xx2 - zz2, yz2 - wx2],
            [zx2 - wy2, yz2 + wx2, 1.0 - xx2 - yy2],
        ]
    }
}

/// Composition: `(a * b).transform() == a.transform() · b.transform()`,
/// i.e. `b` is a rotation expressed in the body frame of `a`.
impl Mul for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        let [x1, y1, z1, w1] = self.q;
        let [x2, y2, z2, w2] = rhs.q;
        Quat::new([
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        ])
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Quat q1={:.8} q2={:.8} q3={:.8} q4={:.8}>",
            self.q[0], self.q[1], self.q[2], self.q[3]
        )
    }
}

fn at_pole(t: &[[f64; 3]; 3]) -> bool {
    t[0][0].hypot(t[1][0]) < POLE_COS_DEC
}
