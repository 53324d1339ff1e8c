use approx::{AbsDiffEq, RelativeEq};
use derive_more::Neg;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{
    common::{rad, Angle, Scalar, FRAC_PI_2},
    euler::EulerAngle,
    matrix::Matrix,
    vector::Vec4,
};

const DELTA: Scalar = 1e-10;
const GIMBAL_LOCK_THRESHOLD: Scalar = 0.499;

/// Rotation quaternion `(sin(θ/2)·axis, cos(θ/2))`.
///
/// Most operations assume a unit quaternion but never check it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Neg, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Quaternion {
    /// The rotation identity, `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn set(&mut self, x: Scalar, y: Scalar, z: Scalar, w: Scalar) {
        *self = Self::new(x, y, z, w);
    }

    /// Rotation of `theta` about the axis `(x, y, z)`.
    ///
    /// The axis is used as is. Pass a unit axis to get a unit quaternion.
    #[must_use]
    pub fn from_axis_angle(x: Scalar, y: Scalar, z: Scalar, theta: Angle) -> Self {
        let (s, c) = (theta.radian() * 0.5).sin_cos();
        Self::new(x * s, y * s, z * s, c)
    }

    /// Rotation from yaw, pitch and roll.
    ///
    /// The body frame has X forward, Y up and Z lateral. Yaw turns about Y, pitch about Z and roll about X.
    /// Roll is applied first, then pitch, then yaw, i.e., this is [`EulerAngle::YZX`]`(yaw, pitch, roll)`.
    #[must_use]
    pub fn from_euler(yaw: Angle, pitch: Angle, roll: Angle) -> Self {
        EulerAngle::YZX(yaw, pitch, roll).into()
    }

    /// Decomposes this rotation into `(yaw, pitch, roll)` as taken by [`Quaternion::from_euler`].
    ///
    /// Near `pitch = ±90°` yaw and roll are not separable. There the whole remaining rotation is reported
    /// as yaw and roll is `0`.
    #[must_use]
    pub fn euler(&self) -> (Angle, Angle, Angle) {
        let Self { x, y, z, w } = *self;
        let test = x * y + z * w;
        if test > GIMBAL_LOCK_THRESHOLD {
            return (2.0 * x.atan2(w) * rad, FRAC_PI_2 * rad, Angle::ZERO);
        }
        if test < -GIMBAL_LOCK_THRESHOLD {
            return (-2.0 * x.atan2(w) * rad, -FRAC_PI_2 * rad, Angle::ZERO);
        }
        let yaw = (2.0 * y * w - 2.0 * x * z).atan2(1.0 - 2.0 * y * y - 2.0 * z * z);
        let pitch = (2.0 * test).asin();
        let roll = (2.0 * x * w - 2.0 * y * z).atan2(1.0 - 2.0 * x * x - 2.0 * z * z);
        (yaw * rad, pitch * rad, roll * rad)
    }

    /// Extracts the rotation of the upper 3×3 block of `m`.
    #[must_use]
    pub fn from_matrix(m: &Matrix) -> Self {
        let m = m.as_array();
        let trace = m[0] + m[5] + m[10] + 1.0;
        if trace > DELTA {
            let s = 0.5 / trace.sqrt();
            Self {
                x: (m[6] - m[9]) * s,
                y: (m[8] - m[2]) * s,
                z: (m[1] - m[4]) * s,
                w: 0.25 / s,
            }
        } else if m[0] > m[5] && m[0] > m[10] {
            let s = 2.0 * (1.0 + m[0] - m[5] - m[10]).sqrt();
            Self {
                x: 0.25 * s,
                y: (m[4] + m[1]) / s,
                z: (m[8] + m[2]) / s,
                w: (m[6] - m[9]) / s,
            }
        } else if m[5] > m[10] {
            let s = 2.0 * (1.0 + m[5] - m[0] - m[10]).sqrt();
            Self {
                x: (m[4] + m[1]) / s,
                y: 0.25 * s,
                z: (m[9] + m[6]) / s,
                w: (m[8] - m[2]) / s,
            }
        } else {
            let s = 2.0 * (1.0 + m[10] - m[0] - m[5]).sqrt();
            Self {
                x: (m[8] + m[2]) / s,
                y: (m[9] + m[6]) / s,
                z: 0.25 * s,
                w: (m[1] - m[4]) / s,
            }
        }
    }

    /// 4-component dot product.
    #[must_use]
    pub const fn dot(a: &Self, b: &Self) -> Scalar {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }

    #[must_use]
    pub fn norm_sqr(&self) -> Scalar {
        Self::dot(self, self)
    }

    #[must_use]
    pub fn norm(&self) -> Scalar {
        self.norm_sqr().sqrt()
    }

    /// Scales to unit length and returns the previous norm. A zero quaternion becomes NaN.
    pub fn normalize(&mut self) -> Scalar {
        let n = self.norm();
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self.w /= n;
        n
    }

    #[must_use]
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse. Equals [`Quaternion::conjugate`] for a unit quaternion.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let n = self.norm_sqr();
        let c = self.conjugate();
        Self::new(c.x / n, c.y / n, c.z / n, c.w / n)
    }

    /// Rotates the direction `v`. The returned `w` is `0`.
    #[must_use]
    pub fn rotate(&self, v: &Vec4) -> Vec4 {
        let u = Vec4::direction(self.x, self.y, self.z);
        let t = Vec4::cross(&u, v) * 2.0;
        let r = Vec4::cross(&u, &t);
        Vec4::direction(
            v.x + self.w * t.x + r.x,
            v.y + self.w * t.y + r.y,
            v.z + self.w * t.z + r.z,
        )
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Falls back to linear weights when `from` and `to` are (nearly) the same rotation.
    #[must_use]
    pub fn slerp(from: &Self, to: &Self, t: Scalar) -> Self {
        let (cos, to) = Self::shorter_arc(from, to);
        let (scale0, scale1) = if (1.0 - cos) > DELTA {
            let omega = cos.acos();
            let sin = omega.sin();
            (((1.0 - t) * omega).sin() / sin, (t * omega).sin() / sin)
        } else {
            (1.0 - t, t)
        };
        Self::blend(from, &to, scale0, scale1)
    }

    /// Linear interpolation along the shorter arc. The result is not normalized.
    #[must_use]
    pub fn lerp(from: &Self, to: &Self, t: Scalar) -> Self {
        let (_, to) = Self::shorter_arc(from, to);
        Self::blend(from, &to, 1.0 - t, t)
    }

    fn shorter_arc(from: &Self, to: &Self) -> (Scalar, Self) {
        let cos = Self::dot(from, to);
        if cos < 0.0 {
            (-cos, -*to)
        } else {
            (cos, *to)
        }
    }

    fn blend(a: &Self, b: &Self, wa: Scalar, wb: Scalar) -> Self {
        Self::new(
            wa * a.x + wb * b.x,
            wa * a.y + wb * b.y,
            wa * a.z + wb * b.z,
            wa * a.w + wb * b.w,
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[Scalar; 4]> for Quaternion {
    fn from([x, y, z, w]: [Scalar; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<&Matrix> for Quaternion {
    fn from(m: &Matrix) -> Self {
        Self::from_matrix(m)
    }
}

impl From<Matrix> for Quaternion {
    fn from(m: Matrix) -> Self {
        Self::from_matrix(&m)
    }
}

/// Hamilton product. `a * b` rotates by `b` first and then by `a`.
impl core::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let Self {
            x: x1,
            y: y1,
            z: z1,
            w: w1,
        } = self;
        let Self {
            x: x2,
            y: y2,
            z: z2,
            w: w2,
        } = rhs;
        Self {
            x: w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            y: w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            z: w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w: w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        }
    }
}

impl core::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = Scalar;

    fn default_epsilon() -> Self::Epsilon {
        Scalar::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        Scalar::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl core::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
