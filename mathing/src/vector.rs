use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Add, AddAssign, Neg, Sub, SubAssign};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{common::Scalar, error::MathError};

/// 4-component vector used for points (`w = 1`) and directions (`w = 0`).
///
/// The `w` convention is advisory only. Every arithmetic operator acts on all four components.
#[repr(C)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Default,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    IntoBytes,
    FromBytes,
    Immutable,
    KnownLayout,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Vec4 {
    /// {1, 0, 0, 0}
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// {0, 1, 0, 0}
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// {0, 0, 1, 0}
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// {0, 0, 0, 1}
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// {0, 0, 0, 0}
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The threshold [`Vec4::normalize3_safe`] is usually called with.
    pub const DEFAULT_NORMALIZE_THRESHOLD: Scalar = 1e-7;

    #[inline]
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a direction, i.e., a vector with `w = 0`.
    #[inline]
    #[must_use]
    pub const fn direction(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a point, i.e., a vector with `w = 1`.
    #[inline]
    #[must_use]
    pub const fn point(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(x, y, z, 1.0)
    }

    #[inline]
    pub fn set(&mut self, x: Scalar, y: Scalar, z: Scalar, w: Scalar) {
        *self = Self::new(x, y, z, w);
    }

    #[inline]
    #[must_use]
    pub fn length3(&self) -> Scalar {
        self.length3_sqr().sqrt()
    }

    #[inline]
    #[must_use]
    pub fn length3_sqr(&self) -> Scalar {
        Self::dot3(self, self)
    }

    #[inline]
    #[must_use]
    pub fn length4(&self) -> Scalar {
        self.length4_sqr().sqrt()
    }

    #[inline]
    #[must_use]
    pub fn length4_sqr(&self) -> Scalar {
        Self::dot4(self, self)
    }

    /// Scales x, y and z to unit length and returns the previous length.
    ///
    /// A zero-length vector yields NaN components.
    pub fn normalize3(&mut self) -> Scalar {
        let len = self.length3();
        self.x /= len;
        self.y /= len;
        self.z /= len;
        len
    }

    /// Same as [`Vec4::normalize3`], but if the length is less than `threshold`, x, y and z are replaced by
    /// those of [`Vec4::UNIT_X`] and `0` is returned. `w` is never touched.
    pub fn normalize3_safe(&mut self, threshold: Scalar) -> Scalar {
        let len = self.length3();
        if len < threshold {
            self.x = Self::UNIT_X.x;
            self.y = Self::UNIT_X.y;
            self.z = Self::UNIT_X.z;
            return 0.0;
        }
        self.x /= len;
        self.y /= len;
        self.z /= len;
        len
    }

    /// Scales all four components to unit length and returns the previous length.
    pub fn normalize4(&mut self) -> Scalar {
        let len = self.length4();
        *self /= len;
        len
    }

    /// Cross product of the x, y, z parts. The `w` of the result is always `0`.
    #[inline]
    #[must_use]
    pub const fn cross(v1: &Self, v2: &Self) -> Self {
        Self {
            x: v1.y * v2.z - v2.y * v1.z,
            y: v1.z * v2.x - v2.z * v1.x,
            z: v1.x * v2.y - v2.x * v1.y,
            w: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn dot3(v1: &Self, v2: &Self) -> Scalar {
        v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
    }

    #[inline]
    #[must_use]
    pub const fn dot4(v1: &Self, v2: &Self) -> Scalar {
        v1.x * v2.x + v1.y * v2.y + v1.z * v2.z + v1.w * v2.w
    }

    /// Unclamped linear interpolation. `t` outside of `[0, 1]` extrapolates.
    #[inline]
    #[must_use]
    pub fn lerp(from: &Self, to: &Self, t: Scalar) -> Self {
        *from + (*to - *from) * t
    }
}

impl core::ops::Mul<Scalar> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl core::ops::Mul<Vec4> for Scalar {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}

impl core::ops::Div<Scalar> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Scalar) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}

impl core::ops::MulAssign<Scalar> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

impl core::ops::DivAssign<Scalar> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: Scalar) {
        *self = *self / rhs;
    }
}

impl From<[Scalar; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [Scalar; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vec4> for [Scalar; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl TryFrom<&[Scalar]> for Vec4 {
    type Error = MathError;

    fn try_from(value: &[Scalar]) -> Result<Self, Self::Error> {
        let ary: [Scalar; 4] = value.try_into().map_err(|_| MathError::InvalidLength {
            expected: 4,
            actual: value.len(),
        })?;
        Ok(ary.into())
    }
}

impl core::fmt::Display for Vec4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

impl AbsDiffEq for Vec4 {
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

impl RelativeEq for Vec4 {
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
