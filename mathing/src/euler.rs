use crate::{common::Angle, matrix::Matrix, quaternion::Quaternion};

/// Euler angle (intrinsic)
///
/// `ABC(a, b, c)` rotates by `a` about A, then by `b` about the rotated B, then by `c` about the twice rotated
/// C. As a quaternion this is `qA(a) * qB(b) * qC(c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerAngle {
    /// x-y-z euler angle.
    XYZ(Angle, Angle, Angle),
    /// x-z-y euler angle.
    XZY(Angle, Angle, Angle),
    /// y-x-z euler angle.
    YXZ(Angle, Angle, Angle),
    /// y-z-x euler angle. [`Quaternion::from_euler`] uses this sequence.
    YZX(Angle, Angle, Angle),
    /// z-x-y euler angle.
    ZXY(Angle, Angle, Angle),
    /// z-y-x euler angle.
    ZYX(Angle, Angle, Angle),
    /// x-y-x euler angle.
    XYX(Angle, Angle, Angle),
    /// x-z-x euler angle.
    XZX(Angle, Angle, Angle),
    /// y-x-y euler angle.
    YXY(Angle, Angle, Angle),
    /// y-z-y euler angle.
    YZY(Angle, Angle, Angle),
    /// z-x-z euler angle.
    ZXZ(Angle, Angle, Angle),
    /// z-y-z euler angle.
    ZYZ(Angle, Angle, Angle),
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn rotation(self, angle: Angle) -> Quaternion {
        match self {
            Axis::X => Quaternion::from_axis_angle(1., 0., 0., angle),
            Axis::Y => Quaternion::from_axis_angle(0., 1., 0., angle),
            Axis::Z => Quaternion::from_axis_angle(0., 0., 1., angle),
        }
    }
}

impl EulerAngle {
    /// The rotation identity.
    #[must_use]
    pub const fn identity() -> Self {
        Self::XYZ(Angle::ZERO, Angle::ZERO, Angle::ZERO)
    }

    const fn sequence(&self) -> ([Axis; 3], [Angle; 3]) {
        use Axis::*;
        match *self {
            Self::XYZ(a, b, c) => ([X, Y, Z], [a, b, c]),
            Self::XZY(a, b, c) => ([X, Z, Y], [a, b, c]),
            Self::YXZ(a, b, c) => ([Y, X, Z], [a, b, c]),
            Self::YZX(a, b, c) => ([Y, Z, X], [a, b, c]),
            Self::ZXY(a, b, c) => ([Z, X, Y], [a, b, c]),
            Self::ZYX(a, b, c) => ([Z, Y, X], [a, b, c]),
            Self::XYX(a, b, c) => ([X, Y, X], [a, b, c]),
            Self::XZX(a, b, c) => ([X, Z, X], [a, b, c]),
            Self::YXY(a, b, c) => ([Y, X, Y], [a, b, c]),
            Self::YZY(a, b, c) => ([Y, Z, Y], [a, b, c]),
            Self::ZXZ(a, b, c) => ([Z, X, Z], [a, b, c]),
            Self::ZYZ(a, b, c) => ([Z, Y, Z], [a, b, c]),
        }
    }
}

impl Default for EulerAngle {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<EulerAngle> for Quaternion {
    fn from(angle: EulerAngle) -> Self {
        let ([a, b, c], [first, second, third]) = angle.sequence();
        a.rotation(first) * b.rotation(second) * c.rotation(third)
    }
}

impl From<EulerAngle> for Matrix {
    fn from(angle: EulerAngle) -> Self {
        Matrix::from_rotation(&angle.into())
    }
}
