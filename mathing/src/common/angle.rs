use core::f64::consts::PI;

use derive_more::{Add, Debug, Neg, Sub};

use super::Scalar;

/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

/// Angle
#[repr(C)]
#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Debug, Add, Sub, Neg)]
#[debug("{}rad", radian)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    radian: Scalar,
}

impl Angle {
    /// An angle of zero
    pub const ZERO: Self = Self { radian: 0.0 };

    /// An angle of π
    pub const PI: Self = Self { radian: PI };

    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> Scalar {
        self.radian
    }

    /// Returns the angle in degree
    #[must_use]
    pub fn degree(self) -> Scalar {
        self.radian.to_degrees()
    }
}

impl core::ops::Mul<deg> for Scalar {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl core::ops::Mul<rad> for Scalar {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

impl core::ops::Mul<Scalar> for Angle {
    type Output = Angle;

    fn mul(self, rhs: Scalar) -> Self::Output {
        Self::Output {
            radian: self.radian * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dbg() {
        assert_eq!(format!("{:?}", 1.0 * rad), "1rad");
    }

    #[rstest::rstest]
    #[case(0., 0. * deg)]
    #[case(PI / 2., 90. * deg)]
    #[case(-PI, -180. * deg)]
    #[case(0., 0. * rad)]
    #[case(PI / 2., PI / 2. * rad)]
    fn to_radians(#[case] expected: Scalar, #[case] angle: Angle) {
        approx::assert_abs_diff_eq!(expected, angle.radian(), epsilon = 1e-12);
    }

    #[rstest::rstest]
    #[case(90., PI / 2. * rad)]
    #[case(180., Angle::PI)]
    #[case(0., Angle::ZERO)]
    fn to_degrees(#[case] expected: Scalar, #[case] angle: Angle) {
        approx::assert_abs_diff_eq!(expected, angle.degree(), epsilon = 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = 30. * deg + 60. * deg;
        approx::assert_abs_diff_eq!(PI / 2., a.radian(), epsilon = 1e-12);
        let b = Angle::PI - 90. * deg;
        approx::assert_abs_diff_eq!(PI / 2., b.radian(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(-PI, (-Angle::PI).radian());
        approx::assert_abs_diff_eq!(PI / 4., (Angle::PI * 0.25).radian());
    }
}
