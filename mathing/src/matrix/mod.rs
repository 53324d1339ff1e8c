mod kernel;

pub use kernel::*;

use approx::{AbsDiffEq, RelativeEq};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{common::Scalar, error::MathError, quaternion::Quaternion, vector::Vec4};

/// 4×4 affine transformation matrix.
///
/// The matrix is stored row-major as four consecutive rows: the local X axis, Y axis, Z axis and the
/// position. The fourth components are `0, 0, 0, 1` respectively for affine transforms.
///
/// Vectors are rows and are multiplied on the left, `v' = v * M`, so the leftmost matrix of a product is
/// applied first. To transform a point by the bone chain `A`, `B`, `C` (where `A` is the root), use
/// `v * C * B * A`, i.e., concatenate `M = C * B * A` from leaf to root. Successive `*=` calls therefore
/// append transforms in application order.
///
/// ```text
/// | X.x X.y X.z 0 |
/// | Y.x Y.y Y.z 0 |
/// | Z.x Z.y Z.z 0 |
/// | P.x P.y P.z 1 |
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: [Vec4; 4],
}

impl Matrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vec4::UNIT_X, Vec4::UNIT_Y, Vec4::UNIT_Z, Vec4::UNIT_W],
    };

    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from a flat row-major array. Every 4 consecutive values define a row.
    #[must_use]
    pub const fn from_array(ary: [Scalar; 16]) -> Self {
        Self {
            rows: [
                Vec4::new(ary[0], ary[1], ary[2], ary[3]),
                Vec4::new(ary[4], ary[5], ary[6], ary[7]),
                Vec4::new(ary[8], ary[9], ary[10], ary[11]),
                Vec4::new(ary[12], ary[13], ary[14], ary[15]),
            ],
        }
    }

    /// Creates a matrix from three axes, placed at the origin.
    #[must_use]
    pub fn from_axes(x: &Vec4, y: &Vec4, z: &Vec4) -> Self {
        Self::from_axes_and_position(x, y, z, &Vec4::ZERO)
    }

    /// Creates a matrix from three axes and a position.
    ///
    /// The fourth component of each argument is ignored.
    #[must_use]
    pub fn from_axes_and_position(x: &Vec4, y: &Vec4, z: &Vec4, pos: &Vec4) -> Self {
        let mut m = Self::IDENTITY;
        m.set_axes_and_position(x, y, z, pos);
        m
    }

    /// Creates a rotation matrix from an orientation, placed at the origin.
    #[must_use]
    pub fn from_rotation(q: &Quaternion) -> Self {
        Self::from_rotation_translation(q, &Vec4::ZERO)
    }

    /// Creates a matrix from an orientation and a position.
    #[must_use]
    pub fn from_rotation_translation(q: &Quaternion, pos: &Vec4) -> Self {
        let mut m = Self::IDENTITY;
        m.set_rotation_translation(q, pos);
        m
    }

    /// Creates a matrix from its native-endian byte representation, e.g., a buffer produced by
    /// [`IntoBytes::as_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        <Self as FromBytes>::read_from_bytes(bytes).map_err(|_| MathError::InvalidByteLength {
            expected: core::mem::size_of::<Self>(),
            actual: bytes.len(),
        })
    }

    pub fn set_array(&mut self, ary: [Scalar; 16]) {
        *self = Self::from_array(ary);
    }

    pub fn set_axes(&mut self, x: &Vec4, y: &Vec4, z: &Vec4) {
        self.set_axes_and_position(x, y, z, &Vec4::ZERO);
    }

    pub fn set_axes_and_position(&mut self, x: &Vec4, y: &Vec4, z: &Vec4, pos: &Vec4) {
        self.rows = [
            Vec4::direction(x.x, x.y, x.z),
            Vec4::direction(y.x, y.y, y.z),
            Vec4::direction(z.x, z.y, z.z),
            Vec4::point(pos.x, pos.y, pos.z),
        ];
    }

    /// Sets the rotation part from `q` (assumed to be a unit quaternion) and the translation part from `pos`.
    pub fn set_rotation_translation(&mut self, q: &Quaternion, pos: &Vec4) {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;

        let yy = q.y * y2;
        let yz = q.y * z2;

        let zz = q.z * z2;

        self.rows = [
            Vec4::direction(1. - (yy + zz), xy + wz, xz - wy),
            Vec4::direction(xy - wz, 1. - (xx + zz), yz + wx),
            Vec4::direction(xz + wy, yz - wx, 1. - (xx + yy)),
            Vec4::point(pos.x, pos.y, pos.z),
        ];
    }

    #[must_use]
    pub const fn axis_x(&self) -> &Vec4 {
        &self.rows[0]
    }

    #[must_use]
    pub const fn axis_y(&self) -> &Vec4 {
        &self.rows[1]
    }

    #[must_use]
    pub const fn axis_z(&self) -> &Vec4 {
        &self.rows[2]
    }

    #[must_use]
    pub const fn pos(&self) -> &Vec4 {
        &self.rows[3]
    }

    /// Mutable view of the X axis row. Writes go straight into this matrix.
    pub fn axis_x_mut(&mut self) -> &mut Vec4 {
        &mut self.rows[0]
    }

    /// Mutable view of the Y axis row. Writes go straight into this matrix.
    pub fn axis_y_mut(&mut self) -> &mut Vec4 {
        &mut self.rows[1]
    }

    /// Mutable view of the Z axis row. Writes go straight into this matrix.
    pub fn axis_z_mut(&mut self) -> &mut Vec4 {
        &mut self.rows[2]
    }

    /// Mutable view of the position row. Writes go straight into this matrix.
    pub fn pos_mut(&mut self) -> &mut Vec4 {
        &mut self.rows[3]
    }

    #[must_use]
    pub const fn rows(&self) -> &[Vec4; 4] {
        &self.rows
    }

    /// The backing storage as a flat row-major array.
    #[must_use]
    pub fn as_array(&self) -> &[Scalar; 16] {
        zerocopy::transmute_ref!(&self.rows)
    }

    pub fn as_mut_array(&mut self) -> &mut [Scalar; 16] {
        zerocopy::transmute_mut!(&mut self.rows)
    }

    #[must_use]
    pub fn to_array(&self) -> [Scalar; 16] {
        *self.as_array()
    }

    /// `self * rhs` computed by the kernel `K`.
    #[must_use]
    pub fn mul_with<K: MatrixKernel>(&self, rhs: &Self) -> Self {
        Self::from_array(K::mul(self.as_array(), rhs.as_array()))
    }

    /// `v * self` computed by the kernel `K`.
    #[must_use]
    pub fn vec_mul_with<K: MatrixKernel>(&self, v: &Vec4) -> Vec4 {
        K::vec_mul(v, self.as_array())
    }

    /// Replaces `self` with `lhs * self`, i.e., applies `self` first and then `lhs`.
    pub fn premul_assign(&mut self, lhs: &Self) {
        *self = lhs * &*self;
    }

    /// Transforms `v` as a point: `<x, y, z, 1> * M`.
    ///
    /// The returned `w` is the `w` of `v`, not the one computed from the last column. This is only valid for
    /// affine matrices.
    #[must_use]
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        let [x, y, z, p] = &self.rows;
        Vec4 {
            x: v.x * x.x + v.y * y.x + v.z * z.x + p.x,
            y: v.x * x.y + v.y * y.y + v.z * z.y + p.y,
            z: v.x * x.z + v.y * y.z + v.z * z.z + p.z,
            w: v.w,
        }
    }

    /// Transforms `v` as a direction: `<x, y, z, 0> * M`. Translation is not applied and the returned `w` is
    /// `0`.
    #[must_use]
    pub fn rotate(&self, v: &Vec4) -> Vec4 {
        let [x, y, z, _] = &self.rows;
        Vec4 {
            x: v.x * x.x + v.y * y.x + v.z * z.x,
            y: v.x * x.y + v.y * y.y + v.z * z.y,
            z: v.x * x.z + v.y * y.z + v.z * z.z,
            w: 0.0,
        }
    }

    /// Converts handedness by flipping Z.
    ///
    /// For example, with a right-handed frame where X is right, Y is up and Z points towards the viewer,
    /// this gives the left-handed equivalent. The z component of every row is negated, and the whole Z
    /// axis row is negated as well, so the z component of the Z axis keeps its sign:
    ///
    /// ```text
    /// |  X.x  X.y -X.z X.w |
    /// |  Y.x  Y.y -Y.z Y.w |
    /// | -Z.x -Z.y  Z.z Z.w |
    /// |  P.x  P.y -P.z P.w |
    /// ```
    #[must_use]
    pub fn flip_z(&self) -> Self {
        let [x, y, z, p] = self.rows;
        Self {
            rows: [
                Vec4::new(x.x, x.y, -x.z, x.w),
                Vec4::new(y.x, y.y, -y.z, y.w),
                Vec4::new(-z.x, -z.y, z.z, z.w),
                Vec4::new(p.x, p.y, -p.z, p.w),
            ],
        }
    }

    /// The transformation that undoes this one.
    ///
    /// Only valid for rigid transforms (rotation and translation). Scale, shear or projection give a wrong
    /// result without any notice.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let [x, y, z, p] = &self.rows;
        let rx = Vec4::direction(x.x, y.x, z.x);
        let ry = Vec4::direction(x.y, y.y, z.y);
        let rz = Vec4::direction(x.z, y.z, z.z);
        Self {
            rows: [
                rx,
                ry,
                rz,
                Vec4::point(
                    -(p.x * rx.x + p.y * ry.x + p.z * rz.x),
                    -(p.x * rx.y + p.y * ry.y + p.z * rz.y),
                    -(p.x * rx.z + p.y * ry.z + p.z * rz.z),
                ),
            ],
        }
    }

    /// Swaps rows and columns, e.g., to get the column-major layout of the same transform.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let [x, y, z, p] = &self.rows;
        Self {
            rows: [
                Vec4::new(x.x, y.x, z.x, p.x),
                Vec4::new(x.y, y.y, z.y, p.y),
                Vec4::new(x.z, y.z, z.z, p.z),
                Vec4::new(x.w, y.w, z.w, p.w),
            ],
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[Scalar; 16]> for Matrix {
    fn from(ary: [Scalar; 16]) -> Self {
        Self::from_array(ary)
    }
}

impl From<Matrix> for [Scalar; 16] {
    fn from(m: Matrix) -> Self {
        m.to_array()
    }
}

impl TryFrom<&[Scalar]> for Matrix {
    type Error = MathError;

    fn try_from(value: &[Scalar]) -> Result<Self, Self::Error> {
        let ary: [Scalar; 16] = value.try_into().map_err(|_| MathError::InvalidLength {
            expected: 16,
            actual: value.len(),
        })?;
        Ok(Self::from_array(ary))
    }
}

impl From<Quaternion> for Matrix {
    fn from(q: Quaternion) -> Self {
        Self::from_rotation(&q)
    }
}

impl From<&Quaternion> for Matrix {
    fn from(q: &Quaternion) -> Self {
        Self::from_rotation(q)
    }
}

impl core::ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.mul_with::<ScalarKernel>(rhs)
    }
}

impl core::ops::Mul for Matrix {
    type Output = Self;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl core::ops::MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        *self = &*self * rhs;
    }
}

impl core::ops::MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

/// Translation only: adds x, y and z of the vector to the position row. The rotation part is not involved.
impl core::ops::AddAssign<Vec4> for Matrix {
    fn add_assign(&mut self, rhs: Vec4) {
        let p = self.pos_mut();
        p.x += rhs.x;
        p.y += rhs.y;
        p.z += rhs.z;
    }
}

/// Row vector times matrix using all four components. Points (`w = 1`) are translated, directions
/// (`w = 0`) are only rotated.
impl core::ops::Mul<&Matrix> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        rhs.vec_mul_with::<ScalarKernel>(&self)
    }
}

impl core::ops::Mul<Matrix> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Matrix) -> Self::Output {
        self * &rhs
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = Scalar;

    fn default_epsilon() -> Self::Epsilon {
        Scalar::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        Scalar::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl core::fmt::Display for Matrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.rows.iter().enumerate().try_for_each(|(i, r)| {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{:5.2}, {:5.2}, {:5.2}, {:5.2}]", r.x, r.y, r.z, r.w)
        })
    }
}
