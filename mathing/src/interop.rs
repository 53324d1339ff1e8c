use nalgebra::{Isometry3, Matrix4, UnitQuaternion, Vector4};

use crate::{common::Scalar, matrix::Matrix, quaternion::Quaternion, vector::Vec4};

impl From<Vec4> for Vector4<Scalar> {
    fn from(v: Vec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4<Scalar>> for Vec4 {
    fn from(v: Vector4<Scalar>) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<Scalar> {
    fn from(q: Quaternion) -> Self {
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::Quaternion<Scalar>> for Quaternion {
    fn from(q: nalgebra::Quaternion<Scalar>) -> Self {
        Quaternion::new(q.i, q.j, q.k, q.w)
    }
}

/// Normalizes `q`.
impl From<Quaternion> for UnitQuaternion<Scalar> {
    fn from(q: Quaternion) -> Self {
        UnitQuaternion::new_normalize(q.into())
    }
}

impl From<UnitQuaternion<Scalar>> for Quaternion {
    fn from(q: UnitQuaternion<Scalar>) -> Self {
        q.into_inner().into()
    }
}

/// `nalgebra` multiplies column vectors from the left, so the result is the transpose of `m`.
impl From<Matrix> for Matrix4<Scalar> {
    fn from(m: Matrix) -> Self {
        Matrix4::from_column_slice(m.as_array())
    }
}

impl From<Matrix4<Scalar>> for Matrix {
    fn from(m: Matrix4<Scalar>) -> Self {
        let mut ary = [0.0; 16];
        ary.copy_from_slice(m.as_slice());
        Matrix::from_array(ary)
    }
}

impl From<Isometry3<Scalar>> for Matrix {
    fn from(iso: Isometry3<Scalar>) -> Self {
        iso.to_homogeneous().into()
    }
}
