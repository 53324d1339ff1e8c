use crate::{common::Scalar, vector::Vec4};

/// Numeric backend for the dense parts of [`Matrix`](super::Matrix).
///
/// Every function works on the flat, row-major 16-scalar storage (rows are X axis, Y axis, Z axis and
/// position). [`Matrix`](super::Matrix) always calls [`ScalarKernel`]. Another backend, e.g. a SIMD one, can be
/// plugged in per call with [`Matrix::mul_with`](super::Matrix::mul_with) and
/// [`Matrix::vec_mul_with`](super::Matrix::vec_mul_with) and must produce the same results as
/// [`ScalarKernel`] up to rounding.
pub trait MatrixKernel {
    /// Full 4×4 product `lhs * rhs`.
    fn mul(lhs: &[Scalar; 16], rhs: &[Scalar; 16]) -> [Scalar; 16];

    /// Row vector times matrix, `v * m`, using all four components of `v`.
    fn vec_mul(v: &Vec4, m: &[Scalar; 16]) -> Vec4;
}

/// Plain scalar implementation of [`MatrixKernel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarKernel;

impl MatrixKernel for ScalarKernel {
    fn mul(lhs: &[Scalar; 16], rhs: &[Scalar; 16]) -> [Scalar; 16] {
        let mut out = [0.0; 16];
        out.iter_mut().enumerate().for_each(|(i, o)| {
            let (row, col) = (i / 4, i % 4);
            *o = lhs[row * 4] * rhs[col]
                + lhs[row * 4 + 1] * rhs[4 + col]
                + lhs[row * 4 + 2] * rhs[8 + col]
                + lhs[row * 4 + 3] * rhs[12 + col];
        });
        out
    }

    fn vec_mul(v: &Vec4, m: &[Scalar; 16]) -> Vec4 {
        Vec4 {
            x: v.x * m[0] + v.y * m[4] + v.z * m[8] + v.w * m[12],
            y: v.x * m[1] + v.y * m[5] + v.z * m[9] + v.w * m[13],
            z: v.x * m[2] + v.y * m[6] + v.z * m[10] + v.w * m[14],
            w: v.x * m[3] + v.y * m[7] + v.z * m[11] + v.w * m[15],
        }
    }
}
