#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Vector, quaternion and 4×4 affine matrix primitives for real-time 3D code.
//!
//! Matrices are row-major and act on row vectors, `v' = v * M`.
//!
//! ```
//! use mathing::prelude::*;
//!
//! let root = Matrix::from_rotation(&Quaternion::from_axis_angle(0., 0., 1., 90. * deg));
//! let local = Matrix::from_axes_and_position(
//!     &Vec4::UNIT_X,
//!     &Vec4::UNIT_Y,
//!     &Vec4::UNIT_Z,
//!     &Vec4::point(1., 0., 0.),
//! );
//!
//! // `local` first, then `root`.
//! let world = local * root;
//! let p = world.transform(&Vec4::point(0., 0., 0.));
//! approx::assert_abs_diff_eq!(Vec4::point(0., 1., 0.), p, epsilon = 1e-12);
//!
//! let q = Quaternion::from_matrix(&world);
//! let half = Quaternion::slerp(&Quaternion::identity(), &q, 0.5);
//! approx::assert_abs_diff_eq!(
//!     Quaternion::from_axis_angle(0., 0., 1., 45. * deg),
//!     half,
//!     epsilon = 1e-12
//! );
//! ```

/// Scalar type, angle units and constants.
pub mod common;
/// Error type of the fallible conversions.
pub mod error;
/// Intrinsic Euler angle sequences.
pub mod euler;
/// 4×4 affine transformation matrix.
pub mod matrix;
/// Rotation quaternion.
pub mod quaternion;
/// 4-component vector.
pub mod vector;

#[cfg_attr(docsrs, doc(cfg(feature = "use_nalgebra")))]
#[cfg(feature = "use_nalgebra")]
/// Conversions from and to `nalgebra` types.
pub mod interop;

pub use common::{deg, rad, Angle, Scalar};
pub use error::MathError;
pub use euler::EulerAngle;
pub use matrix::{Matrix, MatrixKernel, ScalarKernel};
pub use quaternion::Quaternion;
pub use vector::Vec4;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        common::{deg, rad, Angle, Scalar, FRAC_PI_2, PI},
        euler::EulerAngle,
        matrix::Matrix,
        quaternion::Quaternion,
        vector::Vec4,
    };
}
