mod angle;

pub use angle::*;

/// The scalar type every component is stored in.
pub type Scalar = f64;

pub use core::f64::consts::{FRAC_PI_2, PI};
