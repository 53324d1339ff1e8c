mod handedness;
#[cfg(feature = "serde")]
mod serialize;

pub use bone_chain::*;
pub use handedness::*;
pub use interpolate::*;
#[cfg(feature = "serde")]
pub use serialize::*;
