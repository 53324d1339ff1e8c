use thiserror::Error;

/// An error occurred while converting external data into a math type.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MathError {
    /// The scalar slice does not have the number of components the target type needs.
    #[error("Expected {expected} scalars, but got {actual}")]
    InvalidLength {
        /// Number of scalars the target type holds.
        expected: usize,
        /// Number of scalars supplied.
        actual: usize,
    },
    /// The byte buffer does not have the size of the target type.
    #[error("Expected {expected} bytes, but got {actual}")]
    InvalidByteLength {
        /// Size of the target type in bytes.
        expected: usize,
        /// Size of the supplied buffer.
        actual: usize,
    },
}
