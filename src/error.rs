//! Error types for matrix addition

use thiserror::Error;

use crate::ops::dispatch::Representation;

/// Result type alias using the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in addition operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operands of an elementwise operation have different shapes
    #[error("incompatible shapes {left:?} and {right:?}")]
    ShapeMismatch {
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// No kernel is registered for this pair of representations
    #[error("no addition kernel for {left:?} + {right:?}")]
    NoKernel {
        /// Representation of the left operand
        left: Representation,
        /// Representation of the right operand
        right: Representation,
    },
}
