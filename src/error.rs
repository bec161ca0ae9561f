//! Error handling

use thiserror::Error;

pub type SynthResult<T> = Result<T, SynthError>;

#[derive(Debug, Error)]
pub enum SynthError {
    // Configuration errors
    #[error("fraction must be within [0, 1], got {0}")]
    InvalidFraction(f64),

    #[error("corrupt range ({min}, {max}) is invalid: require 1 <= min <= max")]
    InvalidCorruptRange { min: usize, max: usize },

    #[error("no fields available for corruption")]
    NoFields,

    // Dataset shape errors
    #[error("row has {got} values, dataset has {expected} columns")]
    RowArity { expected: usize, got: usize },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("row index {0} out of bounds")]
    RowOutOfBounds(usize),

    // Collaborator failure
    #[error("field generator '{field}' failed: {message}")]
    GeneratorFailed { field: String, message: String },
}
