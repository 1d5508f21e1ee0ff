//! Error type for lookup-table operations.
//!
//! All errors are programming or data-integrity errors: they are detected
//! before any mutation happens and are never recovered internally.

use thiserror::Error;

use crate::masks::MAX_INPUTS;

/// The result of a lookup-table operation.
pub type Result<T> = std::result::Result<T, LutError>;

/// Error returned when a lookup-table operation is called with invalid arguments.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LutError {
    /// Operands have incompatible input counts.
    #[error("incompatible input counts: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// An input index is not below the input count.
    #[error("input {input} is out of range for a {input_count}-input function")]
    InputOutOfRange { input: usize, input_count: usize },

    /// An input-values mask has bits set above the input count.
    #[error("input values {values:#x} are out of range for a {input_count}-input function")]
    ValuesOutOfRange { values: usize, input_count: usize },

    /// A hexadecimal encoding has a bad length or a non-hex character.
    #[error("malformed hexadecimal encoding: {0}")]
    MalformedEncoding(String),

    /// A single-word pattern was given for a function spanning several words.
    #[error("a {input_count}-input function does not fit in a single word")]
    NotSingleWord { input_count: usize },

    /// Functions with fewer than 2 inputs have no hexadecimal form.
    #[error("a {input_count}-input function has no hexadecimal form")]
    NoHexForm { input_count: usize },

    /// The input count exceeds [`MAX_INPUTS`].
    #[error("a {input_count}-input function exceeds the maximum of {} inputs", MAX_INPUTS)]
    TooManyInputs { input_count: usize },

    /// A view was requested over a buffer of the wrong length.
    #[error("buffer has {found} words, expected {expected}")]
    BufferSize { expected: usize, found: usize },
}
