//! Error types for the encoding core.

use std::fmt;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Error type for encoding operations
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The input buffer holds no bytes. Encoding never produces output for
    /// an empty buffer, so this is rejected before any packing happens.
    #[error("Input data is empty")]
    EmptyInput,

    /// Strict size policy only: the buffer length does not divide evenly
    /// into units of the selected width.
    #[error("Input length {len} is not divisible by unit width {width}")]
    MisalignedInput { len: usize, width: usize },

    /// The output sink refused a write.
    #[error("Failed to write to output sink: {0}")]
    Sink(#[from] fmt::Error),
}
