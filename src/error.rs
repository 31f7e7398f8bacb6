//! Error types for record encoding, decoding and iteration.

use thiserror::Error;

use crate::types::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A required input was absent. Borrowed slices and references can't be
    /// null, so the codec never raises this; it exists for result-code parity.
    #[error("required input is missing")]
    NullInput,

    #[error("buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("record kind mismatch: iterator yields {actual} records, {expected} requested")]
    KindMismatch {
        expected: RecordKind,
        actual: RecordKind,
    },

    #[error("iterator exhausted at byte offset {offset}")]
    Exhausted { offset: usize },

    /// Reserved.
    #[error("out of memory")]
    OutOfMemory,

    /// Reserved.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(u32),
}

impl CodecError {
    /// Numeric result code of the packed storage format's C interface.
    ///
    /// Success is `0`; both iterator failures share the "invalid size" code.
    pub fn code(&self) -> i32 {
        match self {
            Self::NullInput => -1,
            Self::KindMismatch { .. } | Self::Exhausted { .. } => -2,
            Self::BufferTooSmall { .. } => -3,
            Self::OutOfMemory => -4,
            Self::InvalidTimestamp(_) => -5,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
