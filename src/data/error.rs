//! Dataset construction and access errors.

use crate::error::ErrorKind;

/// Errors raised while building or reading [`Observations`](super::Observations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("number of feature vectors ({features}) does not match number of outcomes ({outcomes})")]
    OutcomeCountMismatch { features: usize, outcomes: usize },

    #[error("observation {index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("observation {index} has no features")]
    EmptyFeatures { index: usize },

    #[error("index {index} out of range for {len} observations")]
    IndexOutOfRange { index: usize, len: usize },
}

impl DatasetError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::InvalidInput,
        }
    }
}
