//! Optimizer errors.

use std::error::Error;

use crate::data::DatasetError;
use crate::error::ErrorKind;

/// Error type returned by caller-supplied collaborators.
///
/// Whatever a [`Gradient`](super::Gradient), [`Schedule`](super::Schedule) or
/// [`StoppingCriteria`](super::StoppingCriteria) returns is handed back to the
/// caller untouched inside [`OptimizeError::Collaborator`].
pub type CollaboratorError = Box<dyn Error + Send + Sync + 'static>;

/// Errors raised while estimating gradients or running gradient descent.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("cannot estimate a gradient from an empty set of observations")]
    EmptyObservations,

    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    #[error("batch size ({batch_size}) exceeds number of observations ({n_observations})")]
    BatchTooLarge {
        batch_size: usize,
        n_observations: usize,
    },

    #[error("gradient for observation {index} has {got} components, expected {expected}")]
    GradientArity {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("initial coefficients have {got} values, expected {expected}")]
    CoefficientArity { expected: usize, got: usize },

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Collaborator(CollaboratorError),
}

impl OptimizeError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Dataset(e) => e.kind(),
            Self::Collaborator(_) => ErrorKind::CollaboratorFailure,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// The original collaborator error, if this is a collaborator failure.
    pub fn into_collaborator(self) -> Option<CollaboratorError> {
        match self {
            Self::Collaborator(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CollaboratorError> for OptimizeError {
    fn from(e: CollaboratorError) -> Self {
        Self::Collaborator(e)
    }
}
