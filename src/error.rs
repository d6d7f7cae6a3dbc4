//! Error classification shared by all modules.
//!
//! Each module defines its own error enum ([`DatasetError`](crate::data::DatasetError),
//! [`OptimizeError`](crate::training::OptimizeError), ...). [`ErrorKind`] groups
//! their variants into the three categories callers usually branch on.

/// Broad category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Mismatched lengths, empty inputs or otherwise unusable arguments.
    InvalidInput,
    /// Indexed access past the end of a collection.
    OutOfRange,
    /// An error raised by a caller-supplied gradient, schedule or stopping
    /// criterion.
    CollaboratorFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid input",
            Self::OutOfRange => "out of range",
            Self::CollaboratorFailure => "collaborator failure",
        };
        f.write_str(name)
    }
}
