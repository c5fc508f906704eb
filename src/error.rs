use std::io;

use thiserror::Error;

/// Failures reported by [`crate::users::UsersData`] operations.
///
/// `IncorrectData` and `NotFound` are already shown to the operator by the
/// time the caller sees them; only `Io` means the console itself failed.
#[derive(Debug, Error)]
pub enum UsersError {
    #[error("Incorrect data.")]
    IncorrectData,

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("console write failed: {0}")]
    Io(#[from] io::Error),
}

impl UsersError {
    /// True for the two failure kinds that are reported to the operator
    /// and leave the collection unchanged.
    pub fn is_reported(&self) -> bool {
        matches!(self, UsersError::IncorrectData | UsersError::NotFound(_))
    }
}

pub type UsersResult<T> = Result<T, UsersError>;
