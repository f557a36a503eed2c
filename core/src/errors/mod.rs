//! Domain error codes and failure types.

mod codes;
mod types;

#[cfg(test)]
mod tests;

pub use codes::{TeamErrorCode, UserErrorCode};
pub use types::{TeamError, UserError};

use kl_shared::{ErrorDetail, FailureKind};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    User(#[from] UserError),

    /// Input rejected without a dedicated code
    #[error("{message}")]
    InvalidArgument { message: String },

    /// The lookup collaborator failed; carries the driver's message
    #[error("{0}")]
    Database(String),
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wire representation of this failure
    ///
    /// Area failures keep their registry code; everything else is reported
    /// as uncategorized with the original message text.
    pub fn error_detail(&self) -> ErrorDetail {
        match self {
            DomainError::Team(e) => ErrorDetail::from_code(e),
            DomainError::User(e) => ErrorDetail::from_code(e),
            _ => ErrorDetail::new(FailureKind::Uncategorized, self.to_string()),
        }
    }

    /// Whether this failure carries a registry code (a lookup miss) rather
    /// than being uncategorized
    pub fn is_expected(&self) -> bool {
        matches!(self, DomainError::Team(_) | DomainError::User(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
