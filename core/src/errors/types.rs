//! Area-specific domain failures
//!
//! Each failure carries exactly one registry code and reports that code's
//! message as its `Display`. Failures are returned, never logged, here; the
//! presentation layer logs them once when translating to a response.

use kl_shared::ErrorCode;
use thiserror::Error;

use super::codes::{TeamErrorCode, UserErrorCode};

/// Team lookup failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamError {
    #[error("{}", TeamErrorCode::NotFound.message())]
    NotFound,
}

impl TeamError {
    /// The registry code this failure was raised with
    pub fn error_code(&self) -> TeamErrorCode {
        match self {
            TeamError::NotFound => TeamErrorCode::NotFound,
        }
    }
}

impl ErrorCode for TeamError {
    fn code(&self) -> &str {
        self.error_code().pair().0
    }

    fn message(&self) -> &str {
        self.error_code().pair().1
    }
}

/// User lookup failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    #[error("{}", UserErrorCode::NotFound.message())]
    NotFound,
}

impl UserError {
    pub fn error_code(&self) -> UserErrorCode {
        match self {
            UserError::NotFound => UserErrorCode::NotFound,
        }
    }
}

impl ErrorCode for UserError {
    fn code(&self) -> &str {
        self.error_code().pair().0
    }

    fn message(&self) -> &str {
        self.error_code().pair().1
    }
}
