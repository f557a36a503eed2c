//! Error code capability and the wire representation of failures

use serde::Serialize;
use std::fmt;

/// Anything that identifies a failure reason by a short code and a
/// human-readable message.
///
/// Domain areas expose their codes as enums implementing this trait; the
/// response envelope only ever sees the trait.
pub trait ErrorCode {
    /// Short identifier reproduced verbatim on the wire (e.g. `T404`)
    fn code(&self) -> &str;

    /// Human-readable message sent to the client
    fn message(&self) -> &str;
}

impl<E: ErrorCode + ?Sized> ErrorCode for &E {
    fn code(&self) -> &str {
        (**self).code()
    }

    fn message(&self) -> &str {
        (**self).message()
    }
}

/// Codes that are not tied to a domain area and take their message at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request input violated a declared constraint
    Validation,
    /// Anything the translator could not classify further
    Uncategorized,
}

impl FailureKind {
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Validation => error_codes::VALIDATION_FAIL,
            FailureKind::Uncategorized => error_codes::ETC,
        }
    }
}

/// Owned (code, message) pair as it appears in the `error` member of the envelope
#[derive(Debug, Clone, Eq, Serialize)]
pub struct ErrorDetail {
    code: String,
    message: String,
}

impl ErrorDetail {
    /// Pair a code-only failure kind with a message decided at runtime
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            code: kind.code().to_string(),
            message: message.into(),
        }
    }

    /// Copy the code and message out of any registry value or domain failure
    pub fn from_code<E: ErrorCode + ?Sized>(error_code: &E) -> Self {
        Self {
            code: error_code.code().to_string(),
            message: error_code.message().to_string(),
        }
    }
}

impl ErrorCode for ErrorDetail {
    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }
}

// Two error codes denote the same failure reason iff their codes match.
impl PartialEq for ErrorDetail {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Codes shared by every domain area
pub mod error_codes {
    pub const VALIDATION_FAIL: &str = "8888";
    pub const ETC: &str = "9999";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_codes() {
        assert_eq!(FailureKind::Validation.code(), "8888");
        assert_eq!(FailureKind::Uncategorized.code(), "9999");
    }

    #[test]
    fn test_error_detail_new() {
        let detail = ErrorDetail::new(FailureKind::Uncategorized, "bad input");
        assert_eq!(detail.code(), "9999");
        assert_eq!(detail.message(), "bad input");
    }

    #[test]
    fn test_error_detail_equality_by_code() {
        let first = ErrorDetail::new(FailureKind::Validation, "first");
        let second = ErrorDetail::new(FailureKind::Validation, "second");
        let other = ErrorDetail::new(FailureKind::Uncategorized, "first");

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_error_detail_from_code_copies_pair() {
        let original = ErrorDetail::new(FailureKind::Validation, "too short");
        let copied = ErrorDetail::from_code(&original);
        assert_eq!(copied.code(), "8888");
        assert_eq!(copied.message(), "too short");
    }

    #[test]
    fn test_error_detail_serialization() {
        let detail = ErrorDetail::new(FailureKind::Uncategorized, "bad input");
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json, serde_json::json!({"code": "9999", "message": "bad input"}));
    }
}
