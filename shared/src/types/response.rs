//! API response envelope and health check payload

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{ErrorCode, ErrorDetail};

/// Standard API response envelope returned by every endpoint
///
/// Exactly one outcome is encoded: a success carries an optional payload and
/// no error, a failure carries an error and no payload. Fields are private so
/// the constructors below are the only way to build one.
///
/// Serialized as `{"success": bool, "response": T | null, "error": {code, message} | null}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    response: Option<T>,
    error: Option<ErrorDetail>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying a payload
    pub fn success(response: T) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
        }
    }

    /// Create a successful response without a body
    pub fn empty() -> Self {
        Self {
            success: true,
            response: None,
            error: None,
        }
    }

    /// Create a failure response from any error code
    pub fn fail<E: ErrorCode + ?Sized>(error_code: &E) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(ErrorDetail::from_code(error_code)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn response(&self) -> Option<&T> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    /// Extract the payload, consuming the envelope
    pub fn into_response(self) -> Option<T> {
        self.response
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}
