//! Global failure translation
//!
//! Handlers return `Result<_, ApiException>`; the `ResponseError` impl below
//! turns every failure into the standard envelope. Extractor failures and
//! unknown routes are routed into the same type by `configure_error_handling`
//! and `not_found`, so no failure leaves the service in another shape.

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use kl_core::errors::DomainError;
use kl_shared::{ApiResponse, ErrorDetail, FailureKind};

/// Failure raised by a request handler
#[derive(Error, Debug)]
pub enum ApiException {
    /// Failure returned by the domain layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request input violated a declared constraint; carries the first
    /// violation's message
    #[error("{0}")]
    Validation(String),

    /// Malformed request that has no dedicated code
    #[error("{0}")]
    InvalidArgument(String),
}

impl ApiException {
    /// Wire representation of this failure
    pub fn error_detail(&self) -> ErrorDetail {
        match self {
            ApiException::Domain(error) => error.error_detail(),
            ApiException::Validation(message) => {
                ErrorDetail::new(FailureKind::Validation, message.as_str())
            }
            ApiException::InvalidArgument(message) => {
                ErrorDetail::new(FailureKind::Uncategorized, message.as_str())
            }
        }
    }

    /// Whether the failure has a dedicated code, as opposed to the
    /// uncategorized fallback
    pub fn is_expected(&self) -> bool {
        match self {
            ApiException::Domain(error) => error.is_expected(),
            ApiException::Validation(_) => true,
            ApiException::InvalidArgument(_) => false,
        }
    }
}

impl From<ValidationErrors> for ApiException {
    fn from(errors: ValidationErrors) -> Self {
        ApiException::Validation(first_violation_message(&errors))
    }
}

/// Message of the first reported violation
///
/// Fields are visited in name order so the choice is stable when several
/// fields fail at once. Falls back to the violation code when the constraint
/// declares no message.
fn first_violation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(_, violations)| violations.iter())
        .map(|violation| match &violation.message {
            Some(message) => message.to_string(),
            None => violation.code.to_string(),
        })
        .next()
        .unwrap_or_else(|| errors.to_string())
}

impl ResponseError for ApiException {
    // The envelope's `success` flag carries the outcome
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        let detail = self.error_detail();

        if self.is_expected() {
            log::warn!("Request failed: {}", detail);
        } else {
            log::error!("Request failed: {} ({:?})", detail, self);
        }

        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::fail(&detail))
    }
}

/// Route extractor failures through `ApiException`
///
/// Install once per application with `App::configure`.
pub fn configure_error_handling(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiException::InvalidArgument(err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiException::InvalidArgument(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        ApiException::InvalidArgument(err.to_string()).into()
    }));
}

/// Default service for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiException> {
    Err(ApiException::InvalidArgument(format!(
        "No handler for {} {}",
        req.method(),
        req.path()
    )))
}
