//! Unit tests for error codes and domain error types

use kl_shared::{ApiResponse, ErrorCode};

use crate::errors::{DomainError, TeamError, TeamErrorCode, UserError, UserErrorCode};

#[test]
fn test_team_error_code_pair() {
    assert_eq!(TeamErrorCode::NotFound.code(), "T404");
    assert_eq!(TeamErrorCode::NotFound.message(), "존재하지 않는 팀입니다.");
}

#[test]
fn test_user_error_code_pair() {
    assert_eq!(UserErrorCode::NotFound.code(), "U001");
    assert_eq!(UserErrorCode::NotFound.message(), "존재하지 않는 사용자입니다.");
}

#[test]
fn test_registry_lookup_by_name() {
    assert_eq!(TeamErrorCode::from_name("NOT_FOUND"), Some(TeamErrorCode::NotFound));
    assert_eq!(UserErrorCode::from_name("NOT_FOUND"), Some(UserErrorCode::NotFound));
    assert_eq!(TeamErrorCode::from_name("MISSING"), None);
}

#[test]
fn test_registry_names_round_trip() {
    for code in TeamErrorCode::ALL {
        assert_eq!(TeamErrorCode::from_name(code.name()), Some(*code));
    }
    for code in UserErrorCode::ALL {
        assert_eq!(UserErrorCode::from_name(code.name()), Some(*code));
    }
}

#[test]
fn test_team_error_reports_its_code() {
    let error = TeamError::NotFound;
    assert_eq!(error.error_code(), TeamErrorCode::NotFound);
    assert_eq!(error.code(), "T404");
    assert_eq!(error.message(), "존재하지 않는 팀입니다.");
    assert_eq!(error.to_string(), "존재하지 않는 팀입니다.");
}

#[test]
fn test_user_error_reports_its_code() {
    let error = UserError::NotFound;
    assert_eq!(error.error_code(), UserErrorCode::NotFound);
    assert_eq!(error.code(), "U001");
    assert_eq!(error.to_string(), "존재하지 않는 사용자입니다.");
}

#[test]
fn test_fail_envelope_copies_every_registry_code() {
    for code in TeamErrorCode::ALL {
        let envelope = ApiResponse::<()>::fail(code);
        let error = envelope.error().unwrap();
        assert_eq!(error.code(), code.code());
        assert_eq!(error.message(), code.message());
    }
    for code in UserErrorCode::ALL {
        let envelope = ApiResponse::<()>::fail(code);
        let error = envelope.error().unwrap();
        assert_eq!(error.code(), code.code());
        assert_eq!(error.message(), code.message());
    }
}

#[test]
fn test_domain_error_detail_for_area_failures() {
    let detail = DomainError::from(TeamError::NotFound).error_detail();
    assert_eq!(detail.code(), "T404");
    assert_eq!(detail.message(), "존재하지 않는 팀입니다.");

    let detail = DomainError::from(UserError::NotFound).error_detail();
    assert_eq!(detail.code(), "U001");
}

#[test]
fn test_domain_error_detail_passes_message_through() {
    let detail = DomainError::invalid_argument("bad input").error_detail();
    assert_eq!(detail.code(), "9999");
    assert_eq!(detail.message(), "bad input");

    let detail = DomainError::Database("connection refused".to_string()).error_detail();
    assert_eq!(detail.code(), "9999");
    assert_eq!(detail.message(), "connection refused");
}

#[test]
fn test_domain_error_is_expected() {
    assert!(DomainError::from(TeamError::NotFound).is_expected());
    assert!(DomainError::from(UserError::NotFound).is_expected());
    assert!(!DomainError::invalid_argument("bad input").is_expected());
    assert!(!DomainError::Database("timeout".to_string()).is_expected());
}
