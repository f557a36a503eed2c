//! Error code registries, one closed set per domain area.
//!
//! Each registry value is an immutable (code, message) pair. The code is what
//! clients branch on; the message is sent as-is.

use kl_shared::ErrorCode;

/// Failure reasons of the team area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamErrorCode {
    /// No team matches the requested id
    NotFound,
}

impl TeamErrorCode {
    pub const ALL: &'static [TeamErrorCode] = &[TeamErrorCode::NotFound];

    /// Registry name of the value (e.g. `NOT_FOUND`)
    pub fn name(&self) -> &'static str {
        match self {
            TeamErrorCode::NotFound => "NOT_FOUND",
        }
    }

    /// Look a value up by its registry name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.name() == name)
    }

    pub(crate) fn pair(&self) -> (&'static str, &'static str) {
        match self {
            TeamErrorCode::NotFound => ("T404", "존재하지 않는 팀입니다."),
        }
    }
}

impl ErrorCode for TeamErrorCode {
    fn code(&self) -> &str {
        self.pair().0
    }

    fn message(&self) -> &str {
        self.pair().1
    }
}

/// Failure reasons of the user area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserErrorCode {
    /// No user matches the request
    NotFound,
}

impl UserErrorCode {
    pub const ALL: &'static [UserErrorCode] = &[UserErrorCode::NotFound];

    pub fn name(&self) -> &'static str {
        match self {
            UserErrorCode::NotFound => "NOT_FOUND",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.name() == name)
    }

    pub(crate) fn pair(&self) -> (&'static str, &'static str) {
        match self {
            UserErrorCode::NotFound => ("U001", "존재하지 않는 사용자입니다."),
        }
    }
}

impl ErrorCode for UserErrorCode {
    fn code(&self) -> &str {
        self.pair().0
    }

    fn message(&self) -> &str {
        self.pair().1
    }
}
