//! # K-League Core
//!
//! Domain layer for the K-League directory backend.
//! This crate contains the domain entities, the per-area error code
//! registries, the team lookup port and the services built on top of it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Schedule, Stadium, Team, User};
pub use errors::{DomainError, DomainResult, TeamError, TeamErrorCode, UserError, UserErrorCode};
pub use repositories::{InMemoryTeamRepository, TeamRepository};
pub use services::TeamService;
