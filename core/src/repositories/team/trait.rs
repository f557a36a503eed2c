//! Team repository trait defining the lookup port for team data.
//!
//! The trait is async-first; implementations live next to their storage
//! (in-memory here, MySQL in the infrastructure crate).

use async_trait::async_trait;

use crate::domain::entities::Team;
use crate::errors::DomainError;

/// Repository trait for team lookups
///
/// A lookup materializes the team together with its home stadium and the
/// stadium's schedules.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use kl_core::domain::entities::Team;
/// use kl_core::errors::DomainError;
/// use kl_core::repositories::TeamRepository;
///
/// struct EmptyTeamRepository;
///
/// #[async_trait]
/// impl TeamRepository for EmptyTeamRepository {
///     async fn find_team_by_id(&self, _team_id: &str) -> Result<Option<Team>, DomainError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team by its identifier
    ///
    /// # Arguments
    /// * `team_id` - Team identifier (e.g., "K01")
    ///
    /// # Returns
    /// * `Ok(Some(Team))` - Team found
    /// * `Ok(None)` - No team with the given id
    /// * `Err(DomainError)` - The underlying store failed
    async fn find_team_by_id(&self, team_id: &str) -> Result<Option<Team>, DomainError>;
}
