//! Main team service implementation

use crate::domain::entities::Team;
use crate::errors::{DomainResult, TeamError};
use crate::repositories::TeamRepository;

/// Service for team lookups
pub struct TeamService<R: TeamRepository> {
    pub(crate) repository: R,
}

impl<R: TeamRepository> TeamService<R> {
    /// Creates a new team service over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Find a team with its stadium and schedules
    ///
    /// # Errors
    ///
    /// * `TeamError::NotFound` when no team has the given id
    /// * `DomainError::Database` when the repository fails
    pub async fn find_team_by_id(&self, team_id: &str) -> DomainResult<Team> {
        tracing::debug!(team_id = %team_id, "Looking up team");

        self.repository
            .find_team_by_id(team_id)
            .await?
            .ok_or_else(|| TeamError::NotFound.into())
    }
}
