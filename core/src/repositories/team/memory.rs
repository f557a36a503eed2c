//! In-memory implementation of TeamRepository
//!
//! Backs local runs without a database (seeded from a JSON fixture) and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Team;
use crate::errors::DomainError;

use super::trait_::TeamRepository;

/// Team repository keyed by team id
#[derive(Clone)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<HashMap<String, Team>>>,
}

impl InMemoryTeamRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            teams: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository seeded with the given teams
    ///
    /// Teams without an id cannot be looked up and are skipped.
    pub fn with_teams(teams: Vec<Team>) -> Self {
        let teams = teams
            .into_iter()
            .filter_map(|team| match team.team_id.clone() {
                Some(id) => Some((id, team)),
                None => {
                    tracing::warn!("Skipping team without teamId");
                    None
                }
            })
            .collect::<HashMap<_, _>>();

        tracing::debug!(count = teams.len(), "Seeded in-memory team repository");

        Self {
            teams: Arc::new(RwLock::new(teams)),
        }
    }

    /// Insert or replace a team, returning the previous entry
    pub async fn insert(&self, team: Team) -> Result<Option<Team>, DomainError> {
        let id = team
            .team_id
            .clone()
            .ok_or_else(|| DomainError::invalid_argument("teamId is required"))?;

        let mut teams = self.teams.write().await;
        Ok(teams.insert(id, team))
    }

    pub async fn len(&self) -> usize {
        self.teams.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.teams.read().await.is_empty()
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_team_by_id(&self, team_id: &str) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(team_id).cloned())
    }
}
