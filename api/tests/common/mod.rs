//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web;
use kl_api::routes::AppState;
use kl_core::domain::entities::{Schedule, Stadium, Team};
use kl_core::errors::DomainError;
use kl_core::repositories::{InMemoryTeamRepository, TeamRepository};

/// Repository wrapper that counts lookups
#[derive(Clone)]
pub struct CountingTeamRepository {
    inner: InMemoryTeamRepository,
    lookups: Arc<AtomicUsize>,
}

impl CountingTeamRepository {
    pub fn new(inner: InMemoryTeamRepository) -> Self {
        Self {
            inner,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamRepository for CountingTeamRepository {
    async fn find_team_by_id(&self, team_id: &str) -> Result<Option<Team>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_team_by_id(team_id).await
    }
}

/// Repository whose store is unavailable
pub struct FailingTeamRepository;

#[async_trait]
impl TeamRepository for FailingTeamRepository {
    async fn find_team_by_id(&self, _team_id: &str) -> Result<Option<Team>, DomainError> {
        Err(DomainError::Database("Failed to find team: pool timed out".to_string()))
    }
}

pub fn steelers() -> Team {
    let schedules = vec![
        Schedule {
            stadium_id: Some("C06".to_string()),
            sche_date: Some("20120317".to_string()),
            gubun: Some("Y".to_string()),
            hometeam_id: Some("K03".to_string()),
            awayteam_id: Some("K07".to_string()),
            home_score: Some(2),
            away_score: Some(1),
        },
        Schedule {
            stadium_id: Some("C06".to_string()),
            sche_date: Some("20120331".to_string()),
            gubun: Some("Y".to_string()),
            hometeam_id: Some("K03".to_string()),
            awayteam_id: Some("K01".to_string()),
            home_score: Some(0),
            away_score: Some(0),
        },
    ];

    let stadium = Stadium {
        stadium_name: Some("포항스틸야드".to_string()),
        hometeam_id: Some("K03".to_string()),
        seat_count: Some(25000),
        ..Stadium::new("C06")
    }
    .with_schedules(schedules);

    Team {
        region_name: Some("포항".to_string()),
        team_name: Some("스틸러스".to_string()),
        e_team_name: Some("FC Pohang Steelers".to_string()),
        ..Team::new("K03")
    }
    .with_stadium(stadium)
}

pub fn counting_state() -> (web::Data<AppState<CountingTeamRepository>>, CountingTeamRepository) {
    let repository =
        CountingTeamRepository::new(InMemoryTeamRepository::with_teams(vec![steelers()]));
    let state = web::Data::new(AppState::new(repository.clone()));
    (state, repository)
}
