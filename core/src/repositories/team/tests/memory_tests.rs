//! Unit tests for the in-memory team repository

use crate::domain::entities::{Stadium, Team};
use crate::errors::DomainError;
use crate::repositories::team::{InMemoryTeamRepository, TeamRepository};

#[tokio::test]
async fn test_find_seeded_team() {
    let repo = InMemoryTeamRepository::with_teams(vec![
        Team::new("K01").with_stadium(Stadium::new("C04")),
        Team::new("K02"),
    ]);

    let found = repo.find_team_by_id("K01").await.unwrap().unwrap();
    assert_eq!(found.team_id.as_deref(), Some("K01"));
    assert_eq!(
        found.stadium.and_then(|s| s.stadium_id).as_deref(),
        Some("C04")
    );
}

#[tokio::test]
async fn test_missing_team_is_none() {
    let repo = InMemoryTeamRepository::with_teams(vec![Team::new("K01")]);

    assert!(repo.find_team_by_id("ABC").await.unwrap().is_none());
    assert!(repo.find_team_by_id("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_teams_without_id_are_skipped() {
    let repo = InMemoryTeamRepository::with_teams(vec![Team::default(), Team::new("K01")]);

    assert_eq!(repo.len().await, 1);
    assert!(repo.find_team_by_id("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_replaces_existing() {
    let repo = InMemoryTeamRepository::new();
    assert!(repo.is_empty().await);

    let previous = repo.insert(Team::new("K05")).await.unwrap();
    assert!(previous.is_none());

    let renamed = Team {
        team_name: Some("현대모터스".to_string()),
        ..Team::new("K05")
    };
    let previous = repo.insert(renamed).await.unwrap();
    assert!(previous.is_some());

    let found = repo.find_team_by_id("K05").await.unwrap().unwrap();
    assert_eq!(found.team_name.as_deref(), Some("현대모터스"));
}

#[tokio::test]
async fn test_insert_without_id_is_rejected() {
    let repo = InMemoryTeamRepository::new();
    let result = repo.insert(Team::default()).await;

    assert!(matches!(result, Err(DomainError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_repeated_lookup_is_stable() {
    let repo = InMemoryTeamRepository::with_teams(vec![Team::new("K01")]);

    let first = repo.find_team_by_id("K01").await.unwrap();
    let second = repo.find_team_by_id("K01").await.unwrap();
    assert_eq!(first, second);
}
