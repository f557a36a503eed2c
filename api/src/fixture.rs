//! Team fixtures for the in-memory data source

use anyhow::Context;
use std::fs;
use std::path::Path;

use kl_core::domain::entities::Team;

/// Read a JSON array of teams
pub fn load_teams(path: &Path) -> anyhow::Result<Vec<Team>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team fixture {}", path.display()))?;
    let teams: Vec<Team> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse team fixture {}", path.display()))?;

    log::info!("Loaded {} team(s) from {}", teams.len(), path.display());
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/teams.json")
    }

    #[test]
    fn test_load_bundled_fixture() {
        let teams = load_teams(&fixture_path()).unwrap();

        assert_eq!(teams.len(), 3);
        let steelers = &teams[0];
        assert_eq!(steelers.team_id.as_deref(), Some("K03"));
        let schedules = steelers
            .stadium
            .as_ref()
            .and_then(|s| s.schedules.as_ref())
            .unwrap();
        assert_eq!(schedules.len(), 2);
    }

    #[test]
    fn test_missing_fixture_is_an_error() {
        let error = load_teams(Path::new("does/not/exist.json")).unwrap_err();
        assert!(error.to_string().contains("Failed to read team fixture"));
    }
}
