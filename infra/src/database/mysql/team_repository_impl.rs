//! MySQL implementation of the TeamRepository trait.
//!
//! A lookup runs three queries: the team row, its home stadium, then the
//! stadium's schedules ordered by date. Missing stadium or schedule rows
//! leave the corresponding fields empty rather than failing the lookup.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use kl_core::domain::entities::{Schedule, Stadium, Team};
use kl_core::errors::DomainError;
use kl_core::repositories::TeamRepository;

/// MySQL implementation of TeamRepository
pub struct MySqlTeamRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTeamRepository {
    /// Create a new MySQL team repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Read an optional column, reporting the column name on failure
    fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<Option<T>, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get::<Option<T>, _>(name)
            .map_err(|e| DomainError::Database(format!("Failed to get {}: {}", name, e)))
    }

    /// Convert database row to Team entity (without its stadium)
    fn row_to_team(row: &MySqlRow) -> Result<Team, DomainError> {
        Ok(Team {
            team_id: Self::column(row, "team_id")?,
            region_name: Self::column(row, "region_name")?,
            team_name: Self::column(row, "team_name")?,
            e_team_name: Self::column(row, "e_team_name")?,
            orig_yyyy: Self::column(row, "orig_yyyy")?,
            zip_code1: Self::column(row, "zip_code1")?,
            zip_code2: Self::column(row, "zip_code2")?,
            address: Self::column(row, "address")?,
            ddd: Self::column(row, "ddd")?,
            tel: Self::column(row, "tel")?,
            fax: Self::column(row, "fax")?,
            homepage: Self::column(row, "homepage")?,
            owner: Self::column(row, "owner")?,
            stadium: None,
        })
    }

    /// Convert database row to Stadium entity (without its schedules)
    fn row_to_stadium(row: &MySqlRow) -> Result<Stadium, DomainError> {
        Ok(Stadium {
            stadium_id: Self::column(row, "stadium_id")?,
            stadium_name: Self::column(row, "stadium_name")?,
            hometeam_id: Self::column(row, "hometeam_id")?,
            seat_count: Self::column(row, "seat_count")?,
            address: Self::column(row, "address")?,
            ddd: Self::column(row, "ddd")?,
            tel: Self::column(row, "tel")?,
            schedules: None,
        })
    }

    fn row_to_schedule(row: &MySqlRow) -> Result<Schedule, DomainError> {
        Ok(Schedule {
            stadium_id: Self::column(row, "stadium_id")?,
            sche_date: Self::column(row, "sche_date")?,
            gubun: Self::column(row, "gubun")?,
            hometeam_id: Self::column(row, "hometeam_id")?,
            awayteam_id: Self::column(row, "awayteam_id")?,
            home_score: Self::column(row, "home_score")?,
            away_score: Self::column(row, "away_score")?,
        })
    }

    async fn find_stadium(&self, stadium_id: &str) -> Result<Option<Stadium>, DomainError> {
        let query = r#"
            SELECT stadium_id, stadium_name, hometeam_id, seat_count, address, ddd, tel
            FROM stadium
            WHERE stadium_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(stadium_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to find stadium: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let stadium = Self::row_to_stadium(&row)?;
        let schedules = self.find_schedules(stadium_id).await?;

        Ok(Some(stadium.with_schedules(schedules)))
    }

    async fn find_schedules(&self, stadium_id: &str) -> Result<Vec<Schedule>, DomainError> {
        let query = r#"
            SELECT stadium_id, sche_date, gubun, hometeam_id, awayteam_id, home_score, away_score
            FROM schedule
            WHERE stadium_id = ?
            ORDER BY sche_date
        "#;

        let rows = sqlx::query(query)
            .bind(stadium_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to find schedules: {}", e)))?;

        rows.iter().map(Self::row_to_schedule).collect()
    }
}

#[async_trait]
impl TeamRepository for MySqlTeamRepository {
    async fn find_team_by_id(&self, team_id: &str) -> Result<Option<Team>, DomainError> {
        let query = r#"
            SELECT team_id, region_name, team_name, e_team_name, orig_yyyy,
                   zip_code1, zip_code2, address, ddd, tel, fax, homepage, owner,
                   stadium_id
            FROM team
            WHERE team_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to find team: {}", e)))?;

        let Some(row) = row else {
            tracing::debug!(team_id = %team_id, "Team not found");
            return Ok(None);
        };

        let mut team = Self::row_to_team(&row)?;
        let stadium_id: Option<String> = Self::column(&row, "stadium_id")?;

        if let Some(stadium_id) = stadium_id {
            team.stadium = self.find_stadium(&stadium_id).await?;
        }

        Ok(Some(team))
    }
}
