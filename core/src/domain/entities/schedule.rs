use serde::{Deserialize, Serialize};

/// A single match at a stadium
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub stadium_id: Option<String>,

    /// Match date as stored, `YYYYMMDD`
    pub sche_date: Option<String>,

    /// Match category flag
    pub gubun: Option<String>,
    pub hometeam_id: Option<String>,
    pub awayteam_id: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}
