//! Team entity, the root of the team lookup.

use serde::{Deserialize, Serialize};

use super::stadium::Stadium;

/// A club with its home stadium
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: Option<String>,
    pub region_name: Option<String>,
    pub team_name: Option<String>,

    /// English team name
    #[serde(rename = "eteamName")]
    pub e_team_name: Option<String>,

    /// Founding year
    pub orig_yyyy: Option<String>,
    pub zip_code1: Option<String>,
    pub zip_code2: Option<String>,
    pub address: Option<String>,

    /// Telephone area code
    pub ddd: Option<String>,
    pub tel: Option<String>,
    pub fax: Option<String>,
    pub homepage: Option<String>,
    pub owner: Option<String>,

    /// Home stadium, with its schedules when known
    pub stadium: Option<Stadium>,
}

impl Team {
    /// Creates a team with only its identifier set
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: Some(team_id.into()),
            ..Default::default()
        }
    }

    /// Attaches the home stadium
    pub fn with_stadium(mut self, stadium: Stadium) -> Self {
        self.stadium = Some(stadium);
        self
    }
}
