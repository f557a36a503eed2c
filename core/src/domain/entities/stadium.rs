//! Stadium entity.

use serde::{Deserialize, Serialize};

use super::schedule::Schedule;

/// A stadium and the matches played there
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub stadium_id: Option<String>,
    pub stadium_name: Option<String>,
    pub hometeam_id: Option<String>,
    pub seat_count: Option<i32>,
    pub address: Option<String>,
    pub ddd: Option<String>,
    pub tel: Option<String>,
    pub schedules: Option<Vec<Schedule>>,
}

impl Stadium {
    pub fn new(stadium_id: impl Into<String>) -> Self {
        Self {
            stadium_id: Some(stadium_id.into()),
            ..Default::default()
        }
    }

    pub fn with_schedules(mut self, schedules: Vec<Schedule>) -> Self {
        self.schedules = Some(schedules);
        self
    }
}
