use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /team`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindTeamQuery {
    /// Team identifier, e.g. "K01"; absent is looked up as the empty id
    #[serde(rename = "teamId")]
    #[validate(length(min = 3, message = "팀ID는 최소 세 글자입니다."))]
    pub team_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_team_id_is_rejected() {
        let query = FindTeamQuery {
            team_id: Some("AB".to_string()),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_three_characters_pass() {
        let query = FindTeamQuery {
            team_id: Some("K01".to_string()),
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_absent_team_id_passes() {
        assert!(FindTeamQuery::default().validate().is_ok());
    }
}
