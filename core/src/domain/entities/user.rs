//! User entity.

use serde::{Deserialize, Serialize};

/// A directory user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}
