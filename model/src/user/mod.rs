use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub user_name: String,
    pub user_id: String,
    pub arn: String,
    pub path: String,
    pub created_at: Option<DateTime<Utc>>,
}
