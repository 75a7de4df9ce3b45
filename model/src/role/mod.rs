use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Role {
    pub role_name: String,
    pub role_id: String,
    pub arn: String,
    pub path: String,
    pub description: Option<String>,
    /// URL-encoded trust policy, as IAM returns it.
    pub assume_role_policy_document: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
