use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum AccessKeyStatus {
    Active,
    Inactive,
}

/// A freshly created key. The secret is only ever returned at creation time.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AccessKey {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub user_name: String,
    pub status: AccessKeyStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKey")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("user_name", &self.user_name)
            .field("status", &self.status)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessKeyMetadata {
    pub access_key_id: String,
    pub user_name: String,
    pub status: Option<AccessKeyStatus>,
    pub created_at: Option<DateTime<Utc>>,
}
