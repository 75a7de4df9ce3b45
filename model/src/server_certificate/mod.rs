use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ServerCertificate {
    pub server_certificate_name: String,
    pub server_certificate_id: String,
    pub arn: String,
    pub path: String,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ServerCertificate {
    pub fn is_expired_at(&self, instant: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expiration| expiration <= instant)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
