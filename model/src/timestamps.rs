use chrono::{DateTime, Utc};

/// IAM reports every date as an ISO-8601 string. Values that do not parse are dropped rather than
/// failing the whole response.
pub fn parse_iam_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
