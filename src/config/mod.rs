use serde::{self, de, Deserialize, Deserializer};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Most verbose level the sample programs emit (`off`, `error`, `warn`, `info`, `debug`,
    /// `trace`).
    #[serde(default = "default_log_level", deserialize_with = "level_filter")]
    pub log_level: LevelFilter,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::INFO
}

fn level_filter<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    LevelFilter::from_str(&level)
        .map_err(|_| de::Error::custom(format!("Invalid log level: {level}")))
}
