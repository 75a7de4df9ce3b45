//! `SampleError` covers everything that can stop a sample program before or around its single
//! IAM call. The IAM call itself never produces one: its outcome is reported as a boolean.

use rusoto_core::request::TlsError;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, SampleError>;

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("Could not load configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("Invalid arguments: {0}")]
    Validation(String),
    #[error("{0:#}")]
    Client(#[source] anyhow::Error),
    #[error("Could not initialize logging: {0}")]
    Telemetry(String),
}

impl From<ValidationErrors> for SampleError {
    fn from(e: ValidationErrors) -> Self {
        SampleError::Validation(format!("{e:#}"))
    }
}

impl From<TlsError> for SampleError {
    fn from(e: TlsError) -> Self {
        SampleError::Client(anyhow::anyhow!(e).context("Unable to build Rusoto HTTP Client"))
    }
}
